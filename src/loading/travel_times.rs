//! Loading of the travel-time prediction table

use std::fs::File;
use std::num::NonZeroU32;
use std::path::Path;

use itertools::Itertools;
use log::info;
use rayon::prelude::*;

use crate::TIME_BUCKETS;
use crate::error::Error;
use crate::model::travel_times::{TravelTimeRow, TravelTimeTable};

/// Loads the prediction table from a CSV export with a
/// `link_id,mode,hour,travel_time_ms` header row.
///
/// The whole file is read eagerly. Any unreadable or malformed row aborts
/// the load: a service must refuse to start rather than route against a
/// partial table.
///
/// # Errors
///
/// Returns an error when the file cannot be opened or any row is malformed.
pub fn load_travel_times(path: &Path) -> Result<TravelTimeTable, Error> {
    let file = File::open(path)?;
    let rows = csv::Reader::from_reader(file)
        .deserialize()
        .collect::<Result<Vec<TravelTimeRow>, _>>()
        .map_err(|e| Error::InvalidData(format!("malformed travel time row: {e}")))?;
    table_from_rows(rows)
}

/// Builds the table from raw producer rows.
///
/// # Errors
///
/// Returns an error for an out-of-range hour, a zero prediction or a
/// duplicate (mode, link, hour) row.
pub fn table_from_rows(mut rows: Vec<TravelTimeRow>) -> Result<TravelTimeTable, Error> {
    rows.par_sort_unstable_by(|a, b| (a.link_id, a.hour).cmp(&(b.link_id, b.hour)));
    let links = rows.iter().map(|row| row.link_id).unique().count();

    let mut table = TravelTimeTable::default();
    for row in &rows {
        if row.hour as usize >= TIME_BUCKETS {
            return Err(Error::InvalidData(format!(
                "hour {} out of range for link {}",
                row.hour, row.link_id
            )));
        }
        let travel_time = NonZeroU32::new(row.travel_time_ms).ok_or_else(|| {
            Error::InvalidData(format!(
                "zero travel time prediction for link {} at hour {}",
                row.link_id, row.hour
            ))
        })?;
        let mode = table.intern_mode(&row.mode);
        if !table.insert(mode, row.link_id, row.hour as usize, travel_time) {
            return Err(Error::InvalidData(format!(
                "duplicate prediction for link {} mode '{}' hour {}",
                row.link_id, row.mode, row.hour
            )));
        }
    }

    info!(
        "loaded {} travel time predictions for {} links",
        rows.len(),
        links
    );
    Ok(table)
}
