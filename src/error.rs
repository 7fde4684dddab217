use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Unknown weighting: {0}")]
    UnknownWeighting(String),
    #[error("Unknown vehicle profile: {0}")]
    UnknownProfile(String),
    #[error("Unknown path detail: {0}")]
    UnknownPathDetail(String),
    #[error("No route found between the query points")]
    NoRouteFound,
}
