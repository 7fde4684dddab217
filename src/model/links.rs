//! External link numbering
//!
//! The travel-time producer numbers every road segment twice, once per
//! direction of travel. Which direction it exported as "direction 0" is
//! recorded per edge in the original-direction bit at import time; the
//! mapping below is a cross-system contract and must match that export
//! convention exactly. A mismatch swaps the direction of every prediction
//! without any error surfacing.

use super::overlay::EdgeTraversal;
use crate::LinkId;

/// Maps a resolved traversal to its external link id.
///
/// Each base edge owns the pair `{2 * edge, 2 * edge + 1}`. Bit 0 is clear
/// exactly when the traversal runs in the direction the producer exported as
/// direction 0. The mapping is a bijection over directed traversals:
/// distinct traversals never share a link id, and the id does not depend on
/// which (real or virtual) edge the traversal was reached through.
pub fn link_id(traversal: &EdgeTraversal) -> LinkId {
    // `is_original_forward` means direction 0 is the `reverse == false`
    // traversal, so the traversal matches the export direction exactly when
    // the two disagree as booleans.
    let matches_export = traversal.reverse != traversal.flags.is_original_forward();
    traversal.base_edge * 2 + LinkId::from(!matches_export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::EdgeFlags;

    fn traversal(base_edge: u32, reverse: bool, original_forward: bool) -> EdgeTraversal {
        EdgeTraversal {
            edge: base_edge,
            base_edge,
            reverse,
            distance_m: 100.0,
            flags: EdgeFlags::new(50, 50, original_forward),
            unfavored: false,
        }
    }

    #[test]
    fn forward_export_polarity() {
        // Producer exported the storage-forward direction as 0.
        assert_eq!(link_id(&traversal(7, false, true)), 14);
        assert_eq!(link_id(&traversal(7, true, true)), 15);
    }

    #[test]
    fn backward_export_polarity() {
        // Producer exported the storage-backward direction as 0.
        assert_eq!(link_id(&traversal(7, false, false)), 15);
        assert_eq!(link_id(&traversal(7, true, false)), 14);
    }

    #[test]
    fn ids_never_collide_across_directions() {
        for original_forward in [false, true] {
            let fwd = link_id(&traversal(3, false, original_forward));
            let bwd = link_id(&traversal(3, true, original_forward));
            assert_ne!(fwd, bwd);
            assert_eq!(fwd / 2, 3);
            assert_eq!(bwd / 2, 3);
        }
    }
}
