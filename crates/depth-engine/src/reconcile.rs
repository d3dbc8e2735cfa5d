//! Left/right reconciliation.
//!
//! Competition judging is strict: the shallower valid side decides. A
//! confident deep reading on one side never masks a shallow or borderline
//! reading on the other. Readings are not averaged or OR-ed.

use crate::evaluator::SideReading;
use crate::pairing::SidePair;

/// The worst (smallest-delta) valid reading, or `None` if neither side is
/// usable. Equal deltas resolve to the left side.
pub fn reconcile(readings: &SidePair<SideReading>) -> Option<SideReading> {
    readings
        .least_by(|reading| reading.delta)
        .map(|(_, reading)| *reading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use squatcheck_pose_model::Side;

    fn reading(side: Side, delta: f64, margin: f64) -> SideReading {
        SideReading {
            side,
            delta,
            deep: delta > margin,
        }
    }

    #[test]
    fn shallow_side_overrides_deep_side() {
        let readings = SidePair {
            left: Some(reading(Side::Left, 5.0, 3.0)),
            right: Some(reading(Side::Right, -2.0, 3.0)),
        };
        let merged = reconcile(&readings).unwrap();
        assert_eq!(merged.side, Side::Right);
        assert!(!merged.deep);
        assert_eq!(merged.delta, -2.0);
    }

    #[test]
    fn single_valid_side_is_used() {
        let readings = SidePair {
            left: None,
            right: Some(reading(Side::Right, 8.0, 3.0)),
        };
        let merged = reconcile(&readings).unwrap();
        assert_eq!(merged.side, Side::Right);
        assert!(merged.deep);
    }

    #[test]
    fn equal_deltas_report_left() {
        let readings = SidePair {
            left: Some(reading(Side::Left, 4.0, 3.0)),
            right: Some(reading(Side::Right, 4.0, 3.0)),
        };
        assert_eq!(reconcile(&readings).unwrap().side, Side::Left);
    }

    #[test]
    fn no_valid_side_yields_none() {
        let readings: SidePair<SideReading> = SidePair {
            left: None,
            right: None,
        };
        assert!(reconcile(&readings).is_none());
    }
}
