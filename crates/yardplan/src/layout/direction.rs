//! Row direction resolution.

use yardplan_core::spec::{EntrySide, Orientation, OrientationPolicy};

/// Resolve the direction in which container rows run.
///
/// With [`OrientationPolicy::FollowEntrySide`] a short-side entry gives
/// horizontal rows (parallel to the long axis) and a long-side entry gives
/// vertical rows. The explicit policies ignore the entry side.
pub fn resolve_orientation(policy: OrientationPolicy, entry_side: EntrySide) -> Orientation {
    match (policy, entry_side) {
        (OrientationPolicy::Horizontal, _) => Orientation::Horizontal,
        (OrientationPolicy::Vertical, _) => Orientation::Vertical,
        (OrientationPolicy::FollowEntrySide, EntrySide::Short) => Orientation::Horizontal,
        (OrientationPolicy::FollowEntrySide, EntrySide::Long) => Orientation::Vertical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_entry_side() {
        assert_eq!(
            resolve_orientation(OrientationPolicy::FollowEntrySide, EntrySide::Short),
            Orientation::Horizontal
        );
        assert_eq!(
            resolve_orientation(OrientationPolicy::FollowEntrySide, EntrySide::Long),
            Orientation::Vertical
        );
    }

    #[test]
    fn test_explicit_policies_ignore_entry() {
        for side in [EntrySide::Short, EntrySide::Long] {
            assert_eq!(
                resolve_orientation(OrientationPolicy::Horizontal, side),
                Orientation::Horizontal
            );
            assert_eq!(
                resolve_orientation(OrientationPolicy::Vertical, side),
                Orientation::Vertical
            );
        }
    }
}
