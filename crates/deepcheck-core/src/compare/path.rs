//! Divergence path reconstruction.
//!
//! Turns the trail left behind by a diverged comparison into a readable
//! path such as `propB.propA[1].propB`.

use crate::compare::model::{ContainerKind, TrailEntry};

/// Reduce a trail to the ancestor chain of its last entry and render it.
///
/// Scanning from the most recent step backwards, a step is kept only if
/// every step kept so far is strictly deeper. That leaves exactly one step
/// per depth, from the failure point up to the root, and drops the steps
/// into earlier sibling subtrees.
///
/// Object steps render as `key.`; array steps attach `[index].` to the
/// preceding segment. The single trailing `.` is stripped. An empty trail
/// yields an empty string.
pub fn reconstruct_path(trail: &[TrailEntry]) -> String {
    let mut selected: Vec<&TrailEntry> = Vec::new();
    for entry in trail.iter().rev() {
        if !selected.iter().any(|s| s.depth <= entry.depth) {
            selected.push(entry);
        }
    }

    let mut path = String::new();
    for entry in selected.iter().rev() {
        match entry.container {
            ContainerKind::Array => {
                if path.ends_with('.') {
                    path.pop();
                }
                path.push_str(&format!("[{}].", entry.key));
            }
            ContainerKind::Object => {
                path.push_str(&format!("{}.", entry.key));
            }
        }
    }

    path.pop();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_trail() {
        assert_eq!(reconstruct_path(&[]), "");
    }

    #[test]
    fn test_single_object_step() {
        assert_eq!(reconstruct_path(&[TrailEntry::name(0, "propA")]), "propA");
    }

    #[test]
    fn test_root_array_index() {
        let trail = vec![TrailEntry::index(0, 0), TrailEntry::name(1, "propB")];
        assert_eq!(reconstruct_path(&trail), "[0].propB");
    }

    #[test]
    fn test_sibling_subtrees_are_discarded() {
        // propA (fully walked, equal) then propB.propA[1].propB diverges
        let trail = vec![
            TrailEntry::name(0, "propA"),
            TrailEntry::name(0, "propB"),
            TrailEntry::name(1, "propA"),
            TrailEntry::index(2, 0),
            TrailEntry::index(2, 1),
            TrailEntry::name(3, "propA"),
            TrailEntry::name(3, "propB"),
        ];
        assert_eq!(reconstruct_path(&trail), "propB.propA[1].propB");
    }

    #[test]
    fn test_deeper_entries_before_shallower_divergence() {
        // propB.propA was walked in full, then propB.propC was missing
        let trail = vec![
            TrailEntry::name(0, "propA"),
            TrailEntry::name(0, "propB"),
            TrailEntry::name(1, "propA"),
            TrailEntry::index(2, 0),
            TrailEntry::index(2, 1),
            TrailEntry::name(3, "propA"),
            TrailEntry::name(3, "propB"),
            TrailEntry::index(2, 2),
            TrailEntry::name(1, "propB"),
            TrailEntry::name(1, "propC"),
        ];
        assert_eq!(reconstruct_path(&trail), "propB.propC");
    }

    #[test]
    fn test_consecutive_array_indices() {
        let trail = vec![
            TrailEntry::name(0, "propB"),
            TrailEntry::name(1, "propA"),
            TrailEntry::index(2, 1),
            TrailEntry::index(3, 0),
            TrailEntry::name(4, "propB"),
            TrailEntry::index(5, 2),
        ];
        assert_eq!(reconstruct_path(&trail), "propB.propA[1][0].propB[2]");
    }
}
