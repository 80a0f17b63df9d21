//! Stacked bar layout: cumulative keyed sums per category.

use crate::data::StackRow;
use crate::visibility::VisibilitySet;
use serde::{Deserialize, Serialize};

/// One stacked segment in data units: the key it belongs to and its
/// cumulative baseline/top. Pixel positions come from mapping `y0`/`y1`
/// through the chart's linear scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackSegment {
    pub key: usize,
    pub y0: f64,
    pub y1: f64,
}

impl StackSegment {
    pub fn extent(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// Stack each row's values in key order, skipping keys hidden by the
/// legend. Negative values are treated as 0 so segments never overlap.
/// Returns one segment list per row, aligned with `rows`.
pub fn stack(rows: &[StackRow], key_count: usize, hidden: &VisibilitySet) -> Vec<Vec<StackSegment>> {
    rows.iter()
        .map(|row| {
            let mut cum = 0.0;
            let mut segments = Vec::with_capacity(key_count);
            for key in 0..key_count {
                if hidden.is_hidden(key) {
                    continue;
                }
                let value = row.value(key).max(0.0);
                segments.push(StackSegment {
                    key,
                    y0: cum,
                    y1: cum + value,
                });
                cum += value;
            }
            segments
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::LinearScale;

    fn rows() -> Vec<StackRow> {
        vec![
            StackRow::new("Portfolio A", vec![45.0, 35.0, 15.0, 15.0]),
            StackRow::new("Portfolio B", vec![30.0, 40.0, 20.0, 10.0]),
        ]
    }

    #[test]
    fn test_segments_are_cumulative_in_key_order() {
        let all = VisibilitySet::new(4);
        let stacks = stack(&rows(), 4, &all);
        let a = &stacks[0];
        assert_eq!(a.len(), 4);
        assert_eq!(a[0].y0, 0.0);
        assert_eq!(a[0].y1, 45.0);
        assert_eq!(a[1].y0, 45.0);
        assert_eq!(a[3].y1, 110.0);
    }

    #[test]
    fn test_segment_extents_sum_to_category_total() {
        let all = VisibilitySet::new(4);
        for (row, segments) in rows().iter().zip(stack(&rows(), 4, &all)) {
            let total: f64 = segments.iter().map(|s| s.extent()).sum();
            assert!((total - row.total()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_segment_heights_scale_to_axis_domain() {
        // Fixed 0-100 domain over a 200px axis: a 45-unit segment is 90px.
        let all = VisibilitySet::new(4);
        let scale = LinearScale::new((0.0, 100.0), (200.0, 0.0));
        let segment = stack(&rows(), 4, &all)[0][0];
        let height = scale.scale(segment.y0) - scale.scale(segment.y1);
        assert!((height - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_hidden_keys_are_skipped() {
        let mut hidden = VisibilitySet::new(4);
        hidden.toggle(1);
        let stacks = stack(&rows(), 4, &hidden);
        let a = &stacks[0];
        assert_eq!(a.len(), 3);
        let keys: Vec<usize> = a.iter().map(|s| s.key).collect();
        assert_eq!(keys, [0, 2, 3]);
        // Key 2 now stacks directly on key 0.
        assert_eq!(a[1].y0, 45.0);
        assert_eq!(a[1].y1, 60.0);
    }

    #[test]
    fn test_short_rows_read_as_zero() {
        let rows = vec![StackRow::new("P", vec![10.0])];
        let all = VisibilitySet::new(3);
        let segments = &stack(&rows, 3, &all)[0];
        assert_eq!(segments[1].extent(), 0.0);
        assert_eq!(segments[2].extent(), 0.0);
        assert_eq!(segments[2].y1, 10.0);
    }
}
