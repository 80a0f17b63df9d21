//! Treemap binary tiling (d3's `treemapBinary`).
//!
//! Leaves are sorted by descending size, then the sequence is recursively
//! split where the cumulative sum is nearest half the total; each split
//! divides the current rectangle along its longer side, so leaf areas end
//! up proportional to their sizes.

use crate::data::TreeLeaf;
use crate::dimensions::Size;
use serde::{Deserialize, Serialize};

/// One laid-out leaf rectangle. `index` refers back into the input leaves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileRect {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl TileRect {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Tile `leaves` into `size`, returning rectangles in descending-size
/// order. Non-positive sizes occupy zero area; a dataset with no positive
/// size fills nothing.
pub fn layout(leaves: &[TreeLeaf], size: Size) -> Vec<TileRect> {
    let mut order: Vec<usize> = (0..leaves.len()).collect();
    order.sort_by(|a, b| leaves[*b].size.total_cmp(&leaves[*a].size));

    let values: Vec<f64> = order.iter().map(|i| leaves[*i].size.max(0.0)).collect();
    tile(&values, size)
        .into_iter()
        .zip(order)
        .map(|(r, index)| TileRect { index, ..r })
        .collect()
}

/// Tile already-ordered `values` into `size`. Rect order matches input
/// order; `index` is the input position.
pub fn tile(values: &[f64], size: Size) -> Vec<TileRect> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let mut sums = Vec::with_capacity(n + 1);
    sums.push(0.0);
    for v in values {
        sums.push(sums.last().unwrap() + v.max(0.0));
    }
    let total = sums[n];

    let mut rects = vec![(0.0, 0.0, 0.0, 0.0); n];
    if total > 0.0 && !size.is_empty() {
        partition(&sums, &mut rects, 0, n, total, 0.0, 0.0, size.width, size.height);
    }

    rects
        .into_iter()
        .enumerate()
        .map(|(index, (x0, y0, x1, y1))| TileRect {
            index,
            x: x0,
            y: y0,
            width: (x1 - x0).max(0.0),
            height: (y1 - y0).max(0.0),
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn partition(
    sums: &[f64],
    rects: &mut [(f64, f64, f64, f64)],
    i: usize,
    j: usize,
    value: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) {
    if i >= j - 1 {
        rects[i] = (x0, y0, x1, y1);
        return;
    }

    // Binary-search the split point whose cumulative sum is nearest half.
    let value_offset = sums[i];
    let value_target = value / 2.0 + value_offset;
    let mut k = i + 1;
    let mut hi = j - 1;
    while k < hi {
        let mid = (k + hi) >> 1;
        if sums[mid] < value_target {
            k = mid + 1;
        } else {
            hi = mid;
        }
    }
    if (value_target - sums[k - 1]) < (sums[k] - value_target) && i + 1 < k {
        k -= 1;
    }

    let value_left = sums[k] - value_offset;
    let value_right = value - value_left;

    if x1 - x0 > y1 - y0 {
        let xk = if value > 0.0 {
            (x0 * value_right + x1 * value_left) / value
        } else {
            x1
        };
        partition(sums, rects, i, k, value_left, x0, y0, xk, y1);
        partition(sums, rects, k, j, value_right, xk, y0, x1, y1);
    } else {
        let yk = if value > 0.0 {
            (y0 * value_right + y1 * value_left) / value
        } else {
            y1
        };
        partition(sums, rects, i, k, value_left, x0, y0, x1, yk);
        partition(sums, rects, k, j, value_right, x0, yk, x1, y1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaves() -> Vec<TreeLeaf> {
        vec![
            TreeLeaf::new("Equity", 45.0, "#4177cd"),
            TreeLeaf::new("Fixed Income", 15.0, "#9ac7f0"),
            TreeLeaf::new("Forex", 35.0, "#4f135d"),
        ]
    }

    #[test]
    fn test_areas_proportional_to_size() {
        let tiles = layout(&leaves(), Size::new(100.0, 100.0));
        assert_eq!(tiles.len(), 3);
        let total_area: f64 = tiles.iter().map(|t| t.area()).sum();
        assert!((total_area - 10_000.0).abs() < 1e-6);
        for tile in &tiles {
            let expected = leaves()[tile.index].size / 95.0 * 10_000.0;
            assert!(
                (tile.area() - expected).abs() < 1e-6,
                "tile {} area {} != {}",
                tile.index,
                tile.area(),
                expected
            );
        }
    }

    #[test]
    fn test_descending_order_with_original_indices() {
        let tiles = layout(&leaves(), Size::new(100.0, 100.0));
        let order: Vec<usize> = tiles.iter().map(|t| t.index).collect();
        assert_eq!(order, [0, 2, 1]);
    }

    #[test]
    fn test_two_leaves_split_along_longer_side() {
        let tiles = tile(&[60.0, 40.0], Size::new(100.0, 50.0));
        // Wider than tall: vertical cut at x = 60.
        assert_eq!(tiles[0].x, 0.0);
        assert!((tiles[0].width - 60.0).abs() < 1e-9);
        assert!((tiles[1].x - 60.0).abs() < 1e-9);
        assert_eq!(tiles[0].height, 50.0);
    }

    #[test]
    fn test_tiles_stay_in_bounds() {
        let sizes = [5.0, 1.0, 12.0, 7.0, 3.0, 9.0];
        let tiles = tile(&sizes, Size::new(300.0, 200.0));
        for t in &tiles {
            assert!(t.x >= -1e-9 && t.y >= -1e-9);
            assert!(t.x + t.width <= 300.0 + 1e-9);
            assert!(t.y + t.height <= 200.0 + 1e-9);
        }
    }

    #[test]
    fn test_zero_total_fills_nothing() {
        let tiles = tile(&[0.0, 0.0], Size::new(100.0, 100.0));
        assert_eq!(tiles.len(), 2);
        assert!(tiles.iter().all(|t| t.area() == 0.0));
    }

    #[test]
    fn test_negative_sizes_occupy_zero_area() {
        let tiles = tile(&[10.0, -5.0], Size::new(100.0, 100.0));
        assert!((tiles[0].area() - 10_000.0).abs() < 1e-6);
        assert_eq!(tiles[1].area(), 0.0);
    }
}
