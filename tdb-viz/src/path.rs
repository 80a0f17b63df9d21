//! SVG path builders for line series.

/// Format a coordinate, trimming float noise; 3 decimals is below a device
/// pixel.
pub(crate) fn fmt_coord(v: f64) -> String {
    let s = format!("{:.3}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Straight polyline through `points`. Empty for fewer than two points.
pub fn line_path(points: &[(f64, f64)]) -> String {
    if points.len() < 2 {
        return String::new();
    }
    let mut d = format!("M{},{}", fmt_coord(points[0].0), fmt_coord(points[0].1));
    for (x, y) in &points[1..] {
        d.push_str(&format!("L{},{}", fmt_coord(*x), fmt_coord(*y)));
    }
    d
}

fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Fritsch-Carlson tangent at the middle of three points: a sign-aware
/// harmonic mean of the adjacent slopes, zeroed at local extrema so the
/// curve never overshoots.
fn slope3(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    if h0 + h1 == 0.0 {
        return 0.0;
    }
    let s0 = if h0 != 0.0 { (p1.1 - p0.1) / h0 } else { 0.0 };
    let s1 = if h1 != 0.0 { (p2.1 - p1.1) / h1 } else { 0.0 };
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let m = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if m.is_finite() {
        m
    } else {
        0.0
    }
}

/// One-sided tangent at an endpoint, given the tangent `t` at its neighbor.
fn slope2(p0: (f64, f64), p1: (f64, f64), t: f64) -> f64 {
    let h = p1.0 - p0.0;
    if h != 0.0 {
        (3.0 * (p1.1 - p0.1) / h - t) / 2.0
    } else {
        t
    }
}

/// Monotone cubic interpolation through `points` (d3's `curveMonotoneX`):
/// the curve is monotone wherever the data is, so it never swings past the
/// data values. Points must be in ascending x order. Empty for fewer than
/// two points.
pub fn monotone_path(points: &[(f64, f64)]) -> String {
    let n = points.len();
    if n < 2 {
        return String::new();
    }
    if n == 2 {
        return line_path(points);
    }

    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        tangents[i] = slope3(points[i - 1], points[i], points[i + 1]);
    }
    tangents[0] = slope2(points[0], points[1], tangents[1]);
    tangents[n - 1] = slope2(points[n - 2], points[n - 1], tangents[n - 2]);

    let mut d = format!("M{},{}", fmt_coord(points[0].0), fmt_coord(points[0].1));
    for i in 0..n - 1 {
        let (x0, y0) = points[i];
        let (x1, y1) = points[i + 1];
        let dx = (x1 - x0) / 3.0;
        d.push_str(&format!(
            "C{},{} {},{} {},{}",
            fmt_coord(x0 + dx),
            fmt_coord(y0 + dx * tangents[i]),
            fmt_coord(x1 - dx),
            fmt_coord(y1 - dx * tangents[i + 1]),
            fmt_coord(x1),
            fmt_coord(y1),
        ));
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_points() {
        assert_eq!(line_path(&[]), "");
        assert_eq!(line_path(&[(1.0, 2.0)]), "");
        assert_eq!(monotone_path(&[(1.0, 2.0)]), "");
    }

    #[test]
    fn test_line_path() {
        let d = line_path(&[(0.0, 10.0), (5.0, 2.5), (10.0, 0.0)]);
        assert_eq!(d, "M0,10L5,2.5L10,0");
    }

    #[test]
    fn test_two_points_degrade_to_a_line() {
        assert_eq!(monotone_path(&[(0.0, 0.0), (10.0, 5.0)]), "M0,0L10,5");
    }

    #[test]
    fn test_flat_data_stays_flat() {
        let d = monotone_path(&[(0.0, 5.0), (10.0, 5.0), (20.0, 5.0)]);
        assert_eq!(d, "M0,5C3.333,5 6.667,5 10,5C13.333,5 16.667,5 20,5");
    }

    #[test]
    fn test_segment_count_and_endpoints() {
        let points = [(0.0, 0.0), (10.0, 30.0), (20.0, 10.0), (30.0, 40.0)];
        let d = monotone_path(&points);
        assert!(d.starts_with("M0,0"));
        assert_eq!(d.matches('C').count(), points.len() - 1);
        assert!(d.ends_with("30,40"));
    }

    #[test]
    fn test_local_extremum_has_zero_tangent() {
        // y peaks at the middle point; Fritsch-Carlson zeroes the tangent
        // there, so the last control point of the first segment sits at the
        // peak value.
        let d = monotone_path(&[(0.0, 0.0), (10.0, 30.0), (20.0, 0.0)]);
        assert!(d.contains(" 6.667,30 10,30"));
    }
}
