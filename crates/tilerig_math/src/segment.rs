//! Line-segment subdivision
//!
//! Splits a segment into points spaced a fixed unit length apart, used by
//! geometry-adjacent callers that stamp or sample along a line.

use crate::Vec2;

/// Points along the segment `a -> b`, spaced `unit_length` apart.
///
/// The start point is always included. Stepping continues until the
/// accumulated distance covers the full segment, so the last point lands
/// at or one step past `b` when the length is not an exact multiple of
/// `unit_length`.
pub fn subdivide(a: Vec2, b: Vec2, unit_length: f32) -> Vec<Vec2> {
    let normal = (b - a).normalized();
    let length = a.distance(b);

    let step = normal * unit_length;
    let nb = length / unit_length;

    let mut points = Vec::with_capacity(nb as usize + 2);
    let mut last = a;
    points.push(last);

    let mut i = 0.0;
    while i < nb {
        last += step;
        points.push(last);
        i += 1.0;
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple() {
        let points = subdivide(Vec2::ZERO, Vec2::new(4.0, 0.0), 1.0);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], Vec2::ZERO);
        assert!((points[4].x - 4.0).abs() < 0.0001);
    }

    #[test]
    fn test_start_always_included() {
        let points = subdivide(Vec2::new(2.0, 3.0), Vec2::new(2.5, 3.0), 1.0);
        assert_eq!(points[0], Vec2::new(2.0, 3.0));
        assert!(points.len() >= 2);
    }

    #[test]
    fn test_non_multiple_overshoots() {
        // Length 2.5 at unit 1.0: start + 3 steps, last point past the end
        let points = subdivide(Vec2::ZERO, Vec2::new(2.5, 0.0), 1.0);
        assert_eq!(points.len(), 4);
        assert!(points.last().unwrap().x >= 2.5);
    }

    #[test]
    fn test_diagonal_spacing() {
        let points = subdivide(Vec2::ZERO, Vec2::new(3.0, 4.0), 1.0);
        for pair in points.windows(2) {
            assert!((pair[0].distance(pair[1]) - 1.0).abs() < 0.0001);
        }
    }
}
