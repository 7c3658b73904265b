//! Plane geometry helpers
//!
//! Thin wrappers over `glam::Vec2` so the collision rules read the way the
//! table maths is usually written.

use glam::Vec2;

/// Euclidean distance between two points
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Angle of the ray from `a` towards `b`, in (-PI, PI]
pub fn angle_to(a: Vec2, b: Vec2) -> f32 {
    let d = b - a;
    d.y.atan2(d.x)
}

/// Unit vector pointing along `angle`
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// True when two circles strictly overlap
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    distance(a, b) < ra + rb
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    #[test]
    fn test_distance_is_symmetric() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 6.0);
        assert_eq!(distance(a, b), 5.0);
        assert_eq!(distance(b, a), 5.0);
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn test_angle_to_quadrants() {
        let origin = Vec2::ZERO;
        assert_relative_eq!(angle_to(origin, Vec2::new(1.0, 0.0)), 0.0);
        assert_relative_eq!(angle_to(origin, Vec2::new(0.0, 1.0)), PI / 2.0);
        assert_relative_eq!(angle_to(origin, Vec2::new(-1.0, 0.0)), PI);
        assert_relative_eq!(angle_to(origin, Vec2::new(0.0, -1.0)), -PI / 2.0);
    }

    #[test]
    fn test_angle_to_same_point_is_zero() {
        let p = Vec2::new(3.0, 3.0);
        assert_eq!(angle_to(p, p), 0.0);
    }

    #[test]
    fn test_direction_is_unit_length() {
        for i in 0..16 {
            let angle = i as f32 * PI / 8.0 - PI;
            assert_relative_eq!(direction(angle).length(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_circles_overlap_is_strict() {
        let a = Vec2::new(0.0, 0.0);
        assert!(circles_overlap(a, 1.0, Vec2::new(1.5, 0.0), 1.0));
        // touching exactly is not an overlap
        assert!(!circles_overlap(a, 1.0, Vec2::new(2.0, 0.0), 1.0));
    }
}
