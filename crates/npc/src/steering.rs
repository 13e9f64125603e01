//! Steering primitives.
//!
//! Plain vector math used by the movement leaves. Nothing here fails or has
//! side effects.

use crate::Point;

/// Heading in radians from `from` toward `to`.
#[inline]
pub fn heading_towards(from: Point, to: Point) -> f64 {
    let delta = to - from;
    delta.y.atan2(delta.x)
}

/// Moves `position` along `heading` by `speed * dt`.
#[inline]
pub fn advance(position: Point, heading: f64, speed: f64, dt: f64) -> Point {
    let (sin, cos) = heading.sin_cos();
    position + Point::new(cos, sin) * (speed * dt)
}

/// Returns `true` if `a` and `b` are strictly closer than `radius`.
///
/// Compares squared distances, no square root is taken.
#[inline]
pub fn within_radius(a: Point, b: Point, radius: f64) -> bool {
    a.distance_squared(b) < radius * radius
}

/// The point mirrored through `from`, directly away from `threat`.
///
/// Steering toward it moves straight away from the threat.
#[inline]
pub fn away_point(from: Point, threat: Point) -> Point {
    from * 2.0 - threat
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn heading_points_at_target() {
        let origin = Point::ZERO;

        assert!((heading_towards(origin, Point::new(1.0, 0.0))).abs() < EPS);
        assert!((heading_towards(origin, Point::new(0.0, 5.0)) - FRAC_PI_2).abs() < EPS);
        assert!((heading_towards(origin, Point::new(-2.0, 0.0)) - PI).abs() < EPS);
    }

    #[test]
    fn advance_moves_speed_times_dt() {
        let moved = advance(Point::new(10.0, 10.0), FRAC_PI_2, 30.0, 0.5);

        assert!((moved.x - 10.0).abs() < EPS);
        assert!((moved.y - 25.0).abs() < EPS);
    }

    #[test]
    fn zero_dt_leaves_position_unchanged() {
        let start = Point::new(3.0, 4.0);
        assert_eq!(advance(start, 1.2, 100.0, 0.0), start);
    }

    #[test]
    fn within_radius_is_strict() {
        let a = Point::ZERO;

        assert!(within_radius(a, Point::new(2.9, 0.0), 3.0));
        assert!(!within_radius(a, Point::new(3.0, 0.0), 3.0));
        assert!(!within_radius(a, Point::new(3.0, 4.0), 4.9));
    }

    #[test]
    fn away_point_is_opposite_the_threat() {
        let from = Point::new(5.0, 5.0);
        let threat = Point::new(8.0, 1.0);

        let away = away_point(from, threat);
        assert_eq!(away, Point::new(2.0, 9.0));
        assert!((heading_towards(from, away) - heading_towards(threat, from)).abs() < EPS);
    }
}
