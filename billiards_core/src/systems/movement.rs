use crate::{Ball, Time};

/// Linear velocity decay: each step removes `drag * dt` of the velocity
pub fn apply_drag(ball: &mut Ball, drag_coefficient: f32, time: &Time) {
    ball.vel -= ball.vel * (drag_coefficient * time.dt);
}

/// Move ball based on velocity
pub fn integrate(ball: &mut Ball, time: &Time) {
    ball.pos += ball.vel * time.dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec2;

    #[test]
    fn test_drag_shrinks_speed_without_flipping_sign() {
        let time = Time::default();
        let mut ball = Ball::new(Vec2::new(40.0, 28.0), Vec2::new(-2.0, 1.0), 1.0);
        let before = ball.vel;

        apply_drag(&mut ball, 0.05, &time);

        assert!(ball.vel.length() < before.length());
        assert_relative_eq!(ball.vel.x, -1.9, epsilon = 1e-6);
        assert_relative_eq!(ball.vel.y, 0.95, epsilon = 1e-6);
        assert_eq!(ball.vel.x.signum(), before.x.signum());
        assert_eq!(ball.vel.y.signum(), before.y.signum());
    }

    #[test]
    fn test_drag_never_reaches_zero() {
        let time = Time::default();
        let mut ball = Ball::new(Vec2::ZERO, Vec2::new(1.0, 0.0), 1.0);
        for _ in 0..200 {
            apply_drag(&mut ball, 0.05, &time);
        }
        assert!(ball.vel.x > 0.0);
        assert!(ball.vel.x < 1e-4);
    }

    #[test]
    fn test_drag_scales_with_time_step() {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::new(1.0, 0.0), 1.0);
        apply_drag(&mut ball, 0.05, &Time::new(0.5, 0.0));
        assert_relative_eq!(ball.vel.x, 0.975, epsilon = 1e-6);
    }

    #[test]
    fn test_integrate_unit_step() {
        let mut ball = Ball::new(Vec2::new(70.0, 28.0), Vec2::new(-2.0, 1.0), 1.0);
        integrate(&mut ball, &Time::default());
        assert_eq!(ball.pos, Vec2::new(68.0, 29.0));
        assert_eq!(ball.vel, Vec2::new(-2.0, 1.0), "velocity untouched");
    }
}
