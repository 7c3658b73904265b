use crate::{Ball, Events, Table};

/// Reflect a ball off the cushions
///
/// Each axis is checked on its own; a ball in a corner flips both
/// components. Position is left alone, so a slow ball can stay past the
/// edge for a few frames and flip again.
pub fn check_cushion(ball: &mut Ball, table: &Table, events: &mut Events) -> bool {
    let mut hit = false;

    if table.bounds.circle_outside_x(ball.pos, ball.radius) {
        ball.vel.x = -ball.vel.x;
        hit = true;
    }
    if table.bounds.circle_outside_y(ball.pos, ball.radius) {
        ball.vel.y = -ball.vel.y;
        hit = true;
    }

    if hit {
        events.cushion_hits += 1;
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (Table, Events) {
        (Table::standard(), Events::new())
    }

    #[test]
    fn test_ball_bounces_off_right_cushion() {
        let (table, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(84.1, 28.0), Vec2::new(1.0, 0.3), 1.0);

        assert!(check_cushion(&mut ball, &table, &mut events));

        assert_eq!(ball.vel.x, -1.0);
        assert_eq!(ball.vel.y, 0.3, "Y velocity should be unchanged");
        assert_eq!(ball.pos, Vec2::new(84.1, 28.0), "no position correction");
        assert_eq!(events.cushion_hits, 1);
    }

    #[test]
    fn test_ball_bounces_off_top_cushion() {
        let (table, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(40.0, 0.5), Vec2::new(0.2, -1.5), 1.0);

        check_cushion(&mut ball, &table, &mut events);

        assert_eq!(ball.vel, Vec2::new(0.2, 1.5));
    }

    #[test]
    fn test_corner_flips_both_axes() {
        let (table, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(83.5, 55.5), Vec2::new(1.0, 1.0), 1.0);

        check_cushion(&mut ball, &table, &mut events);

        assert_eq!(ball.vel, Vec2::new(-1.0, -1.0));
        assert_eq!(events.cushion_hits, 1, "one ball, one hit");
    }

    #[test]
    fn test_ball_inside_table_is_untouched() {
        let (table, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(42.0, 28.0), Vec2::new(1.0, -1.0), 1.0);

        assert!(!check_cushion(&mut ball, &table, &mut events));

        assert_eq!(ball.vel, Vec2::new(1.0, -1.0));
        assert!(events.is_empty());
    }

    #[test]
    fn test_ball_stuck_outside_flips_every_check() {
        let (table, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(-0.5, 28.0), Vec2::new(-0.1, 0.0), 1.0);

        check_cushion(&mut ball, &table, &mut events);
        assert_eq!(ball.vel.x, 0.1);
        check_cushion(&mut ball, &table, &mut events);
        assert_eq!(ball.vel.x, -0.1);
    }
}
