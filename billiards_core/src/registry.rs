//! The ball registry: an ordered arena of balls addressed by index
//!
//! Index 0 of the opening layout is the cue ball, followed by the three
//! front balls and then the randomly scattered ones. Balls are never
//! removed, so indices stay valid for the lifetime of the set.

use glam::Vec2;

use crate::{Ball, GameRng, Params, SimError};

/// Ordered, validated set of balls
#[derive(Debug, Clone, Default)]
pub struct BallSet {
    balls: Vec<Ball>,
}

impl BallSet {
    /// Validate and take ownership of `balls`
    pub fn new(balls: Vec<Ball>) -> Result<Self, SimError> {
        let mut cue: Option<usize> = None;
        for (index, ball) in balls.iter().enumerate() {
            if !ball.radius.is_finite() || ball.radius <= 0.0 {
                return Err(SimError::InvalidRadius {
                    index,
                    radius: ball.radius,
                });
            }
            if !ball.is_finite() {
                return Err(SimError::NonFiniteBall { index });
            }
            if ball.is_cue {
                if let Some(first) = cue {
                    return Err(SimError::MultipleCueBalls {
                        first,
                        second: index,
                    });
                }
                cue = Some(index);
            }
        }
        Ok(Self { balls })
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Ball> {
        self.balls.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ball> {
        self.balls.iter()
    }

    pub fn as_slice(&self) -> &[Ball] {
        &self.balls
    }

    /// Mutable access for the stepper. Not public: callers outside the
    /// crate must go through `new` so the set stays valid.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    pub fn cue_index(&self) -> Option<usize> {
        self.balls.iter().position(|b| b.is_cue)
    }

    pub fn cue_ball(&self) -> Option<&Ball> {
        self.balls.iter().find(|b| b.is_cue)
    }
}

impl<'a> IntoIterator for &'a BallSet {
    type Item = &'a Ball;
    type IntoIter = std::slice::Iter<'a, Ball>;

    fn into_iter(self) -> Self::IntoIter {
        self.balls.iter()
    }
}

/// Build the opening layout for a table of the given size
pub fn create_initial_balls(table_width: f32, table_height: f32, rng: &mut GameRng) -> BallSet {
    let radius = Params::BALL_RADIUS;
    let mut balls = Vec::with_capacity(1 + Params::FRONT_BALLS.len() + Params::RANDOM_BALL_COUNT);

    balls.push(Ball::cue(Params::CUE_SPAWN, Params::CUE_VELOCITY, radius));

    for (pos, vel) in Params::FRONT_BALLS {
        balls.push(Ball::new(pos, vel, radius));
    }

    let max_x = table_width * Params::RANDOM_SPREAD_X;
    let max_y = table_height * Params::RANDOM_SPREAD_Y;
    for _ in 0..Params::RANDOM_BALL_COUNT {
        let pos = Vec2::new(rng.range(0.0, max_x), rng.range(0.0, max_y));
        let vel = rng.drift(Params::RANDOM_SPEED);
        balls.push(Ball::new(pos, vel, radius));
    }

    // Fixed spawns and bounded samples are always valid
    BallSet { balls }
}

/// Return a pocketed ball to its spawn point with a random drift
pub fn reset_ball(ball: &mut Ball, is_cue: bool, rng: &mut GameRng) {
    ball.reset(is_cue, rng);
}
