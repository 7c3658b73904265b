use glam::Vec2;

use crate::{GameRng, Params};

/// A ball on the table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32, // fixed for the ball's lifetime
    pub is_cue: bool,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            is_cue: false,
        }
    }

    pub fn cue(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            is_cue: true,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }

    /// Put a pocketed ball back on the table with a small random drift
    pub fn reset(&mut self, is_cue: bool, rng: &mut GameRng) {
        self.pos = if is_cue {
            Params::CUE_SPAWN
        } else {
            Params::OBJECT_RESPAWN
        };
        self.vel = rng.drift(Params::RANDOM_SPEED);
    }
}

/// A pocket is a static circle; a ball whose circle overlaps it drops in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pocket {
    pub pos: Vec2,
    pub radius: f32,
}

impl Pocket {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self { pos, radius }
    }

    pub fn captures(&self, ball: &Ball) -> bool {
        crate::geometry::circles_overlap(ball.pos, ball.radius, self.pos, self.radius)
    }
}
