use std::collections::HashSet;
use std::f32::consts::PI;

use crate::geometry::{angle_to, circles_overlap, direction};
use crate::{Ball, Events};

/// Unordered pairs already resolved in the current frame
#[derive(Debug, Clone, Default)]
pub struct ResolvedPairs(HashSet<(usize, usize)>);

impl ResolvedPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pair, returning false if it was already recorded
    pub fn insert(&mut self, a: usize, b: usize) -> bool {
        self.0.insert((a.min(b), a.max(b)))
    }

    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.0.contains(&(a.min(b), a.max(b)))
    }
}

/// Redirect two overlapping balls along the line between their centres
///
/// Each ball keeps its own speed. Ball `i` heads towards where `j` sits,
/// ball `j` heads the opposite way. This is not momentum-conserving and
/// does not separate the balls.
pub fn resolve_ball_pair(balls: &mut [Ball], i: usize, j: usize) {
    let (a, b) = (balls[i], balls[j]);

    let angle = angle_to(a.pos, b.pos);
    let speed_a = a.speed();
    let speed_b = b.speed();

    balls[i].vel = direction(angle) * speed_a;
    balls[j].vel = direction(angle + PI) * speed_b;
}

/// Check the ball at `index` against every other ball
///
/// With `resolved` set, a pair already resolved this frame is skipped;
/// without it every ordered pair is visited.
pub fn check_ball_collisions(
    balls: &mut [Ball],
    index: usize,
    mut resolved: Option<&mut ResolvedPairs>,
    events: &mut Events,
) {
    for other in 0..balls.len() {
        if other == index {
            continue;
        }

        let (a, b) = (&balls[index], &balls[other]);
        if !circles_overlap(a.pos, a.radius, b.pos, b.radius) {
            continue;
        }

        if let Some(pairs) = resolved.as_deref_mut() {
            if !pairs.insert(index, other) {
                continue;
            }
        }

        resolve_ball_pair(balls, index, other);
        events.ball_hits.push((index, other));
    }
}
