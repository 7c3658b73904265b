pub mod components;
pub mod config;
pub mod error;
pub mod geometry;
pub mod params;
pub mod registry;
pub mod render;
pub mod resources;
pub mod simulation;
pub mod systems;
pub mod table;

pub use components::*;
pub use config::*;
pub use error::*;
pub use params::*;
pub use registry::*;
pub use render::*;
pub use resources::*;
pub use simulation::*;
pub use table::*;

use systems::*;

/// Advance the table by `time.dt` reference frames
///
/// Only whole frames are simulated, each as one sweep of `config.time_step`.
/// A fractional remainder is kept in `time.carry` and added to the next
/// call, so the collision rules always run once per frame. Requests are
/// capped at `Params::MAX_FRAMES`.
pub fn step(
    balls: &mut BallSet,
    table: &Table,
    config: &Config,
    time: &mut Time,
    events: &mut Events,
    rng: &mut GameRng,
) {
    events.clear();

    // Clamp to prevent large jumps after a stall
    let pending = (time.carry + time.dt.max(0.0)).min(Params::MAX_FRAMES);
    let frames = pending.floor();
    time.carry = pending - frames;

    for frame in 0..frames as u32 {
        let sweep_time = Time::new(
            config.time_step,
            time.now + (frame + 1) as f32 * config.time_step,
        );
        sweep(balls.as_mut_slice(), table, config, &sweep_time, events, rng);
    }

    time.now += frames * config.time_step;
}

/// One pass over the ball set in index order
fn sweep(
    balls: &mut [Ball],
    table: &Table,
    config: &Config,
    time: &Time,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let mut resolved = match config.pair_policy {
        PairPolicy::OrderedPairs => None,
        PairPolicy::UnorderedOnce => Some(ResolvedPairs::new()),
    };

    for index in 0..balls.len() {
        // 1. Drag
        apply_drag(&mut balls[index], config.drag_coefficient, time);

        // 2. Move
        integrate(&mut balls[index], time);

        // 3. Cushions
        check_cushion(&mut balls[index], table, events);

        // 4. Pockets
        check_pockets(balls, index, table, rng, events);

        // 5. Other balls
        check_ball_collisions(balls, index, resolved.as_mut(), events);
    }
}
