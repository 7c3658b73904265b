use crate::{Ball, Events, GameRng, PocketEvent, Table};

/// Drop the ball at `index` into the first pocket it overlaps
///
/// Pockets are checked in table order and the first match wins. The ball
/// is reset in place rather than removed, so indices stay stable.
pub fn check_pockets(
    balls: &mut [Ball],
    index: usize,
    table: &Table,
    rng: &mut GameRng,
    events: &mut Events,
) -> Option<usize> {
    let ball = &mut balls[index];
    let pocket = table.pockets.iter().position(|p| p.captures(ball))?;

    let was_cue = ball.is_cue;
    log::debug!(
        "ball {} dropped into pocket {} at ({:.2}, {:.2})",
        index,
        pocket,
        ball.pos.x,
        ball.pos.y
    );
    ball.reset(was_cue, rng);

    events.pocketed.push(PocketEvent {
        ball: index,
        pocket,
        was_cue,
    });
    Some(pocket)
}
