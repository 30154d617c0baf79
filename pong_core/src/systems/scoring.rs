use crate::serve::serve_ball;
use crate::{create_ball, Ball, Config, Events, GameRng, Score, Side};
use hecs::World;
use log::debug;

/// Check if the ball crossed a side wall.
///
/// The opponent of that wall scores and a brand new ball is served. Returns
/// the scoring side so the caller can skip the rest of the tick.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let (entity, scorer) = world.query::<&Ball>().iter().find_map(|(entity, ball)| {
        if ball.pos.x <= 0.0 {
            Some((entity, Side::Right))
        } else if ball.pos.x >= config.arena_width {
            Some((entity, Side::Left))
        } else {
            None
        }
    })?;

    score.increment(scorer);
    events.scored(scorer);
    debug!(
        "Point to {:?}, score now {}-{}",
        scorer, score.left, score.right
    );

    let _ = world.despawn(entity);
    create_ball(world, serve_ball(config, score, rng));

    Some(scorer)
}
