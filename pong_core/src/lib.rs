//! Deterministic, tick-driven Pong simulation.
//!
//! Paddles and the ball are `hecs` entities. Each tick runs a fixed pipeline of
//! systems over the world; [`Match`] owns the world together with the score,
//! configuration and RNG and is the only thing a driver needs to hold.

pub mod arena;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod params;
pub mod predictor;
pub mod resources;
pub mod serve;
pub mod snapshot;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation.
///
/// Order is fixed: paddles, ball, walls, scoring, paddle contacts, then the
/// predictor picks AI intents for the next tick. A point ends collision
/// processing early so the freshly served ball is never tested against the
/// paddles on the tick it appears. Returns the side that scored, if any.
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    // Clear events at start of tick
    events.clear();

    // 1. Move paddles based on intents
    move_paddles(world, config);

    // 2. Move ball
    move_ball(world);

    // 3. Top/bottom walls
    check_walls(world, config, events);

    // 4. Side walls, serving a new ball on a point
    let scorer = check_scoring(world, config, score, events, rng);

    // 5. Paddles, only while the ball is still in play
    if scorer.is_none() {
        check_paddles(world, config, events);
    }

    // 6. AI intents for the next tick
    drive_ai(world, config);

    scorer
}

/// Helper to create a paddle entity, centered on its wall
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    let paddle = Paddle::new(
        side,
        config.paddle_x(side),
        config.paddle_start_y(),
        config.paddle_width,
        config.paddle_height,
    );
    let entity = world.spawn((paddle, PaddleIntent::Stop));
    if config.controller(side) == Controller::Ai {
        let _ = world.insert_one(entity, AiControlled);
    }
    entity
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (World, Config, Score, Events, GameRng) {
        let config = Config {
            left: Controller::Human,
            right: Controller::Human,
            ..Config::new()
        };
        let mut world = World::new();
        create_paddle(&mut world, &config, Side::Left);
        create_paddle(&mut world, &config, Side::Right);
        (world, config, Score::new(), Events::new(), GameRng::new(1))
    }

    fn the_ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .map(|(_e, ball)| *ball)
            .next()
            .unwrap()
    }

    #[test]
    fn test_free_flight_keeps_speed_and_direction() {
        let (mut world, config, mut score, mut events, mut rng) = setup();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(300.0, 250.0), Vec2::new(0.8, 0.6), 3.0),
        );
        let start = the_ball(&world);

        for _ in 0..20 {
            assert_eq!(step(&mut world, &config, &mut score, &mut events, &mut rng), None);
            let ball = the_ball(&world);
            assert_eq!(ball.speed, start.speed);
            assert_eq!(ball.dir, start.dir);
            assert_eq!(events, Events::default());
        }
    }

    #[test]
    fn test_point_skips_paddle_checks() {
        let (mut world, config, mut score, mut events, mut rng) = setup();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(0.5, 250.0), -Vec2::X, 1.0),
        );

        let scorer = step(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(scorer, Some(Side::Right));
        assert!(!events.ball_hit_paddle, "No paddle check on a scoring tick");
        let ball = the_ball(&world);
        assert_eq!(ball.pos, config.arena().center());
        assert_eq!(ball.speed, config.ball_speed_start);
    }

    #[test]
    fn test_create_paddle_marks_ai() {
        let mut world = World::new();
        let config = Config {
            right: Controller::Human,
            ..Config::new()
        };
        let left = create_paddle(&mut world, &config, Side::Left);
        let right = create_paddle(&mut world, &config, Side::Right);

        assert!(world.get::<&AiControlled>(left).is_ok());
        assert!(world.get::<&AiControlled>(right).is_err());
        assert_eq!(*world.get::<&PaddleIntent>(left).unwrap(), PaddleIntent::Stop);
    }
}
