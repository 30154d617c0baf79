use crate::{Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.advance(*intent, config.paddle_speed, config.arena_height);
    }
}

/// Move ball one tick along its direction
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use glam::Vec2;

    #[test]
    fn test_move_paddles_follows_intent() {
        let mut world = World::new();
        let config = Config::new();
        let up = create_paddle(&mut world, &config, Side::Left);
        let down = create_paddle(&mut world, &config, Side::Right);
        world.insert_one(up, PaddleIntent::Up).unwrap();
        world.insert_one(down, PaddleIntent::Down).unwrap();

        move_paddles(&mut world, &config);

        let start = config.paddle_start_y();
        assert_eq!(world.get::<&Paddle>(up).unwrap().y, start - config.paddle_speed);
        assert_eq!(
            world.get::<&Paddle>(down).unwrap().y,
            start + config.paddle_speed
        );
    }

    #[test]
    fn test_move_paddles_stop_intent_holds_position() {
        let mut world = World::new();
        let config = Config::new();
        let paddle = create_paddle(&mut world, &config, Side::Left);

        for _ in 0..10 {
            move_paddles(&mut world, &config);
        }

        assert_eq!(
            world.get::<&Paddle>(paddle).unwrap().y,
            config.paddle_start_y()
        );
    }

    #[test]
    fn test_move_ball_is_pure_translation() {
        let mut world = World::new();
        let ball = create_ball(
            &mut world,
            Ball::new(Vec2::new(100.0, 100.0), Vec2::new(3.0, 4.0), 2.5),
        );
        let before = *world.get::<&Ball>(ball).unwrap();

        move_ball(&mut world);

        let moved = *world.get::<&Ball>(ball).unwrap();
        assert_eq!(moved.pos, before.pos + before.dir * before.speed);
        assert_eq!(moved.prev_pos, before.pos);
        assert_eq!(moved.dir, before.dir, "Direction unchanged by motion");
        assert_eq!(moved.speed, 2.5, "Speed unchanged by motion");
    }
}
