use crate::predictor::decide_intent;
use crate::{AiControlled, Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Set next-tick intents for every AI-controlled paddle
pub fn drive_ai(world: &mut World, config: &Config) {
    let ball = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| *ball)
    };
    let Some(ball) = ball else {
        return;
    };

    for (_entity, (paddle, intent, _ai)) in
        world.query_mut::<(&Paddle, &mut PaddleIntent, &AiControlled)>()
    {
        *intent = decide_intent(paddle, &ball, config.paddle_speed);
    }
}
