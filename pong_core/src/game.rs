//! The match aggregate: one world, two paddles, one ball and the score.

use hecs::World;
use log::{debug, info};

use crate::serve::serve_ball;
use crate::{
    create_ball, create_paddle, step, AiControlled, Ball, Config, ConfigError, Controller,
    Events, GameRng, Paddle, PaddleIntent, Score, ScoreError, Side, Snapshot, TickEvent,
};

/// A running game of Pong.
///
/// All mutation goes through [`Match::tick`] and the intent setters. A driver
/// calls `tick` once per `Config::tick_period`, never concurrently.
pub struct Match {
    world: World,
    config: Config,
    score: Score,
    events: Events,
    rng: GameRng,
    running: bool,
    tick: u64,
}

impl Match {
    /// Build a match with both paddles centered and the first ball served.
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let mut rng = GameRng::new(seed);
        let score = Score::new();

        create_paddle(&mut world, &config, Side::Left);
        create_paddle(&mut world, &config, Side::Right);
        create_ball(&mut world, serve_ball(&config, &score, &mut rng));

        info!(
            "Match: created {}x{} arena, first to {}, serve {:?}, left {:?}, right {:?}",
            config.arena_width,
            config.arena_height,
            config.win_score,
            config.serve,
            config.left,
            config.right
        );

        Ok(Self {
            world,
            config,
            score,
            events: Events::new(),
            rng,
            running: true,
            tick: 0,
        })
    }

    /// Advance the match by one tick.
    ///
    /// A finished match is reset on the tick after its winning point, and that
    /// tick does no simulation. While stopped this is a no-op.
    pub fn tick(&mut self) -> TickEvent {
        if !self.running {
            return TickEvent::None;
        }
        self.tick += 1;

        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            info!(
                "Match: {:?} won {}-{}, resetting",
                winner, self.score.left, self.score.right
            );
            self.reset();
            self.running = self.config.auto_restart;
            return TickEvent::MatchReset(winner);
        }

        let scored = step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        match scored {
            None => TickEvent::None,
            Some(scorer) => match self.score.has_winner(self.config.win_score) {
                Some(winner) => {
                    info!(
                        "Match: {:?} reached {} at tick {}",
                        winner, self.config.win_score, self.tick
                    );
                    TickEvent::MatchWon(winner)
                }
                None => TickEvent::PointScored(scorer),
            },
        }
    }

    /// Scores to zero, paddles centered and still, fresh ball served.
    pub fn reset(&mut self) {
        self.score.reset();
        self.events.clear();

        let start_y = self.config.paddle_start_y();
        for (_entity, (paddle, intent)) in
            self.world.query_mut::<(&mut Paddle, &mut PaddleIntent)>()
        {
            paddle.y = start_y;
            *intent = PaddleIntent::Stop;
        }

        let ball = serve_ball(&self.config, &self.score, &mut self.rng);
        self.replace_ball(ball);
    }

    /// Resume ticking after a match ended without `auto_restart`
    pub fn restart(&mut self) {
        debug!("Match: restarted");
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Set the intent a paddle will follow on the next tick.
    ///
    /// On an AI-controlled paddle the predictor overwrites this at the end of
    /// the next tick.
    pub fn set_intent(&mut self, side: Side, intent: PaddleIntent) {
        for (_entity, (paddle, current)) in
            self.world.query_mut::<(&Paddle, &mut PaddleIntent)>()
        {
            if paddle.side == side {
                *current = intent;
            }
        }
    }

    pub fn intent(&self, side: Side) -> PaddleIntent {
        self.world
            .query::<(&Paddle, &PaddleIntent)>()
            .iter()
            .find(|(_e, (paddle, _))| paddle.side == side)
            .map(|(_e, (_, intent))| *intent)
            .unwrap_or_default()
    }

    /// Hand a paddle to a human or to the predictor
    pub fn set_controller(&mut self, side: Side, controller: Controller) {
        let Some(entity) = self.paddle_entity(side) else {
            return;
        };
        match controller {
            Controller::Ai => {
                let _ = self.world.insert_one(entity, AiControlled);
            }
            Controller::Human => {
                let _ = self.world.remove_one::<AiControlled>(entity);
            }
        }
        debug!("Match: {:?} paddle now {:?}-controlled", side, controller);
    }

    pub fn controller(&self, side: Side) -> Controller {
        match self.paddle_entity(side) {
            Some(entity) if self.world.get::<&AiControlled>(entity).is_ok() => Controller::Ai,
            _ => Controller::Human,
        }
    }

    pub fn ball(&self) -> Option<Ball> {
        let mut query = self.world.query::<&Ball>();
        let ball = query.iter().next().map(|(_e, ball)| *ball);
        ball
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let mut query = self.world.query::<&Paddle>();
        let paddle = query
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle);
        paddle
    }

    /// Swap in a scripted ball, for drivers and tests that stage a rally.
    ///
    /// The ball is brought back within the arena and its speed into
    /// `[ball_speed_start, ball_speed_max]`, so a staged rally obeys the same
    /// bounds as a served one.
    pub fn place_ball(&mut self, mut ball: Ball) {
        let field = self
            .config
            .arena()
            .ball_bounds(self.config.ball_radius);
        if !field.contains(ball.pos) {
            debug!("Match: placed ball at {:?} clamped into the arena", ball.pos);
        }
        ball.pos = field.clamp(ball.pos);
        ball.prev_pos = field.clamp(ball.prev_pos);
        ball.dir = ball.dir.try_normalize().unwrap_or(glam::Vec2::X);
        ball.speed = ball
            .speed
            .clamp(self.config.ball_speed_start, self.config.ball_speed_max);
        self.replace_ball(ball);
    }

    /// Move a paddle directly, clamped to the arena
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let y = self.config.clamp_paddle_y(y);
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.y = y;
            }
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Stage a score, for drivers that set up a scenario mid-match.
    ///
    /// Scores only ever go up within a match and a staged score may not
    /// already decide it; either is refused and the score is left unchanged.
    pub fn set_score(&mut self, score: Score) -> Result<(), ScoreError> {
        for side in Side::BOTH {
            let current = self.score.get(side);
            let requested = score.get(side);
            if requested < current {
                return Err(ScoreError::Decreasing {
                    side,
                    current,
                    requested,
                });
            }
            if requested >= self.config.win_score {
                return Err(ScoreError::ReachesWin {
                    side,
                    requested,
                    win_score: self.config.win_score,
                });
            }
        }
        self.score = score;
        Ok(())
    }

    /// Contact and scoring flags from the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn snapshot(&self) -> Snapshot {
        let ball_pos = self
            .ball()
            .map(|ball| ball.pos)
            .unwrap_or_else(|| self.config.arena().center());
        let ball_speed = self
            .ball()
            .map(|ball| ball.speed)
            .unwrap_or(self.config.ball_speed_start);

        Snapshot {
            tick: self.tick,
            left_paddle: self.paddle_or_default(Side::Left).rect(),
            right_paddle: self.paddle_or_default(Side::Right).rect(),
            ball_x: ball_pos.x,
            ball_y: ball_pos.y,
            ball_radius: self.config.ball_radius,
            ball_speed,
            score_left: self.score.left,
            score_right: self.score.right,
            running: self.running,
        }
    }

    fn paddle_or_default(&self, side: Side) -> Paddle {
        self.paddle(side).unwrap_or_else(|| {
            Paddle::new(
                side,
                self.config.paddle_x(side),
                self.config.paddle_start_y(),
                self.config.paddle_width,
                self.config.paddle_height,
            )
        })
    }

    fn paddle_entity(&self, side: Side) -> Option<hecs::Entity> {
        let mut query = self.world.query::<&Paddle>();
        let entity = query
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(entity, _)| entity);
        entity
    }

    fn replace_ball(&mut self, ball: Ball) {
        let old: Vec<hecs::Entity> = self
            .world
            .query::<&Ball>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in old {
            let _ = self.world.despawn(entity);
        }
        create_ball(&mut self.world, ball);
    }
}

impl std::fmt::Debug for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("tick", &self.tick)
            .field("score", &self.score)
            .field("running", &self.running)
            .field("ball", &self.ball())
            .finish()
    }
}
