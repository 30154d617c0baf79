//! Fixed-rate driver: owns the timer and calls `Match::tick` once per period.
//!
//! The simulation never reads the clock, so pacing and catch-up live here.

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use pong_core::{Match, Score, Side, Snapshot, TickEvent};

/// Abstract time source so pacing can be tested without sleeping
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&self, duration: Duration);
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// How far behind schedule the driver may fall before it drops the backlog
const MAX_LAG_TICKS: u32 = 5;

/// Deadline-based pacing: each tick is due one period after the previous
/// one, so short oversleeps are absorbed instead of accumulating as drift.
pub struct Pacer<C: Clock> {
    clock: C,
    period: Duration,
    next_due: Option<Instant>,
}

impl<C: Clock> Pacer<C> {
    pub fn new(clock: C, period: Duration) -> Self {
        Self {
            clock,
            period,
            next_due: None,
        }
    }

    /// Block until the next tick is due
    pub fn wait(&mut self) {
        let now = self.clock.now();
        let due = *self.next_due.get_or_insert(now);

        if due > now {
            self.clock.sleep(due - now);
            self.next_due = Some(due + self.period);
        } else if now - due > self.period * MAX_LAG_TICKS {
            warn!(
                "Driver: {:?} behind schedule, dropping backlog",
                now - due
            );
            self.next_due = Some(now + self.period);
        } else {
            // Slightly late: run now and let the following ticks catch up
            self.next_due = Some(due + self.period);
        }
    }
}

/// Outcome of driving one match to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    pub winner: Option<Side>,
    pub final_score: Score,
    pub ticks: u64,
    pub points: u32,
}

pub struct Driver<C: Clock> {
    pacer: Option<Pacer<C>>,
    max_ticks: u64,
}

impl Driver<SystemClock> {
    /// `realtime = false` runs ticks back to back
    pub fn new(period: Duration, realtime: bool, max_ticks: u64) -> Self {
        Self::with_clock(SystemClock, period, realtime, max_ticks)
    }
}

impl<C: Clock> Driver<C> {
    pub fn with_clock(clock: C, period: Duration, realtime: bool, max_ticks: u64) -> Self {
        Self {
            pacer: realtime.then(|| Pacer::new(clock, period)),
            max_ticks,
        }
    }

    /// Tick `game` until a match is won and reset, or the tick cap is hit.
    ///
    /// `on_tick` sees every tick's event and the snapshot taken right after it.
    pub fn run_match<F>(&mut self, game: &mut Match, mut on_tick: F) -> MatchSummary
    where
        F: FnMut(TickEvent, &Snapshot),
    {
        if !game.is_running() {
            game.restart();
        }

        let mut summary = MatchSummary {
            winner: None,
            final_score: game.score(),
            ticks: 0,
            points: 0,
        };

        while summary.ticks < self.max_ticks {
            if let Some(pacer) = self.pacer.as_mut() {
                pacer.wait();
            }

            let event = game.tick();
            summary.ticks += 1;
            on_tick(event, &game.snapshot());

            match event {
                TickEvent::None => {}
                TickEvent::PointScored(side) => {
                    summary.points += 1;
                    let score = game.score();
                    debug!("Driver: point to {:?} ({}-{})", side, score.left, score.right);
                }
                TickEvent::MatchWon(side) => {
                    summary.points += 1;
                    summary.final_score = game.score();
                    info!(
                        "Driver: {:?} wins {}-{}",
                        side, summary.final_score.left, summary.final_score.right
                    );
                }
                TickEvent::MatchReset(side) => {
                    summary.winner = Some(side);
                    return summary;
                }
            }
        }

        summary.final_score = game.score();
        warn!(
            "Driver: gave up after {} ticks at {}-{}",
            summary.ticks, summary.final_score.left, summary.final_score.right
        );
        summary
    }
}
