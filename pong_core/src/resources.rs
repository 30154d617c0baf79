use crate::Side;

/// Game score tracking. Left is player one, right is player two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// The side that is ahead, `None` on a tie
    pub fn leader(&self) -> Option<Side> {
        match self.left.cmp(&self.right) {
            std::cmp::Ordering::Greater => Some(Side::Left),
            std::cmp::Ordering::Less => Some(Side::Right),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn scored(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }
}

/// Outcome of a single `Match::tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickEvent {
    /// Nothing noteworthy, or the match is not running
    #[default]
    None,
    /// The given side won a point and the ball was re-served
    PointScored(Side),
    /// The given side just reached the winning score; the next tick resets
    MatchWon(Side),
    /// Scores, paddles and ball were reset after the given side won
    MatchReset(Side),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Left);
        score.increment(Side::Left);
        score.increment(Side::Right);
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 1);
        assert_eq!(score.get(Side::Left), 2);
        assert_eq!(score.get(Side::Right), 1);
    }

    #[test]
    fn test_score_leader() {
        let mut score = Score::new();
        assert_eq!(score.leader(), None);
        score.increment(Side::Right);
        assert_eq!(score.leader(), Some(Side::Right));
        score.increment(Side::Left);
        score.increment(Side::Left);
        assert_eq!(score.leader(), Some(Side::Left));
    }

    #[test]
    fn test_score_has_winner() {
        let score = Score { left: 10, right: 3 };
        assert_eq!(score.has_winner(10), Some(Side::Left));

        let score = Score { left: 4, right: 10 };
        assert_eq!(score.has_winner(10), Some(Side::Right));
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let score = Score { left: 9, right: 9 };
        assert_eq!(score.has_winner(10), None, "No winner below threshold");
    }

    #[test]
    fn test_score_reset() {
        let mut score = Score { left: 7, right: 2 };
        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.scored(Side::Left);
        events.scored(Side::Right);
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert_eq!(events, Events::default());
    }
}
