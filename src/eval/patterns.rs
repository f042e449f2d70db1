//! Pattern scores for position evaluation
//!
//! Scoring weights for the run patterns the evaluator counts. The exact
//! numbers are tunable; only the ordering between them is relied on.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row on the board
    pub const FIVE: i32 = 1_000_000;

    /// Open four: _OOOO_ (two ways to complete)
    pub const OPEN_FOUR: i32 = 100_000;
    /// Closed four: XOOOO_ (one way to complete)
    pub const CLOSED_FOUR: i32 = 50_000;

    /// Open three: _OOO_ (promotes to an open four)
    pub const OPEN_THREE: i32 = 10_000;
    /// Closed three: XOOO_ (one side blocked)
    pub const CLOSED_THREE: i32 = 1_500;

    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 1_000;
    /// Closed two: XOO_
    pub const CLOSED_TWO: i32 = 200;

    /// Bonus per captured opponent stone
    pub const CAPTURE_STONE: i32 = 200;

    /// Bonus per step of center proximity, per stone
    pub const POSITION_WEIGHT: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::CLOSED_FOUR);
        assert!(PatternScore::CLOSED_FOUR > PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::CLOSED_THREE);
        assert!(PatternScore::CLOSED_THREE > PatternScore::OPEN_TWO);
        assert!(PatternScore::OPEN_TWO > PatternScore::CLOSED_TWO);
        assert!(PatternScore::CLOSED_TWO > PatternScore::POSITION_WEIGHT);
    }
}
