//! Position evaluation
//!
//! Pattern weights and the heuristic evaluator feeding the search.

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::PatternScore;
