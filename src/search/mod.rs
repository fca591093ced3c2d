//! Search module for subboard tic-tac-toe analysis
//!
//! Contains:
//! - Alpha-Beta search over fresh child positions
//! - A pruning-free minimax reference
//! - Per-search statistics

pub mod alphabeta;

pub use alphabeta::{minimax, SearchResult, SearchStats, Searcher, INF};
