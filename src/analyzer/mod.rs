//! Analyzer module - policy quality analysis engine

pub mod engine;
pub mod rules;
pub mod scoring;

pub use engine::AnalysisEngine;
pub use scoring::ScoreCalculator;
