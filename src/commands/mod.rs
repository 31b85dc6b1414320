//! CLI commands for newsbrief

pub mod batch;
pub mod demo;
pub mod dispatch;
pub mod input;
pub mod normalize;
pub mod score;
pub mod summarize;
