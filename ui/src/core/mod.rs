//! Platform-agnostic core: the measurement lifecycle and the pure data shaping
//! behind the results table, chart and export.

pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod format;
pub mod normalize;
pub mod platform;
pub mod series;
