//! gymlog - Workout diary parser
//!
//! Turns a hand-written workout diary (one blank-line separated entry per
//! day) into a per-set exercise table and a per-day session table, and
//! computes descriptive statistics over them.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::GymlogError;
