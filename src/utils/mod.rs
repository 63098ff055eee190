//! Utility modules: file locations and logging setup.

pub mod logging;
pub mod persistence;
