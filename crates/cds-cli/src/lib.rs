//! CLI library components for the clinical decision engine.

pub mod logging;
