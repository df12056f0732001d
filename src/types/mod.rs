//! Data model for the evaluation engine.

pub mod counts;
pub mod record;
pub mod spec;
