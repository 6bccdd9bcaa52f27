// ============================================================================
// Engine Module
// Contains the calculation pipeline
// ============================================================================

mod calculator;

pub use calculator::Calculator;
