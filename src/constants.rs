//! Centralized constants for the circle-stats crate

/// Process exit codes
pub mod exit {
    /// Run completed
    pub const SUCCESS: i32 = 0;

    /// Circle generation failed after configuration was accepted
    pub const RUNTIME_ERROR: i32 = 1;

    /// Configuration could not be found, parsed, coerced or validated
    pub const CONFIG_ERROR: i32 = 2;
}
