//! Input/output operations, configuration, and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Generation constants and runtime defaults
pub mod configuration;
/// Error types for generation and output operations
pub mod error;
/// Interactive parameter prompts
pub mod interactive;
/// Placement progress display
pub mod progress;
/// Map serialization and glyph mappings
pub mod render;
