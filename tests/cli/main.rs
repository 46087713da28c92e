//! CLI integration tests for fancylists.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (render, parse)
//! - Stdin/stdout handling
//! - Config discovery
//! - Error handling

mod common;
mod parse;
mod render;
