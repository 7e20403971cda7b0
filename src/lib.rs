//! Cross-compilation Swift SDK bundle generator
//!
//! This library provides the orchestration core for generating Swift SDK
//! bundles that cross-compile to Linux distributions:
//! - Host/target platform triple resolution
//! - Distribution and recipe validation
//! - Supervised, signal-aware execution with cooperative cancellation
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod elapsed;
pub mod error;
pub mod lifecycle;

// Re-export commonly used types
pub use error::{GeneratorError, Result};
