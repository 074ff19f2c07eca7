//! Foundation types for the Scalet support library.
//!
//! This module provides the primitives used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//!
//! This module has NO dependencies on other scalet modules.

mod position;

pub use position::{LineCol, LineIndex};

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};
