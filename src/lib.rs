//! # scalet-base
//!
//! Editor support for the Scalet language: syntax classification,
//! indentation, folding, and completions.
//!
//! Scalet source is parsed by an external grammar into a concrete syntax
//! tree; this crate never parses text itself. It consumes the tree and
//! answers the questions a text-editing host asks on its update cycle:
//! what tag a node carries, what column a new line inside a node should
//! start at, what range a node folds to, and what completion candidates
//! apply at the cursor.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → decoration layer: highlight, indent, folding, completion,
//!             and the assembled LanguageSupport unit
//!   ↓
//! syntax    → CST contract: SyntaxKind, rowan Language impl, TreeBuilder
//!   ↓
//! base      → primitives (LineCol, LineIndex, TextRange, TextSize)
//! ```
//!
//! ## Usage
//!
//! The recommended entry point is the process-wide language unit:
//!
//! ```ignore
//! use scalet::ide::scalet;
//!
//! let support = scalet();
//! let tag = support.language().tag_of(&node);
//! let items = support.completion().unwrap().complete(&cx);
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → ide)
// ============================================================================

/// Foundation types: LineCol, LineIndex, TextRange, TextSize
pub mod base;

/// Syntax: SyntaxKind enumeration, rowan Language impl, TreeBuilder
pub mod syntax;

/// IDE features: highlighting, indentation, folding, completion, assembly
pub mod ide;

// Re-export foundation types
pub use base::{LineCol, LineIndex, TextRange, TextSize};

// Re-export the syntax contract
pub use syntax::{ScaletLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
