//! The concrete-syntax-tree contract between the external Scalet parser
//! and the decoration layer.
//!
//! The grammar and lexer live upstream; they hand over lossless rowan trees
//! built through [`TreeBuilder`]. This crate only reads node identity,
//! range, and structural context. It never mutates a tree.

mod kind;
mod tree;

pub use kind::{ScaletLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
pub use tree::TreeBuilder;
