//! IDE features — the decoration layer a text-editing host queries.
//!
//! This module maps Scalet syntax-tree shape to editing behavior: semantic
//! tags for coloring, indentation columns, fold ranges, and completion
//! candidates. The host re-evaluates these queries on its own update cycle
//! whenever the tree changes.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: take tree data in, return plain data out
//! 2. **Own types**: no host types; the host converts at its boundary
//! 3. **Table-driven**: behavior keys on node identity strings, not on
//!    per-node-type dispatch
//!
//! ## Usage
//!
//! The recommended entry point is the assembled unit:
//!
//! ```ignore
//! use scalet::ide::scalet;
//!
//! let support = scalet();
//! let tag = support.language().tag_of(&element);
//! ```

mod completion;
mod error;
mod folding;
mod highlight;
mod indent;
mod language;

pub use completion::{
    CompletionContext, CompletionItem, CompletionKind, CompletionSource, DEFAULT_COMPLETIONS,
};
pub use error::RuleSetError;
pub use folding::{DEFAULT_FOLD_RULES, FoldRule, FoldTable, fold_inside};
pub use highlight::{DEFAULT_TAG_RULES, Tag, TagRule, TagTable};
pub use indent::{DEFAULT_INDENT_RULES, IndentContext, IndentRule, IndentTable, indent_past_open};
pub use language::{CommentTokens, Extension, Language, LanguageSupport, scalet};
