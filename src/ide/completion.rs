//! Completion suggestions — a static, literal candidate source.
//!
//! The vocabulary is plain data fixed at assembly time; it has no
//! relationship to the syntax tree. The provider hands the host the whole
//! list and the host filters by label against the partial token under the
//! cursor.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use text_size::TextSize;
use tracing::trace;

use super::RuleSetError;

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompletionKind {
    Keyword,
    Function,
}

impl CompletionKind {
    /// Stable category name for the host boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            CompletionKind::Keyword => "keyword",
            CompletionKind::Function => "function",
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The text to insert.
    pub label: SmolStr,
    /// The kind of completion.
    pub kind: CompletionKind,
}

impl CompletionItem {
    pub fn new(label: impl Into<SmolStr>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }
}

/// Cursor context a host passes when invoking a completion provider.
///
/// The static source ignores it; it exists so the provider conforms to the
/// host's `(context) -> list` callable shape.
#[derive(Debug, Clone, Copy)]
pub struct CompletionContext {
    /// Byte offset of the cursor.
    pub pos: TextSize,
}

impl CompletionContext {
    pub fn new(pos: TextSize) -> Self {
        Self { pos }
    }
}

/// Default Scalet vocabulary: the grammar's own keywords, then its
/// operators in call position.
pub const DEFAULT_COMPLETIONS: &[(&str, CompletionKind)] = &[
    ("true", CompletionKind::Keyword),
    ("false", CompletionKind::Keyword),
    ("def", CompletionKind::Keyword),
    ("val", CompletionKind::Keyword),
    ("if", CompletionKind::Keyword),
    ("else", CompletionKind::Keyword),
    ("+", CompletionKind::Function),
    ("-", CompletionKind::Function),
    ("*", CompletionKind::Function),
    ("/", CompletionKind::Function),
    ("<", CompletionKind::Function),
    ("==", CompletionKind::Function),
    (">", CompletionKind::Function),
    ("<=", CompletionKind::Function),
    (">=", CompletionKind::Function),
    ("!=", CompletionKind::Function),
];

/// A static completion source.
///
/// The list keeps its insertion order; no ranking or scoring happens here
/// beyond the host's own prefix matching.
pub struct CompletionSource {
    items: Vec<CompletionItem>,
}

impl CompletionSource {
    /// Build a source from an explicit vocabulary.
    pub fn new(items: Vec<CompletionItem>) -> Self {
        Self { items }
    }

    /// Build a source from a literal `(label, kind)` table.
    pub fn from_table(table: &[(&str, CompletionKind)]) -> Self {
        Self::new(
            table
                .iter()
                .map(|&(label, kind)| CompletionItem::new(label, kind))
                .collect(),
        )
    }

    /// The candidates that apply at `cx`.
    ///
    /// Always the full list: filtering against the partial token is the
    /// host's job, and a stale request simply returns results the host may
    /// discard.
    pub fn complete(&self, cx: &CompletionContext) -> &[CompletionItem] {
        trace!(pos = ?cx.pos, candidates = self.items.len(), "serving static completions");
        &self.items
    }

    /// The full candidate list, in insertion order.
    pub fn items(&self) -> &[CompletionItem] {
        &self.items
    }

    /// Check that no label repeats within one kind.
    pub fn validate(&self) -> Result<(), RuleSetError> {
        let mut seen = FxHashSet::default();
        for item in &self.items {
            if !seen.insert((item.label.as_str(), item.kind)) {
                return Err(RuleSetError::DuplicateCompletion {
                    label: SmolStr::new(&item.label),
                    kind: item.kind,
                });
            }
        }
        Ok(())
    }
}

impl Default for CompletionSource {
    fn default() -> Self {
        Self::from_table(DEFAULT_COMPLETIONS)
    }
}
