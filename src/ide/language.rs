//! Language assembly — composes the rule tables, language metadata, and
//! completion source into one host-attachable unit.
//!
//! The assembled [`LanguageSupport`] is a stateless configuration value:
//! the host invokes its queries synchronously on each tree update or
//! completion request, and nothing is cached or mutated between calls.

use std::sync::LazyLock;

use indexmap::IndexMap;
use text_size::TextRange;
use tracing::debug;

use crate::syntax::{SyntaxElement, SyntaxNode};

use super::{
    CompletionSource, FoldTable, IndentContext, IndentTable, RuleSetError, Tag, TagTable,
};

/// Comment syntax metadata a host reads for toggle-comment commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentTokens {
    /// Spelling that starts a line comment, if the language has one.
    pub line: Option<&'static str>,
}

/// A configured language: classification, indentation, and folding rules
/// plus language-level metadata.
///
/// Immutable once built; every query is pure and bounded, so one value is
/// shared by all editor instances.
pub struct Language {
    name: &'static str,
    comment_tokens: CommentTokens,
    tags: TagTable,
    indent: IndentTable,
    folds: FoldTable,
}

impl Language {
    pub fn new(
        name: &'static str,
        comment_tokens: CommentTokens,
        tags: TagTable,
        indent: IndentTable,
        folds: FoldTable,
    ) -> Self {
        Self {
            name,
            comment_tokens,
            tags,
            indent,
            folds,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn comment_tokens(&self) -> CommentTokens {
        self.comment_tokens
    }

    /// Semantic tag for a tree element, or `None` when its identity is
    /// unregistered (the element renders unstyled).
    pub fn tag_of(&self, element: &SyntaxElement) -> Option<Tag> {
        self.tags.tag_of(element)
    }

    /// Semantic tag for a raw identity string.
    pub fn classify(&self, identity: &str) -> Option<Tag> {
        self.tags.tag(identity)
    }

    /// Column for a new line inside `node`, or `None` to delegate to the
    /// host's default indentation.
    pub fn indent_for(&self, node: &SyntaxNode, cx: &IndentContext<'_>) -> Option<u32> {
        self.indent.indent_for(node, cx)
    }

    /// Range `node` collapses to, if it is foldable.
    pub fn fold_range(&self, node: &SyntaxNode) -> Option<TextRange> {
        self.folds.fold_range(node)
    }

    /// Validate every rule table. Failures are construction-time
    /// programming errors, caught by tests.
    pub fn validate(&self) -> Result<(), RuleSetError> {
        self.tags.validate()?;
        self.indent.validate()?;
        self.folds.validate()?;
        Ok(())
    }
}

/// A named capability registered on a language unit.
///
/// Hosts discover capabilities by name or through the typed accessors on
/// [`LanguageSupport`]; there is no dynamic property lookup.
pub enum Extension {
    Completion(CompletionSource),
}

impl Extension {
    /// The slot name this extension registers under.
    pub fn name(&self) -> &'static str {
        match self {
            Extension::Completion(_) => "completion",
        }
    }
}

/// The composed unit a host attaches to an editable buffer: one language
/// plus its registered extensions.
pub struct LanguageSupport {
    language: Language,
    extensions: IndexMap<&'static str, Extension>,
}

impl LanguageSupport {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            extensions: IndexMap::new(),
        }
    }

    /// Register an extension. Registration order is preserved; a second
    /// extension with the same name replaces the first.
    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.extensions.insert(extension.name(), extension);
        self
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    /// All registered extensions, in registration order.
    pub fn extensions(&self) -> impl Iterator<Item = &Extension> {
        self.extensions.values()
    }

    /// Look up an extension by slot name.
    pub fn extension(&self, name: &str) -> Option<&Extension> {
        self.extensions.get(name)
    }

    /// The completion source, if one is registered.
    pub fn completion(&self) -> Option<&CompletionSource> {
        self.extensions.values().find_map(|ext| match ext {
            Extension::Completion(source) => Some(source),
        })
    }
}

fn build_scalet() -> LanguageSupport {
    let language = Language::new(
        "scalet",
        CommentTokens { line: Some("//") },
        TagTable::default(),
        IndentTable::default(),
        FoldTable::default(),
    );
    debug_assert!(
        language.validate().is_ok(),
        "default rule tables must validate"
    );

    let completions = CompletionSource::default();
    debug_assert!(
        completions.validate().is_ok(),
        "default completion vocabulary must validate"
    );

    debug!(language = language.name(), "assembled language support unit");
    LanguageSupport::new(language).with_extension(Extension::Completion(completions))
}

static SCALET: LazyLock<LanguageSupport> = LazyLock::new(build_scalet);

/// The process-wide Scalet language unit.
///
/// Built once on first use and shared by every editor instance. The unit
/// holds no per-document state, so concurrent queries from multiple open
/// documents need no locking.
pub fn scalet() -> &'static LanguageSupport {
    &SCALET
}
