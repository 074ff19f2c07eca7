//! Node classification — maps grammar identities to semantic tags.
//!
//! A renderer keys presentation styles on the [`Tag`] a tree element
//! carries. Classification is a single exact-match lookup on the element's
//! identity string; punctuation spellings and reserved words live in the
//! same namespace as rule names, so `"("` and `"true"` are keys exactly
//! like `"Application"`.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::syntax::SyntaxElement;

use super::RuleSetError;

/// Semantic tag for syntax highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Keyword,
    VariableName,
    Bool,
    String,
    LineComment,
    Bracket,
}

impl Tag {
    /// Stable category name a renderer keys styles on.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Keyword => "keyword",
            Tag::VariableName => "variableName",
            Tag::Bool => "bool",
            Tag::String => "string",
            Tag::LineComment => "lineComment",
            Tag::Bracket => "bracket",
        }
    }
}

/// One or more node identities bound to exactly one tag.
#[derive(Debug, Clone, Copy)]
pub struct TagRule {
    pub identities: &'static [&'static str],
    pub tag: Tag,
}

/// Default classification table for the Scalet grammar.
pub const DEFAULT_TAG_RULES: &[TagRule] = &[
    TagRule {
        identities: &["Identifier"],
        tag: Tag::VariableName,
    },
    TagRule {
        identities: &["Boolean"],
        tag: Tag::Bool,
    },
    TagRule {
        identities: &["String"],
        tag: Tag::String,
    },
    TagRule {
        identities: &["LineComment"],
        tag: Tag::LineComment,
    },
    TagRule {
        identities: &["(", ")"],
        tag: Tag::Bracket,
    },
    TagRule {
        identities: &["[", "]"],
        tag: Tag::Bracket,
    },
    TagRule {
        identities: &["true", "false", "def", "var", "val", "if", "else", "throw"],
        tag: Tag::Keyword,
    },
];

/// Exact-match identity → tag lookup table.
///
/// Unregistered identities classify to `None`; the element renders
/// unstyled. No error is raised for unknown identities.
pub struct TagTable {
    rules: &'static [TagRule],
    map: FxHashMap<&'static str, Tag>,
}

impl TagTable {
    /// Build a table from rule groups. A later rule wins if it rebinds an
    /// identity; [`TagTable::validate`] reports such rebinding.
    pub fn new(rules: &'static [TagRule]) -> Self {
        let mut map = FxHashMap::default();
        for rule in rules {
            for &identity in rule.identities {
                map.insert(identity, rule.tag);
            }
        }
        Self { rules, map }
    }

    /// The tag registered for an identity, if any.
    pub fn tag(&self, identity: &str) -> Option<Tag> {
        self.map.get(identity).copied()
    }

    /// The tag for a tree element, by its grammar identity.
    pub fn tag_of(&self, element: &SyntaxElement) -> Option<Tag> {
        self.tag(element.kind().identity())
    }

    /// Check that no identity is bound by more than one rule.
    pub fn validate(&self) -> Result<(), RuleSetError> {
        let mut seen = FxHashMap::default();
        for rule in self.rules {
            for &identity in rule.identities {
                if seen.insert(identity, rule.tag).is_some() {
                    return Err(RuleSetError::DuplicateTag {
                        identity: SmolStr::new(identity),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for TagTable {
    fn default() -> Self {
        Self::new(DEFAULT_TAG_RULES)
    }
}
