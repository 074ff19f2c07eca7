//! Indentation rules computed from tree structure.
//!
//! Only identities with a registered rule are special-cased; everything
//! else returns `None` and the host applies its own default indentation.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use text_size::TextSize;

use crate::base::LineIndex;
use crate::syntax::SyntaxNode;

use super::RuleSetError;

/// Host-supplied inputs for an indentation query.
///
/// `unit` is the width of one indentation level (typically one tab-stop);
/// the line index must cover the document revision the tree was built from.
pub struct IndentContext<'a> {
    line_index: &'a LineIndex,
    unit: u32,
}

impl<'a> IndentContext<'a> {
    pub fn new(line_index: &'a LineIndex, unit: u32) -> Self {
        Self { line_index, unit }
    }

    /// 0-based column of `offset` on its source line.
    pub fn column(&self, offset: TextSize) -> u32 {
        self.line_index.line_col(offset).col
    }

    /// Width of one indentation level.
    pub fn unit(&self) -> u32 {
        self.unit
    }
}

/// A pure indentation rule: the column a new line inside `node` receives.
pub type IndentRule = fn(&IndentContext<'_>, &SyntaxNode) -> u32;

/// Indent one unit past the column of the node's start.
pub fn indent_past_open(cx: &IndentContext<'_>, node: &SyntaxNode) -> u32 {
    cx.column(node.text_range().start()) + cx.unit()
}

/// Default indentation rules for the Scalet grammar.
///
/// Nested applications are the only construct this grammar special-cases;
/// every other construct indents at the enclosing block's level by host
/// default.
pub const DEFAULT_INDENT_RULES: &[(&str, IndentRule)] = &[("Application", indent_past_open)];

/// Exact-match identity → indentation rule table.
pub struct IndentTable {
    rules: &'static [(&'static str, IndentRule)],
    map: FxHashMap<&'static str, IndentRule>,
}

impl IndentTable {
    pub fn new(rules: &'static [(&'static str, IndentRule)]) -> Self {
        let mut map = FxHashMap::default();
        for &(identity, rule) in rules {
            map.insert(identity, rule);
        }
        Self { rules, map }
    }

    /// The column a new line inside `node` should receive, or `None` to
    /// delegate to the host's default behavior.
    pub fn indent_for(&self, node: &SyntaxNode, cx: &IndentContext<'_>) -> Option<u32> {
        let rule = self.map.get(node.kind().identity())?;
        Some(rule(cx, node))
    }

    /// Check that no identity is registered twice.
    pub fn validate(&self) -> Result<(), RuleSetError> {
        let mut seen = FxHashMap::default();
        for &(identity, rule) in self.rules {
            if seen.insert(identity, rule).is_some() {
                return Err(RuleSetError::DuplicateIndent {
                    identity: SmolStr::new(identity),
                });
            }
        }
        Ok(())
    }
}

impl Default for IndentTable {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_RULES)
    }
}
