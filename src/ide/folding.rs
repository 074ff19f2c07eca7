//! Fold rules computed from tree structure.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use text_size::TextRange;

use crate::syntax::SyntaxNode;

use super::RuleSetError;

/// A pure fold rule: the sub-range of `node` a host may collapse.
pub type FoldRule = fn(&SyntaxNode) -> Option<TextRange>;

/// Fold everything strictly between the node's first and last child
/// elements, the region inside its delimiter tokens.
///
/// Returns `None` when the node has no interior content.
pub fn fold_inside(node: &SyntaxNode) -> Option<TextRange> {
    let first = node.first_child_or_token()?;
    let last = node.last_child_or_token()?;

    let start = first.text_range().end();
    let end = last.text_range().start();
    (start < end).then(|| TextRange::new(start, end))
}

/// Default fold rules for the Scalet grammar.
///
/// Applications are the only foldable construct in this rule set.
pub const DEFAULT_FOLD_RULES: &[(&str, FoldRule)] = &[("Application", fold_inside)];

/// Exact-match identity → fold rule table.
pub struct FoldTable {
    rules: &'static [(&'static str, FoldRule)],
    map: FxHashMap<&'static str, FoldRule>,
}

impl FoldTable {
    pub fn new(rules: &'static [(&'static str, FoldRule)]) -> Self {
        let mut map = FxHashMap::default();
        for &(identity, rule) in rules {
            map.insert(identity, rule);
        }
        Self { rules, map }
    }

    /// The range `node` collapses to, if its identity has a fold rule and
    /// the node has interior content.
    pub fn fold_range(&self, node: &SyntaxNode) -> Option<TextRange> {
        let rule = self.map.get(node.kind().identity())?;
        let range = rule(node)?;

        // Rules must stay strictly inside the node's own range.
        debug_assert!(
            node.text_range().contains_range(range) && range != node.text_range(),
            "fold rule for `{}` escaped the node range",
            node.kind().identity()
        );
        Some(range)
    }

    /// Check that no identity is registered twice.
    pub fn validate(&self) -> Result<(), RuleSetError> {
        let mut seen = FxHashMap::default();
        for &(identity, rule) in self.rules {
            if seen.insert(identity, rule).is_some() {
                return Err(RuleSetError::DuplicateFold {
                    identity: SmolStr::new(identity),
                });
            }
        }
        Ok(())
    }
}

impl Default for FoldTable {
    fn default() -> Self {
        Self::new(DEFAULT_FOLD_RULES)
    }
}
