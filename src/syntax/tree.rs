//! Tree construction sink for the upstream parser.

use rowan::GreenNodeBuilder;

use super::{SyntaxKind, SyntaxNode};

/// Builder the external Scalet parser drives to hand trees to this layer.
///
/// Wraps [`rowan::GreenNodeBuilder`] so callers deal in [`SyntaxKind`]
/// rather than raw kinds. Tokens must cover the source text losslessly;
/// byte ranges on the finished tree fall out of the token lengths.
pub struct TreeBuilder {
    inner: GreenNodeBuilder<'static>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            inner: GreenNodeBuilder::new(),
        }
    }

    /// Open a composite node of the given kind.
    pub fn start_node(&mut self, kind: SyntaxKind) {
        self.inner.start_node(kind.into());
    }

    /// Add a token to the current node.
    pub fn token(&mut self, kind: SyntaxKind, text: &str) {
        self.inner.token(kind.into(), text);
    }

    /// Close the most recently opened node.
    pub fn finish_node(&mut self) {
        self.inner.finish_node();
    }

    /// Finish building and return the root node.
    pub fn finish(self) -> SyntaxNode {
        SyntaxNode::new_root(self.inner.finish())
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
