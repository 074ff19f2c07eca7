//! Tree fixtures matching what the external Scalet parser produces.
//!
//! The decoration layer never parses, so tests hand over trees built
//! through [`TreeBuilder`] exactly as the upstream grammar would emit
//! them: lossless, with trivia tokens covering every byte of the source.

use scalet::base::LineIndex;
use scalet::syntax::{SyntaxKind, SyntaxNode, SyntaxToken, TreeBuilder};

/// A parsed document: root node plus the text and line index the host
/// would keep alongside it.
pub struct Fixture {
    pub text: String,
    pub root: SyntaxNode,
    pub line_index: LineIndex,
}

impl Fixture {
    pub fn new(root: SyntaxNode) -> Self {
        let text = root.text().to_string();
        let line_index = LineIndex::new(&text);
        Self {
            text,
            root,
            line_index,
        }
    }
}

/// `val x = add(1, add(2, 3))`
///
/// The grammar treats the parenthesized argument list as the application
/// node, so the outer application spans `(1, add(2, 3))` starting at the
/// open paren (offset 11) and the inner one spans `(2, 3)` (offset 18).
pub fn val_binding_with_nested_calls() -> Fixture {
    let mut b = TreeBuilder::new();
    b.start_node(SyntaxKind::Program);
    b.start_node(SyntaxKind::Binding);
    b.token(SyntaxKind::ValKw, "val");
    b.token(SyntaxKind::Whitespace, " ");
    b.token(SyntaxKind::Identifier, "x");
    b.token(SyntaxKind::Whitespace, " ");
    b.token(SyntaxKind::Eq, "=");
    b.token(SyntaxKind::Whitespace, " ");
    b.token(SyntaxKind::Identifier, "add");
    b.start_node(SyntaxKind::Application);
    b.token(SyntaxKind::LParen, "(");
    b.token(SyntaxKind::Number, "1");
    b.token(SyntaxKind::Comma, ",");
    b.token(SyntaxKind::Whitespace, " ");
    b.token(SyntaxKind::Identifier, "add");
    b.start_node(SyntaxKind::Application);
    b.token(SyntaxKind::LParen, "(");
    b.token(SyntaxKind::Number, "2");
    b.token(SyntaxKind::Comma, ",");
    b.token(SyntaxKind::Whitespace, " ");
    b.token(SyntaxKind::Number, "3");
    b.token(SyntaxKind::RParen, ")");
    b.finish_node();
    b.token(SyntaxKind::RParen, ")");
    b.finish_node();
    b.finish_node();
    b.finish_node();
    Fixture::new(b.finish())
}

/// Two-line nested application:
///
/// ```text
/// (add 1
///   (add 2 3))
/// ```
///
/// The outer application starts at column 0, the inner one at column 2 of
/// the second line.
pub fn nested_application_multiline() -> Fixture {
    let mut b = TreeBuilder::new();
    b.start_node(SyntaxKind::Program);
    b.start_node(SyntaxKind::Application);
    b.token(SyntaxKind::LParen, "(");
    b.token(SyntaxKind::Identifier, "add");
    b.token(SyntaxKind::Whitespace, " ");
    b.token(SyntaxKind::Number, "1");
    b.token(SyntaxKind::Whitespace, "\n  ");
    b.start_node(SyntaxKind::Application);
    b.token(SyntaxKind::LParen, "(");
    b.token(SyntaxKind::Identifier, "add");
    b.token(SyntaxKind::Whitespace, " ");
    b.token(SyntaxKind::Number, "2");
    b.token(SyntaxKind::Whitespace, " ");
    b.token(SyntaxKind::Number, "3");
    b.token(SyntaxKind::RParen, ")");
    b.finish_node();
    b.token(SyntaxKind::RParen, ")");
    b.finish_node();
    b.finish_node();
    Fixture::new(b.finish())
}

/// An application with no interior content: `()`.
pub fn empty_application() -> Fixture {
    let mut b = TreeBuilder::new();
    b.start_node(SyntaxKind::Program);
    b.start_node(SyntaxKind::Application);
    b.token(SyntaxKind::LParen, "(");
    b.token(SyntaxKind::RParen, ")");
    b.finish_node();
    b.finish_node();
    Fixture::new(b.finish())
}

/// All nodes of `kind` in document order.
pub fn find_nodes(root: &SyntaxNode, kind: SyntaxKind) -> Vec<SyntaxNode> {
    root.descendants().filter(|n| n.kind() == kind).collect()
}

/// First token of `kind` in document order.
pub fn find_token(root: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    root.descendants_with_tokens()
        .filter_map(|el| el.into_token())
        .find(|t| t.kind() == kind)
}
