//! Syntax kinds for the Rowan-based Scalet CST

/// All syntax kinds (tokens and nodes) the Scalet grammar produces.
///
/// This is the closed set of node identities the rule tables key on; the
/// grammar guarantees no others appear in a produced tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // === Trivia ===
    Whitespace = 0,
    LineComment,

    // === Literals ===
    Identifier,
    Number,
    String,
    Boolean,

    // === Punctuation ===
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Eq,

    // === Keywords ===
    TrueKw,
    FalseKw,
    DefKw,
    VarKw,
    ValKw,
    IfKw,
    ElseKw,
    ThrowKw,

    // === Composite Nodes ===
    Program,
    Binding,
    Application,

    // === Special ===
    Error,
}

impl SyntaxKind {
    /// The grammar's stable identity string for this kind.
    ///
    /// Punctuation uses the literal spelling and keywords use the reserved
    /// word itself; rule tables look these up in one namespace, so `"("`
    /// and `"true"` are keys exactly like `"Application"`.
    pub fn identity(self) -> &'static str {
        match self {
            SyntaxKind::Whitespace => "Whitespace",
            SyntaxKind::LineComment => "LineComment",
            SyntaxKind::Identifier => "Identifier",
            SyntaxKind::Number => "Number",
            SyntaxKind::String => "String",
            SyntaxKind::Boolean => "Boolean",
            SyntaxKind::LParen => "(",
            SyntaxKind::RParen => ")",
            SyntaxKind::LBracket => "[",
            SyntaxKind::RBracket => "]",
            SyntaxKind::Comma => ",",
            SyntaxKind::Eq => "=",
            SyntaxKind::TrueKw => "true",
            SyntaxKind::FalseKw => "false",
            SyntaxKind::DefKw => "def",
            SyntaxKind::VarKw => "var",
            SyntaxKind::ValKw => "val",
            SyntaxKind::IfKw => "if",
            SyntaxKind::ElseKw => "else",
            SyntaxKind::ThrowKw => "throw",
            SyntaxKind::Program => "Program",
            SyntaxKind::Binding => "Binding",
            SyntaxKind::Application => "Application",
            SyntaxKind::Error => "Error",
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        // Safety: every raw kind in a Scalet tree came from this enum
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Rowan language definition for Scalet trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScaletLanguage {}

impl rowan::Language for ScaletLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Tree aliases over the Scalet language
pub type SyntaxNode = rowan::SyntaxNode<ScaletLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<ScaletLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<ScaletLanguage>;
