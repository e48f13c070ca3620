use strum::{Display, EnumIter};

use super::{Lexer, LexerRule, Location, Token};

/// Every token category of a yecc grammar file. `Comment` and `WhiteSpace` aren't tokens of the
/// grammar but are used by the lexer to recognize and ignore part of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum TokenKind {
    /// `.`, ends a declaration or a rule
    Dot,
    /// `->`
    Arrow,
    /// `:`, introduces the attached code of a rule
    Colon,
    /// Identifier starting with an uppercase letter
    Var,
    /// Bare (`elem`) or quoted (`'+'`) atom
    Atom,
    Integer,
    Float,
    /// Double quoted string
    StringLiteral,
    /// Single punctuation character, see [`RESERVED_SYMBOLS`]
    ReservedSymbol,

    Comment,
    WhiteSpace,
}

/// Characters lexed as a [`TokenKind::ReservedSymbol`] on their own.
pub const RESERVED_SYMBOLS: &str = r#"{},[]|()*+-/;<=>?@\#$"'"#;

#[derive(Debug, Clone, PartialEq)]
pub struct YeccToken {
    pub kind: TokenKind,
    pub text: String,
    pub location: Location,
}

impl YeccToken {
    pub fn new(kind: TokenKind, text: &str, location: Location) -> Self {
        YeccToken {
            kind,
            text: text.to_string(),
            location,
        }
    }
}

impl Token for YeccToken {
    fn is_ignored(&self) -> bool {
        matches!(self.kind, TokenKind::Comment | TokenKind::WhiteSpace)
    }
}

const YECC_LEXING_RULES: &[LexerRule<YeccToken>] = {
    use TokenKind::*;

    macro_rules! builder {
        ($kind:expr) => {
            |loc, matched_text| YeccToken::new($kind, matched_text, loc)
        };
    }

    // `Iterator::max_by_key` picks the longest match and, among equally long matches, the rule
    // appearing last. `Integer` therefore follows `Float` so that `12` is an integer while `1.5`
    // is still a single float, and `12.` lexes as an integer followed by a dot.
    &[
        (r"^\s+", builder!(WhiteSpace)),
        (r"^%.*", builder!(Comment)),
        (r#"^[{},\[\]|()*+\-/;<=>?@\\#$"']"#, builder!(ReservedSymbol)),
        (r"^\d+(\.\d+)?", builder!(Float)),
        (r"^\d+", builder!(Integer)),
        (r"^\.", builder!(Dot)),
        (r"^->", builder!(Arrow)),
        (r"^:", builder!(Colon)),
        (r"^[A-Z][A-Za-z0-9_]*", builder!(Var)),
        (r"^[a-z][A-Za-z0-9_]*", builder!(Atom)),
        (r"^'.*?'", builder!(Atom)),
        (r#"^".*?""#, builder!(StringLiteral)),
    ]
};

/// Build a [`Lexer`] recognizing the tokens of a yecc grammar file.
///
/// # Example
///
/// ```
/// use yrl2ex::parsing::{build_yecc_lexer, TokenKind};
///
/// let lexer = build_yecc_lexer();
/// let kinds: Vec<TokenKind> = lexer
///     .scan("list -> elem : '$1'. % trailing comment")
///     .map(|token| token.map(|token| token.kind))
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Atom,
///         TokenKind::Arrow,
///         TokenKind::Atom,
///         TokenKind::Colon,
///         TokenKind::Atom,
///         TokenKind::Dot,
///     ]
/// );
/// ```
pub fn build_yecc_lexer() -> Lexer<YeccToken> {
    Lexer::new(YECC_LEXING_RULES.to_owned())
}
