use thiserror::Error;

use super::{Location, TokenKind, YeccToken};

/// Kind of a grammar symbol kept in the AST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Var,
    Integer,
    Atom,
    ReservedWord,
    Float,
    String,
    Char,
    ReservedSymbol,
    Arrow,
    Colon,
}

/// A token kind with no symbol counterpart was handed to the classifier. The parser never does
/// that, so this is an internal error rather than a problem with the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("internal error: {kind} token at {location} has no symbol kind")]
pub struct ClassificationError {
    pub kind: TokenKind,
    pub location: Location,
}

/// One classified token of the grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub data: String,
    pub location: Location,
    /// Whether whitespace or a comment separated this symbol from the previous token.
    pub spaced: bool,
}

impl Symbol {
    /// Map a token to its symbol.
    pub fn classify(token: &YeccToken, spaced: bool) -> Result<Self, ClassificationError> {
        let kind = match token.kind {
            TokenKind::Var => SymbolKind::Var,
            TokenKind::Integer => SymbolKind::Integer,
            TokenKind::Atom => SymbolKind::Atom,
            TokenKind::Float => SymbolKind::Float,
            TokenKind::StringLiteral => SymbolKind::String,
            TokenKind::ReservedSymbol => SymbolKind::ReservedSymbol,
            TokenKind::Arrow => SymbolKind::Arrow,
            TokenKind::Colon => SymbolKind::Colon,
            TokenKind::Dot | TokenKind::Comment | TokenKind::WhiteSpace => {
                return Err(ClassificationError {
                    kind: token.kind,
                    location: token.location,
                })
            }
        };

        Ok(Symbol {
            kind,
            data: token.text.clone(),
            location: token.location,
            spaced,
        })
    }

    /// The 1-based position referenced by a `'$N'` placeholder atom.
    ///
    /// ```
    /// use yrl2ex::parsing::{build_yecc_lexer, Symbol};
    ///
    /// let token = build_yecc_lexer().scan("'$2'").next().unwrap().unwrap();
    /// assert_eq!(Symbol::classify(&token, false).unwrap().placeholder_index(), Some(2));
    /// ```
    pub fn placeholder_index(&self) -> Option<usize> {
        if self.kind != SymbolKind::Atom {
            return None;
        }

        let digits = self.data.strip_prefix("'$")?.strip_suffix('\'')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) || digits.starts_with('0')
        {
            return None;
        }

        digits.parse().ok()
    }

    /// Whether this is the reserved symbol or bare atom spelled `text`.
    pub fn is(&self, kind: SymbolKind, text: &str) -> bool {
        self.kind == kind && self.data == text
    }

    /// Whether this is a single quoted atom, like `'+'`.
    pub fn is_quoted_atom(&self) -> bool {
        self.kind == SymbolKind::Atom && self.data.starts_with('\'')
    }
}
