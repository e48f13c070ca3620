//! Recursive-descent parser turning the token stream of a grammar file into a [`Grammar`].
//!
//! One function per production:
//!
//! ```text
//! grammar      = { declaration | rule }
//! declaration  = symbol ( symbols | strings ) "."
//! rule         = symbol "->" symbols attached_code "."
//! attached_code = [ ":" tokens ]
//! symbols      = symbol { symbol }            (var, atom, integer)
//! strings      = string { string }
//! tokens       = token { token }              (anything but ".")
//! ```
use log::debug;
use thiserror::Error;

use super::{
    build_yecc_lexer, Declaration, Grammar, GrammarItem, Location, Rule, Symbol, TokenKind,
    YeccToken,
};
use crate::error::Result;

/// The token stream doesn't follow the grammar file syntax.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "syntax error at {}: expected {expected}, found {found}",
    .location.map_or("end of input".to_string(), |location| location.start.to_string())
)]
pub struct SyntaxError {
    /// Location of the offending token, `None` at the end of the input.
    pub location: Option<Location>,
    pub expected: String,
    pub found: String,
}

/// Lex and parse a whole grammar file.
///
/// # Example
///
/// ```
/// use yrl2ex::parsing::{parse_grammar, GrammarItem};
///
/// let grammar = parse_grammar("Terminals elem.\nlist -> elem : '$1'.").unwrap();
/// assert_eq!(grammar.items.len(), 2);
/// assert!(matches!(grammar.items[1], GrammarItem::Rule(_)));
///
/// // missing terminator
/// assert!(parse_grammar("Terminals elem").is_err());
/// ```
pub fn parse_grammar(input: &str) -> Result<Grammar> {
    let tokens = build_yecc_lexer()
        .scan(input)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    debug!("scanned {} tokens", tokens.len());

    let grammar = Parser::new(tokens).grammar()?;
    debug!("parsed {} grammar items", grammar.items.len());

    Ok(grammar)
}

/// A cursor over a fully scanned token list.
pub struct Parser {
    tokens: Vec<YeccToken>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<YeccToken>) -> Self {
        Parser {
            tokens,
            position: 0,
        }
    }

    fn peek(&self) -> Option<&YeccToken> {
        self.tokens.get(self.position)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    fn error(&self, expected: &str) -> SyntaxError {
        match self.peek() {
            Some(token) => SyntaxError {
                location: Some(token.location),
                expected: expected.to_string(),
                found: format!("{:?}", token.text),
            },
            None => SyntaxError {
                location: None,
                expected: expected.to_string(),
                found: "end of input".to_string(),
            },
        }
    }

    /// Consume the current token if `accepts` its kind, returning it as a [`Symbol`].
    fn take(&mut self, accepts: fn(TokenKind) -> bool, expected: &str) -> Result<Symbol> {
        let token = match self.peek() {
            Some(token) if accepts(token.kind) => token,
            _ => return Err(self.error(expected).into()),
        };

        let spaced = self.position > 0
            && self.tokens[self.position - 1].location.end.index < token.location.start.index;
        let symbol = Symbol::classify(token, spaced)?;
        self.position += 1;

        Ok(symbol)
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<()> {
        if self.peek_kind() != Some(kind) {
            return Err(self.error(expected).into());
        }
        self.position += 1;
        Ok(())
    }

    pub fn grammar(&mut self) -> Result<Grammar> {
        let mut items = Vec::new();
        while self.peek().is_some() {
            items.push(self.item()?);
        }
        Ok(Grammar { items })
    }

    /// Both alternatives start with a symbol, the arrow following it tells them apart.
    fn item(&mut self) -> Result<GrammarItem> {
        let head = self.symbol()?;
        if self.peek_kind() == Some(TokenKind::Arrow) {
            Ok(GrammarItem::Rule(self.rule(head)?))
        } else {
            Ok(GrammarItem::Declaration(self.declaration(head)?))
        }
    }

    fn declaration(&mut self, head: Symbol) -> Result<Declaration> {
        let body = match self.peek_kind() {
            Some(TokenKind::StringLiteral) => self.strings()?,
            Some(kind) if is_symbol(kind) => self.symbols()?,
            _ => return Err(self.error("a symbol, a string or `->`").into()),
        };
        self.expect(TokenKind::Dot, "`.`")?;

        Ok(Declaration { head, body })
    }

    fn rule(&mut self, head: Symbol) -> Result<Rule> {
        self.expect(TokenKind::Arrow, "`->`")?;
        let symbols = self.symbols()?;
        let code = self.attached_code()?;
        self.expect(TokenKind::Dot, "`.`")?;

        Ok(Rule {
            head,
            symbols,
            code,
        })
    }

    fn symbol(&mut self) -> Result<Symbol> {
        self.take(is_symbol, "a symbol")
    }

    fn symbols(&mut self) -> Result<Vec<Symbol>> {
        let mut symbols = vec![self.symbol()?];
        while self.peek_kind().is_some_and(is_symbol) {
            symbols.push(self.symbol()?);
        }
        Ok(symbols)
    }

    fn strings(&mut self) -> Result<Vec<Symbol>> {
        let is_string = |kind: TokenKind| kind == TokenKind::StringLiteral;
        let mut strings = vec![self.take(is_string, "a string")?];
        while self.peek_kind().is_some_and(is_string) {
            strings.push(self.take(is_string, "a string")?);
        }
        Ok(strings)
    }

    fn attached_code(&mut self) -> Result<Option<Vec<Symbol>>> {
        if self.peek_kind() != Some(TokenKind::Colon) {
            return Ok(None);
        }
        self.position += 1;

        Ok(Some(self.code_tokens()?))
    }

    fn code_tokens(&mut self) -> Result<Vec<Symbol>> {
        let mut tokens = vec![self.take(is_code, "attached code")?];
        while self.peek_kind().is_some_and(is_code) {
            tokens.push(self.take(is_code, "attached code")?);
        }
        Ok(tokens)
    }
}

fn is_symbol(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Var | TokenKind::Atom | TokenKind::Integer)
}

fn is_code(kind: TokenKind) -> bool {
    !matches!(
        kind,
        TokenKind::Dot | TokenKind::Comment | TokenKind::WhiteSpace
    )
}
