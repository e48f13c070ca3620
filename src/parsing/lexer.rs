//! A regex-based lexer strongly inspired by [krsnik02](https://crates.io/users/krsnik02)'s
//! [regex-lexer](https://crates.io/crates/regex-lexer) crate. It essentially works the same way,
//! with the addition of a [`Location`](Location) attached to each token and a [`ScanError`]
//! instead of a panic when the input contains something no rule recognizes.

use super::{Location, TextPoint};
use regex::{Regex, RegexSet};
use thiserror::Error;

pub trait Token {
    fn is_ignored(&self) -> bool;
}

/// The input contains a character sequence that no lexing rule matches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized input at {location}: {found:?}")]
pub struct ScanError {
    pub location: TextPoint,
    /// The beginning of the unmatched input, up to the end of its line.
    pub found: String,
}

impl ScanError {
    fn at(location: TextPoint, remaining_input: &str) -> Self {
        let found = remaining_input
            .lines()
            .next()
            .unwrap_or_default()
            .chars()
            .take(16)
            .collect();
        ScanError { location, found }
    }
}

/// Functions usually associated to a regex that build a [`Token`](Token) corresponding to that
/// regex. The functions are given the string it matched and its [location](Location) in the input.
pub type TokenBuilder<TokenType> = fn(Location, &str) -> TokenType;

/// An association similar to flex's production rule. The first element of the tuple is a regex
/// description, the second one is a [`TokenBuilder`](TokenBuilder) function that builds a token of
/// type `TokenType` given the matched string and its location in the input.
pub type LexerRule<TokenType> = (&'static str, TokenBuilder<TokenType>);

/// A Lexer capable of scanning [`Token`](Token)s described by a set of [`LexerRule`](LexerRule)s.
///
/// The longest match wins. When several rules match the same length, the one appearing last in
/// the rule list is used.
///
/// # Example
///
/// ```
/// use yrl2ex::parsing::{Lexer, LexerRule, Token};
///
/// #[derive(Debug, PartialEq)]
/// enum ExampleToken {
///     WhiteSpace,
///     Arrow,
///     Name(String),
/// }
///
/// impl Token for ExampleToken {
///     fn is_ignored(&self) -> bool {
///         *self == ExampleToken::WhiteSpace
///     }
/// }
///
/// let lexing_rules: Vec<LexerRule<ExampleToken>> = vec![
///     (r"^[[:alpha:]]+", |_loc, matched_text| ExampleToken::Name(matched_text.to_string())),
///     (r"^->", |_loc, _matched_text| ExampleToken::Arrow),
///     (r"^\s+", |_loc, _matched_text| ExampleToken::WhiteSpace),
/// ];
///
/// let lexer = Lexer::new(lexing_rules);
/// let tokens: Vec<ExampleToken> = lexer.scan("list -> elem").collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(
///     tokens,
///     vec![
///         ExampleToken::Name("list".to_owned()),
///         ExampleToken::Arrow,
///         ExampleToken::Name("elem".to_owned()),
///     ]
/// );
///
/// // nothing matches `!`
/// assert!(lexer.scan("list ! elem").any(|token| token.is_err()));
/// ```
pub struct Lexer<TokenType: Token> {
    regex_set: RegexSet,
    regex_list: Vec<Regex>,
    production_rules: Vec<LexerRule<TokenType>>,
}

impl<TokenType: Token> Lexer<TokenType> {
    pub fn new(production_rules: Vec<LexerRule<TokenType>>) -> Self {
        let regex_set = RegexSet::new(production_rules.iter().map(|(regex, _)| *regex))
            .expect("Internal error initializing the lexer");

        let regex_list = production_rules
            .iter()
            .map(|(regex, _)| Regex::new(regex).expect("Internal error initializing the lexer"))
            .collect();

        Self {
            regex_set,
            regex_list,
            production_rules,
        }
    }

    /// Return an [`Iterator`](TokenIterator) over the scanned tokens of `input`.
    ///
    /// The iterator yields at most one error, after which it is exhausted.
    pub fn scan<'a, 'b>(&'a self, input: &'b str) -> TokenIterator<'a, 'b, TokenType> {
        TokenIterator {
            lexer: self,
            input,
            current_pos: TextPoint::origin(),
            failed: false,
        }
    }

    /// Find the rule producing the longest match at the start of `input`, with its match length.
    fn best_match(&self, input: &str) -> Option<(usize, usize)> {
        self.regex_set
            .matches(input)
            .into_iter()
            .filter_map(|rule_index| {
                // RegexSet only tells which regex matched, run it again to know how much it matched
                let region = self.regex_list.get(rule_index)?.find(input)?;
                Some((rule_index, region.end() - region.start()))
            })
            .filter(|&(_idx, match_length)| match_length > 0)
            // max_by_key keeps the last of equally long matches
            .max_by_key(|&(_idx, match_length)| match_length)
    }
}

/// An iterator that yields [`Token`](Token)s, or the [`ScanError`] that stopped the scan.
pub struct TokenIterator<'a, 'b, TokenType: Token> {
    lexer: &'a Lexer<TokenType>,
    input: &'b str,
    current_pos: TextPoint,
    failed: bool,
}

impl<'a, 'b, TokenType: Token> Iterator for TokenIterator<'a, 'b, TokenType> {
    type Item = Result<TokenType, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.failed {
                return None;
            }

            let next_input = &self.input[self.current_pos.index..];
            if next_input.is_empty() {
                return None;
            }

            let Some((rule_index, matched_length)) = self.lexer.best_match(next_input) else {
                self.failed = true;
                return Some(Err(ScanError::at(self.current_pos, next_input)));
            };

            let matched_text = &next_input[..matched_length];
            let loc = Location {
                start: self.current_pos,
                end: self.current_pos.advance(matched_text),
            };
            let (_, token_builder) = self.lexer.production_rules[rule_index];
            let token = token_builder(loc, matched_text);

            self.current_pos = loc.end;

            if !token.is_ignored() {
                return Some(Ok(token));
            }
        }
    }
}
