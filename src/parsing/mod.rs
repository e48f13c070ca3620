mod ast;
mod lexer;
mod location;
mod parser;
mod symbol;
mod yecc_lexer;

pub use ast::{Declaration, Grammar, GrammarItem, Rule};
pub use lexer::{Lexer, LexerRule, ScanError, Token, TokenBuilder, TokenIterator};
pub use location::{Location, TextPoint};
pub use parser::{parse_grammar, Parser, SyntaxError};
pub use symbol::{ClassificationError, Symbol, SymbolKind};
pub use yecc_lexer::{build_yecc_lexer, TokenKind, YeccToken, RESERVED_SYMBOLS};
