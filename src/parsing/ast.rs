use super::Symbol;

/// A `Head sym1 sym2 ... .` statement, like `Nonterminals list elem.` or `Left 100 '+'.`
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub head: Symbol,
    /// Never empty.
    pub body: Vec<Symbol>,
}

/// A `Head -> s1 s2 ... : code.` production.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub head: Symbol,
    /// Right-hand side, never empty.
    pub symbols: Vec<Symbol>,
    /// Tokens of the attached code, without the leading `:` and the closing `.`
    pub code: Option<Vec<Symbol>>,
}

impl Rule {
    /// The attached code tokens, empty when the rule has none.
    pub fn code(&self) -> &[Symbol] {
        self.code.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GrammarItem {
    Declaration(Declaration),
    Rule(Rule),
}

/// A parsed grammar file: its declarations and rules in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grammar {
    pub items: Vec<GrammarItem>,
}

impl Grammar {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.items.iter().filter_map(|item| match item {
            GrammarItem::Rule(rule) => Some(rule),
            GrammarItem::Declaration(_) => None,
        })
    }

    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.items.iter().filter_map(|item| match item {
            GrammarItem::Declaration(declaration) => Some(declaration),
            GrammarItem::Rule(_) => None,
        })
    }
}
