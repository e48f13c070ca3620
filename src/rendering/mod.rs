//! Rendering of a parsed [`Grammar`] as `defr` rule definitions.
mod declaration;
mod naming;
mod rule;

use log::debug;

use crate::parsing::{Grammar, GrammarItem};

pub use declaration::{render_declaration, DeclarationHead};
pub use naming::{literal, NamingTable};
pub use rule::render_rule;

/// Settings of the output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Longest single-line rule definition, in characters. Longer rules use a `do` block.
    pub max_line_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig { max_line_width: 96 }
    }
}

/// Renders grammars with one [`NamingTable`], so that literals keep their names across every
/// grammar rendered by the same renderer.
pub struct Renderer<'a> {
    config: &'a RenderConfig,
    names: &'a mut NamingTable,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a RenderConfig, names: &'a mut NamingTable) -> Self {
        Renderer { config, names }
    }

    /// Render every item in order. Rules with the same head as the previous rule follow it
    /// directly, a new head starts after an empty line.
    ///
    /// # Example
    ///
    /// ```
    /// use yrl2ex::parsing::parse_grammar;
    /// use yrl2ex::rendering::{NamingTable, RenderConfig, Renderer};
    ///
    /// let grammar = parse_grammar("a -> b.\na -> c.\nd -> e.").unwrap();
    /// let config = RenderConfig::default();
    /// let mut names = NamingTable::new();
    ///
    /// assert_eq!(
    ///     Renderer::new(&config, &mut names).render(&grammar),
    ///     "defr a(:b), do: \ndefr a(:c), do: \n\ndefr d(:e), do: "
    /// );
    /// ```
    pub fn render(&mut self, grammar: &Grammar) -> String {
        let mut output: Vec<String> = Vec::new();
        let mut last_head: Option<&str> = None;

        for item in &grammar.items {
            match item {
                GrammarItem::Declaration(declaration) => {
                    output.push(render_declaration(declaration, self.names));
                }
                GrammarItem::Rule(rule) => {
                    let head = rule.head.data.as_str();
                    if last_head != Some(head) && !output.is_empty() {
                        output.push(String::new());
                    }
                    output.push(render_rule(rule, self.config, self.names));
                    last_head = Some(head);
                }
            }
        }

        debug!(
            "rendered {} items, {} generated names so far",
            grammar.items.len(),
            self.names.generated()
        );

        output.join("\n")
    }
}
