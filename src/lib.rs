//! Translate yecc grammar files (`.yrl`) into `defr` rule definitions.
//!
//! The translation is done in three steps: the grammar text is scanned into tokens, parsed into a
//! [`Grammar`](parsing::Grammar) and rendered back as text. Scanning and parsing errors abort the
//! translation, nothing is rendered for an input that can't be fully parsed.
//!
//! ```
//! let output = yrl2ex::transpile(
//!     "Nonterminals list.\nTerminals elem.\nRootsymbol list.\nlist -> elem : '$1'.",
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     output,
//!     "nonterminals [:list]\nterminals [:elem]\nroot :list\n\ndefr list({:elem, elem}), do: elem"
//! );
//! ```

pub mod error;
pub mod parsing;
pub mod rendering;

pub use error::{Error, Result};

use rendering::{NamingTable, RenderConfig, Renderer};

/// Translate a whole grammar file with the default layout and a fresh [`NamingTable`].
pub fn transpile(input: &str) -> Result<String> {
    transpile_with(input, &RenderConfig::default(), &mut NamingTable::new())
}

/// Translate a whole grammar file, naming quoted literals through `names`.
pub fn transpile_with(
    input: &str,
    config: &RenderConfig,
    names: &mut NamingTable,
) -> Result<String> {
    let grammar = parsing::parse_grammar(input)?;
    Ok(Renderer::new(config, names).render(&grammar))
}
