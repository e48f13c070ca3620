use std::str::FromStr;

use log::warn;
use strum::{AsRefStr, EnumString};

use super::naming::{literal, NamingTable};
use crate::parsing::{Declaration, Symbol, SymbolKind};

/// Declaration heads understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
pub enum DeclarationHead {
    Nonterminals,
    Terminals,
    Rootsymbol,
    Expect,
    Left,
    Right,
    Nonassoc,
}

fn literal_list(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(|symbol| literal(&symbol.data))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render one declaration. Heads outside of [`DeclarationHead`] produce a marker comment.
pub fn render_declaration(declaration: &Declaration, names: &mut NamingTable) -> String {
    if declaration.head.kind != SymbolKind::Var {
        warn!(
            "{}: declaration head {} is not a variable",
            declaration.head.location.start, declaration.head.data
        );
        return "# unknown declaration head".to_string();
    }

    let Ok(head) = DeclarationHead::from_str(&declaration.head.data) else {
        warn!(
            "{}: unknown declaration head {}",
            declaration.head.location.start, declaration.head.data
        );
        return format!("# unknown head: {}", declaration.head.data);
    };

    let body = &declaration.body;
    match (head, body.as_slice()) {
        (DeclarationHead::Nonterminals, _) => format!("nonterminals [{}]", literal_list(body)),
        (DeclarationHead::Terminals, _) => format!("terminals [{}]", literal_list(body)),
        (DeclarationHead::Rootsymbol, _) => format!("root {}", literal_list(body)),
        (DeclarationHead::Expect, [conflicts, ..]) => {
            format!("expect {}", names.name(&conflicts.data))
        }
        // the precedence level comes after the operator
        (
            DeclarationHead::Left | DeclarationHead::Right | DeclarationHead::Nonassoc,
            [level, operator, ..],
        ) => {
            format!(
                "{} {}, {}",
                head.as_ref().to_lowercase(),
                literal(&operator.data),
                names.name(&level.data)
            )
        }
        _ => {
            warn!(
                "{}: {} declaration has too few symbols",
                declaration.head.location.start,
                head.as_ref()
            );
            format!("# malformed declaration: {}", head.as_ref())
        }
    }
}
