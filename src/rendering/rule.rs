use log::{trace, warn};

use super::naming::{literal, NamingTable};
use super::RenderConfig;
use crate::parsing::{Rule, Symbol, SymbolKind};

/// Render a rule as a `defr` definition, on one line when it fits and has a single statement.
pub fn render_rule(rule: &Rule, config: &RenderConfig, names: &mut NamingTable) -> String {
    let head = format!("{}({})", rule.head.data, parameters(rule, names));
    let body = body(rule, names);

    let single_line = format!("defr {}, do: {}", head, body);
    if single_line.chars().count() > config.max_line_width || body.contains('\n') {
        trace!("{}: using a do block", rule.head.location.start);
        return format!("defr {} do\n{}\nend", head, body);
    }

    single_line
}

fn is_parameter_used(position: usize, code: &[Symbol]) -> bool {
    code.iter()
        .any(|symbol| symbol.placeholder_index() == Some(position))
}

/// Each right-hand side symbol as its literal, paired with a binding when the code uses it.
fn parameters(rule: &Rule, names: &mut NamingTable) -> String {
    rule.symbols
        .iter()
        .enumerate()
        .map(|(index, symbol)| {
            if is_parameter_used(index + 1, rule.code()) {
                format!("{{{}, {}}}", literal(&symbol.data), names.name(&symbol.data))
            } else {
                literal(&symbol.data)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_plain_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest = text.trim_end_matches(['?', '!']);

    (first.is_ascii_lowercase() || first == '_')
        && rest.len() + 1 >= text.len()
        && rest
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `'foo'` becomes `:foo`, `'foo bar'` becomes `:"foo bar"`.
fn quoted_atom(text: &str) -> String {
    let inner = &text[1..text.len() - 1];
    if is_plain_identifier(inner) {
        format!(":{}", inner)
    } else {
        format!(":\"{}\"", inner)
    }
}

/// Output of the body rewriting, keeping track of statement boundaries.
struct Body {
    text: String,
    line_start: bool,
    pending_space: bool,
}

impl Body {
    fn push(&mut self, spaced: bool, text: &str) {
        if !self.line_start && (spaced || self.pending_space) {
            self.text.push(' ');
        }
        self.text.push_str(text);
        self.line_start = false;
        self.pending_space = false;
    }

    fn end_statement(&mut self) {
        self.text.push('\n');
        self.line_start = true;
        self.pending_space = false;
    }

    fn skip(&mut self, spaced: bool) {
        self.pending_space |= spaced;
    }
}

/// Rewrite the attached code: placeholders become bindings and top-level commas end statements.
fn body(rule: &Rule, names: &mut NamingTable) -> String {
    let mut body = Body {
        text: String::new(),
        line_start: true,
        pending_space: false,
    };
    let mut depth: i32 = 0;

    for symbol in rule.code() {
        if let Some(position) = symbol.placeholder_index() {
            match rule.symbols.get(position - 1) {
                Some(referenced) => {
                    body.push(symbol.spaced, &names.name(&referenced.data));
                    continue;
                }
                None => warn!(
                    "{}: {} refers past the {} symbols of {}",
                    symbol.location.start,
                    symbol.data,
                    rule.symbols.len(),
                    rule.head.data
                ),
            }
        }

        if symbol.kind == SymbolKind::ReservedSymbol {
            match symbol.data.as_str() {
                "{" | "(" | "[" => depth += 1,
                "}" | ")" | "]" => depth -= 1,
                _ => {}
            }
        }

        if symbol.is(SymbolKind::ReservedSymbol, ",") && depth == 0 {
            body.end_statement();
        } else if symbol.is(SymbolKind::ReservedSymbol, "?") {
            body.skip(symbol.spaced);
        } else if symbol.is(SymbolKind::ReservedSymbol, "$") {
            body.push(symbol.spaced, "?");
        } else if symbol.is(SymbolKind::Atom, "do") {
            body.push(symbol.spaced, ":do");
        } else if symbol.is_quoted_atom() {
            body.push(symbol.spaced, &quoted_atom(&symbol.data));
        } else {
            body.push(symbol.spaced, &symbol.data);
        }
    }

    body.text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{parse_grammar, GrammarItem};

    fn parse_rule(input: &str) -> Rule {
        let grammar = parse_grammar(input).unwrap();
        match grammar.items.into_iter().next() {
            Some(GrammarItem::Rule(rule)) => rule,
            other => panic!("expected a rule, got {:?}", other),
        }
    }

    fn render(input: &str) -> String {
        render_rule(
            &parse_rule(input),
            &RenderConfig::default(),
            &mut NamingTable::new(),
        )
    }

    #[test]
    fn unused_parameters_stay_anonymous() {
        assert_eq!(
            render("list -> '(' ')' : []."),
            "defr list(:\"(\", :\")\"), do: []"
        );
    }

    #[test]
    fn used_parameters_are_bound() {
        assert_eq!(
            render("sum -> a b : '$1' + '$2'."),
            "defr sum({:a, a}, {:b, b}), do: a + b"
        );
    }

    #[test]
    fn quoted_symbols_are_bound_through_the_naming_table() {
        let mut names = NamingTable::new();
        let rule = parse_rule("op -> '+' '<<' : {'$1', '$2'}.");
        assert_eq!(
            render_rule(&rule, &RenderConfig::default(), &mut names),
            "defr op({:\"+\", variable_1}, {:\"<<\", pn_left_shift}), do: {variable_1, pn_left_shift}"
        );
        let rule = parse_rule("op -> '-' '+' : '$2'.");
        assert_eq!(
            render_rule(&rule, &RenderConfig::default(), &mut names),
            "defr op(:\"-\", {:\"+\", variable_1}), do: variable_1"
        );
    }

    #[test]
    fn rule_without_code() {
        assert_eq!(render("list -> '$empty'."), "defr list(:\"$empty\"), do: ");
    }

    #[test]
    fn top_level_commas_split_statements() {
        assert_eq!(
            render("s -> x : f(a, b), g(c)."),
            "defr s(:x) do\nf(a, b)\ng(c)\nend"
        );
    }

    #[test]
    fn nested_commas_are_kept() {
        assert_eq!(
            render("s -> x y : [list_to_string('$1'), '$2']."),
            "defr s({:x, x}, {:y, y}), do: [list_to_string(x), y]"
        );
        assert_eq!(
            render("s -> x : #{a => {b, c}}."),
            "defr s(:x), do: #{a => {b, c}}"
        );
    }

    #[test]
    fn escapes() {
        assert_eq!(render("m -> x : ?MODULE."), "defr m(:x), do: MODULE");
        assert_eq!(render("m -> x : f(?LINE)."), "defr m(:x), do: f(LINE)");
        assert_eq!(render("c -> x : $a."), "defr c(:x), do: ?a");
        assert_eq!(render("k -> x : {do, '$1'}."), "defr k({:x, x}), do: {:do, x}");
    }

    #[test]
    fn quoted_atoms_in_code() {
        assert_eq!(
            render("a -> x : {'foo', 'Foo', 'foo bar', 'ok?'}."),
            "defr a(:x), do: {:foo, :\"Foo\", :\"foo bar\", :ok?}"
        );
    }

    #[test]
    fn strings_pass_through() {
        assert_eq!(render("a -> x : \"text\"."), "defr a(:x), do: \"text\"");
    }

    #[test]
    fn placeholder_past_the_symbols() {
        assert_eq!(render("a -> x : '$2'."), "defr a(:x), do: :\"$2\"");
    }

    #[test]
    fn line_width_boundary() {
        // `defr r(:x), do: ` is 16 characters long
        let fits = format!("r -> x : {}.", "a".repeat(80));
        let rendered = render(&fits);
        assert_eq!(rendered.chars().count(), 96);
        assert!(!rendered.contains('\n'));

        let too_long = format!("r -> x : {}.", "a".repeat(81));
        assert_eq!(
            render(&too_long),
            format!("defr r(:x) do\n{}\nend", "a".repeat(81))
        );
    }

    #[test]
    fn configurable_line_width() {
        let config = RenderConfig { max_line_width: 20 };
        let rule = parse_rule("r -> x : abcdef.");
        assert_eq!(
            render_rule(&rule, &config, &mut NamingTable::new()),
            "defr r(:x) do\nabcdef\nend"
        );
    }
}
