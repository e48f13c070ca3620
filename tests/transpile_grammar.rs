use std::fs;

use yrl2ex::parsing::TextPoint;
use yrl2ex::rendering::{NamingTable, RenderConfig};
use yrl2ex::{transpile, transpile_with, Error};

fn transpile_example(file_name: &str) -> String {
    let path = format!("tests/grammars/{}", file_name);
    let input = fs::read_to_string(path).unwrap();
    transpile(&input).unwrap()
}

#[test]
fn empty_grammar() {
    assert_eq!(transpile("").unwrap(), "");
    assert_eq!(transpile("% comments only\n\n").unwrap(), "");
}

#[test]
fn list_grammar() {
    assert_eq!(
        transpile_example("list.yrl"),
        [
            "nonterminals [:list, :elem]",
            "terminals [:elem]",
            "root :list",
            "",
            "defr list({:elem, elem}), do: elem",
            "defr list({:list, list}, {:elem, elem}), do: [list_to_string(list), elem]",
        ]
        .join("\n")
    );
}

#[test]
fn expression_grammar() {
    assert_eq!(
        transpile_example("expr.yrl"),
        [
            "nonterminals [:expr, :exprs]",
            "terminals [:int, :\"+\", :\"*\", :\"(\", :\")\", :\",\"]",
            "root :exprs",
            "expect 0",
            "left :\"+\", 100",
            "left :\"*\", 200",
            "",
            "defr exprs({:expr, expr}), do: [expr]",
            "defr exprs({:expr, expr}, :\",\", {:exprs, exprs}), do: [expr | exprs]",
            "",
            "defr expr({:expr, expr}, :\"+\", {:expr, expr}), do: {plus, expr, expr}",
            "defr expr({:expr, expr}, :\"*\", {:expr, expr}), do: {times, expr, expr}",
            "defr expr(:\"(\", {:expr, expr}, :\")\"), do: expr",
            "defr expr({:int, int}) do",
            "Line = line(int)",
            "{int, Line, element(3, int)}",
            "end",
        ]
        .join("\n")
    );
}

#[test]
fn literals_keep_their_name_across_rules() {
    let output = transpile("a -> '+' : '$1'.\nb -> 'if' '+' : {'$2', '$1'}.\nc -> 'if' : '$1'.")
        .unwrap();
    assert_eq!(
        output,
        [
            "defr a({:\"+\", variable_1}), do: variable_1",
            "",
            "defr b({:\"if\", variable_2}, {:\"+\", variable_1}), do: {variable_1, variable_2}",
            "",
            "defr c({:\"if\", variable_2}), do: variable_2",
        ]
        .join("\n")
    );
}

#[test]
fn well_known_literals_use_fixed_names() {
    let output = transpile("kw -> 'do' 'end' '%{}' : {'$1', '$2', '$3'}.").unwrap();
    assert_eq!(
        output,
        "defr kw({:\"do\", ex_do}, {:\"end\", ex_end}, {:\"%{}\", pn_map}), do: {ex_do, ex_end, pn_map}"
    );
}

#[test]
fn runs_are_isolated() {
    let first = transpile("a -> 'x' : '$1'.").unwrap();
    let second = transpile("a -> 'y' : '$1'.").unwrap();
    assert!(first.contains("variable_1"));
    assert!(second.contains("variable_1"));
}

#[test]
fn shared_naming_table() {
    let config = RenderConfig::default();
    let mut names = NamingTable::new();
    transpile_with("a -> 'x' : '$1'.", &config, &mut names).unwrap();
    let second = transpile_with("a -> 'y' 'x' : {'$1', '$2'}.", &config, &mut names).unwrap();
    assert_eq!(
        second,
        "defr a({:\"y\", variable_2}, {:\"x\", variable_1}), do: {variable_2, variable_1}"
    );
}

#[test]
fn unknown_head_does_not_halt() {
    assert_eq!(
        transpile("Foo a b.\nTerminals a.\ns -> a.").unwrap(),
        "# unknown head: Foo\nterminals [:a]\n\ndefr s(:a), do: "
    );
}

#[test]
fn bracket_depth() {
    assert_eq!(
        transpile("s -> x : f(a, b), g(c).").unwrap(),
        "defr s(:x) do\nf(a, b)\ng(c)\nend"
    );
}

#[test]
fn scan_errors_are_fatal() {
    match transpile("Terminals a.\ns -> a : ~.") {
        Err(Error::Scan(error)) => assert_eq!(
            error.location,
            TextPoint {
                line: 2,
                column: 10,
                index: 22
            }
        ),
        other => panic!("expected a scan error, got {:?}", other),
    }
}

#[test]
fn syntax_errors_are_fatal() {
    let error = transpile("Terminals a.\ns -> a : b").unwrap_err();
    assert!(matches!(error, Error::Syntax(_)));
    assert_eq!(
        error.to_string(),
        "syntax error at end of input: expected `.`, found end of input"
    );

    let error = transpile("Terminals a.\ns -> : b.").unwrap_err();
    assert_eq!(
        error.to_string(),
        "syntax error at 2:6: expected a symbol, found \":\""
    );
}
