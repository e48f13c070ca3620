use std::collections::HashMap;

use log::debug;

/// Names given to literals that are keywords or punctuation in the target syntax.
const WELL_KNOWN_NAMES: &[(&str, &str)] = &[
    (r#""true""#, "ex_true"),
    (r#""false""#, "ex_false"),
    (r#""nil""#, "ex_nil"),
    (r#""end""#, "ex_end"),
    (r#""fn""#, "ex_fn"),
    (r#""do""#, "ex_do"),
    (r#"",""#, "pn_comma"),
    (r#"";""#, "pn_semicolon"),
    (r#""(""#, "pn_left_paren"),
    (r#"")""#, "pn_right_paren"),
    (r#""[""#, "pn_left_bracket"),
    (r#""]""#, "pn_right_bracket"),
    (r#""<<""#, "pn_left_shift"),
    (r#"">>""#, "pn_right_shift"),
    (r#""{""#, "pn_left_brace"),
    (r#""}""#, "pn_right_brace"),
    (r#"".""#, "pn_dot"),
    (r#""%{}""#, "pn_map"),
    (r#""%""#, "pn_struct"),
];

/// Literal form of a grammar symbol: `elem` is `:elem`, `'+'` is `:"+"`.
pub fn literal(text: &str) -> String {
    format!(":{}", text.replace('\'', "\""))
}

/// Identifiers given to quoted literals, like `variable_3` for `"+"`.
///
/// The same table must be used for a whole run so that a literal keeps its name everywhere in the
/// output. Generated names are numbered from 1 in the order literals are first seen.
#[derive(Debug, Clone)]
pub struct NamingTable {
    names: HashMap<String, String>,
    generated: usize,
}

impl Default for NamingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingTable {
    /// A table holding only the well-known names.
    pub fn new() -> Self {
        NamingTable {
            names: WELL_KNOWN_NAMES
                .iter()
                .map(|&(quoted, name)| (quoted.to_string(), name.to_string()))
                .collect(),
            generated: 0,
        }
    }

    /// Identifier usable as a binding for the symbol spelled `text`.
    ///
    /// ```
    /// use yrl2ex::rendering::NamingTable;
    ///
    /// let mut names = NamingTable::new();
    /// assert_eq!(names.name("elem"), "elem");
    /// assert_eq!(names.name("'do'"), "ex_do");
    /// assert_eq!(names.name("'+'"), "variable_1");
    /// assert_eq!(names.name("'-'"), "variable_2");
    /// assert_eq!(names.name("'+'"), "variable_1");
    /// ```
    pub fn name(&mut self, text: &str) -> String {
        let literal = literal(text);
        let bare = &literal[1..];
        if !bare.starts_with('"') {
            return bare.to_string();
        }

        if let Some(name) = self.names.get(bare) {
            return name.clone();
        }

        self.generated += 1;
        let name = format!("variable_{}", self.generated);
        debug!("naming {} as {}", bare, name);
        self.names.insert(bare.to_string(), name.clone());

        name
    }

    /// Number of names generated so far.
    pub fn generated(&self) -> usize {
        self.generated
    }
}
