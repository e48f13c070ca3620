/// A position in a character stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TextPoint {
    /// The vertical position of the point (starting at 1)
    pub line: usize,
    /// The horizontal position of the point, in characters (starting at 1)
    pub column: usize,
    /// The byte index in the character stream (starting at 0)
    pub index: usize,
}

impl TextPoint {
    /// The first character of an input.
    pub fn origin() -> Self {
        TextPoint {
            line: 1,
            column: 1,
            index: 0,
        }
    }

    /// The point right after `text`, assuming `text` starts at `self`.
    pub fn advance(self, text: &str) -> Self {
        let index = self.index + text.len();
        match text.rfind('\n') {
            Some(last_newline) => TextPoint {
                line: self.line + text.matches('\n').count(),
                column: text[last_newline + 1..].chars().count() + 1,
                index,
            },
            None => TextPoint {
                line: self.line,
                column: self.column + text.chars().count(),
                index,
            },
        }
    }
}

impl std::fmt::Display for TextPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A text region defined by a start point and an end point (exclusive).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub start: TextPoint,
    pub end: TextPoint,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.start, self.end)
    }
}
