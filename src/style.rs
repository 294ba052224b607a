//! ANSI styling for terminal output.

use std::fmt;

use serde::Deserialize;

const PREFIX: &str = "\x1b[";
const RESET: &str = "\x1b[0m";

/// A single terminal text attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Bold,
    Red,
    Green,
    Blue,
    Yellow,
    Underline,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Bold => "1",
            Style::Red => "91",
            Style::Green => "92",
            Style::Blue => "94",
            Style::Yellow => "93",
            Style::Underline => "4",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}m", PREFIX, self.code())
    }
}

/// Wrap `text` in the escape sequences for `styles`, terminated by a reset.
///
/// Each style is prepended in turn, so the last style in the slice ends up
/// outermost.
pub fn stylize(text: &str, styles: &[Style]) -> String {
    let mut out = String::with_capacity(text.len() + styles.len() * 5 + RESET.len());
    for style in styles.iter().rev() {
        out.push_str(&style.to_string());
    }
    out.push_str(text);
    out.push_str(RESET);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylize_single() {
        assert_eq!(stylize("hi", &[Style::Green]), "\x1b[92mhi\x1b[0m");
    }

    #[test]
    fn test_stylize_prepends_in_order() {
        assert_eq!(
            stylize("hi", &[Style::Bold, Style::Red]),
            "\x1b[91m\x1b[1mhi\x1b[0m"
        );
    }

    #[test]
    fn test_stylize_no_styles_still_resets() {
        assert_eq!(stylize("plain", &[]), "plain\x1b[0m");
    }

    #[test]
    fn test_style_from_name() {
        let styles: Vec<Style> = toml::from_str::<Wrapper>("s = [\"underline\", \"blue\"]")
            .unwrap()
            .s;
        assert_eq!(styles, vec![Style::Underline, Style::Blue]);
    }

    #[derive(Deserialize)]
    struct Wrapper {
        s: Vec<Style>,
    }
}
