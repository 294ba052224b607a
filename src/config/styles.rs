//! Style configuration for rendered output.

use serde::Deserialize;

use crate::style::{stylize, Style};

/// Style sets applied to each part of the output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub title: Vec<Style>,
    pub date: Vec<Style>,
    pub code: Vec<Style>,
    pub link: Vec<Style>,
    /// Index and title of unread posts in listings.
    pub unread: Vec<Style>,
    pub index: Vec<Style>,
    pub status: Vec<Style>,
    pub command: Vec<Style>,
    pub prompt: Vec<Style>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            title: vec![Style::Bold, Style::Red],
            date: vec![Style::Blue],
            code: vec![Style::Green],
            link: vec![Style::Underline, Style::Blue],
            unread: vec![Style::Red],
            index: vec![Style::Bold],
            status: vec![Style::Yellow],
            command: vec![Style::Bold, Style::Green],
            prompt: vec![Style::Bold],
        }
    }
}

impl StyleConfig {
    pub fn title(&self, text: &str) -> String {
        stylize(text, &self.title)
    }

    pub fn date(&self, text: &str) -> String {
        stylize(text, &self.date)
    }

    pub fn code(&self, text: &str) -> String {
        stylize(text, &self.code)
    }

    pub fn link(&self, text: &str) -> String {
        stylize(text, &self.link)
    }

    pub fn status(&self, text: &str) -> String {
        stylize(text, &self.status)
    }

    pub fn command(&self, text: &str) -> String {
        stylize(text, &self.command)
    }

    pub fn prompt(&self, text: &str) -> String {
        stylize(text, &self.prompt)
    }

    /// List index for an unread post: the index style plus the unread style.
    pub fn unread_index(&self, text: &str) -> String {
        let styles: Vec<Style> = self
            .index
            .iter()
            .chain(self.unread.iter())
            .copied()
            .collect();
        stylize(text, &styles)
    }

    pub fn unread_title(&self, text: &str) -> String {
        stylize(text, &self.unread)
    }

    pub fn read_index(&self, text: &str) -> String {
        stylize(text, &self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_index_combines_styles() {
        let styles = StyleConfig::default();
        assert_eq!(
            styles.unread_index("1.  "),
            stylize("1.  ", &[Style::Bold, Style::Red])
        );
    }

    #[test]
    fn test_read_index_is_bold_only() {
        let styles = StyleConfig::default();
        assert_eq!(styles.read_index("2.  "), "\x1b[1m2.  \x1b[0m");
    }
}
