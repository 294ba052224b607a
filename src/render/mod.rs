//! Rendering of feed items into styled terminal text.

pub mod tokenizer;

use crate::config::StyleConfig;
use crate::domain::FeedItem;

use self::tokenizer::{Token, Tokenizer};

const CODE_TAG: &str = "code";
const PARAGRAPH_TAG: &str = "p";

/// A contiguous piece of body text and whether it sits inside `<code>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub is_code: bool,
}

impl TextRun {
    pub fn new(text: impl Into<String>, is_code: bool) -> Self {
        Self {
            text: text.into(),
            is_code,
        }
    }
}

/// Collects runs while walking the token stream. Lives for one parse only.
#[derive(Default)]
struct RunBuilder {
    in_code: bool,
    runs: Vec<TextRun>,
}

impl RunBuilder {
    fn start_tag(&mut self, name: &str) {
        if name == CODE_TAG {
            self.in_code = true;
        }
    }

    fn end_tag(&mut self, name: &str) {
        if name == CODE_TAG {
            self.in_code = false;
        } else if name == PARAGRAPH_TAG {
            self.runs.push(TextRun::new("\n", self.in_code));
        }
    }

    fn text(&mut self, data: &str) {
        self.runs.push(TextRun::new(data, self.in_code));
    }
}

/// Split an HTML description into prose and code runs.
///
/// Paragraph ends become newlines; every other element is dropped.
pub fn parse_runs(html: &str) -> Vec<TextRun> {
    let mut builder = RunBuilder::default();

    for token in Tokenizer::new(html) {
        match token {
            Token::StartTag(name) => builder.start_tag(&name),
            Token::EndTag(name) => builder.end_tag(&name),
            Token::SelfClosingTag(_) => {}
            Token::Text(data) => builder.text(&data),
        }
    }

    builder.runs
}

pub struct Renderer<'a> {
    styles: &'a StyleConfig,
}

impl<'a> Renderer<'a> {
    pub fn new(styles: &'a StyleConfig) -> Self {
        Self { styles }
    }

    /// Concatenate runs, styling the code ones.
    pub fn render_body(&self, html: &str) -> String {
        parse_runs(html)
            .into_iter()
            .map(|run| {
                if run.is_code {
                    self.styles.code(&run.text)
                } else {
                    run.text
                }
            })
            .collect()
    }

    /// Title, date, blank line, body, blank line, link.
    pub fn render(&self, item: &FeedItem) -> String {
        let mut out = String::new();
        out.push_str(&self.styles.title(&format!("{}\n", item.title)));
        out.push_str(&self.styles.date(&format!("{}\n\n", item.published)));
        out.push_str(&self.render_body(&item.description));
        out.push_str(&self.styles.link(&format!("\n{}", item.link)));
        out
    }
}
