//! A small, lenient HTML tokenizer.
//!
//! Feed descriptions only use a handful of elements, so instead of building
//! a DOM the input is split into a flat stream of start, self-closing and
//! end tags and text. Markup that is still open when the input ends stops tokenization;
//! everything produced before that point is kept.

use std::borrow::Cow;

use html_escape::decode_html_entities;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Lowercased element name of `<name ...>`.
    StartTag(String),
    /// Lowercased element name of `<name ... />`.
    SelfClosingTag(String),
    /// Lowercased element name of `</name>`.
    EndTag(String),
    /// Entity-decoded character data.
    Text(Cow<'a, str>),
}

pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        let input = self.input;
        &input[self.pos..]
    }

    fn finish(&mut self) -> Option<Token<'a>> {
        self.pos = self.input.len();
        None
    }

    /// Consume text up to the next piece of markup.
    fn read_text(&mut self) -> Token<'a> {
        let rest = self.rest();
        let end = rest
            .char_indices()
            .skip(1)
            .find(|&(i, _)| is_markup_start(&rest[i..]))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        self.pos += end;
        Token::Text(decode_html_entities(&rest[..end]))
    }

    /// Skip `<!-- ... -->`. Returns false when the comment never closes.
    fn skip_comment(&mut self) -> bool {
        match self.rest()[4..].find("-->") {
            Some(i) => {
                self.pos += 4 + i + 3;
                true
            }
            None => false,
        }
    }

    /// Skip `<!...>`, `<?...>` and bogus `</...>` constructs.
    fn skip_declaration(&mut self) -> bool {
        match self.rest().find('>') {
            Some(i) => {
                self.pos += i + 1;
                true
            }
            None => false,
        }
    }

    /// Read a tag starting at `<` and return its name and whether it ends
    /// in `/>`. A quote opens a quoted value only directly after `=`, so
    /// `title=it's` is an unquoted value; quoted values may contain `>`.
    fn read_tag(&mut self, name_offset: usize) -> Option<(String, bool)> {
        let rest = self.rest();
        let name: String = rest[name_offset..]
            .chars()
            .take_while(|c| !c.is_ascii_whitespace() && *c != '/' && *c != '>')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let mut quote: Option<char> = None;
        let mut after_eq = false;
        let mut last = '\0';
        for (i, c) in rest.char_indices().skip(name_offset) {
            if let Some(q) = quote {
                if c == q {
                    quote = None;
                    last = c;
                }
                continue;
            }

            match c {
                '>' => {
                    self.pos += i + 1;
                    return Some((name, last == '/'));
                }
                '"' | '\'' if after_eq => {
                    quote = Some(c);
                    after_eq = false;
                }
                '=' => after_eq = true,
                c if c.is_ascii_whitespace() => continue,
                _ => after_eq = false,
            }
            last = c;
        }
        None
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            let rest = self.rest();
            if rest.is_empty() {
                return None;
            }
            if !is_markup_start(rest) {
                return Some(self.read_text());
            }

            let mut chars = rest[1..].chars();
            match (chars.next(), chars.next()) {
                (Some('!'), _) if rest.starts_with("<!--") => {
                    if !self.skip_comment() {
                        return self.finish();
                    }
                }
                (Some('!'), _) | (Some('?'), _) => {
                    if !self.skip_declaration() {
                        return self.finish();
                    }
                }
                (Some('/'), Some(c)) if c.is_ascii_alphabetic() => {
                    return match self.read_tag(2) {
                        Some((name, _)) => Some(Token::EndTag(name)),
                        None => self.finish(),
                    };
                }
                (Some('/'), _) => {
                    if !self.skip_declaration() {
                        return self.finish();
                    }
                }
                _ => {
                    return match self.read_tag(1) {
                        Some((name, false)) => Some(Token::StartTag(name)),
                        Some((name, true)) => Some(Token::SelfClosingTag(name)),
                        None => self.finish(),
                    };
                }
            }
        }
    }
}

/// True when `s` begins with `<` that opens a tag, comment or declaration.
/// A lone `<` (as in `a < b`) is plain text.
fn is_markup_start(s: &str) -> bool {
    let mut chars = s.chars();
    if chars.next() != Some('<') {
        return false;
    }
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '/' || c == '!' || c == '?')
}
