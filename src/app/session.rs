//! One invocation's view of the news feed.
//!
//! A [`Session`] owns the fetched items, the read cache and an unread
//! counter. The counter is computed once when the session is built and only
//! decremented afterwards; it is not re-derived from the cache.
//!
//! Cache write failures are handled per operation:
//!
//! | operation      | on failed append                                  |
//! |----------------|---------------------------------------------------|
//! | `read_item`    | logged, post still returned, stays unread         |
//! | `browse`       | same as `read_item`                               |
//! | `clear_all`    | error returned, caller terminates                 |

use crate::app::{NewsieError, Result};
use crate::config::StyleConfig;
use crate::console::{confirm, Console};
use crate::domain::FeedItem;
use crate::render::Renderer;
use crate::store::{ReadCache, Store};

pub const NO_NEWS: &str = "No news is good news.\n";
pub const NO_UNREAD_BROWSE: &str =
    "You don't have any unread news. Use the -a option to browse all posts.\n";

const BROWSE_COMMAND: &str = "newsie browse";
const READ_NOW_PROMPT: &str = "Read them now? [Y/n] ";
const CONTINUE_PROMPT: &str = "\nContinue? [Y/n] ";

pub struct Session<S: Store = ReadCache> {
    items: Vec<FeedItem>,
    store: S,
    unread: usize,
    styles: StyleConfig,
}

impl<S: Store> Session<S> {
    pub fn new(items: Vec<FeedItem>, store: S, styles: StyleConfig) -> Self {
        let unread = items.iter().filter(|i| !store.is_read(&i.title)).count();
        tracing::info!("{} posts in feed, {} unread", items.len(), unread);

        Self {
            items,
            store,
            unread,
            styles,
        }
    }

    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.unread
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_read(&self, title: &str) -> bool {
        self.store.is_read(title)
    }

    /// Numbered titles in feed order. Without `include_read` only unread
    /// posts are listed.
    pub fn list(&self, include_read: bool) -> Vec<String> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| {
                let unread = !self.store.is_read(&item.title);
                if !include_read && !unread {
                    return None;
                }

                let index = format!("{:<4}", format!("{}.", i + 1));
                let entry = if unread {
                    self.styles.unread_index(&index) + &self.styles.unread_title(&item.title)
                } else {
                    self.styles.read_index(&index) + &item.title
                };
                Some(entry)
            })
            .collect()
    }

    /// Render post `number` (1-based) and mark it read.
    pub fn read_item(&mut self, number: usize) -> Result<String> {
        let count = self.items.len();
        if number < 1 || number > count {
            return Err(NewsieError::InvalidPostNumber { number, count });
        }

        let item = &self.items[number - 1];
        let rendered = Renderer::new(&self.styles).render(item);

        if !self.store.is_read(&item.title) {
            match self.store.mark_read(&item.title) {
                Ok(()) => self.unread = self.unread.saturating_sub(1),
                Err(e) => tracing::warn!("Could not mark {:?} as read: {}", item.title, e),
            }
        }

        Ok(rendered)
    }

    /// Page through posts one screen at a time until the user declines or
    /// the feed runs out.
    pub fn browse<C: Console + ?Sized>(&mut self, include_all: bool, console: &mut C) -> Result<()> {
        if !include_all && self.unread == 0 {
            console.write_str(NO_UNREAD_BROWSE)?;
            return Ok(());
        }

        for idx in 0..self.items.len() {
            if !include_all && self.store.is_read(&self.items[idx].title) {
                continue;
            }

            console.clear()?;
            let post = self.read_item(idx + 1)?;
            console.write_str(&format!("{}\n", post))?;

            let prompt = self.styles.prompt(CONTINUE_PROMPT);
            if !confirm(console, &prompt)? {
                break;
            }
        }

        Ok(())
    }

    /// Unread count and a status message for it.
    ///
    /// With `prompt_user` the status is shown right away and the user may
    /// browse immediately, in which case the returned message is empty.
    pub fn fetch_status<C: Console + ?Sized>(
        &mut self,
        prompt_user: bool,
        console: &mut C,
    ) -> Result<(usize, String)> {
        if self.unread == 0 {
            return Ok((0, NO_NEWS.to_string()));
        }

        let mut msg = self
            .styles
            .status(&format!("* You have {} unread item(s).\n", self.unread));

        if prompt_user {
            console.write_str(&msg)?;
            if confirm(console, READ_NOW_PROMPT)? {
                self.browse(false, console)?;
                return Ok((self.unread, String::new()));
            }
        }

        msg.push_str(&format!(
            "Use {} to view them.\n",
            self.styles.command(BROWSE_COMMAND)
        ));
        Ok((self.unread, msg))
    }

    /// Mark every unread post read. Stops at the first failed write.
    pub fn clear_all(&mut self) -> Result<usize> {
        let mut cleared = 0;

        for item in &self.items {
            if !self.store.is_read(&item.title) {
                self.store.mark_read(&item.title)?;
                self.unread = self.unread.saturating_sub(1);
                cleared += 1;
            }
        }

        Ok(cleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::hash_title;
    use crate::style::{stylize, Style};
    use std::collections::{HashSet, VecDeque};
    use std::io;

    #[derive(Default)]
    struct MemoryStore {
        read: HashSet<String>,
        fail_writes: bool,
        appends: usize,
    }

    impl Store for MemoryStore {
        fn is_read(&self, title: &str) -> bool {
            self.read.contains(&hash_title(title))
        }

        fn mark_read(&mut self, title: &str) -> Result<()> {
            if self.fail_writes {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into());
            }
            self.appends += 1;
            self.read.insert(hash_title(title));
            Ok(())
        }
    }

    #[derive(Default)]
    struct Scripted {
        answers: VecDeque<&'static str>,
        output: String,
        clears: usize,
    }

    impl Scripted {
        fn answering(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl Console for Scripted {
        fn clear(&mut self) -> io::Result<()> {
            self.clears += 1;
            Ok(())
        }

        fn write_str(&mut self, s: &str) -> io::Result<()> {
            self.output.push_str(s);
            Ok(())
        }

        fn read_line(&mut self) -> io::Result<Option<String>> {
            Ok(self.answers.pop_front().map(String::from))
        }
    }

    fn items() -> Vec<FeedItem> {
        vec![
            FeedItem::new("First", "<p>one</p>"),
            FeedItem::new("Second", "<p>two</p>"),
            FeedItem::new("Third", "<p>three <code>3</code></p>"),
        ]
    }

    /// Three items with the second already read.
    fn session() -> Session<MemoryStore> {
        let mut store = MemoryStore::default();
        store.read.insert(hash_title("Second"));
        Session::new(items(), store, StyleConfig::default())
    }

    #[test]
    fn test_initial_unread_count() {
        assert_eq!(session().unread_count(), 2);
    }

    #[test]
    fn test_list_unread_only() {
        let s = session();
        let listed = s.list(false);

        assert_eq!(listed.len(), 2);
        assert!(listed[0].contains("1.  "));
        assert!(listed[0].contains("First"));
        assert!(listed[1].contains("3.  "));
        assert!(listed[1].contains("Third"));
    }

    #[test]
    fn test_list_all_styles_read_items_plainly() {
        let s = session();
        let listed = s.list(true);

        assert_eq!(listed.len(), 3);
        assert_eq!(
            listed[0],
            stylize("1.  ", &[Style::Bold, Style::Red]) + &stylize("First", &[Style::Red])
        );
        assert_eq!(listed[1], stylize("2.  ", &[Style::Bold]) + "Second");
    }

    #[test]
    fn test_list_pads_wide_indices() {
        let many: Vec<FeedItem> = (1..=12)
            .map(|i| FeedItem::new(format!("Post {i}"), ""))
            .collect();
        let s = Session::new(many, MemoryStore::default(), StyleConfig::default());
        let listed = s.list(false);

        assert!(listed[11].starts_with(&stylize("12. ", &[Style::Bold, Style::Red])));
    }

    #[test]
    fn test_read_item_bounds() {
        let mut s = session();
        assert!(matches!(
            s.read_item(0),
            Err(NewsieError::InvalidPostNumber { number: 0, count: 3 })
        ));
        assert!(matches!(
            s.read_item(4),
            Err(NewsieError::InvalidPostNumber { number: 4, count: 3 })
        ));
        for n in 1..=3 {
            assert!(s.read_item(n).is_ok());
        }
    }

    #[test]
    fn test_read_item_marks_and_decrements() {
        let mut s = session();
        let post = s.read_item(1).unwrap();

        assert!(post.contains("one"));
        assert!(s.is_read("First"));
        assert_eq!(s.unread_count(), 1);
    }

    #[test]
    fn test_read_item_already_read_does_not_append() {
        let mut s = session();
        s.read_item(2).unwrap();

        assert_eq!(s.unread_count(), 2);
        assert_eq!(s.store().appends, 0);
    }

    #[test]
    fn test_read_item_tolerates_write_failure() {
        let store = MemoryStore {
            fail_writes: true,
            ..MemoryStore::default()
        };
        let mut s = Session::new(items(), store, StyleConfig::default());

        let post = s.read_item(1).unwrap();
        assert!(post.contains("First"));
        assert!(!s.is_read("First"));
        assert_eq!(s.unread_count(), 3);
    }

    #[test]
    fn test_read_item_renders_identically_twice() {
        let mut s = session();
        assert_eq!(s.read_item(3).unwrap(), s.read_item(3).unwrap());
    }

    #[test]
    fn test_duplicate_titles_never_go_negative() {
        let dupes = vec![FeedItem::new("Same", ""), FeedItem::new("Same", "")];
        let mut s = Session::new(dupes, MemoryStore::default(), StyleConfig::default());
        assert_eq!(s.unread_count(), 2);

        s.read_item(1).unwrap();
        s.read_item(2).unwrap();
        s.read_item(1).unwrap();
        assert_eq!(s.unread_count(), 1);
        assert_eq!(s.clear_all().unwrap(), 0);
    }

    #[test]
    fn test_fetch_status_no_news() {
        let mut store = MemoryStore::default();
        for item in items() {
            store.read.insert(item.title_hash());
        }
        let mut s = Session::new(items(), store, StyleConfig::default());

        for prompt in [false, true] {
            let mut console = Scripted::default();
            assert_eq!(
                s.fetch_status(prompt, &mut console).unwrap(),
                (0, NO_NEWS.to_string())
            );
            assert!(console.output.is_empty());
        }
    }

    #[test]
    fn test_fetch_status_without_prompt() {
        let mut s = session();
        let mut console = Scripted::default();
        let (count, msg) = s.fetch_status(false, &mut console).unwrap();

        assert_eq!(count, 2);
        assert!(msg.contains("* You have 2 unread item(s)."));
        assert!(msg.contains("newsie browse"));
        assert!(console.output.is_empty());
    }

    #[test]
    fn test_fetch_status_prompt_declined() {
        let mut s = session();
        let mut console = Scripted::answering(&["n\n"]);
        let (count, msg) = s.fetch_status(true, &mut console).unwrap();

        assert_eq!(count, 2);
        assert!(msg.contains("newsie browse"));
        assert!(console.output.contains("Read them now? [Y/n] "));
        assert_eq!(console.clears, 0);
    }

    #[test]
    fn test_fetch_status_prompt_accepted_browses() {
        let mut s = session();
        let mut console = Scripted::answering(&["\n", "y\n", "y\n"]);
        let (count, msg) = s.fetch_status(true, &mut console).unwrap();

        assert_eq!(count, 0);
        assert!(msg.is_empty());
        assert!(console.output.contains("one"));
        assert!(console.output.contains("three"));
        assert!(!console.output.contains("two"));
    }

    #[test]
    fn test_browse_nothing_unread() {
        let mut s = Session::new(Vec::new(), MemoryStore::default(), StyleConfig::default());
        let mut console = Scripted::default();
        s.browse(false, &mut console).unwrap();

        assert_eq!(console.output, NO_UNREAD_BROWSE);
        assert_eq!(console.clears, 0);
    }

    #[test]
    fn test_browse_stops_on_no() {
        let mut s = session();
        let mut console = Scripted::answering(&["no\n"]);
        s.browse(false, &mut console).unwrap();

        assert_eq!(console.clears, 1);
        assert!(s.is_read("First"));
        assert!(!s.is_read("Third"));
        assert_eq!(s.unread_count(), 1);
    }

    #[test]
    fn test_browse_all_visits_read_items() {
        let mut s = session();
        let mut console = Scripted::answering(&["", "", ""]);
        s.browse(true, &mut console).unwrap();

        assert_eq!(console.clears, 3);
        assert!(console.output.contains("two"));
        assert_eq!(s.unread_count(), 0);
    }

    #[test]
    fn test_browse_stops_at_end_of_input() {
        let mut s = session();
        let mut console = Scripted::default();
        s.browse(true, &mut console).unwrap();

        assert_eq!(console.clears, 1);
    }

    #[test]
    fn test_clear_all() {
        let mut s = session();
        assert_eq!(s.clear_all().unwrap(), 2);
        for title in ["First", "Second", "Third"] {
            assert!(s.is_read(title));
        }
        assert_eq!(s.unread_count(), 0);
        assert_eq!(s.clear_all().unwrap(), 0);
    }

    #[test]
    fn test_clear_all_fails_on_write_error() {
        let store = MemoryStore {
            fail_writes: true,
            ..MemoryStore::default()
        };
        let mut s = Session::new(items(), store, StyleConfig::default());

        assert!(matches!(s.clear_all(), Err(NewsieError::Io(_))));
    }
}
