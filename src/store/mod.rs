pub mod bootstrap;
pub mod cache;

use crate::app::Result;

pub use cache::ReadCache;

/// Read/unread bookkeeping keyed by post title.
pub trait Store {
    fn is_read(&self, title: &str) -> bool;

    /// Durably record `title` as read. Marking an already read title is
    /// allowed and leaves the read state unchanged.
    fn mark_read(&mut self, title: &str) -> Result<()>;
}
