pub mod context;
pub mod error;
pub mod session;

pub use context::AppContext;
pub use error::{NewsieError, Result};
pub use session::{Session, NO_NEWS};
