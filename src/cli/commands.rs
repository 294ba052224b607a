use crate::app::{NewsieError, Result, Session};
use crate::cli::Commands;
use crate::console::Console;
use crate::store::Store;

/// Exit statuses are a single byte; `fetch` reports at most this many.
const MAX_STATUS: usize = 255;

/// Run one command against an open session and return the exit status.
pub fn run<S: Store, C: Console + ?Sized>(
    session: &mut Session<S>,
    command: Commands,
    console: &mut C,
) -> Result<i32> {
    match command {
        Commands::Browse { all } => browse(session, all, console),
        Commands::Clear => clear(session),
        Commands::Fetch { prompt } => fetch(session, prompt, console),
        Commands::Ls { all } => ls(session, all, console),
        Commands::Read { number } => read(session, number, console),
    }
}

pub fn browse<S: Store, C: Console + ?Sized>(
    session: &mut Session<S>,
    all: bool,
    console: &mut C,
) -> Result<i32> {
    session.browse(all, console)?;
    Ok(0)
}

pub fn clear<S: Store>(session: &mut Session<S>) -> Result<i32> {
    let cleared = session.clear_all()?;
    tracing::info!("Marked {} posts as read", cleared);
    Ok(0)
}

/// Print the unread status. The exit status is the unread count so that
/// hooks can tell whether there is news.
pub fn fetch<S: Store, C: Console + ?Sized>(
    session: &mut Session<S>,
    prompt: bool,
    console: &mut C,
) -> Result<i32> {
    let (unread, msg) = session.fetch_status(prompt, console)?;
    console.write_str(&msg)?;
    Ok(unread.min(MAX_STATUS) as i32)
}

pub fn ls<S: Store, C: Console + ?Sized>(
    session: &Session<S>,
    all: bool,
    console: &mut C,
) -> Result<i32> {
    for entry in session.list(all) {
        console.write_str(&format!("{}\n", entry))?;
    }
    Ok(0)
}

pub fn read<S: Store, C: Console + ?Sized>(
    session: &mut Session<S>,
    number: usize,
    console: &mut C,
) -> Result<i32> {
    match session.read_item(number) {
        Ok(post) => console.write_str(&format!("{}\n", post))?,
        Err(NewsieError::InvalidPostNumber { .. }) => console.write_str("Invalid post number.\n")?,
        Err(e) => return Err(e),
    }
    Ok(0)
}
