//! Line-oriented terminal interaction used by `browse` and `fetch --prompt`.

use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

pub trait Console {
    /// Clear the visible screen and home the cursor.
    fn clear(&mut self) -> io::Result<()>;

    fn write_str(&mut self, s: &str) -> io::Result<()>;

    /// Read one line of input. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Ask a `[Y/n]` question. An empty answer means yes; end of input means no.
pub fn confirm<C: Console + ?Sized>(console: &mut C, prompt: &str) -> io::Result<bool> {
    console.write_str(prompt)?;
    Ok(console.read_line()?.is_some_and(|line| is_affirmative(&line)))
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}

/// The process's stdin/stdout.
#[derive(Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn clear(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(s.as_bytes())?;
        stdout.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}
