pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "newsie")]
#[command(version, about = "Read Arch Linux news from the terminal", long_about = None)]
pub struct Cli {
    /// Path to an alternative config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Browse through unread posts, one screen at a time. Answer "n" to stop
    Browse {
        /// Browse all posts, read and unread
        #[arg(short, long)]
        all: bool,
    },
    /// Mark all posts as read
    Clear,
    /// Report the number of unread posts; the exit status is that number
    Fetch {
        /// Ask whether to browse unread posts right away
        #[arg(short, long)]
        prompt: bool,
    },
    /// List unread posts
    Ls {
        /// List all posts, read and unread
        #[arg(short, long)]
        all: bool,
    },
    /// Read a post, numbered as in `ls --all`
    Read {
        /// Number of the post to read
        #[arg(short, long, default_value_t = 1)]
        number: usize,
    },
}
