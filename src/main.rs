use std::process;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newsie::app::AppContext;
use newsie::cli::{commands, Cli};
use newsie::console::StdConsole;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries command output.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.config.as_deref())?;

    let mut session = match ctx.open_session().await {
        Ok(session) => session,
        Err(e) => fatal(e),
    };

    let mut console = StdConsole::new();
    match commands::run(&mut session, cli.command, &mut console) {
        Ok(status) => process::exit(status),
        Err(e) => fatal(e),
    }
}

fn fatal(e: impl std::fmt::Display) -> ! {
    eprintln!("Exiting: {}", e);
    process::exit(1)
}
