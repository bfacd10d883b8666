use anyhow::Result;
use clap::Parser;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;
use undo_core::{load_initial_items, HttpListSource};

mod command;
mod session;

use command::parse_line;
use session::{Session, Step};

#[derive(Parser, Debug)]
struct Args {
    /// Base url of the server providing the startup list.
    #[arg(long, env = "UNDO_LIST_SERVER_URL", default_value = "http://127.0.0.1:3000")]
    server_url: String,
    /// Start with an empty list instead of fetching one.
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let items = if args.offline {
        Vec::new()
    } else {
        match HttpListSource::new(&args.server_url) {
            Ok(source) => load_initial_items(&source).await,
            Err(err) => {
                tracing::error!(%err, "cannot build list source; starting empty");
                Vec::new()
            }
        }
    };

    let mut session = Session::new(items);
    let mut stdout = io::stdout();
    stdout.write_all(session.render().as_bytes()).await?;
    stdout.flush().await?;

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let output = match parse_line(&line).and_then(|command| session.execute(command)) {
            Ok(Step::Continue(output)) => output,
            Ok(Step::Quit) => break,
            Err(err) => format!("error: {err:#}\n"),
        };
        stdout.write_all(output.as_bytes()).await?;
        stdout.flush().await?;
    }
    Ok(())
}
