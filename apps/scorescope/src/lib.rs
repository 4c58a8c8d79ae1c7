pub mod command;
pub mod session;

mod error;

pub use error::{Error, Result};

use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufRead, BufReader};
use tracing_subscriber::EnvFilter;

use scorescope_service::{Explorer, JsonFileSource};

use crate::session::Session;

#[derive(Debug, Parser)]
#[command(
	version = scorescope_cli::VERSION,
	rename_all = "kebab",
	styles = scorescope_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Result set to explore, as JSON.
	#[arg(long, short = 'r', value_name = "FILE")]
	pub results: PathBuf,
	/// Commands to replay. Standard input is read when omitted.
	#[arg(long, short = 's', value_name = "FILE")]
	pub script: Option<PathBuf>,
	/// Query the result set answers. Only recorded in the log.
	#[arg(long, short = 'q', value_name = "TEXT", default_value = "")]
	pub query: String,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = scorescope_config::load(&args.config)?;
	let filter = EnvFilter::new(config.service.log_level.clone());

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

	let mut explorer = Explorer::new(&config.explorer)?;
	let source = JsonFileSource::new(&args.results);

	explorer.refresh(&source, &args.query).await?;

	let reader: Box<dyn AsyncBufRead + Send + Unpin> = match &args.script {
		Some(path) => Box::new(BufReader::new(tokio::fs::File::open(path).await?)),
		None => Box::new(BufReader::new(tokio::io::stdin())),
	};
	let mut stdout = std::io::stdout();

	Session::new(explorer, args.query).run(reader, &mut stdout).await?;

	Ok(())
}
