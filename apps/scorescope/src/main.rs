// crates.io
use clap::Parser;
// self
use scorescope::Args;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = Args::parse();
	scorescope::run(args).await
}
