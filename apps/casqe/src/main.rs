use clap::Parser;

use casqe::Args;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = Args::parse();
	casqe::run(args).await
}
