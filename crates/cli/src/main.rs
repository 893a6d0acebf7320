use clap::Parser;
use counterview_cli::{cli::Cli, commands, logging};
use tracing::debug;

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	if let Err(err) = commands::dispatch(cli).await {
		debug!(target = "counterview", error = %err, "command failed");
		std::process::exit(1);
	}
}
