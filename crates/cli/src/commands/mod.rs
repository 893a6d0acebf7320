mod critique;
mod extract;
mod settings;

use serde::Serialize;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use crate::output::{OutputFormat, ResultBuilder, TextOutput, print_result};

pub async fn dispatch(cli: Cli) -> Result<()> {
	let format = cli.format;

	match cli.command {
		Commands::Extract(args) => {
			let builder = ResultBuilder::new("extract");
			emit(builder, format, extract::run(args, cli.settings).await)
		}
		Commands::Critique(args) => {
			let builder = ResultBuilder::new("critique");
			emit(builder, format, critique::run(args, cli.settings).await)
		}
		Commands::Settings { action } => {
			let builder = ResultBuilder::new("settings");
			emit(builder, format, settings::run(action, cli.settings))
		}
	}
}

/// Print the command outcome and hand any error back for the exit status.
fn emit<T: Serialize + TextOutput>(builder: ResultBuilder<T>, format: OutputFormat, outcome: Result<T>) -> Result<()> {
	match outcome {
		Ok(data) => {
			print_result(&builder.data(data).build(), format);
			Ok(())
		}
		Err(err) => {
			print_result(&builder.error(err.code(), err.to_string()).build(), format);
			Err(err)
		}
	}
}
