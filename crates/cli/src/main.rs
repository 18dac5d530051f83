use std::env;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, LevelFilter};

use cher_cli::cli_args::Args;
use cher_cli::workflow::Workflow;
use cher_core::config;
use cher_core::error::{Error, Result};
use cher_core::execution::ProcessEditor;
use cher_core::snippet_store::SnippetStore;

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn execute(args: Args) -> Result<()> {
    let root_dir = config::get_root_dir(&args.config_dir)?;
    debug!("Root directory: `{}`", root_dir.display());

    let working_dir =
        env::current_dir().map_err(|e| Error::io_error("working directory", ".", e))?;

    let mut workflow = Workflow::new(
        SnippetStore::new(root_dir),
        ProcessEditor,
        io::stdin().lock(),
        io::stdout(),
    )
    .with_working_dir(working_dir)
    .with_debug(args.debug);

    workflow.run(&args.arguments)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    match execute(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
