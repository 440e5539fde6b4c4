mod cli;
mod cli_utils;
mod commands;
mod labels;
mod prompter;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use labels::SensitivityResolver;
use prompter::Prompter;
use sensfix_core::Sensitivity;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (RUST_LOG overrides the default info level)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sensfix=info,sensfix_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli_utils::load_config(&args)?;
    let format = cli_utils::report_format(args.format);

    match args.command {
        Some(Command::Inspect { replay }) => {
            commands::inspect::run(&config, &replay, format, args.output.as_deref())
        }
        None => {
            let fixed = args.sens.map(Sensitivity::new).transpose()?;
            let prompter = (!args.no_prompt).then(Prompter::stdio);
            let mut resolver = SensitivityResolver::new(
                fixed,
                config.sensitivities.clone(),
                args.sens_from_name,
                prompter,
            );
            commands::analyze::run(&config, &mut resolver, format, args.output.as_deref())
        }
    }
}
