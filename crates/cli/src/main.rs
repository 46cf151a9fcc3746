use anyhow::Result;
use clap::Parser;

use codemod_cli::commands::{apply_command, list_command};
use codemod_cli::{Cli, Commands};
use codemod_runner_core::TransformOptions;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Apply {
            codemod,
            path,
            dry,
            print,
            verbose,
            jscodeshift_args,
            root,
        } => {
            let mut options = TransformOptions::default()
                .with_dry(dry)
                .with_print(print)
                .with_verbose(verbose);
            if let Some(raw) = jscodeshift_args {
                options = options.with_jscodeshift_args(raw);
            }
            apply_command(&codemod, &path, options, root.as_deref())
        }
        Commands::List { root } => list_command(root.as_deref()),
    }
}
