use clap::{Parser, Subcommand};

/// Apply bundled codemods via the jscodeshift tool
#[derive(Parser, Debug)]
#[command(name = "codemod")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=transform=debug    Enable transform logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply a codemod to a file or directory
    #[command(visible_alias = "a")]
    Apply {
        /// Identifier of a bundled codemod (resolves to codemods/<name>.js)
        codemod: String,

        /// File or directory to transform
        path: String,

        /// Report what would change without writing any files
        #[arg(short = 'd', long = "dry")]
        dry: bool,

        /// Print the transformed output
        #[arg(short = 'p', long = "print")]
        print: bool,

        /// Enable verbose tool logging
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,

        /// Raw extra arguments forwarded to jscodeshift
        #[arg(long = "jscodeshift-args", value_name = "ARGS")]
        jscodeshift_args: Option<String>,

        /// Package root holding codemods/ and node_modules/ (defaults to current directory)
        #[arg(long = "root", value_name = "DIR")]
        root: Option<String>,
    },
    /// List bundled codemod identifiers
    #[command(visible_alias = "ls")]
    List {
        /// Package root holding codemods/ (defaults to current directory)
        #[arg(long = "root", value_name = "DIR")]
        root: Option<String>,
    },
}
