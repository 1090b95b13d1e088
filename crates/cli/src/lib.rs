mod overview;
mod replay;
mod symbols;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use symlens_core::SymlensConfig;

#[derive(Parser, Debug)]
#[command(
    name = "symlens",
    version,
    about = "Normalized document symbols and outlines from language-server providers",
    long_about = "Symlens turns the raw documentSymbol trees reported by language-server style \
                  providers into a canonical symbol tree and a compact document overview, \
                  smoothing over provider quirks such as markdown headings reported as strings."
)]
pub struct Cli {
    /// JSON config file (defaults to $SYMLENS_CONFIG, then built-in defaults)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also log to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the normalized symbol tree of a document
    Symbols {
        #[arg(value_name = "FILE")]
        path: PathBuf,
        /// Print an LSP documentSymbol response body instead
        #[arg(long)]
        lsp: bool,
    },
    /// Print the overview of a document
    #[command(
        long_about = "Prints the document overview: root symbols only for most providers, every \
                      heading for markdown. Low-level symbols such as variables are kept unless \
                      --filter-low-level is given."
    )]
    Overview {
        #[arg(value_name = "FILE")]
        path: PathBuf,
        /// Drop low-level symbols (variables, literals, ...)
        #[arg(long)]
        filter_low_level: bool,
        /// Extra levels below the roots to include
        #[arg(long, default_value_t = 0)]
        depth: usize,
        /// Group entries by kind instead of printing JSON
        #[arg(long)]
        summary: bool,
    },
    /// Normalize a captured documentSymbol response
    #[command(
        long_about = "Reads a documentSymbol response saved as JSON and normalizes it as if the \
                      named provider had just answered, applying that provider's profile."
    )]
    Replay {
        #[arg(value_name = "RESPONSE_JSON")]
        response: PathBuf,
        /// Provider that produced the response, e.g. marksman
        #[arg(long)]
        provider: String,
        /// Language of the document the response describes
        #[arg(long, default_value = "unknown")]
        language: String,
        /// Print the overview instead of the symbol tree
        #[arg(long)]
        overview: bool,
        /// Drop low-level symbols from the overview
        #[arg(long, requires = "overview")]
        filter_low_level: bool,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = SymlensConfig::resolve(cli.config.as_deref())?;
    let _guard = symlens_runtime::init_logging("cli", &config, cli.verbose);
    let rt = tokio::runtime::Runtime::new()?;

    match cli.command {
        Commands::Symbols { path, lsp } => rt.block_on(symbols::run(config, path, lsp)),
        Commands::Overview {
            path,
            filter_low_level,
            depth,
            summary,
        } => rt.block_on(overview::run(config, path, filter_low_level, depth, summary)),
        Commands::Replay {
            response,
            provider,
            language,
            overview,
            filter_low_level,
        } => rt.block_on(replay::run(
            config,
            response,
            replay::ReplayArgs {
                provider,
                language,
                overview,
                filter_low_level,
            },
        )),
    }
}
