//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docshape")]
#[command(
    author,
    version,
    about = "Render search result documents as JSON, CSV or XML"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, env = "DOCSHAPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render documents the way a search request would
    Render(RenderArgs),

    /// Flatten documents into path/value maps
    Flatten(FlattenArgs),

    /// Restrict documents to a set of paths
    Project(ProjectArgs),

    /// Print the value at a path of each document
    Get(GetArgs),
}

#[derive(Args)]
pub struct RenderArgs {
    /// JSON input file, `-` for stdin
    #[arg(default_value = "-")]
    pub input: String,

    /// Request parameters as a query string (e.g. "o=csv&include_docs=true")
    #[arg(long)]
    pub query: Option<String>,

    /// Output format: json, xml or csv
    #[arg(short = 'o', long)]
    pub output_format: Option<String>,

    /// Documents are included in the results
    #[arg(long)]
    pub include_docs: bool,

    /// Comma-separated paths to export
    #[arg(short = 'k', long)]
    pub export_keys: Option<String>,

    /// Comma-separated CSV header labels
    #[arg(long)]
    pub csv_labels: Option<String>,

    /// CSV delimiter: a single character or `tab`
    #[arg(long)]
    pub csv_delimiter: Option<String>,

    /// Wrap the body in a call to this function
    #[arg(long)]
    pub callback: Option<String>,

    /// Pretty-print JSON bodies
    #[arg(long)]
    pub debug: bool,

    /// Input holds search responses; render the `doc` of each row
    #[arg(long)]
    pub unwrap_rows: bool,

    /// Print the content type to stderr
    #[arg(long)]
    pub show_content_type: bool,
}

#[derive(Args)]
pub struct FlattenArgs {
    /// JSON input file, `-` for stdin
    #[arg(default_value = "-")]
    pub input: String,

    /// Comma-separated paths to keep
    #[arg(short, long)]
    pub keys: Option<String>,

    /// Pretty-print output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args)]
pub struct ProjectArgs {
    /// JSON input file, `-` for stdin
    #[arg(default_value = "-")]
    pub input: String,

    /// Comma-separated paths to keep
    #[arg(short, long)]
    pub keys: String,

    /// Pretty-print output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args)]
pub struct GetArgs {
    /// Dotted path, e.g. `author.ids.0`
    pub path: String,

    /// JSON input file, `-` for stdin
    #[arg(default_value = "-")]
    pub input: String,
}
