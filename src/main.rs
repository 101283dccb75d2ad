//! docdown: generate a Markdown API reference from a JSDoc-annotated source file.
//!
//! `docdown lodash.js --url https://github.com/lodash/lodash/blob/main/lodash.js -o docs/README.md`

use anyhow::{Context, Result};
use clap::Parser;
use docdown::{generate, HashStyle, Options, TocMode};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "docdown",
    about = "Generate Markdown API documentation from JSDoc comments"
)]
struct Cli {
    /// Source file to document
    path: PathBuf,

    /// Base URL of the source file, used for "view in source" links
    #[arg(short = 'u', long)]
    url: Option<String>,

    /// Document title (default: "<file name> API documentation")
    #[arg(short = 't', long)]
    title: Option<String>,

    /// Language of the fenced example blocks
    #[arg(long, default_value = "js")]
    lang: String,

    /// TOC grouping: properties (default) or categories
    #[arg(long, default_value = "properties")]
    toc: String,

    /// Anchor style: default or github
    #[arg(long, default_value = "default")]
    style: String,

    /// Keep source order instead of sorting naturally
    #[arg(long)]
    no_sort: bool,

    /// Output file (default: stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Show debug logs
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only show errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            path: Some(self.path.clone()),
            url: self.url.clone(),
            title: self.title.clone(),
            lang: self.lang.clone(),
            sort: !self.no_sort,
            toc: TocMode::from_name(&self.toc),
            style: HashStyle::from_name(&self.style),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    let options = cli.options();
    options.validate()?;

    let source = fs::read_to_string(&cli.path)
        .with_context(|| format!("failed to read {}", cli.path.display()))?;
    let markdown = generate(&source, &options)?;

    match cli.output {
        Some(ref out_path) => {
            if let Some(dir) = out_path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)
                    .with_context(|| format!("failed to create directory: {}", dir.display()))?;
            }
            fs::write(out_path, &markdown)
                .with_context(|| format!("failed to write {}", out_path.display()))?;
            tracing::info!(path = %out_path.display(), "wrote documentation");
        }
        None => {
            io::stdout()
                .write_all(markdown.as_bytes())
                .context("failed to write stdout")?;
        }
    }
    Ok(())
}

/// Install a stderr `tracing` subscriber. `RUST_LOG` applies unless a flag is given.
fn init_logger(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("docdown=debug")
    } else if quiet {
        EnvFilter::new("docdown=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docdown=warn"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
