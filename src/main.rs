//! `gdocs-html`: convert a Google Docs API document (JSON) into HTML.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gdocs_html::{ConvertConfig, Converter, HtmlResult, RenderConfig, model, write_document};

/// Convert a Google Docs API document into HTML.
#[derive(Debug, Clone, Parser)]
#[clap(name = "gdocs-html", version, about)]
struct Args {
    /// Path to the document JSON, or `-` for stdin
    #[clap(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Path to the output HTML file (stdout when omitted)
    #[clap(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Emit a complete page instead of a fragment
    #[clap(long)]
    standalone: bool,

    /// Drop text runs that are empty or only whitespace
    #[clap(long)]
    skip_blank_runs: bool,

    /// Do not wrap suggested insertions and deletions
    #[clap(long)]
    no_suggestions: bool,

    /// Do not wrap highlighted runs in <mark>
    #[clap(long)]
    no_highlight: bool,

    /// Give every run its own style wrappers
    #[clap(long)]
    no_merge: bool,

    /// Only log warnings and errors
    #[clap(long)]
    silent: bool,
}

impl Args {
    fn convert_config(&self) -> ConvertConfig {
        ConvertConfig::new()
            .with_skip_blank_runs(self.skip_blank_runs)
            .with_suggestions(!self.no_suggestions)
            .with_highlight(!self.no_highlight)
            .with_merge_wrappers(!self.no_merge)
    }

    fn open_input(&self) -> HtmlResult<Box<dyn Read>> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => {
                Ok(Box::new(BufReader::new(File::open(path)?)))
            }
            _ => Ok(Box::new(io::stdin().lock())),
        }
    }

    fn open_output(&self) -> HtmlResult<Box<dyn Write>> {
        match &self.output {
            Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
            None => Ok(Box::new(io::stdout().lock())),
        }
    }
}

fn run(args: &Args) -> HtmlResult<()> {
    let source = model::Document::from_reader(args.open_input()?)?;
    tracing::debug!(
        title = %source.title,
        elements = source.body.content.len(),
        lists = source.lists.len(),
        objects = source.inline_objects.len(),
        "parsed document"
    );

    let tree = Converter::new(args.convert_config()).convert(&source);
    let stats = tree.collect_stats();
    tracing::debug!(
        elements = stats.element_count,
        texts = stats.text_count,
        fingerprint = format_args!("{:016x}", tree.fingerprint()),
        "converted document"
    );

    write_document(&tree, &RenderConfig::new(args.standalone), args.open_output()?)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.silent { "warn" } else { "gdocs_html=debug" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
