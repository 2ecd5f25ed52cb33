//! pdf2text CLI - PDF to plain-text conversion tool

use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser};
use colored::Colorize;
use log::debug;

use pdf2text::{
    resolve_output_path, run_extraction, Credentials, DocumentSession, Eol, ExtractOptions,
    GlobalConfig, LayoutFlags, LayoutMode, PageRange, PathCodec, TextEncoding,
};

/// Exit code for argument, decode, help, and version outcomes.
const EXIT_USAGE: i32 = 99;

/// Long options that are traditionally spelled with a single dash.
const LONG_FLAGS: &[&str] = &[
    "layout",
    "simple",
    "table",
    "lineprinter",
    "raw",
    "fixed",
    "linespacing",
    "clip",
    "nodiag",
    "enc",
    "eol",
    "nopgbrk",
    "bom",
    "opw",
    "upw",
    "cfg",
    "help",
];

#[derive(Parser)]
#[command(name = "pdf2text")]
#[command(version)]
#[command(about = "Convert PDF documents to plain text", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Input PDF file, given as a Base64 token of the real path
    #[arg(value_name = "ENCODED-PDF-FILE")]
    input: String,

    /// Output text file; derived from the input name when omitted
    #[arg(value_name = "TEXT-FILE")]
    output: Option<String>,

    /// First page to convert
    #[arg(short = 'f', value_name = "int", allow_negative_numbers = true)]
    first_page: Option<i32>,

    /// Last page to convert
    #[arg(short = 'l', value_name = "int", allow_negative_numbers = true)]
    last_page: Option<i32>,

    /// Maintain original physical layout
    #[arg(long)]
    layout: bool,

    /// Simple one-column page layout
    #[arg(long)]
    simple: bool,

    /// Similar to -layout, but optimized for tables
    #[arg(long)]
    table: bool,

    /// Use strict fixed-pitch/height layout
    #[arg(long = "lineprinter")]
    line_printer: bool,

    /// Keep strings in content stream order
    #[arg(long)]
    raw: bool,

    /// Assume fixed-pitch (or tabular) text
    #[arg(long, value_name = "fp", allow_negative_numbers = true)]
    fixed: Option<f64>,

    /// Fixed line spacing for LinePrinter mode
    #[arg(long = "linespacing", value_name = "fp", allow_negative_numbers = true)]
    line_spacing: Option<f64>,

    /// Separate clipped text
    #[arg(long)]
    clip: bool,

    /// Discard diagonal text
    #[arg(long = "nodiag")]
    no_diagonal: bool,

    /// Output text encoding name
    #[arg(long = "enc", value_name = "string")]
    encoding: Option<String>,

    /// Output end-of-line convention (unix, dos, or mac)
    #[arg(long = "eol", value_name = "string")]
    eol: Option<String>,

    /// Don't insert page breaks between pages
    #[arg(long = "nopgbrk")]
    no_page_breaks: bool,

    /// Insert a Unicode BOM at the start of the text file
    #[arg(long)]
    bom: bool,

    /// Owner password (for encrypted files)
    #[arg(long = "opw", value_name = "string")]
    owner_password: Option<String>,

    /// User password (for encrypted files)
    #[arg(long = "upw", value_name = "string")]
    user_password: Option<String>,

    /// Don't print any messages or errors
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Configuration file to use in place of pdf2text.toml
    #[arg(long = "cfg", value_name = "string")]
    config: Option<PathBuf>,

    /// Print copyright and version info
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),
}

/// Rewrite single-dash long options to the double-dash form clap expects.
///
/// Positional arguments are never rewritten; Base64 path tokens cannot
/// start with a dash.
fn normalize_args(args: impl IntoIterator<Item = String>) -> Vec<String> {
    args.into_iter()
        .map(|arg| {
            if arg == "-?" {
                return "--help".to_string();
            }
            match arg.strip_prefix('-') {
                Some(name) if LONG_FLAGS.contains(&name) => format!("--{}", name),
                _ => arg,
            }
        })
        .collect()
}

fn main() {
    let cli = match Cli::try_parse_from(normalize_args(std::env::args())) {
        Ok(cli) => cli,
        Err(e) => {
            // help and version go to stdout, parse errors to stderr
            let _ = e.print();
            process::exit(EXIT_USAGE);
        }
    };

    let default_level = if cli.quiet { "off" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(&cli) {
        if !cli.quiet {
            eprintln!("{}: {}", "Error".red().bold(), e);
        }
        process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> pdf2text::Result<()> {
    let codec = PathCodec::new();
    let input_path = codec.decode_path(&cli.input)?;
    debug!("input file: '{}'", input_path);

    let config = GlobalConfig::load(cli.config.as_deref())?;
    let options = build_options(cli, &config);
    let encoding = TextEncoding::resolve(&options.encoding_name)?;

    let credentials = Credentials::new(cli.owner_password.clone(), cli.user_password.clone());
    let session = DocumentSession::open(Path::new(&input_path), &credentials)?;
    drop(credentials);

    session.require_copy_permission()?;

    let out_path = resolve_output_path(&input_path, cli.output.as_deref());
    let range = PageRange::resolve(cli.first_page, cli.last_page, session.page_count());

    run_extraction(&session, range, &options, encoding, Path::new(&out_path))
}

/// Merge command-line flags over config-file values over the defaults.
fn build_options(cli: &Cli, config: &GlobalConfig) -> ExtractOptions {
    let layout = LayoutMode::from_flags(LayoutFlags {
        table: cli.table,
        physical: cli.layout,
        simple: cli.simple,
        line_printer: cli.line_printer,
        raw: cli.raw,
    });

    let mut options = ExtractOptions::new()
        .with_layout(layout)
        .with_clip(cli.clip)
        .with_discard_diagonal(cli.no_diagonal)
        .with_bom(cli.bom)
        .with_quiet(cli.quiet);

    if let Some(pitch) = cli.fixed {
        options = options.with_fixed_pitch(pitch);
    }
    if let Some(spacing) = cli.line_spacing {
        options = options.with_line_spacing(spacing);
    }

    if let Some(ref name) = config.text_encoding {
        options = options.with_encoding(name.clone());
    }
    if let Some(ref name) = cli.encoding {
        options = options.with_encoding(name.clone());
    }

    // a bad eol value warns and leaves the previous layer in place
    if let Some(eol) = config.eol() {
        options = options.with_eol(eol);
    }
    if let Some(eol) = cli.eol.as_deref().and_then(Eol::parse_lenient) {
        options = options.with_eol(eol);
    }

    if let Some(breaks) = config.page_breaks {
        options = options.with_page_breaks(breaks);
    }
    if cli.no_page_breaks {
        options = options.with_page_breaks(false);
    }

    options
}
