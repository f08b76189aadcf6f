//! lit: render commented source files as literate HTML.
#![allow(clippy::multiple_crate_versions)]

use clap::{ArgAction, Parser, Subcommand};
use lit::{config, hooks, input};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lit", version)]
#[command(about = "Pair source comments with their code as HTML", long_about = None)]
struct Cli {
    /// Increase log verbosity (repeatable)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render source files to HTML
    Render(RenderArgs),

    /// Print the sections of a source file as JSON
    Parse(ParseArgs),

    /// List the available highlighting themes
    Themes,
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Source files to render
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Write HTML here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Line-comment marker (defaults to one chosen by file extension)
    #[arg(short, long, value_name = "MARKER")]
    marker: Option<String>,

    /// Escape comments instead of rendering them as Markdown
    #[arg(long)]
    plain: bool,

    /// Escape code instead of syntax highlighting it
    #[arg(long)]
    no_highlight: bool,

    /// Emit a complete HTML page
    #[arg(long)]
    standalone: bool,

    /// Highlighting theme for standalone pages
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,
}

#[derive(clap::Args)]
struct ParseArgs {
    /// Source file to parse
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Line-comment marker (defaults to one chosen by file extension)
    #[arg(short, long, value_name = "MARKER")]
    marker: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut cfg = config::Config::load();
    if let Err(e) = run(cli.command, &mut cfg) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Command, cfg: &mut config::Config) -> io::Result<()> {
    match command {
        Command::Render(args) => {
            // Override config with command line args
            if args.marker.is_some() {
                cfg.comment_marker = args.marker;
            }
            if args.plain {
                cfg.markdown = false;
            }
            if args.no_highlight {
                cfg.highlight = false;
            }
            if args.standalone {
                cfg.standalone = true;
            }
            if let Some(theme) = args.theme {
                cfg.theme = theme;
            }

            let html = input::render_files(&args.files, cfg)?;
            match args.output {
                Some(path) => fs::write(path, html),
                None => io::stdout().write_all(html.as_bytes()),
            }
        }
        Command::Parse(args) => {
            if args.marker.is_some() {
                cfg.comment_marker = args.marker;
            }
            let parsed = input::parse_file(&args.file, cfg)?;
            let json = serde_json::to_string_pretty(&parsed).map_err(io::Error::other)?;
            println!("{json}");
            Ok(())
        }
        Command::Themes => {
            for name in hooks::Highlight::themes() {
                println!("{name}");
            }
            Ok(())
        }
    }
}
