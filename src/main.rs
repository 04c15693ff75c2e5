// sprig: parse a script and show its syntax tree

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, Level};

use sprig::outline;
use sprig::parser::{Parser, Tokenizer};
use sprig::ui::App;

/// Output format for the parsed tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Pretty-printed JSON, one object per node
    Json,
    /// Indented outline
    Tree,
    /// Rust debug representation
    Debug,
}

/// Parse a sprig script and print its syntax tree
#[derive(Debug, ClapParser)]
#[command(name = "sprig", version, about)]
struct Args {
    /// Source file to parse
    file: PathBuf,

    /// How to print the tree
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Print the token stream instead of parsing
    #[arg(long, conflicts_with = "tui")]
    tokens: bool,

    /// Browse the tree in a terminal UI
    #[arg(long)]
    tui: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&args) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let source = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read '{}'", args.file.display()))?;

    if args.tokens {
        return print_tokens(&source);
    }

    info!(file = %args.file.display(), "parsing");
    let program = Parser::new()
        .parse(&source)
        .with_context(|| format!("failed to parse '{}'", args.file.display()))?;
    info!(statements = program.body.len(), "parsed successfully");

    if args.tui {
        return browse(&program, source);
    }

    let mut stdout = io::stdout().lock();
    match args.format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut stdout, &program)
                .context("failed to encode tree as JSON")?;
            writeln!(stdout)?;
        }
        Format::Tree => write!(stdout, "{}", outline::render(&program))?,
        Format::Debug => writeln!(stdout, "{:#?}", program)?,
    }

    Ok(())
}

fn print_tokens(source: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for token in Tokenizer::new(source) {
        let token = token.context("failed to tokenize")?;
        writeln!(stdout, "{:?}\t{}", token.kind, token.text)?;
    }
    Ok(())
}

fn browse(program: &sprig::parser::ast::Program, source: String) -> Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(program, source);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal UI failed")
}
