use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mentor_blocks_config::{Config, OutputFormat};
use mentor_blocks_engine::{Block, parse_turn_bytes_with, parsing::snapshot, tokenize};
use serde::Serialize;
use std::{
    io::{self, Read},
    path::PathBuf,
    process,
};

#[derive(Parser)]
#[command(name = "mentor-blocks", version, about = "Inspect how mentor turns are parsed")]
struct Cli {
    /// Config file (defaults to ~/.config/mentor-blocks/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log parser decisions (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a mentor turn into blocks
    Parse(ParseArgs),

    /// Tokenize one line of prose into styled spans
    Spans {
        /// The line to tokenize
        line: String,
    },

    /// Print the default config file location
    ConfigPath,
}

#[derive(clap::Args)]
struct ParseArgs {
    /// File holding the raw turn, or `-` for stdin
    #[arg(default_value = "-")]
    input: String,

    /// Output format (overrides the config file)
    #[arg(short, long)]
    format: Option<FormatArg>,

    /// Single-line JSON
    #[arg(long)]
    compact: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Outline,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Outline => OutputFormat::Outline,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Parse(args) => {
            let config = load_config(cli.config)?;
            parse(&args, &config)
        }
        Command::Spans { line } => print_json(&tokenize(&line), true),
        Command::ConfigPath => {
            println!("{}", Config::config_path().display());
            Ok(())
        }
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from_path(&path)?,
        None => Config::load()?,
    };
    if loaded.is_none() {
        log::debug!("no config file found, using defaults");
    }
    Ok(loaded.unwrap_or_default())
}

fn parse(args: &ParseArgs, config: &Config) -> Result<()> {
    let bytes = read_input(&args.input)?;
    let blocks: Vec<Block> = parse_turn_bytes_with(&bytes, &config.parse_options());
    log::info!("parsed {} block(s) from {} bytes", blocks.len(), bytes.len());

    let format = args.format.map(OutputFormat::from).unwrap_or(config.output.format);
    match format {
        OutputFormat::Json => print_json(&blocks, config.output.pretty && !args.compact),
        OutputFormat::Outline => {
            print!("{}", snapshot::outline(&blocks));
            Ok(())
        }
    }
}

fn read_input(input: &str) -> Result<Vec<u8>> {
    if input == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Error reading stdin")?;
        return Ok(buf);
    }
    std::fs::read(input).with_context(|| format!("Error reading {input}"))
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
