use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use pagemark_config::Config;
use pagemark_engine::{
    Section, parse_markup_with, sections_from_json, sections_from_json_validated,
    sections_to_json, sections_to_markup_with,
};
use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(name = "pagemark", version)]
#[command(about = "Parse and render wiki page section markup", long_about = None)]
struct Args {
    /// Config file to use instead of ~/.config/pagemark/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// More log output (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse markup into a JSON section list
    Parse {
        /// Markup file, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },
    /// Render a JSON section list as markup
    Render {
        /// JSON file, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Check that markup parses, listing its sections
    Check {
        /// Markup file, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Rewrite markup in canonical form
    Fmt {
        /// Markup file, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    // RUST_LOG, when set, wins over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if args.config.is_none() {
        log::info!("Config path: {}", Config::config_path().display());
    }
    let config = Config::resolve(args.config.as_deref())?;
    log::debug!("Using config: {config:?}");

    match args.command {
        Command::Parse { file, compact } => {
            let sections = parse(&read_input(file.as_deref())?, &config)?;
            println!("{}", sections_to_json(&sections, config.pretty_json && !compact)?);
        }
        Command::Render { file } => {
            let json = read_input(file.as_deref())?;
            let sections = if config.validate_json {
                sections_from_json_validated(&json)?
            } else {
                sections_from_json(&json)?
            };
            println!("{}", sections_to_markup_with(&sections, &config.markup_options()));
        }
        Command::Check { file } => {
            let sections = parse(&read_input(file.as_deref())?, &config)?;
            for section in &sections {
                println!("{}", describe(section));
            }
            println!("ok: {} sections", sections.len());
        }
        Command::Fmt { file } => {
            let options = config.markup_options();
            let sections = parse(&read_input(file.as_deref())?, &config)?;
            println!("{}", sections_to_markup_with(&sections, &options));
        }
    }

    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn parse(markup: &str, config: &Config) -> Result<Vec<Section>> {
    let sections = parse_markup_with(markup, &config.markup_options())?;
    log::info!("Parsed {} sections", sections.len());
    Ok(sections)
}

/// One-line summary of a section for `check` output.
fn describe(section: &Section) -> String {
    let mut line = format!("{:>3}  {}", section.position, section.section_type);
    if let Some(language) = &section.language {
        line.push_str(&format!(" [{language}]"));
    }
    if let Some(url) = &section.media_url {
        line.push_str(&format!(" <{url}>"));
    }
    if let Some(title) = section.header.as_ref().or(section.caption.as_ref()) {
        line.push_str(&format!(": {title}"));
    }
    line
}
