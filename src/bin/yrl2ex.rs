use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use log::info;

use yrl2ex::rendering::RenderConfig;

/// Translate a yecc grammar file into defr rule definitions
#[derive(Parser)]
#[command(name = "yrl2ex", version)]
struct Cli {
    /// Grammar file to translate, `-` reads the standard input
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file, defaults to the input path with the `ex` extension (standard output for `-`)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Longest single-line rule definition before switching to a do block
    #[arg(long, value_name = "N", default_value_t = RenderConfig::default().max_line_width)]
    max_line_width: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("cannot read the standard input")?;
        return Ok(input);
    }

    fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let input = read_input(&cli.input)?;
    let config = RenderConfig {
        max_line_width: cli.max_line_width,
    };
    let output = yrl2ex::transpile_with(&input, &config, &mut Default::default())
        .with_context(|| format!("cannot translate {}", cli.input.display()))?;

    let output_path = match cli.output {
        Some(path) => Some(path),
        None if cli.input.as_os_str() == "-" => None,
        None => Some(cli.input.with_extension("ex")),
    };

    match output_path {
        Some(path) => {
            fs::write(&path, format!("{}\n", output))
                .with_context(|| format!("cannot write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", output)?;
        }
    }

    Ok(())
}
