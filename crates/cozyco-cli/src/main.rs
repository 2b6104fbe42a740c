//! Cozy Co CLI - Command-line interface for seeded cover art

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cozyco_core::art::{CoverArtConfig, make_cover_art_with};
use cozyco_core::card::make_greetings_card_with;
use cozyco_core::random::{KeyScheme, RandomSource};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cozyco")]
#[command(about = "Seeded line-art generation for Cozy Co", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render cover art for a seed
    Cover {
        /// Seed string (random if omitted)
        #[arg(short, long)]
        seed: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON config overriding the generator defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Key seeds exactly as published artwork did
        #[arg(long)]
        compatible: bool,
    },

    /// Render a greetings card (HTML) around the cover art
    Card {
        /// Seed string (random if omitted)
        #[arg(short, long)]
        seed: Option<String>,

        /// Sender name
        #[arg(long, default_value = "")]
        from: String,

        /// Recipient name
        #[arg(long, default_value = "")]
        to: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON config overriding the generator defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Key seeds exactly as published artwork did
        #[arg(long)]
        compatible: bool,
    },

    /// Render a range of numeric seeds to a directory in parallel
    Batch {
        /// First seed
        #[arg(long, default_value = "1")]
        start: u64,

        /// Number of seeds to render
        #[arg(long, default_value = "100")]
        count: u64,

        /// Directory to write `{seed}.svg` files into
        #[arg(long)]
        out_dir: PathBuf,

        /// JSON config overriding the generator defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Key seeds exactly as published artwork did
        #[arg(long)]
        compatible: bool,
    },

    /// Print the default generator config as JSON
    Config,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a clean SVG/HTML stream
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Cover {
            seed,
            output,
            config,
            compatible,
        } => {
            let config = load_config(config.as_deref(), compatible)?;
            run_cover(seed, output.as_deref(), &config)?;
        }
        Commands::Card {
            seed,
            from,
            to,
            output,
            config,
            compatible,
        } => {
            let config = load_config(config.as_deref(), compatible)?;
            run_card(seed, &from, &to, output.as_deref(), &config)?;
        }
        Commands::Batch {
            start,
            count,
            out_dir,
            config,
            compatible,
        } => {
            let config = load_config(config.as_deref(), compatible)?;
            run_batch(start, count, &out_dir, &config)?;
        }
        Commands::Config => {
            println!("{}", CoverArtConfig::default().to_json_pretty()?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>, compatible: bool) -> Result<CoverArtConfig> {
    let mut config = match path {
        Some(path) => CoverArtConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CoverArtConfig::default(),
    };
    if compatible {
        config.key_scheme = KeyScheme::Compatible;
    }
    Ok(config)
}

/// Use the given seed, or draw one and report it so the render can be repeated
fn resolve_seed(seed: Option<String>) -> String {
    match seed.filter(|s| !s.is_empty()) {
        Some(seed) => seed,
        None => {
            let seed = RandomSource::random_seed();
            eprintln!("Using random seed {}", seed);
            seed
        }
    }
}

fn emit(contents: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{}", contents),
    }
    Ok(())
}

fn run_cover(seed: Option<String>, output: Option<&Path>, config: &CoverArtConfig) -> Result<()> {
    let seed = resolve_seed(seed);
    let svg = make_cover_art_with(Some(&seed), config);
    emit(&svg, output)
}

fn run_card(
    seed: Option<String>,
    from: &str,
    to: &str,
    output: Option<&Path>,
    config: &CoverArtConfig,
) -> Result<()> {
    let seed = resolve_seed(seed);
    let html = make_greetings_card_with(Some(&seed), from, to, config);
    emit(&html, output)
}

fn run_batch(start: u64, count: u64, out_dir: &Path, config: &CoverArtConfig) -> Result<()> {
    if count == 0 {
        anyhow::bail!("Batch count must be at least 1");
    }
    let end = start
        .checked_add(count)
        .context("Seed range overflows u64")?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    println!(
        "Rendering seeds {}..{} to {}...",
        start,
        end,
        out_dir.display()
    );

    // Each seed gets its own RandomSource, so renders share nothing
    (start..end).into_par_iter().try_for_each(|n| {
        let seed = n.to_string();
        let svg = make_cover_art_with(Some(&seed), config);
        let path = out_dir.join(format!("{}.svg", seed));
        std::fs::write(&path, svg).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Wrote {}", path.display());
        Ok::<(), anyhow::Error>(())
    })?;

    println!("Rendered {} files", count);
    Ok(())
}
