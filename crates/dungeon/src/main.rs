//! Seeded dungeon layout generator
//!
//! Command line front end: resolves the seed and configuration, generates a
//! layout and prints it as ASCII or JSON.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use dg_core::config::GeneratorConfig;
use dg_core::{Layout, generate_from_config, random_seed};

mod display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Character grid with a legend
    Ascii,
    /// Full layout as JSON
    Json,
}

/// Generate a dungeon layout from a seed
#[derive(Parser, Debug)]
#[command(name = "dungeon")]
#[command(author, version, about = "Seeded dungeon layout generator", long_about = None)]
struct Args {
    /// Seed to generate from (0 picks a random one)
    #[arg(short = 's', long, allow_negative_numbers = true)]
    seed: Option<i32>,

    /// Ignore any configured seed and pick a random one
    #[arg(short = 'r', long, conflicts_with = "seed")]
    random_seed: bool,

    /// Grid width in cells
    #[arg(short = 'W', long)]
    width: Option<i32>,

    /// Grid height in cells
    #[arg(short = 'H', long)]
    height: Option<i32>,

    /// Number of rooms to try to place
    #[arg(short = 'n', long)]
    max_rooms: Option<usize>,

    /// Smallest room side
    #[arg(long)]
    min_room_size: Option<i32>,

    /// Room sides are drawn below this value
    #[arg(long)]
    max_room_size: Option<i32>,

    /// Corridor thickness in cells
    #[arg(long)]
    corridor_width: Option<i32>,

    /// Do not place a spawn point
    #[arg(long)]
    no_player: bool,

    /// Do not place collectibles
    #[arg(long)]
    no_collectibles: bool,

    /// JSON configuration file; flags override its values
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Ascii)]
    format: Format,

    /// Colour floor cells by room role
    #[arg(long)]
    color: bool,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Load the configuration file, if any, and apply flag overrides
    fn config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load_from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => GeneratorConfig::default(),
        };

        if let Some(width) = self.width {
            config.extent.width = width;
        }
        if let Some(height) = self.height {
            config.extent.height = height;
        }
        if let Some(max_rooms) = self.max_rooms {
            config.rooms.max_rooms = max_rooms;
        }
        if let Some(size) = self.min_room_size {
            config.rooms.min_size = size;
        }
        if let Some(size) = self.max_room_size {
            config.rooms.max_size = size;
        }
        if let Some(width) = self.corridor_width {
            config.corridors.width = width;
        }
        if self.no_player {
            config.entities.spawn_player = false;
        }
        if self.no_collectibles {
            config.entities.place_collectibles = false;
        }

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.random_seed {
            config.use_random_seed = true;
        }

        Ok(config)
    }

    /// Explicit seed first, then the configured one; 0 means random
    fn resolve_seed(&self, config: &GeneratorConfig) -> i32 {
        match self.seed {
            Some(0) => random_seed(),
            Some(seed) => seed,
            None => config.resolve_seed(),
        }
    }

    fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn,dungeon=info",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn render(layout: &Layout, args: &Args) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match args.format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut buf, layout).context("failed to serialize layout")?;
            buf.push(b'\n');
        }
        Format::Ascii if args.color => {
            display::write_colored(&mut buf, layout)?;
            writeln!(buf, "{}", display::legend(layout))?;
        }
        Format::Ascii => {
            buf.extend_from_slice(display::render_plain(layout).as_bytes());
            writeln!(buf, "{}", display::legend(layout))?;
        }
    }
    Ok(buf)
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    let config = args.config()?;
    config.validate().context("invalid configuration")?;

    let seed = args.resolve_seed(&config);
    info!("Dungeon seed: {seed}");

    let layout = generate_from_config(seed, &config).context("generation failed")?;
    let output = render(&layout, &args)?;

    match &args.output {
        Some(path) => fs::write(path, &output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout().lock().write_all(&output)?,
    }

    Ok(())
}
