mod app;
mod card;
mod color;
mod config;
mod input;
mod palette;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use color::{ColorNotation, Hsv, Rgb};
use crossterm::style::{Color as CtColor, Stylize, style};
use palette::TileSequence;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Parser)]
#[command(name = "tilecard", version, about = "Profile card gallery with tone-ramp tile mosaics")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Browse the gallery interactively (default).
    Tui,
    /// Convert an RGB color to HSV.
    Hsv { r: u8, g: u8, b: u8 },
    /// Derive the accent and tile mosaic for an RGB color.
    Tiles {
        r: u8,
        g: u8,
        b: u8,
        /// Seed the tile sampling for a reproducible mosaic.
        #[arg(long)]
        seed: Option<u64>,
        /// Print JSON instead of painting the mosaic.
        #[arg(long)]
        json: bool,
    },
    /// Paint one card from the catalog.
    Card {
        id: String,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// List the cards in the catalog.
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = config::load(cli.config.as_deref()).context("load config")?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let mut terminal = tui::TerminalGuard::enter(cfg.input.mouse).context("init terminal")?;
            let mut app = app::App::new(cfg);
            app.run(terminal.terminal_mut())?;
        }
        Command::Hsv { r, g, b } => {
            let hsv = Rgb::new(r, g, b).to_hsv();
            println!("h={} s={} v={}", hsv.h, hsv.s, hsv.v);
        }
        Command::Tiles { r, g, b, seed, json } => {
            let base = Rgb::new(r, g, b).to_hsv();
            let mut rng = make_rng(seed.or(cfg.palette.seed));
            let ramp = palette::build_ramp(base, cfg.palette.ramp_size).context("build ramp")?;
            let tiles = ramp.sample(cfg.palette.tile_count, &mut rng);
            let accent = palette::derive_accent(base);

            if json {
                let out = serde_json::json!({ "accent": accent, "ramp": ramp, "tiles": tiles });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print_palette(accent, ramp.tones(), &tiles, &cfg.render);
            }
        }
        Command::Card { id, seed, json } => {
            let entry = card::find(&cfg.cards, &id)
                .with_context(|| format!("no card with id {id:?}"))?;
            let mut rng = make_rng(seed.or(cfg.palette.seed));
            let card = card::Card::build(entry, &cfg.palette, &mut rng)
                .with_context(|| format!("build card {id:?}"))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&card)?);
            } else {
                println!("{} @{}", card.name, card.id);
                if !card.description.is_empty() {
                    println!("{}", card.description);
                }
                print_palette(card.accent, card.ramp.tones(), &card.tiles, &cfg.render);
            }
        }
        Command::List => {
            for (i, c) in cfg.cards.iter().enumerate() {
                let color = match c.color {
                    Some(rgb) => rgb.to_hex(),
                    None => "(none)".to_string(),
                };
                println!("{:02}. {} @{}  {}", i + 1, c.name, c.id, color);
            }
        }
    }

    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn swatch(notation: ColorNotation, color: Hsv, cell: &str) -> String {
    let rgb = notation.resolve(color);
    style(cell)
        .on(CtColor::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        })
        .to_string()
}

fn print_palette(accent: Hsv, ramp: &[Hsv], tiles: &TileSequence, render: &config::RenderConfig) {
    let notation = render.notation;
    let cell = " ".repeat(render.tile_width.max(1) as usize);

    println!(
        "accent {} h={:.1} s={:.1} v={:.1}  {}",
        swatch(notation, accent, &cell),
        accent.h,
        accent.s,
        accent.v,
        notation.css(accent)
    );
    let ramp_line: String = ramp.iter().map(|t| swatch(notation, *t, &cell)).collect();
    println!("ramp   {}", ramp_line);
    for row in tiles.rows(render.columns) {
        let line: String = row.iter().map(|t| swatch(notation, *t, &cell)).collect();
        println!("{}", line);
    }
}
