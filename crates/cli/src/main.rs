#![deny(unsafe_code)]
//! CLI binary for the colored-tiles pointer toy.
//!
//! Subcommands:
//! - `color <r> <g> <b>` or `color <#rrggbb>`: build a color from raw channels or hex
//! - `replay [x,y ...]`: feed pointer offsets through the page, optionally write PNG swatches

mod coords;
mod error;

use clap::{Parser, Subcommand};
use colored_tiles_core::history::TileHistory;
use colored_tiles_core::surface::{MemoryContainer, MemoryPreview, MemoryText};
use colored_tiles_core::{color, ChannelInput, Rgb, TilePage};
use colored_tiles_snapshot::SwatchLayout;
use error::CliError;
use serde_json::Value;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "colored-tiles", about = "Pointer-to-color tile toy, headless")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a color from three raw channel values, or from one `#rrggbb` string.
    ///
    /// Each channel is read as a JSON scalar (so `1.5` is a float and `"7"` is text);
    /// anything else is treated as text. Rejected channels become 0.
    Color {
        /// Red channel, or the whole color as `#rrggbb`.
        #[arg(allow_negative_numbers = true)]
        red: String,
        #[arg(allow_negative_numbers = true)]
        green: Option<String>,
        #[arg(allow_negative_numbers = true)]
        blue: Option<String>,
    },
    /// Replay pointer offsets through the tile page.
    Replay {
        /// Offsets as `x,y` pairs.
        #[arg(allow_hyphen_values = true)]
        offsets: Vec<String>,

        /// JSON file holding an array of `[x, y]` pairs, replayed after the positional offsets.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Write the recorded tiles as a PNG swatch grid.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Swatch edge length in pixels.
        #[arg(long, default_value_t = 32)]
        tile_size: usize,

        /// Swatches per row.
        #[arg(long, default_value_t = 16)]
        columns: usize,
    },
}

fn channel_arg(raw: &str) -> ChannelInput {
    serde_json::from_str::<Value>(raw)
        .map(ChannelInput::from)
        .unwrap_or_else(|_| ChannelInput::from(raw))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Color { red, green, blue } => {
            let mut rejected = Vec::new();
            let rgb = match (green, blue) {
                (Some(green), Some(blue)) => color::make_color_reporting(
                    channel_arg(&red),
                    channel_arg(&green),
                    channel_arg(&blue),
                    |e| {
                        log::error!("{e}");
                        rejected.push(e.to_string());
                    },
                ),
                (None, None) => Rgb::from_hex(&red)?,
                _ => {
                    return Err(CliError::Input(
                        "expected three channel values or one #rrggbb color".into(),
                    ))
                }
            };
            if cli.json {
                let info = serde_json::json!({
                    "color": rgb.to_css(),
                    "hex": rgb,
                    "rejected": rejected,
                });
                println!("{info:#}");
            } else {
                println!("{rgb}");
            }
        }
        Command::Replay {
            offsets,
            input,
            output,
            tile_size,
            columns,
        } => {
            let layout = SwatchLayout::new(tile_size, columns)?;

            let mut events = offsets
                .iter()
                .map(|s| coords::parse_pair(s))
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(path) = &input {
                let json =
                    std::fs::read_to_string(path).map_err(|source| CliError::ReadOffsets {
                        path: path.clone(),
                        source,
                    })?;
                events.extend(coords::parse_json(&json)?);
            }

            let mut page = TilePage::new(
                MemoryPreview::new(),
                TileHistory::new(MemoryText::new(), MemoryText::new(), MemoryContainer::new()),
            );
            let recorded = events
                .iter()
                .filter_map(|&(x, y)| page.on_pointer_move(x, y))
                .count();
            let dropped = events.len() - recorded;
            log::info!("replayed {} events, {dropped} dropped", events.len());

            let history = page.history();
            let tiles: Vec<Rgb> = history.iter().collect();

            if let Some(path) = &output {
                colored_tiles_snapshot::snapshot::write_png(&tiles, layout, path)
                    .map_err(|e| CliError::snapshot(path, e))?;
            }

            if cli.json {
                let info = serde_json::json!({
                    "events": events.len(),
                    "recorded": recorded,
                    "dropped": dropped,
                    "current_color": page.preview().fill(),
                    "count_label": history.count_label().text(),
                    "tiles": tiles,
                    "output": output.as_ref().map(|p| p.display().to_string()),
                });
                println!("{info:#}");
            } else {
                println!("current color: {}", page.preview().fill().unwrap_or("none"));
                println!("{}", history.count_label().text());
                if dropped > 0 {
                    println!("{dropped} events dropped");
                }
                if let Some(path) = &output {
                    eprintln!("wrote {} swatches -> {}", tiles.len(), path.display());
                }
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({
                "error": e.to_string(),
                "kind": e.kind(),
                "exit_code": e.exit_code(),
            });
            eprintln!("{j:#}");
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
