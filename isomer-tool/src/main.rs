mod config;
mod error;
mod format;
mod render;

use std::io::Write;

use clap::{Parser, Subcommand};
use isomer_core::{IpAddr, Season, Tagged};
use tracing::debug;
use tracing::level_filters::LevelFilter;

use crate::config::{load_config, resolve_settings};
use crate::format::OutputFormat;

#[derive(Parser)]
#[command(name = "iso")]
#[command(about = "Inspect tagged IP addresses and season flags", long_about = None)]
struct Cli {
    /// Output format: text, json or cbor
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the fixed demonstration sequence
    Demo,

    /// Show a season value, given as an integer or names like "winter, fall"
    Season {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Build an IP address
    Ip {
        #[command(subcommand)]
        kind: IpKind,
    },
}

#[derive(Subcommand)]
enum IpKind {
    /// IPv4 from four octets
    V4 {
        #[arg(allow_negative_numbers = true)]
        octets: Vec<i32>,

        /// Reject octets outside 0..=255
        #[arg(long)]
        strict: bool,
    },

    /// IPv6 from free text
    V6 { value: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => render::run_demo(&mut out)?,
        Command::Season { value } => {
            let settings = resolve_settings(load_config(), false, cli.format);
            let season: Season = value.parse()?;
            debug!(value = season.to_int(), format = %settings.format, "rendering season");
            render::print_season(&mut out, season, settings.format)?;
        }
        Command::Ip { kind } => {
            let (addr, format) = match kind {
                IpKind::V4 { octets, strict } => {
                    let settings = resolve_settings(load_config(), strict, cli.format);
                    let [p0, p1, p2, p3] = <[i32; 4]>::try_from(octets).map_err(|given| {
                        anyhow::anyhow!("expected 4 octets, got {}", given.len())
                    })?;
                    let addr = if settings.strict_octets {
                        IpAddr::try_v4(p0, p1, p2, p3)?
                    } else {
                        IpAddr::v4(p0, p1, p2, p3)
                    };
                    (addr, settings.format)
                }
                IpKind::V6 { value } => {
                    let settings = resolve_settings(load_config(), false, cli.format);
                    (IpAddr::v6(value), settings.format)
                }
            };
            debug!(tag = addr.tag(), %format, "rendering address");
            render::print_ip(&mut out, &addr, format)?;
        }
    }

    out.flush()?;
    Ok(())
}
