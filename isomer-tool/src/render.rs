use std::io::Write;

use isomer_core::codec::{to_cbor, to_hex};
use isomer_core::{IpAddr, Season, Tagged};
use serde::Serialize;

use crate::error::ToolError;
use crate::format::OutputFormat;

/// Writes the fixed demonstration sequence.
pub fn run_demo(out: &mut impl Write) -> std::io::Result<()> {
    print_season_name(out, Season::WINTER)?;
    print_season_name(out, Season::FALL)?;

    let as_integer = Season::FALL.to_int();
    writeln!(out, "{} is actually {}", Season::FALL, as_integer)?;

    let as_season = Season::from_int(2);
    writeln!(out, "2 is {}", as_season)?;

    let as_season = Season::from_int(42);
    writeln!(out, "42 is {}", as_season)?;

    for season in [
        Season::SUMMER,
        Season::WINTER,
        Season::SPRING,
        Season::FALL,
        Season::WINTER_OR_SPRING,
        Season::from_int(42),
    ] {
        writeln!(out, "{}", season.describe())?;
    }

    let home = IpAddr::v4(127, 0, 0, 1);
    let loopback = IpAddr::v6("::1");
    writeln!(out, "home: {} {}", home.tag(), home)?;
    writeln!(out, "loopback: {} {}", loopback.tag(), loopback)?;

    Ok(())
}

fn print_season_name(out: &mut impl Write, season: Season) -> std::io::Result<()> {
    writeln!(out, "It is {}", season)
}

pub fn print_season(
    out: &mut impl Write,
    season: Season,
    format: OutputFormat,
) -> Result<(), ToolError> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{} is {}", season.to_int(), season)?;
            writeln!(out, "{}", season.describe())?;
            Ok(())
        }
        OutputFormat::Json => print_json(out, &season),
        OutputFormat::Cbor => print_cbor(out, &season),
    }
}

pub fn print_ip(out: &mut impl Write, addr: &IpAddr, format: OutputFormat) -> Result<(), ToolError> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{} {}", addr.tag(), addr)?;
            Ok(())
        }
        OutputFormat::Json => print_json(out, addr),
        OutputFormat::Cbor => print_cbor(out, addr),
    }
}

fn print_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<(), ToolError> {
    writeln!(out, "{}", serde_json::to_string(value)?)?;
    Ok(())
}

fn print_cbor<T: Serialize>(out: &mut impl Write, value: &T) -> Result<(), ToolError> {
    writeln!(out, "{}", to_hex(&to_cbor(value)?))?;
    Ok(())
}
