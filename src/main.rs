//! ufp-convert - convert UniFi Protect JSON between wire and native form.
//!
//! Reads one JSON object on stdin and writes the converted object to stdout:
//! - `to-native`: wire dict → typed model → native dict
//! - `to-wire`:   native dict → typed model → wire dict

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{Map, Value};
use std::io::{self, Read, Write};

use ufp_data::models::{Bridge, Event, Light};
use ufp_data::{create_from_unifi_dict_with, ApiHandle, ConversionMode, Error, ProtectObject, Result};

#[derive(Debug, Parser)]
#[command(name = "ufp-convert", version, about)]
struct Cli {
    #[command(subcommand)]
    direction: Direction,

    /// Model type of the input; `auto` dispatches on `modelKey`.
    #[arg(long, value_enum, default_value_t = ModelArg::Auto, global = true)]
    model: ModelArg,

    /// Validate every field while constructing (same as UFP_DEBUG=1).
    #[arg(long, env = "UFP_DEBUG", global = true)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Direction {
    /// Wire dict to native dict
    ToNative,
    /// Native dict to wire dict
    ToWire,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModelArg {
    Auto,
    Bridge,
    Light,
    Event,
}

fn to_native<T: ProtectObject>(data: Map<String, Value>, mode: ConversionMode) -> Result<Map<String, Value>> {
    T::from_unifi_dict_with(data, ApiHandle::none(), mode)?.to_native()
}

fn to_wire<T: ProtectObject>(data: Map<String, Value>, mode: ConversionMode) -> Result<Map<String, Value>> {
    T::from_dict_with(data, ApiHandle::none(), mode)?.unifi_dict(None)
}

fn convert(cli: &Cli, data: Map<String, Value>) -> Result<Map<String, Value>> {
    let mode = if cli.debug {
        ConversionMode::Validated
    } else {
        ConversionMode::Fast
    };

    match (cli.direction, cli.model) {
        (Direction::ToNative, ModelArg::Auto) => {
            create_from_unifi_dict_with(data, ApiHandle::none(), mode)?.to_native()
        }
        (Direction::ToNative, ModelArg::Bridge) => to_native::<Bridge>(data, mode),
        (Direction::ToNative, ModelArg::Light) => to_native::<Light>(data, mode),
        (Direction::ToNative, ModelArg::Event) => to_native::<Event>(data, mode),
        // native dicts carry `model` rather than `modelKey`
        (Direction::ToWire, ModelArg::Auto) => {
            let key = data
                .get("model")
                .and_then(Value::as_str)
                .ok_or_else(|| Error::unknown_model("native dict has no model field"))?;
            match key {
                "bridge" => to_wire::<Bridge>(data, mode),
                "light" => to_wire::<Light>(data, mode),
                "event" => to_wire::<Event>(data, mode),
                other => Err(Error::unknown_model(format!("unsupported model: {}", other))),
            }
        }
        (Direction::ToWire, ModelArg::Bridge) => to_wire::<Bridge>(data, mode),
        (Direction::ToWire, ModelArg::Light) => to_wire::<Light>(data, mode),
        (Direction::ToWire, ModelArg::Event) => to_wire::<Event>(data, mode),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    ufp_data::observability::init_tracing();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let data: Map<String, Value> = serde_json::from_str(&input)?;

    tracing::debug!(direction = ?cli.direction, model = ?cli.model, debug = cli.debug, "converting");
    let output = convert(&cli, data)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &output)?;
    writeln!(stdout)?;
    Ok(())
}
