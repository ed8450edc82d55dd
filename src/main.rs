// SPDX-License-Identifier: MPL-2.0
use iced_track::app::{self, Flags};

fn parse_start(value: &str) -> Result<(f64, f64), String> {
    let (lat, lng) = value
        .split_once(',')
        .ok_or_else(|| String::from("expected lat,lng"))?;
    let lat: f64 = lat.trim().parse().map_err(|_| String::from("bad latitude"))?;
    let lng: f64 = lng.trim().parse().map_err(|_| String::from("bad longitude"))?;
    Ok((lat, lng))
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        start: args.opt_value_from_fn("--start", parse_start).unwrap(),
        interval_ms: args.opt_value_from_str("--interval-ms").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        no_provider: args.contains("--no-provider"),
    };

    app::run(flags)
}
