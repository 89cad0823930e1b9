use ble_dmx_frames::*;
use color_eyre::eyre::{eyre, Result};
use std::{env, io};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Parses one `command:args` line into a command
fn parse_line(line: &str) -> std::result::Result<Command, String> {
    let mut cmd = line.trim().splitn(2, ':');
    let name = cmd.next().unwrap_or_default();
    let arg = cmd.next().map(str::trim);

    let required = |what: &str| arg.ok_or_else(|| format!("no {what} given"));
    let number = |what: &str| -> std::result::Result<i32, String> {
        required(what)?
            .parse()
            .map_err(|_| format!("invalid {what}"))
    };

    let command = match name {
        "" => return Err("No command given".to_string()),
        "power_on" => Command::Power(true),
        "power_off" => Command::Power(false),
        "set_color" => Command::Color(required("color")?.parse().map_err(|e: Error| e.to_string())?),
        "set_brightness" => Command::Brightness(number("brightness")?),
        "set_color_temp" => Command::ColorTemperature(number("color temperature")?),
        "set_pattern" => Command::Pattern(number("pattern")?),
        "set_mic_eq" => Command::MicEq(number("EQ mode")?),
        "set_timing" => {
            // hour,minute,mode,days,position
            let fields: Vec<&str> = required("timing")?.splitn(5, ',').collect();
            let &[hour, minute, mode, days, position] = fields.as_slice() else {
                return Err("timing needs hour,minute,mode,days,position".to_string());
            };
            let int = |s: &str| s.trim().parse::<i32>().map_err(|_| format!("invalid number '{s}'"));
            let days: Weekdays = days.replace('+', ",").parse().map_err(|e: Error| e.to_string())?;
            Command::Timing {
                timing: Timing::with_weekdays(int(hour)?, int(minute)?, int(mode)?, days),
                list_position: int(position)?,
            }
        }
        "end_timing" => Command::TimingEnd {
            list_size: number("list size")?,
        },
        "set_custom_color" => {
            // position,size,R,G,B or position,size,#RRGGBB
            let fields: Vec<&str> = required("custom color")?.splitn(3, ',').collect();
            let &[position, size, color] = fields.as_slice() else {
                return Err("custom color needs position,size,color".to_string());
            };
            let byte = |s: &str| s.trim().parse::<u8>().map_err(|_| format!("invalid number '{s}'"));
            Command::CustomColor {
                color: color.parse().map_err(|e: Error| e.to_string())?,
                list_position: byte(position)?,
                list_size: byte(size)?,
            }
        }
        "set_custom_mode" => {
            Command::CustomMode(required("mode")?.parse().map_err(|e: Error| e.to_string())?)
        }
        "set_custom_direction" => Command::CustomDirection(
            required("direction")?
                .parse()
                .map_err(|e: Error| e.to_string())?,
        ),
        "welcome_on" => Command::Welcome(true),
        "welcome_off" => Command::Welcome(false),
        "select_box" => {
            Command::SelectBox(required("box")?.parse().map_err(|e: Error| e.to_string())?)
        }
        "set_strip_length" => Command::StripLength(number("strip length")?),
        other => return Err(format!("Unknown command: {other}")),
    };
    Ok(command)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| EnvFilter::new("ble_dmx_frames=warn,blefd=info")),
        )
        .with_writer(io::stderr)
        .compact()
        .init();

    color_eyre::install()?;

    // The device family comes from the command line; --strict enables nibble checks
    let usage = "Usage: blefd <ble00|dmx|led|settings> [--strict]";
    let args: Vec<_> = env::args().collect();
    if args.len() < 2 {
        eprintln!("{usage}");
        std::process::exit(1);
    }
    if args[1] == "-h" || args[1] == "--help" {
        eprintln!("{usage}");
        std::process::exit(0);
    }

    let family: Family = args[1].parse().map_err(|e: String| eyre!(e))?;
    let strict = args.iter().skip(2).any(|a| a == "--strict");
    let encoder = Encoder::new(family).with_config(EncoderConfig { strict });
    debug!("Encoding for {} (strict: {})", family, strict);

    // Inform about successful initialization
    println!("OK");

    // Mainloop: one command per line, one frame or error per line
    let mut input = String::new();
    loop {
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            debug!("stdin closed, exiting");
            return Ok(());
        }

        match parse_line(&input).and_then(|c| encoder.encode(&c).map_err(|e| e.to_string())) {
            Ok(frame) => println!("OK {frame}"),
            Err(e) => {
                warn!("Rejected '{}': {}", input.trim(), e);
                eprintln!("ERR {e}");
            }
        }
    }
}
