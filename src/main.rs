use ble_dmx_frames::*;
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{eyre, Result};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Device family to encode for
    #[arg(short, long, value_enum, default_value_t = FamilyArg::Ble00, global = true)]
    family: FamilyArg,

    /// Output notation
    #[arg(long, value_enum, default_value_t = FormatArg::Hex, global = true)]
    format: FormatArg,

    /// Fail on timing list positions above 15 instead of sending a corrupted day byte
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum, Debug)]
enum FamilyArg {
    /// BLE00 fixtures
    Ble00,
    /// DMX bridges
    Dmx,
    /// Plain LED strips
    Led,
    /// Settings channel
    Settings,
}

impl From<FamilyArg> for Family {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Ble00 => Family::Ble00,
            FamilyArg::Dmx => Family::Dmx,
            FamilyArg::Led => Family::Led,
            FamilyArg::Settings => Family::Settings,
        }
    }
}

#[derive(Clone, Copy, ValueEnum, Debug)]
enum FormatArg {
    /// 7E FF 04 ...
    Hex,
    /// [0x7E, 0xFF, ...]
    Array,
    /// [126, -1, ...]
    Signed,
}

impl From<FormatArg> for FrameFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Hex => FrameFormat::Hex,
            FormatArg::Array => FrameFormat::Array,
            FormatArg::Signed => FrameFormat::Signed,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Turn lights on
    On,
    /// Turn lights off
    Off,
    /// Set a static color
    Color {
        /// R,G,B or #RRGGBB
        color: Color,
    },
    /// Set brightness
    Brightness {
        /// Brightness percentage (0-100, clamped)
        #[arg(allow_negative_numbers = true)]
        level: i32,
    },
    /// Set color temperature
    ColorTemp {
        /// Color temperature percentage (0-100, clamped)
        #[arg(allow_negative_numbers = true)]
        percent: i32,
    },
    /// Select a built-in pattern (DMX)
    Pattern {
        /// Pattern index (0-210, 0 = off)
        #[arg(allow_negative_numbers = true)]
        index: i32,
    },
    /// Enable the microphone with an EQ mode (DMX)
    MicEq {
        /// EQ mode (0-255, 0 = microphone off)
        #[arg(allow_negative_numbers = true)]
        mode: i32,
    },
    /// Encode one timing list entry (DMX)
    Timing {
        /// Hour (0-24)
        #[arg(long, default_value_t = 8)]
        hour: i32,
        /// Minute
        #[arg(short, long, default_value_t = 0)]
        minute: i32,
        /// Pattern to switch to
        #[arg(long, default_value_t = 1)]
        mode: i32,
        /// Days (mon,tue,wed,thu,fri,sat,sun,all,weekdays,weekend)
        #[arg(short, long, default_value = "all")]
        days: Weekdays,
        /// Position in the timing list
        #[arg(short, long, default_value_t = 0)]
        position: i32,
    },
    /// Encode the timing list terminator (DMX)
    TimingEnd {
        /// Number of entries in the list
        size: i32,
    },
    /// Encode a full custom pattern (DMX)
    Custom {
        /// Colors of the pattern, each R,G,B or #RRGGBB
        #[arg(required = true, num_args = 1..)]
        colors: Vec<Color>,
        /// Playback mode (off, static, jump, gradient, flash, breathe, flow, strobe)
        #[arg(short, long, default_value = "jump")]
        mode: CustomPatternMode,
        /// Play the pattern in reverse
        #[arg(short, long)]
        reverse: bool,
    },
    /// Turn welcome lights on or off (settings)
    Welcome {
        /// on/off, true/false, yes/no
        #[arg(action = clap::ArgAction::Set, value_parser = clap::builder::BoolishValueParser::new())]
        on: bool,
    },
    /// Select a light box (settings)
    Box {
        /// center, left-front, right-front, left-rear or right-rear
        light_box: LightBox,
    },
    /// Set the addressable strip length (settings)
    StripLength {
        /// Number of LEDs (1-1024, clamped)
        #[arg(allow_negative_numbers = true)]
        length: i32,
    },
}

#[instrument]
fn to_commands(command: Commands) -> Vec<Command> {
    match command {
        Commands::On => vec![Command::Power(true)],
        Commands::Off => vec![Command::Power(false)],
        Commands::Color { color } => vec![Command::Color(color)],
        Commands::Brightness { level } => vec![Command::Brightness(level)],
        Commands::ColorTemp { percent } => vec![Command::ColorTemperature(percent)],
        Commands::Pattern { index } => vec![Command::Pattern(index)],
        Commands::MicEq { mode } => vec![Command::MicEq(mode)],
        Commands::Timing {
            hour,
            minute,
            mode,
            days,
            position,
        } => {
            debug!("Days value: {}", days);
            vec![Command::Timing {
                timing: Timing::with_weekdays(hour, minute, mode, days),
                list_position: position,
            }]
        }
        Commands::TimingEnd { size } => vec![Command::TimingEnd { list_size: size }],
        Commands::Custom {
            colors,
            mode,
            reverse,
        } => {
            let list_size = colors.len() as u8;
            colors
                .iter()
                .enumerate()
                .map(|(i, color)| Command::CustomColor {
                    color: *color,
                    list_position: (i + 1) as u8,
                    list_size,
                })
                .chain([
                    Command::CustomMode(mode),
                    Command::CustomDirection(Direction::from(!reverse)),
                ])
                .collect()
        }
        Commands::Welcome { on } => vec![Command::Welcome(on)],
        Commands::Box { light_box } => vec![Command::SelectBox(light_box)],
        Commands::StripLength { length } => vec![Command::StripLength(length)],
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries frames
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| EnvFilter::new("ble_dmx_frames=info,blefc=info")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();

    color_eyre::install()?;

    let cli = Cli::parse();
    debug!("Parsed command line arguments");

    let family = Family::from(cli.family);
    let encoder = Encoder::new(family).with_config(EncoderConfig { strict: cli.strict });
    let format = FrameFormat::from(cli.format);

    let commands = to_commands(cli.command);
    let frames = encoder
        .encode_all(&commands)
        .map_err(|e| eyre!("Failed to encode for {}: {}", family, e))?;

    for frame in &frames {
        println!("{}", frame.render(format));
    }
    info!("Encoded {} {} frame(s)", frames.len(), family);
    Ok(())
}
