/*!
 # Command dispatch

 [`Command`] describes any request the encoders understand. An [`Encoder`]
 bound to a [`Family`] turns commands into frames, rejecting commands the
 family has no frame for.
*/

use tracing::{debug, instrument};

use crate::clock::{Clock, SystemClock};
use crate::color::Color;
use crate::effects::{CustomPatternMode, Direction, LightBox};
use crate::frame::{Family, Frame};
use crate::schedule::Timing;
use crate::{ble00, dmx, led, settings, Error, Result};

/// A high level lighting command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Turn the lights on or off
    Power(bool),
    /// Static RGB color
    Color(Color),
    /// Brightness percentage
    Brightness(i32),
    /// Color temperature percentage
    ColorTemperature(i32),
    /// Built-in pattern index
    Pattern(i32),
    /// Microphone EQ mode
    MicEq(i32),
    /// One timing list entry at a list position
    Timing { timing: Timing, list_position: i32 },
    /// Timing list terminator
    TimingEnd { list_size: i32 },
    /// One custom pattern color
    CustomColor {
        color: Color,
        list_position: u8,
        list_size: u8,
    },
    /// Custom pattern mode
    CustomMode(CustomPatternMode),
    /// Custom pattern direction
    CustomDirection(Direction),
    /// Welcome lights on or off
    Welcome(bool),
    /// Select a light box
    SelectBox(LightBox),
    /// Addressable strip length
    StripLength(i32),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Power(_) => "power",
            Command::Color(_) => "color",
            Command::Brightness(_) => "brightness",
            Command::ColorTemperature(_) => "color temperature",
            Command::Pattern(_) => "pattern",
            Command::MicEq(_) => "mic EQ",
            Command::Timing { .. } => "timing",
            Command::TimingEnd { .. } => "timing end",
            Command::CustomColor { .. } => "custom color",
            Command::CustomMode(_) => "custom mode",
            Command::CustomDirection(_) => "custom direction",
            Command::Welcome(_) => "welcome",
            Command::SelectBox(_) => "box",
            Command::StripLength(_) => "strip length",
        }
    }
}

/// Encoder behavior switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Reject timing list positions that overflow their nibble instead of sending them
    pub strict: bool,
}

/// Encodes commands for one device family
#[derive(Debug, Clone)]
pub struct Encoder<C: Clock = SystemClock> {
    family: Family,
    clock: C,
    config: EncoderConfig,
}

impl Encoder<SystemClock> {
    /// Encoder reading the local system time for timing frames
    pub fn new(family: Family) -> Self {
        Self::with_clock(family, SystemClock)
    }
}

impl<C: Clock> Encoder<C> {
    pub fn with_clock(family: Family, clock: C) -> Self {
        Self {
            family,
            clock,
            config: EncoderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EncoderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn config(&self) -> EncoderConfig {
        self.config
    }

    /// Encodes one command
    #[instrument(skip(self), fields(family = %self.family))]
    pub fn encode(&self, command: &Command) -> Result<Frame> {
        let unsupported = || Error::Unsupported {
            family: self.family,
            command: command.name(),
        };

        let frame = match (self.family, *command) {
            (Family::Ble00, Command::Power(on)) => ble00::power(on),
            (Family::Ble00, Command::Color(color)) => ble00::color(color),
            (Family::Ble00, Command::Brightness(percent)) => ble00::brightness(percent),
            (Family::Ble00, Command::ColorTemperature(percent)) => {
                ble00::color_temperature(percent)
            }

            (Family::Dmx, Command::Power(on)) => dmx::power(on),
            (Family::Dmx, Command::Color(color)) => dmx::color(color),
            (Family::Dmx, Command::Brightness(percent)) => dmx::brightness(percent),
            (Family::Dmx, Command::ColorTemperature(percent)) => dmx::color_temperature(percent),
            (Family::Dmx, Command::Pattern(index)) => dmx::pattern(index),
            (Family::Dmx, Command::MicEq(mode)) => dmx::mic_eq(mode),
            (
                Family::Dmx,
                Command::Timing {
                    timing,
                    list_position,
                },
            ) => {
                if self.config.strict {
                    dmx::timing_checked(&timing, list_position, &self.clock)?
                } else {
                    dmx::timing(&timing, list_position, &self.clock)
                }
            }
            (Family::Dmx, Command::TimingEnd { list_size }) => {
                dmx::timing_end(list_size, &self.clock)
            }
            (
                Family::Dmx,
                Command::CustomColor {
                    color,
                    list_position,
                    list_size,
                },
            ) => dmx::custom_color(color, list_position, list_size),
            (Family::Dmx, Command::CustomMode(mode)) => dmx::custom_mode(mode),
            (Family::Dmx, Command::CustomDirection(direction)) => dmx::custom_direction(direction),

            (Family::Led, Command::Power(on)) => led::power(on),
            (Family::Led, Command::Color(color)) => led::color(color),
            (Family::Led, Command::Brightness(percent)) => led::brightness(percent),
            (Family::Led, Command::ColorTemperature(percent)) => led::color_temperature(percent),

            (Family::Settings, Command::Welcome(on)) => settings::welcome(on),
            (Family::Settings, Command::SelectBox(light_box)) => settings::select_box(light_box),
            (Family::Settings, Command::StripLength(length)) => settings::strip_length(length),

            _ => return Err(unsupported()),
        };

        debug!("Encoded {} frame: {}", command.name(), frame);
        Ok(frame)
    }

    /// Encodes several commands, stopping at the first unsupported one
    pub fn encode_all<'a>(
        &self,
        commands: impl IntoIterator<Item = &'a Command>,
    ) -> Result<Vec<Frame>> {
        commands.into_iter().map(|c| self.encode(c)).collect()
    }
}
