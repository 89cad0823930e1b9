/*!
 # BLE lighting frame encoders

 A Rust library that turns high level lighting commands into the fixed length
 frames understood by BLE00 fixtures, DMX bridges, plain LED strips and the
 settings channel of the same controller family.

 Every encoder is a pure function returning a [`Frame`]; writing the bytes to a
 GATT characteristic is left to the caller.

 ## Features

 * Power, RGB color, brightness and color temperature for BLE00, DMX and LED
 * DMX patterns, microphone EQ modes and custom pattern sequences
 * DMX timing lists with an injectable clock
 * Settings: welcome lights, zone (box) selection and strip length

 ## Example

 ```rust
 use ble_dmx_frames::*;

 fn main() -> Result<()> {
     let frame = ble00::power(true);
     assert_eq!(frame.as_bytes(), &[0x7E, 0xFF, 0x04, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0xEF]);

     // Percentages are clamped and scaled to the 0-32 hardware range
     let frame = dmx::brightness(150);
     assert_eq!(frame[3], 32);

     // Timing frames read the current weekday and time from a clock
     let clock = FixedClock::new(3, 18, 30);
     let timing = Timing::new(20, 0, 5, [true, true, true, true, true, false, false]);
     let frame = dmx::timing(&timing, 0, &clock);
     assert_eq!(frame[1], 0x30);

     Ok(())
 }
 ```
*/

use thiserror::Error;

/// Custom error types for the frame encoders
#[derive(Error, Debug)]
pub enum Error {
    /// Weekday selection did not have exactly seven entries
    #[error("Weekday selection must have 7 entries, got {0}")]
    WeekdayCount(usize),

    /// List position does not fit in the low nibble of a packed byte
    #[error("List position {0} does not fit in 4 bits (0..15)")]
    PositionOverflow(i32),

    /// The device family has no encoder for the command
    #[error("{family} devices do not support the {command} command")]
    Unsupported {
        family: frame::Family,
        command: &'static str,
    },

    /// Color could not be parsed
    #[error("Invalid color '{0}', expected R,G,B or #RRGGBB")]
    InvalidColor(String),

    /// Day list could not be parsed
    #[error("Invalid day list '{0}'")]
    InvalidDays(String),

    /// Unknown zone name
    #[error("Unknown box '{0}'")]
    InvalidBox(String),

    /// Unknown custom pattern mode or direction
    #[error("Unknown custom pattern mode '{0}'")]
    InvalidMode(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod ble00;
pub mod clock;
pub mod color;
pub mod command;
pub mod dmx;
pub mod effects;
pub mod encoding;
pub mod frame;
pub mod led;
pub mod schedule;
pub mod settings;

// Re-export key types
pub use clock::{Clock, ClockReading, FixedClock, SystemClock};
pub use color::Color;
pub use command::{Command, Encoder, EncoderConfig};
pub use effects::{CustomPatternMode, Direction, LightBox};
pub use frame::{Family, Frame, FrameFormat, FrameTemplate};
pub use schedule::{Timing, Weekdays, WEEK_DAYS};
