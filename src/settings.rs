/*!
 # Settings channel

 Welcome lights and box selection share command `0x12` on `0x7E`/`0xEF`
 frames. Strip length is configured with a DMX style `0x7B`/`0xBF` frame.
*/

use tracing::{debug, trace, warn};

use crate::effects::LightBox;
use crate::frame::{Family, Frame, FrameTemplate, FILL};

pub const CMD_SELECT: u8 = 0x12;
pub const CMD_STRIP_LENGTH: u8 = 0x05;

pub const STRIP_LENGTH_MIN: i32 = 1;
pub const STRIP_LENGTH_MAX: i32 = 1024;

const WELCOME_ON: u8 = 0x00;
const WELCOME_OFF: u8 = 0x01;

fn select(value: u8) -> Frame {
    let frame = FrameTemplate::for_family(Family::Settings, FILL, CMD_SELECT)
        .build(&[value, FILL, FILL, FILL, FILL]);
    trace!("Settings frame: {}", frame);
    frame
}

/// Turns the welcome lights on or off
pub fn welcome(on: bool) -> Frame {
    debug!("Welcome lights {}", if on { "on" } else { "off" });
    select(if on { WELCOME_ON } else { WELCOME_OFF })
}

/// Selects the light box subsequent commands apply to
pub fn select_box(light_box: LightBox) -> Frame {
    debug!("Selecting box {} ({:#04x})", light_box, light_box.code());
    select(light_box.code())
}

/// Sets the number of LEDs on the addressable strip (clamped to 1-1024).
///
/// Only the low byte of the clamped length reaches the wire.
pub fn strip_length(length: i32) -> Frame {
    let clamped = length.clamp(STRIP_LENGTH_MIN, STRIP_LENGTH_MAX);
    if clamped != length {
        warn!(
            "Strip length {} out of range ({}-{}), limiting to {}",
            length, STRIP_LENGTH_MIN, STRIP_LENGTH_MAX, clamped
        );
    }
    if clamped > 0xFF {
        warn!(
            "Strip length {} is sent as its low byte {:#04x}",
            clamped,
            clamped as u8
        );
    }
    debug!("Strip length {}", clamped);
    let frame = FrameTemplate::new(
        Family::Dmx.header(),
        FILL,
        CMD_STRIP_LENGTH,
        Family::Dmx.trailer(),
    )
    .build(&[0x04, 0x00, clamped as u8, 0x03, FILL]);
    trace!("Settings frame: {}", frame);
    frame
}
