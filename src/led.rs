/*!
 # Plain LED strips

 Same framing as the DMX bridges (`0x7B` .. `0xBF`) but power and color are
 addressed to `0x01`, and brightness frames carry a `0x02` mode byte.
*/

use tracing::{debug, trace};

use crate::color::Color;
use crate::encoding::scale_percentage;
use crate::frame::{Family, Frame, FrameTemplate, FILL};

pub const CMD_BRIGHTNESS: u8 = 0x01;
pub const CMD_POWER: u8 = 0x04;
pub const CMD_COLOR: u8 = 0x07;
pub const CMD_COLOR_TEMP: u8 = 0x09;

/// Address used by power and color frames
pub const STRIP_ADDRESS: u8 = 0x01;

const LEVEL_MODE: u8 = 0x02;

/// Turns the strip on or off
pub fn power(on: bool) -> Frame {
    debug!("LED power {}", if on { "on" } else { "off" });
    let state = if on { 0x03 } else { 0x02 };
    let frame = FrameTemplate::for_family(Family::Led, STRIP_ADDRESS, CMD_POWER)
        .build(&[state, FILL, FILL, FILL, FILL]);
    trace!("LED frame: {}", frame);
    frame
}

/// Sets a static RGB color
pub fn color(color: Color) -> Frame {
    debug!("LED color {}", color);
    let frame = FrameTemplate::for_family(Family::Led, STRIP_ADDRESS, CMD_COLOR).build(&[
        color.red,
        color.green,
        color.blue,
        0x00,
        FILL,
    ]);
    trace!("LED frame: {}", frame);
    frame
}

fn level(code: u8, percent: i32) -> Frame {
    let (scaled, clamped) = scale_percentage(percent);
    let frame = FrameTemplate::for_family(Family::Led, FILL, code)
        .build(&[scaled, clamped, LEVEL_MODE, FILL, FILL]);
    trace!("LED frame: {}", frame);
    frame
}

/// Sets the brightness as a percentage (clamped to 0-100)
pub fn brightness(percent: i32) -> Frame {
    debug!("LED brightness {}%", percent);
    level(CMD_BRIGHTNESS, percent)
}

/// Sets the white color temperature as a percentage (clamped to 0-100)
pub fn color_temperature(percent: i32) -> Frame {
    debug!("LED color temperature {}%", percent);
    level(CMD_COLOR_TEMP, percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_frames_are_addressed_to_strip() {
        assert_eq!(
            power(true).as_bytes(),
            &[0x7B, 0x01, 0x04, 0x03, 0xFF, 0xFF, 0xFF, 0xFF, 0xBF]
        );
        assert_eq!(
            power(false).as_bytes(),
            &[0x7B, 0x01, 0x04, 0x02, 0xFF, 0xFF, 0xFF, 0xFF, 0xBF]
        );
    }

    #[test]
    fn color_frame() {
        assert_eq!(
            color(Color::new(128, 64, 255)).as_bytes(),
            &[0x7B, 0x01, 0x07, 0x80, 0x40, 0xFF, 0x00, 0xFF, 0xBF]
        );
    }

    #[test]
    fn level_frames_carry_mode_byte() {
        assert_eq!(
            brightness(25).as_bytes(),
            &[0x7B, 0xFF, 0x01, 8, 25, 0x02, 0xFF, 0xFF, 0xBF]
        );
        assert_eq!(
            color_temperature(101).as_bytes(),
            &[0x7B, 0xFF, 0x09, 32, 100, 0x02, 0xFF, 0xFF, 0xBF]
        );
    }
}
