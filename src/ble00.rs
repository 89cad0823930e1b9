/*!
 # BLE00 fixtures

 Frames start with `0x7E` and end with `0xEF`; the address byte is always
 `0xFF`.
*/

use tracing::{debug, trace};

use crate::color::Color;
use crate::encoding::scale_percentage;
use crate::frame::{Family, Frame, FrameTemplate, FILL};

pub const CMD_BRIGHTNESS: u8 = 0x01;
pub const CMD_POWER: u8 = 0x04;
pub const CMD_COLOR: u8 = 0x05;
pub const CMD_COLOR_TEMP: u8 = 0x09;

/// Sub-command of [`CMD_COLOR`] selecting RGB mode
const COLOR_MODE_RGB: u8 = 0x03;

fn template(code: u8) -> FrameTemplate {
    FrameTemplate::for_family(Family::Ble00, FILL, code)
}

/// Turns the lights on or off
pub fn power(on: bool) -> Frame {
    debug!("BLE00 power {}", if on { "on" } else { "off" });
    let frame = template(CMD_POWER).build(&[u8::from(on), FILL, FILL, FILL, FILL]);
    trace!("BLE00 frame: {}", frame);
    frame
}

/// Sets a static RGB color
pub fn color(color: Color) -> Frame {
    debug!("BLE00 color {}", color);
    let frame = template(CMD_COLOR).build(&[
        COLOR_MODE_RGB,
        color.red,
        color.green,
        color.blue,
        FILL,
    ]);
    trace!("BLE00 frame: {}", frame);
    frame
}

/// Sets the brightness as a percentage (clamped to 0-100)
pub fn brightness(percent: i32) -> Frame {
    let (scaled, clamped) = scale_percentage(percent);
    debug!("BLE00 brightness {}% ({}/32)", clamped, scaled);
    let frame = template(CMD_BRIGHTNESS).build(&[scaled, clamped, FILL, FILL, FILL]);
    trace!("BLE00 frame: {}", frame);
    frame
}

/// Sets the white color temperature as a percentage (clamped to 0-100)
pub fn color_temperature(percent: i32) -> Frame {
    let (scaled, clamped) = scale_percentage(percent);
    debug!("BLE00 color temperature {}% ({}/32)", clamped, scaled);
    let frame = template(CMD_COLOR_TEMP).build(&[scaled, clamped, FILL, FILL, FILL]);
    trace!("BLE00 frame: {}", frame);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_frames() {
        assert_eq!(
            power(true).as_bytes(),
            &[0x7E, 0xFF, 0x04, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0xEF]
        );
        assert_eq!(
            power(false).as_bytes(),
            &[0x7E, 0xFF, 0x04, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xEF]
        );
    }

    #[test]
    fn color_frame_keeps_channels_verbatim() {
        assert_eq!(
            color(Color::new(0xFF, 0x80, 0x01)).as_bytes(),
            &[0x7E, 0xFF, 0x05, 0x03, 0xFF, 0x80, 0x01, 0xFF, 0xEF]
        );
    }

    #[test]
    fn brightness_is_scaled_and_echoed() {
        assert_eq!(
            brightness(50).as_bytes(),
            &[0x7E, 0xFF, 0x01, 16, 50, 0xFF, 0xFF, 0xFF, 0xEF]
        );
        assert_eq!(brightness(150)[3..5], [32, 100]);
        assert_eq!(brightness(-5)[3..5], [0, 0]);
    }

    #[test]
    fn color_temperature_frame() {
        assert_eq!(
            color_temperature(75).as_bytes(),
            &[0x7E, 0xFF, 0x09, 24, 75, 0xFF, 0xFF, 0xFF, 0xEF]
        );
    }
}
