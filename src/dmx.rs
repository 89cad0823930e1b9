/*!
 # DMX bridge fixtures

 Frames start with `0x7B` and end with `0xBF`. Besides the basic light
 controls, DMX bridges support built-in patterns, a microphone driven EQ
 mode, timing lists and custom color patterns.

 ## Timing lists

 A timing list is written one entry per frame, each entry carrying its list
 position packed together with the current weekday, and closed with a
 terminator frame holding the list size. Both frames also carry the current
 time so the bridge can set its clock; the time comes from a [`Clock`].

 ## Custom patterns

 Send the colors first (positions start at 1), then pick a mode and a
 direction. Mode and direction are independent: a pattern can be set, given a
 mode and then reversed without resending the colors.
*/

use tracing::{debug, trace};

use crate::clock::{Clock, ClockReading};
use crate::color::Color;
use crate::effects::{CustomPatternMode, Direction};
use crate::encoding::{pack_day_with_position, pack_day_with_position_checked, scale_percentage};
use crate::frame::{Family, Frame, FrameTemplate, FILL};
use crate::schedule::Timing;
use crate::Result;

pub const CMD_BRIGHTNESS: u8 = 0x01;
pub const CMD_PATTERN: u8 = 0x03;
pub const CMD_POWER: u8 = 0x04;
pub const CMD_COLOR: u8 = 0x07;
pub const CMD_COLOR_TEMP: u8 = 0x09;
pub const CMD_MIC_EQ: u8 = 0x0B;
pub const CMD_CUSTOM_DIRECTION: u8 = 0x0D;
pub const CMD_CUSTOM_COLOR: u8 = 0x0E;
pub const CMD_TIMING_END: u8 = 0x10;
pub const CMD_CUSTOM_MODE: u8 = 0x13;

/// Header of a timing list entry; the entry has no fixed address or code
pub const TIMING_HEADER: u8 = 0x8B;

/// Highest built-in pattern index, 0 turns patterns off
pub const PATTERN_MAX: i32 = 210;

/// Highest EQ mode, 0 turns the microphone off
pub const EQ_MODE_MAX: i32 = 255;

/// Marker preceding the color in a custom pattern step
const CUSTOM_COLOR_MARKER: u8 = 0xFD;

const POWER_ON: u8 = 0x03;
const POWER_OFF: u8 = 0x02;

fn template(code: u8) -> FrameTemplate {
    FrameTemplate::for_family(Family::Dmx, FILL, code)
}

/// Turns the lights on or off
pub fn power(on: bool) -> Frame {
    debug!("DMX power {}", if on { "on" } else { "off" });
    let state = if on { POWER_ON } else { POWER_OFF };
    let frame = template(CMD_POWER).build(&[state, FILL, FILL, FILL, FILL]);
    trace!("DMX frame: {}", frame);
    frame
}

/// Sets a static RGB color
pub fn color(color: Color) -> Frame {
    debug!("DMX color {}", color);
    let frame = FrameTemplate::for_family(Family::Dmx, 0x00, CMD_COLOR).build(&[
        color.red,
        color.green,
        color.blue,
        0x00,
        FILL,
    ]);
    trace!("DMX frame: {}", frame);
    frame
}

/// Sets the brightness as a percentage (clamped to 0-100)
pub fn brightness(percent: i32) -> Frame {
    let (scaled, clamped) = scale_percentage(percent);
    debug!("DMX brightness {}% ({}/32)", clamped, scaled);
    let frame = template(CMD_BRIGHTNESS).build(&[scaled, clamped, 0x00, FILL, FILL]);
    trace!("DMX frame: {}", frame);
    frame
}

/// Sets the white color temperature as a percentage (clamped to 0-100)
pub fn color_temperature(percent: i32) -> Frame {
    let (scaled, clamped) = scale_percentage(percent);
    debug!("DMX color temperature {}% ({}/32)", clamped, scaled);
    let frame = template(CMD_COLOR_TEMP).build(&[scaled, clamped, FILL, FILL, FILL]);
    trace!("DMX frame: {}", frame);
    frame
}

/// Selects a built-in pattern (clamped to 0-210, 0 = off)
pub fn pattern(index: i32) -> Frame {
    let clamped = index.clamp(0, PATTERN_MAX);
    debug!("DMX pattern {} (requested {})", clamped, index);
    let frame = template(CMD_PATTERN).build(&[clamped as u8, FILL, FILL, FILL, FILL]);
    trace!("DMX frame: {}", frame);
    frame
}

/// Enables the built-in microphone with an EQ mode (clamped to 0-255, 0 = mic off).
///
/// This is the only eight byte frame.
pub fn mic_eq(mode: i32) -> Frame {
    let clamped = mode.clamp(0, EQ_MODE_MAX);
    debug!("DMX mic EQ mode {} (requested {})", clamped, mode);
    let frame = template(CMD_MIC_EQ).build(&[clamped as u8, 0x00, FILL, FILL]);
    trace!("DMX frame: {}", frame);
    frame
}

fn timing_frame(timing: &Timing, packed_day_position: u8, now: ClockReading) -> Frame {
    let frame = FrameTemplate::new(
        TIMING_HEADER,
        packed_day_position,
        timing.mode as u8,
        Family::Dmx.trailer(),
    )
    .build(&[
        timing.weekdays.bits(),
        timing.hour as u8,
        timing.minute as u8,
        now.hour,
        now.minute,
    ]);
    trace!("DMX frame: {}", frame);
    frame
}

/// Sets one timing list entry.
///
/// The current weekday is packed with `list_position` into one byte; positions
/// above 15 overflow into the weekday bits.
pub fn timing(timing: &Timing, list_position: i32, clock: &impl Clock) -> Frame {
    let now = clock.now();
    debug!(
        "DMX timing #{} at {}:{:02} days {} mode {}",
        list_position, timing.hour, timing.minute, timing.weekdays, timing.mode
    );
    timing_frame(
        timing,
        pack_day_with_position(now.weekday, list_position),
        now,
    )
}

/// Like [`timing`] but rejects list positions that do not fit in four bits
pub fn timing_checked(timing: &Timing, list_position: i32, clock: &impl Clock) -> Result<Frame> {
    let now = clock.now();
    let packed = pack_day_with_position_checked(now.weekday, list_position)?;
    debug!("DMX timing #{} (checked)", list_position);
    Ok(timing_frame(timing, packed, now))
}

fn timing_end_frame(list_size: i32, now: ClockReading) -> Frame {
    let frame = template(CMD_TIMING_END).build(&[
        now.weekday,
        list_size as u8,
        FILL,
        now.hour,
        now.minute,
    ]);
    trace!("DMX frame: {}", frame);
    frame
}

/// Closes a timing list of `list_size` entries
pub fn timing_end(list_size: i32, clock: &impl Clock) -> Frame {
    debug!("DMX timing list end, {} entries", list_size);
    timing_end_frame(list_size, clock.now())
}

/// Frames for a whole timing list: one entry per timing (positions from 0) and the terminator.
///
/// The clock is read once so every frame carries the same time.
pub fn timing_list(timings: &[Timing], clock: &impl Clock) -> Vec<Frame> {
    let now = clock.now();
    debug!("DMX timing list with {} entries", timings.len());
    timings
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            timing_frame(
                entry,
                pack_day_with_position(now.weekday, position as i32),
                now,
            )
        })
        .chain(std::iter::once(timing_end_frame(timings.len() as i32, now)))
        .collect()
}

/// Sets one color of a custom pattern. `list_position` starts at 1.
pub fn custom_color(color: Color, list_position: u8, list_size: u8) -> Frame {
    debug!(
        "DMX custom pattern color {} at {}/{}",
        color, list_position, list_size
    );
    let frame = FrameTemplate::for_family(Family::Dmx, list_position, CMD_CUSTOM_COLOR).build(&[
        CUSTOM_COLOR_MARKER,
        color.red,
        color.green,
        color.blue,
        list_size,
    ]);
    trace!("DMX frame: {}", frame);
    frame
}

/// Sets the custom pattern mode
pub fn custom_mode(mode: CustomPatternMode) -> Frame {
    debug!("DMX custom pattern mode {}", mode);
    let frame = template(CMD_CUSTOM_MODE).build(&[mode.ordinal(), FILL, FILL, FILL, FILL]);
    trace!("DMX frame: {}", frame);
    frame
}

/// Sets the custom pattern direction
pub fn custom_direction(direction: Direction) -> Frame {
    debug!("DMX custom pattern direction {:?}", direction);
    let frame = template(CMD_CUSTOM_DIRECTION).build(&[direction.code(), FILL, FILL, FILL, FILL]);
    trace!("DMX frame: {}", frame);
    frame
}

/// All frames for a custom pattern: the colors, then the mode, then the direction
pub fn custom_pattern(
    colors: &[Color],
    mode: CustomPatternMode,
    direction: Direction,
) -> Vec<Frame> {
    let list_size = colors.len() as u8;
    colors
        .iter()
        .enumerate()
        .map(|(i, c)| custom_color(*c, (i + 1) as u8, list_size))
        .chain([custom_mode(mode), custom_direction(direction)])
        .collect()
}
