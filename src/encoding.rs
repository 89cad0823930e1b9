/*!
 # Shared encoding primitives

 Small conversions used by several frame families: percentage scaling,
 weekday bitmasks, day/position packing and weekday normalization.
*/

use tracing::warn;

use crate::{Error, Result};

/// Highest value of the hardware intensity unit
pub const INTENSITY_MAX: i32 = 32;

/// Largest list position that fits in the low nibble of a packed byte
pub const NIBBLE_MAX: i32 = 0x0F;

/// Clamps a percentage to 0-100 and scales it to the 0-32 hardware range.
///
/// Returns `(scaled, clamped)`. Scaling truncates, so 50% is 16 and 99% is 31.
pub fn scale_percentage(percent: i32) -> (u8, u8) {
    let clamped = percent.clamp(0, 100);
    if clamped != percent {
        warn!(
            "Percentage {} out of range (0-100), limiting to {}",
            percent, clamped
        );
    }
    let scaled = clamped * INTENSITY_MAX / 100;
    (scaled as u8, clamped as u8)
}

/// Packs a Monday-first weekday selection into a bitmask (bit 0 = Monday)
pub fn pack_weekdays(days: &[bool; 7]) -> u8 {
    days.iter()
        .enumerate()
        .filter(|(_, selected)| **selected)
        .fold(0u8, |packed, (i, _)| packed | (1u8 << i))
}

/// Slice variant of [`pack_weekdays`]; anything but seven entries is a caller defect
pub fn try_pack_weekdays(days: &[bool]) -> Result<u8> {
    let days: &[bool; 7] = days
        .try_into()
        .map_err(|_| Error::WeekdayCount(days.len()))?;
    Ok(pack_weekdays(days))
}

/// Packs the current weekday (1-7) in the high nibble and the list position in the low nibble.
///
/// Positions above 15 are not masked and spill into the weekday nibble, which is
/// what the firmware has always received. Use [`pack_day_with_position_checked`]
/// to reject them instead.
pub fn pack_day_with_position(current_day: u8, list_position: i32) -> u8 {
    if !(0..=NIBBLE_MAX).contains(&list_position) {
        warn!(
            "List position {} does not fit in 4 bits, packed day byte will be corrupted",
            list_position
        );
    }
    ((i32::from(current_day) << 4) | list_position) as u8
}

/// Like [`pack_day_with_position`] but fails when the position overflows the nibble
pub fn pack_day_with_position_checked(current_day: u8, list_position: i32) -> Result<u8> {
    if !(0..=NIBBLE_MAX).contains(&list_position) {
        return Err(Error::PositionOverflow(list_position));
    }
    Ok(pack_day_with_position(current_day, list_position))
}

/// Maps a Sunday-first day number (1 = Sunday .. 7 = Saturday) to 1 = Monday .. 7 = Sunday
pub fn adjust_day_number(day: u8) -> u8 {
    if day == 1 {
        7
    } else {
        day.saturating_sub(1)
    }
}
