/*!
 # Scheduling values for DMX timing lists

 A timing list entry switches the fixture to a pattern at a given time on a
 set of weekdays. Weekdays travel as a single bitmask byte, Monday in bit 0.
*/

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::encoding::{pack_weekdays, try_pack_weekdays};
use crate::{Error, Result};

/// Weekday bitmask, bit 0 = Monday .. bit 6 = Sunday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Weekdays(u8);

impl Weekdays {
    pub const NONE: Weekdays = Weekdays(0x00);
    pub const MONDAY: Weekdays = Weekdays(0x01);
    pub const TUESDAY: Weekdays = Weekdays(0x02);
    pub const WEDNESDAY: Weekdays = Weekdays(0x04);
    pub const THURSDAY: Weekdays = Weekdays(0x08);
    pub const FRIDAY: Weekdays = Weekdays(0x10);
    pub const SATURDAY: Weekdays = Weekdays(0x20);
    pub const SUNDAY: Weekdays = Weekdays(0x40);
    /// Monday to Friday
    pub const WEEK_DAYS: Weekdays = Weekdays(0x1F);
    /// Saturday and Sunday
    pub const WEEKEND: Weekdays = Weekdays(0x60);
    pub const ALL: Weekdays = Weekdays(0x7F);

    /// Packs a Monday-first selection of seven days
    pub fn from_selection(days: [bool; 7]) -> Self {
        Self(pack_weekdays(&days))
    }

    /// Raw bits as written to the wire, unchecked
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether the day at `index` (0 = Monday) is selected
    pub fn contains_day(self, index: usize) -> bool {
        index < 7 && self.0 & (1u8 << index) != 0
    }
}

impl std::ops::BitOr for Weekdays {
    type Output = Weekdays;

    fn bitor(self, rhs: Self) -> Self::Output {
        Weekdays(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Weekdays {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl TryFrom<&[bool]> for Weekdays {
    type Error = Error;

    fn try_from(days: &[bool]) -> Result<Self> {
        try_pack_weekdays(days).map(Weekdays)
    }
}

impl fmt::Display for Weekdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

/// Monday-first single day masks
pub const WEEK_DAYS: [Weekdays; 7] = [
    Weekdays::MONDAY,
    Weekdays::TUESDAY,
    Weekdays::WEDNESDAY,
    Weekdays::THURSDAY,
    Weekdays::FRIDAY,
    Weekdays::SATURDAY,
    Weekdays::SUNDAY,
];

fn parse_day(day: &str) -> Option<Weekdays> {
    let parsed = match day.trim().to_lowercase().as_str() {
        "mon" | "monday" => Weekdays::MONDAY,
        "tue" | "tuesday" => Weekdays::TUESDAY,
        "wed" | "wednesday" => Weekdays::WEDNESDAY,
        "thu" | "thursday" => Weekdays::THURSDAY,
        "fri" | "friday" => Weekdays::FRIDAY,
        "sat" | "saturday" => Weekdays::SATURDAY,
        "sun" | "sunday" => Weekdays::SUNDAY,
        "all" => Weekdays::ALL,
        "weekdays" => Weekdays::WEEK_DAYS,
        "weekend" => Weekdays::WEEKEND,
        "none" => Weekdays::NONE,
        _ => return None,
    };
    Some(parsed)
}

/// Parses a comma separated list such as `mon,wed,weekend`
impl FromStr for Weekdays {
    type Err = Error;

    fn from_str(days: &str) -> Result<Self> {
        debug!("Parsing days string: {}", days);
        let mut combined = Weekdays::NONE;
        for day in days.split(',') {
            let day_value = parse_day(day).ok_or_else(|| Error::InvalidDays(days.to_string()))?;
            trace!("  Day '{}' = {}", day, day_value);
            combined |= day_value;
        }
        Ok(combined)
    }
}

/// One entry of a DMX timing list.
///
/// Hour, minute and mode are sent as their low byte without range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Hour of the day (0-24)
    pub hour: i32,
    /// Minute of the hour
    pub minute: i32,
    /// Pattern to switch to, see [`crate::dmx::pattern`]
    pub mode: i32,
    /// Days the entry applies to
    pub weekdays: Weekdays,
}

impl Timing {
    /// Creates an entry from a Monday-first selection of seven days
    pub fn new(hour: i32, minute: i32, mode: i32, days: [bool; 7]) -> Self {
        Self::with_weekdays(hour, minute, mode, Weekdays::from_selection(days))
    }

    pub fn with_weekdays(hour: i32, minute: i32, mode: i32, weekdays: Weekdays) -> Self {
        Self {
            hour,
            minute,
            mode,
            weekdays,
        }
    }

    /// Creates an entry from a day slice, which must hold exactly seven entries
    pub fn from_slice(hour: i32, minute: i32, mode: i32, days: &[bool]) -> Result<Self> {
        Ok(Self::with_weekdays(hour, minute, mode, days.try_into()?))
    }

    /// An entry with every field set to 0xFF, which clears the slot on the device
    pub fn clear() -> Self {
        Self::with_weekdays(0xFF, 0xFF, 0xFF, Weekdays::from_bits(0xFF))
    }
}
