/*!
 # Clock source for timing frames

 Timing frames carry the controller's notion of "now" so the device can set
 its own clock. The encoders take the clock as a capability instead of reading
 the system time themselves, which keeps them deterministic under test.
*/

use chrono::{Datelike, Local, Timelike};

use crate::encoding::adjust_day_number;

/// Current weekday and time of day as written into timing frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    /// Day of week, 1 = Monday .. 7 = Sunday
    pub weekday: u8,
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
}

impl ClockReading {
    pub const fn new(weekday: u8, hour: u8, minute: u8) -> Self {
        Self {
            weekday,
            hour,
            minute,
        }
    }

    /// Builds a reading from a Sunday-first day number (1 = Sunday .. 7 = Saturday)
    pub fn from_native_day(native_day: u8, hour: u8, minute: u8) -> Self {
        Self::new(adjust_day_number(native_day), hour, minute)
    }
}

/// Something that can tell the current weekday and time
pub trait Clock {
    fn now(&self) -> ClockReading;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> ClockReading {
        (**self).now()
    }
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ClockReading {
        let system_time = Local::now();
        // chrono counts Sunday = 1 in its "from Sunday" numbering
        let native_day = system_time.weekday().number_from_sunday() as u8;
        ClockReading::from_native_day(
            native_day,
            system_time.hour() as u8,
            system_time.minute() as u8,
        )
    }
}

/// A clock that always reports the same time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(ClockReading);

impl FixedClock {
    /// `weekday` is 1 = Monday .. 7 = Sunday
    pub const fn new(weekday: u8, hour: u8, minute: u8) -> Self {
        Self(ClockReading::new(weekday, hour, minute))
    }
}

impl From<ClockReading> for FixedClock {
    fn from(reading: ClockReading) -> Self {
        Self(reading)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> ClockReading {
        self.0
    }
}
