/*!
 # Custom pattern options and zone selection

 Closed enumerations whose wire value is a fixed code: custom pattern modes
 (sent by ordinal), playback direction, and the light boxes addressed through
 the settings channel.
*/

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Playback behavior of a custom color pattern, sent as its ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomPatternMode {
    /// Custom pattern disabled
    Off,
    /// Hold the first color
    Static,
    /// Jump from color to color
    Jump,
    /// Crossfade between colors
    Gradient,
    /// Flash each color
    Flash,
    /// Fade each color in and out
    Breathe,
    /// Colors run along the strip
    Flow,
    /// Strobe through the colors
    Strobe,
}

impl CustomPatternMode {
    /// All modes in wire order
    pub const ALL: [CustomPatternMode; 8] = [
        CustomPatternMode::Off,
        CustomPatternMode::Static,
        CustomPatternMode::Jump,
        CustomPatternMode::Gradient,
        CustomPatternMode::Flash,
        CustomPatternMode::Breathe,
        CustomPatternMode::Flow,
        CustomPatternMode::Strobe,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            CustomPatternMode::Off => "off",
            CustomPatternMode::Static => "static",
            CustomPatternMode::Jump => "jump",
            CustomPatternMode::Gradient => "gradient",
            CustomPatternMode::Flash => "flash",
            CustomPatternMode::Breathe => "breathe",
            CustomPatternMode::Flow => "flow",
            CustomPatternMode::Strobe => "strobe",
        }
    }
}

impl fmt::Display for CustomPatternMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CustomPatternMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == wanted)
            .ok_or_else(|| Error::InvalidMode(s.to_string()))
    }
}

/// Custom pattern playback direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    pub fn code(self) -> u8 {
        match self {
            Direction::Forward => 0x00,
            Direction::Reverse => 0x01,
        }
    }
}

impl From<bool> for Direction {
    /// `true` is forward
    fn from(is_forward: bool) -> Self {
        if is_forward {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "forward" | "fwd" => Ok(Direction::Forward),
            "reverse" | "rev" | "backward" => Ok(Direction::Reverse),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

/// Light boxes (zones) selectable through the settings channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightBox {
    Center,
    LeftFront,
    RightFront,
    LeftRear,
    RightRear,
}

impl LightBox {
    pub const ALL: [LightBox; 5] = [
        LightBox::Center,
        LightBox::LeftFront,
        LightBox::RightFront,
        LightBox::LeftRear,
        LightBox::RightRear,
    ];

    /// Wire code; 0x00 and 0x01 on the same command toggle the welcome lights
    pub fn code(self) -> u8 {
        match self {
            LightBox::Center => 0x02,
            LightBox::LeftFront => 0x03,
            LightBox::RightFront => 0x04,
            LightBox::LeftRear => 0x05,
            LightBox::RightRear => 0x06,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LightBox::Center => "center",
            LightBox::LeftFront => "left-front",
            LightBox::RightFront => "right-front",
            LightBox::LeftRear => "left-rear",
            LightBox::RightRear => "right-rear",
        }
    }
}

impl fmt::Display for LightBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LightBox {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|zone| zone.name() == wanted)
            .ok_or_else(|| Error::InvalidBox(s.to_string()))
    }
}
