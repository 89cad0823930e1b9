/*!
 # Frame layout shared by all device families

 Every command is a fixed length frame:

 ```text
 [header, address, code, payload..., trailer]
 ```

 Header and trailer are literal magic bytes the firmware uses to find frame
 boundaries. They are not checksums. Frames are nine bytes long except for
 the DMX microphone command, which is eight.
*/

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// Longest frame any family emits
pub const FRAME_LEN: usize = 9;

/// Filler for unused payload bytes and the broadcast address
pub const FILL: u8 = 0xFF;

/// Device families with their own frame constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// BLE00 fixtures
    Ble00,
    /// DMX bridges
    Dmx,
    /// Plain LED strips
    Led,
    /// Settings and configuration channel
    Settings,
}

impl Family {
    pub const ALL: [Family; 4] = [Family::Ble00, Family::Dmx, Family::Led, Family::Settings];

    /// Default header byte for the family
    pub fn header(self) -> u8 {
        match self {
            Family::Ble00 | Family::Settings => 0x7E,
            Family::Dmx | Family::Led => 0x7B,
        }
    }

    /// Default trailer byte for the family
    pub fn trailer(self) -> u8 {
        match self {
            Family::Ble00 | Family::Settings => 0xEF,
            Family::Dmx | Family::Led => 0xBF,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Family::Ble00 => "BLE00",
            Family::Dmx => "DMX",
            Family::Led => "LED",
            Family::Settings => "Settings",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ble00" | "ble" => Ok(Family::Ble00),
            "dmx" | "dmx00" => Ok(Family::Dmx),
            "led" => Ok(Family::Led),
            "settings" => Ok(Family::Settings),
            other => Err(format!("unknown device family '{other}'")),
        }
    }
}

/// Fixed bytes around a command payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTemplate {
    pub header: u8,
    pub address: u8,
    pub code: u8,
    pub trailer: u8,
}

impl FrameTemplate {
    pub const fn new(header: u8, address: u8, code: u8, trailer: u8) -> Self {
        Self {
            header,
            address,
            code,
            trailer,
        }
    }

    /// Template using the family's header and trailer
    pub fn for_family(family: Family, address: u8, code: u8) -> Self {
        Self::new(family.header(), address, code, family.trailer())
    }

    /// Frames `payload`; payloads longer than the frame allows are a programming error
    pub fn build(&self, payload: &[u8]) -> Frame {
        assert!(
            payload.len() <= FRAME_LEN - 4,
            "payload of {} bytes does not fit a frame",
            payload.len()
        );
        let mut bytes = [0u8; FRAME_LEN];
        bytes[0] = self.header;
        bytes[1] = self.address;
        bytes[2] = self.code;
        bytes[3..3 + payload.len()].copy_from_slice(payload);
        let len = payload.len() + 4;
        bytes[len - 1] = self.trailer;
        Frame { bytes, len }
    }
}

/// An encoded command ready to be written to a characteristic
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    bytes: [u8; FRAME_LEN],
    len: usize,
}

impl Frame {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    pub fn header(&self) -> u8 {
        self.bytes[0]
    }

    pub fn trailer(&self) -> u8 {
        self.bytes[self.len - 1]
    }

    /// Bytes as two's-complement signed values
    pub fn to_signed(&self) -> Vec<i8> {
        self.as_bytes().iter().map(|b| *b as i8).collect()
    }

    /// Renders the frame in the requested notation
    pub fn render(&self, format: FrameFormat) -> String {
        match format {
            FrameFormat::Hex => self.to_string(),
            FrameFormat::Array => {
                let items: Vec<String> =
                    self.as_bytes().iter().map(|b| format!("0x{b:02X}")).collect();
                format!("[{}]", items.join(", "))
            }
            FrameFormat::Signed => {
                let items: Vec<String> = self.to_signed().iter().map(|b| b.to_string()).collect();
                format!("[{}]", items.join(", "))
            }
        }
    }
}

impl Deref for Frame {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Frame> for Vec<u8> {
    fn from(frame: Frame) -> Self {
        frame.to_vec()
    }
}

/// Space separated upper-case hex, e.g. `7E FF 04 01 FF FF FF FF EF`
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.as_bytes().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{b:02X}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame[{self}]")
    }
}

/// Output notation for frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameFormat {
    /// `7E FF 04 ...`
    #[default]
    Hex,
    /// `[0x7E, 0xFF, ...]`
    Array,
    /// `[126, -1, ...]`, the signed byte view some platforms print
    Signed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_places_header_code_and_trailer() {
        let frame = FrameTemplate::new(0x7E, FILL, 0x04, 0xEF).build(&[0x01, FILL, FILL, FILL, FILL]);
        assert_eq!(
            frame.as_bytes(),
            &[0x7E, 0xFF, 0x04, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0xEF]
        );
        assert_eq!(frame.header(), 0x7E);
        assert_eq!(frame.trailer(), 0xEF);
    }

    #[test]
    fn short_payload_gives_short_frame() {
        let frame = FrameTemplate::for_family(Family::Dmx, FILL, 0x0B).build(&[0x05, 0x00, FILL, FILL]);
        assert_eq!(frame.len(), 8);
        assert_eq!(frame.trailer(), 0xBF);
    }

    #[test]
    fn family_constants() {
        assert_eq!((Family::Ble00.header(), Family::Ble00.trailer()), (0x7E, 0xEF));
        assert_eq!((Family::Settings.header(), Family::Settings.trailer()), (0x7E, 0xEF));
        assert_eq!((Family::Dmx.header(), Family::Dmx.trailer()), (0x7B, 0xBF));
        assert_eq!((Family::Led.header(), Family::Led.trailer()), (0x7B, 0xBF));
        assert_eq!("dmx".parse::<Family>().unwrap(), Family::Dmx);
        assert!("hue".parse::<Family>().is_err());
    }

    #[test]
    fn renders_all_formats() {
        let frame = FrameTemplate::new(0x7B, 0x00, 0x07, 0xBF).build(&[0xC8, 0x10, 0x00, 0x00, FILL]);
        assert_eq!(frame.render(FrameFormat::Hex), "7B 00 07 C8 10 00 00 FF BF");
        assert_eq!(
            frame.render(FrameFormat::Array),
            "[0x7B, 0x00, 0x07, 0xC8, 0x10, 0x00, 0x00, 0xFF, 0xBF]"
        );
        assert_eq!(
            frame.render(FrameFormat::Signed),
            "[123, 0, 7, -56, 16, 0, 0, -1, -65]"
        );
    }

    #[test]
    #[should_panic]
    fn oversized_payload_panics() {
        FrameTemplate::new(0x7E, FILL, 0x01, 0xEF).build(&[0; 6]);
    }
}
