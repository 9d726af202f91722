use std::fmt;

/// Response byte the device reports when the outlet is powered.
const CODE_ON: u8 = 0xa0;
const CODE_OFF: u8 = 0x20;

/// The physical state of the switched outlet.
///
/// This is never cached, it's always read from (or written to) the device directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RelayState {
    On,
    Off,
}

impl RelayState {
    /// Interprets a state read response. Only the last byte matters, anything other
    /// than the 'On' code (including an empty response) is treated as Off.
    pub fn from_response(response: &[u8]) -> Self {
        match response.last() {
            Some(&CODE_ON) => RelayState::On,
            _ => RelayState::Off,
        }
    }

    /// The wIndex value used when writing this state.
    pub fn code(&self) -> u8 {
        match self {
            RelayState::On => CODE_ON,
            RelayState::Off => CODE_OFF,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            RelayState::On => RelayState::Off,
            RelayState::Off => RelayState::On,
        }
    }

    pub fn is_on(&self) -> bool {
        *self == RelayState::On
    }
}

impl From<bool> for RelayState {
    fn from(on: bool) -> Self {
        if on {
            RelayState::On
        } else {
            RelayState::Off
        }
    }
}

impl fmt::Display for RelayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayState::On => write!(f, "On"),
            RelayState::Off => write!(f, "Off"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_code_reads_as_on() {
        assert_eq!(RelayState::from_response(&[0xa0]), RelayState::On);
    }

    #[test]
    fn anything_else_reads_as_off() {
        assert_eq!(RelayState::from_response(&[0x20]), RelayState::Off);
        assert_eq!(RelayState::from_response(&[0x00]), RelayState::Off);
        assert_eq!(RelayState::from_response(&[0xff]), RelayState::Off);
        assert_eq!(RelayState::from_response(&[]), RelayState::Off);
    }

    #[test]
    fn last_byte_decides() {
        assert_eq!(RelayState::from_response(&[0x20, 0xa0]), RelayState::On);
        assert_eq!(RelayState::from_response(&[0xa0, 0x20]), RelayState::Off);
    }

    #[test]
    fn write_codes() {
        assert_eq!(RelayState::On.code(), 0xa0);
        assert_eq!(RelayState::Off.code(), 0x20);
    }

    #[test]
    fn toggling() {
        assert_eq!(RelayState::On.toggled(), RelayState::Off);
        assert_eq!(RelayState::Off.toggled(), RelayState::On);
        assert_eq!(RelayState::from(true), RelayState::On);
        assert!(!RelayState::from(false).is_on());
    }

    #[test]
    fn display() {
        assert_eq!(RelayState::On.to_string(), "On");
        assert_eq!(RelayState::Off.to_string(), "Off");
    }
}
