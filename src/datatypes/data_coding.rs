// ABOUTME: Data coding scheme resolution for the DCS request field
// ABOUTME: Maps the caller's flash/override options onto the gateway's numeric DCS values

/// Data coding scheme carried in the DCS request field.
///
/// The gateway speaks GSM 7-bit only; the scheme selects between the plain
/// class-1 default and class-0 flash display, with an escape hatch for raw
/// vendor values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataCoding {
    /// GSM default alphabet, class 1 (stored to the handset)
    #[default]
    Default,
    /// Flash message, class 0 (displayed immediately, not stored)
    Flash,
    /// Raw DCS value passed through unchanged
    Custom(i32),
}

impl DataCoding {
    const GSM_DEFAULT: i32 = 17;
    const GSM_FLASH: i32 = 16;

    /// Resolves the caller's options: an explicit override wins, otherwise
    /// the flash flag selects class 0, otherwise the GSM default.
    pub fn resolve(override_dcs: Option<i32>, flash: bool) -> Self {
        match override_dcs {
            Some(dcs) => Self::from_value(dcs),
            None if flash => DataCoding::Flash,
            None => DataCoding::Default,
        }
    }

    pub fn from_value(value: i32) -> Self {
        match value {
            Self::GSM_DEFAULT => DataCoding::Default,
            Self::GSM_FLASH => DataCoding::Flash,
            other => DataCoding::Custom(other),
        }
    }

    /// The numeric value sent in the DCS request field.
    pub fn value(&self) -> i32 {
        match self {
            DataCoding::Default => Self::GSM_DEFAULT,
            DataCoding::Flash => Self::GSM_FLASH,
            DataCoding::Custom(value) => *value,
        }
    }

    pub fn is_flash(&self) -> bool {
        matches!(self, DataCoding::Flash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_default() {
        assert_eq!(DataCoding::resolve(None, false), DataCoding::Default);
        assert_eq!(DataCoding::resolve(None, false).value(), 17);
    }

    #[test]
    fn test_resolve_flash() {
        assert_eq!(DataCoding::resolve(None, true), DataCoding::Flash);
        assert_eq!(DataCoding::resolve(None, true).value(), 16);
    }

    #[test]
    fn test_override_beats_flash() {
        let dcs = DataCoding::resolve(Some(245), true);
        assert_eq!(dcs, DataCoding::Custom(245));
        assert_eq!(dcs.value(), 245);
    }

    #[test]
    fn test_from_value_round_trip() {
        for value in [16, 17, 0, 245] {
            assert_eq!(DataCoding::from_value(value).value(), value);
        }
    }
}
