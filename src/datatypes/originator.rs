use num_enum::TryFromPrimitive;

/// Originator type-of-number, the originatorTON request field.
///
/// Selects how the gateway interprets the originating address: a
/// network-specific short number, an alphanumeric sender name of up to 11
/// GSM characters, or a full international MSISDN.
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum OriginatorTon {
    /// Network-specific short number
    ShortNumber = 0,
    /// Alphanumeric sender name
    #[default]
    Alphanumeric = 1,
    /// International MSISDN
    Msisdn = 2,
}

impl OriginatorTon {
    /// The decimal string form used in the SOAP request.
    pub fn as_field(&self) -> String {
        (*self as u8).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_alphanumeric() {
        assert_eq!(OriginatorTon::default(), OriginatorTon::Alphanumeric);
        assert_eq!(OriginatorTon::default().as_field(), "1");
    }

    #[test]
    fn test_try_from_known_values() {
        assert_eq!(OriginatorTon::try_from(0), Ok(OriginatorTon::ShortNumber));
        assert_eq!(OriginatorTon::try_from(2), Ok(OriginatorTon::Msisdn));
        assert!(OriginatorTon::try_from(9).is_err());
    }
}
