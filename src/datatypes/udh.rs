use bytes::Bytes;
use std::fmt;

/// User Data Header for concatenated messages, 8-bit reference form.
///
/// Six bytes on the wire: total header length (0x05), the 8-bit
/// concatenation information element identifier (0x00), the element data
/// length (0x03), a reference shared by every part of one logical message,
/// the total part count and this part's 1-based sequence number. The
/// 16-bit reference form (IEI 0x08) is not used by this gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserDataHeader {
    reference: u8,
    part_count: u8,
    sequence: u8,
}

impl UserDataHeader {
    pub const HEADER_LENGTH: u8 = 0x05;
    pub const IEI_CONCAT_8BIT: u8 = 0x00;
    pub const IE_LENGTH: u8 = 0x03;

    /// Creates the header template for one logical message. The reference
    /// must be in 1..=255; the sequence starts at 1.
    pub fn new(reference: u8, part_count: u8) -> Self {
        Self {
            reference,
            part_count,
            sequence: 1,
        }
    }

    /// Same header with only the sequence byte replaced.
    pub fn with_sequence(mut self, sequence: u8) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn reference(&self) -> u8 {
        self.reference
    }

    pub fn part_count(&self) -> u8 {
        self.part_count
    }

    pub fn sequence(&self) -> u8 {
        self.sequence
    }

    /// Raw header bytes.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(&[
            Self::HEADER_LENGTH,
            Self::IEI_CONCAT_8BIT,
            Self::IE_LENGTH,
            self.reference,
            self.part_count,
            self.sequence,
        ])
    }

    /// Zero-padded uppercase hex rendering, the form the gateway expects in
    /// the userDataHeader request field.
    pub fn to_hex(&self) -> String {
        self.to_bytes().iter().map(|byte| format!("{byte:02X}")).collect()
    }
}

impl fmt::Display for UserDataHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_udh_hex_is_zero_padded() {
        let udh = UserDataHeader::new(0x0F, 3).with_sequence(2);
        assert_eq!(udh.to_hex(), "0500030F0302");
    }

    #[test]
    fn test_udh_bytes_layout() {
        let udh = UserDataHeader::new(0xAB, 5).with_sequence(4);
        assert_eq!(udh.to_bytes().as_ref(), &[0x05, 0x00, 0x03, 0xAB, 0x05, 0x04]);
    }

    #[test]
    fn test_with_sequence_only_changes_sequence() {
        let template = UserDataHeader::new(200, 2);
        let second = template.with_sequence(2);
        assert_eq!(second.reference(), 200);
        assert_eq!(second.part_count(), 2);
        assert_eq!(second.sequence(), 2);
    }

    #[test]
    fn test_display_matches_hex() {
        let udh = UserDataHeader::new(1, 2);
        assert_eq!(format!("{udh}"), "050003010201");
    }
}
