// ABOUTME: Splits validated message text into at most five ordered SMS parts
// ABOUTME: Computes effective segment capacity and instantiates the shared UDH per part

use rand::Rng;
use tracing::debug;

use crate::client::error::IpxError;
use crate::datatypes::UserDataHeader;
use crate::encoding;

/// Hard cap on parts per logical message. Exceeding it rejects the whole
/// send, it does not fall back to truncation.
pub const MAX_MESSAGE_PARTS: usize = 5;

/// Septets available in a single SMS with the default alphabet.
pub const SEGMENT_CAPACITY: usize = 160;

/// Septets consumed by the concatenation UDH in every part.
const UDH_COST: usize = 7;

/// One physical SMS unit of a logical message.
#[derive(Debug, Clone, PartialEq)]
pub struct MessagePart {
    /// 1-based position within the logical message.
    pub sequence: u8,
    /// Absent for single-part sends.
    pub udh: Option<UserDataHeader>,
    pub text: String,
}

/// Splits a validated message into ordered parts.
///
/// Extension-table characters occupy two septets each, so the effective
/// capacity is 160 minus their count; when the message does not fit in one
/// part, every part additionally reserves seven septets for the UDH. All
/// lengths are code-point counts, not byte counts.
pub fn split_message(message: &str) -> Result<Vec<MessagePart>, IpxError> {
    let length = message.chars().count();
    let capacity = SEGMENT_CAPACITY.saturating_sub(encoding::extended_count(message));

    if length <= capacity {
        return Ok(vec![MessagePart {
            sequence: 1,
            udh: None,
            text: message.to_owned(),
        }]);
    }

    let capacity = match capacity.checked_sub(UDH_COST) {
        Some(capacity) if capacity > 0 => capacity,
        // Not even one septet of payload fits next to the UDH.
        _ => {
            return Err(IpxError::TooManySegments {
                parts: length,
                max: MAX_MESSAGE_PARTS,
            });
        }
    };

    let part_count = length.div_ceil(capacity);
    if part_count > MAX_MESSAGE_PARTS {
        return Err(IpxError::TooManySegments {
            parts: part_count,
            max: MAX_MESSAGE_PARTS,
        });
    }

    let reference: u8 = rand::thread_rng().gen_range(1..=u8::MAX);
    let header = UserDataHeader::new(reference, part_count as u8);

    let mut chars = message.chars();
    let mut parts = Vec::with_capacity(part_count);
    for sequence in 1..=part_count as u8 {
        let text: String = chars.by_ref().take(capacity).collect();
        parts.push(MessagePart {
            sequence,
            udh: Some(header.with_sequence(sequence)),
            text,
        });
    }

    debug!(
        "Split {} characters into {} parts (reference {})",
        length,
        parts.len(),
        reference
    );
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_message_is_one_part_without_udh() {
        let parts = split_message("Hello, World!").unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].sequence, 1);
        assert!(parts[0].udh.is_none());
        assert_eq!(parts[0].text, "Hello, World!");
    }

    #[test]
    fn test_boundary_160_chars_is_one_part() {
        let message = "a".repeat(160);
        let parts = split_message(&message).unwrap();
        assert_eq!(parts.len(), 1);
        assert!(parts[0].udh.is_none());
    }

    #[test]
    fn test_extended_chars_shrink_capacity() {
        // 158 plain chars plus one euro sign: 159 code points against a
        // capacity of 159, still one part.
        let message = format!("{}€", "a".repeat(158));
        assert_eq!(split_message(&message).unwrap().len(), 1);

        // One more plain char pushes it over.
        let message = format!("{}€", "a".repeat(159));
        let parts = split_message(&message).unwrap();
        assert_eq!(parts.len(), 2);
    }

    #[test]
    fn test_161_chars_splits_into_two() {
        let message = "a".repeat(161);
        let parts = split_message(&message).unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].text.chars().count(), 153);
        assert_eq!(parts[1].text.chars().count(), 8);
    }

    #[test]
    fn test_round_trip_reassembly() {
        let message: String = ('a'..='z').cycle().take(430).collect();
        let parts = split_message(&message).unwrap();
        assert_eq!(parts.len(), 430usize.div_ceil(153));
        let reassembled: String = parts.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(reassembled, message);
    }

    #[test]
    fn test_udh_reference_shared_and_sequence_increments() {
        let message = "x".repeat(400);
        let parts = split_message(&message).unwrap();
        let reference = parts[0].udh.unwrap().reference();
        assert!(reference >= 1);
        for (index, part) in parts.iter().enumerate() {
            let udh = part.udh.expect("every part of a concatenated send has a UDH");
            assert_eq!(udh.reference(), reference);
            assert_eq!(udh.part_count() as usize, parts.len());
            assert_eq!(udh.sequence() as usize, index + 1);
            assert_eq!(part.sequence as usize, index + 1);
        }
    }

    #[test]
    fn test_six_parts_rejected() {
        // 5 * 153 = 765 fits, 766 needs a sixth part.
        let message = "a".repeat(766);
        let result = split_message(&message);
        assert!(matches!(
            result,
            Err(IpxError::TooManySegments { parts: 6, max: 5 })
        ));
    }

    #[test]
    fn test_five_parts_accepted() {
        let message = "a".repeat(765);
        assert_eq!(split_message(&message).unwrap().len(), 5);
    }
}
