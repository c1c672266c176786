// ABOUTME: GSM 03.38 default-alphabet validation for outbound message text
// ABOUTME: Provides membership checks and extended-character counting used by the segmenter

use crate::client::error::IpxError;

/// Returns true if the character is representable in the GSM 7-bit default
/// alphabet, including the extension table.
pub fn is_gsm7(character: char) -> bool {
    is_basic(character) || is_extended(character)
}

/// GSM 03.38 default alphabet, basic table.
fn is_basic(character: char) -> bool {
    matches!(character,
        'A'..='Z' | 'a'..='z' | '0'..='9'
        | '@' | '£' | '$' | '¥' | 'è' | 'é' | 'ù' | 'ì' | 'ò' | 'Ç'
        | '\n' | 'Ø' | 'ø' | '\r' | 'Å' | 'å'
        | 'Δ' | '_' | 'Φ' | 'Γ' | 'Λ' | 'Ω' | 'Π' | 'Ψ' | 'Σ' | 'Θ' | 'Ξ'
        | 'Æ' | 'æ' | 'ß' | 'É'
        | ' ' | '!' | '"' | '#' | '¤' | '%' | '&' | '\'' | '(' | ')'
        | '*' | '+' | ',' | '-' | '.' | '/'
        | ':' | ';' | '<' | '=' | '>' | '?' | '¡'
        | 'Ä' | 'Ö' | 'Ñ' | 'Ü' | '§'
        | '¿' | 'ä' | 'ö' | 'ñ' | 'ü' | 'à')
}

/// Extension-table characters. Each one is sent as an escape pair and
/// therefore occupies two septets of a segment.
pub fn is_extended(character: char) -> bool {
    matches!(
        character,
        '^' | '{' | '}' | '\\' | '[' | ']' | '~' | '|' | '€' | '\x0C'
    )
}

/// Number of extension-table characters in the message.
pub fn extended_count(text: &str) -> usize {
    text.chars().filter(|c| is_extended(*c)).count()
}

/// Checks that every character of the message is representable in GSM 7-bit.
///
/// The first offending character is reported; messages that fail here must
/// not reach the transport.
pub fn validate_alphabet(text: &str) -> Result<(), IpxError> {
    match text.chars().find(|c| !is_gsm7(*c)) {
        Some(character) => Err(IpxError::Alphabet {
            character,
            code: character as u32,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ascii_is_gsm7() {
        assert!(validate_alphabet("Hello, World! 0123456789").is_ok());
    }

    #[test]
    fn test_extension_characters_are_gsm7() {
        assert!(validate_alphabet("{braces} [brackets] €100 a|b ~^\\").is_ok());
    }

    #[test]
    fn test_accented_defaults_are_gsm7() {
        assert!(validate_alphabet("àèéùìòÇØøÅåÆæßÉÄÖÑܧ¿¡äöñü").is_ok());
    }

    #[test]
    fn test_emoji_is_rejected() {
        let result = validate_alphabet("on my way 🚗");
        assert!(matches!(
            result,
            Err(IpxError::Alphabet { character: '🚗', .. })
        ));
    }

    #[test]
    fn test_first_offender_is_reported() {
        let result = validate_alphabet("ok ✓ then 😀");
        assert!(matches!(
            result,
            Err(IpxError::Alphabet { character: '✓', .. })
        ));
    }

    #[test]
    fn test_extended_count() {
        assert_eq!(extended_count("plain text"), 0);
        assert_eq!(extended_count("{a}[b]€"), 5);
        assert_eq!(extended_count("\x0C"), 1);
    }
}
