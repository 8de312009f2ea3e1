//! Textual renderings of a hash byte sequence.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Uppercase two-digit hex per byte, separated by single spaces
pub fn to_hex_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Standard alphabet, padded
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn to_array_string(bytes: &[u8]) -> String {
    let items: Vec<String> = bytes.iter().map(|b| b.to_string()).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_string() {
        assert_eq!(to_hex_string(&[0x60, 0x9A, 0x05, 0xFF]), "60 9A 05 FF");
        assert_eq!(to_hex_string(&[]), "");
    }

    #[test]
    fn test_base64_matches_reference() {
        // sunrise.jpg reference hash
        let bytes = [
            0xD5, 0x07, 0x12, 0x1D, 0x04, 0x67, 0x87, 0x8F, 0x77, 0x57, 0x87, 0x48, 0x87, 0x87,
            0x97, 0x87, 0x58, 0x78, 0x90, 0x95, 0x08,
        ];
        assert_eq!(to_base64(&bytes), "1QcSHQRnh493V4dIh4eXh1h4kJUI");
    }

    #[test]
    fn test_array_string() {
        assert_eq!(to_array_string(&[96, 154, 134]), "[96, 154, 134]");
        assert_eq!(to_array_string(&[]), "[]");
    }
}
