//! Encoded records are single lines of an instruction listing.
//!
//! ```text
//! LD:3E:01
//! ^^ ^^^^^
//! |  `- opaque payload, never inspected
//! `---- mnemonic
//! ```

/// Field delimiter inside an encoded record.
pub const DELIMITER: char = ':';

/// Returns the mnemonic of an encoded record: everything before the first
/// delimiter, or the whole line when there is none.
/// The line is expected to already have its terminator stripped.
pub fn mnemonic(line: &str) -> &str {
    match line.find(DELIMITER) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mnemonic() {
        assert_eq!(mnemonic("NOP:00"), "NOP");
        assert_eq!(mnemonic("LD:3E:01"), "LD");
        assert_eq!(mnemonic("JP:C3"), "JP");
        assert_eq!(mnemonic("ADD:80:"), "ADD");

        // No delimiter means the whole line is the mnemonic.
        assert_eq!(mnemonic("HALT"), "HALT");
        assert_eq!(mnemonic(""), "");

        // Leading delimiter yields an empty mnemonic.
        assert_eq!(mnemonic(":00"), "");
        assert_eq!(mnemonic("::"), "");

        // Whitespace is not trimmed; it is part of the field.
        assert_eq!(mnemonic(" LD :3E"), " LD ");
    }
}
