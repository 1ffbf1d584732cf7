//! Binary dumps of 32-bit patterns

/// Render a 32-bit pattern as four space-separated 8-bit groups,
/// most significant byte first
pub fn format_bit_pattern(bits: u32) -> String {
    bits.to_be_bytes()
        .iter()
        .map(|byte| format!("{byte:08b}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-line dump of a raw integer and its bit pattern
pub fn describe_raw(v: i32) -> String {
    format!("v = {v}, binary = {}", format_bit_pattern(v as u32))
}

/// One-line dump of a float and its IEEE-754 bit pattern
pub fn describe_float(v: f32) -> String {
    format!("v = {v:.6}, binary = {}", format_bit_pattern(v.to_bits()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bit_pattern() {
        assert_eq!(
            format_bit_pattern(0),
            "00000000 00000000 00000000 00000000"
        );
        assert_eq!(
            format_bit_pattern(128),
            "00000000 00000000 00000000 10000000"
        );
        assert_eq!(
            format_bit_pattern(0x8000_0001),
            "10000000 00000000 00000000 00000001"
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            describe_raw(-1),
            "v = -1, binary = 11111111 11111111 11111111 11111111"
        );
        assert_eq!(
            describe_float(1.0),
            "v = 1.000000, binary = 00111111 10000000 00000000 00000000"
        );
    }
}
