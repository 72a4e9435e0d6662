//! Number literal validation.

/// Number of 64-bit limbs in a 256-bit word.
const LIMBS: usize = 4;

/// Check that a number literal is well-formed.
///
/// A literal is valid when it fits an unsigned 256-bit integer and is either
/// `0x`-prefixed hexadecimal or made of decimal digits only. Signs, decimal
/// points, exponents and stray letters are rejected.
///
/// Digits after a leading `0` are read as octal, so `0123` is accepted while
/// `089` is not.
///
/// # Examples
///
/// ```
/// use yul_parser::number::is_valid_number_literal;
///
/// assert!(is_valid_number_literal("0x1A"));
/// assert!(is_valid_number_literal("123"));
/// assert!(!is_valid_number_literal("0123abc"));
/// assert!(!is_valid_number_literal("1.5"));
/// assert!(!is_valid_number_literal("089"));
/// ```
pub fn is_valid_number_literal(literal: &str) -> bool {
    match literal.strip_prefix("0x") {
        Some(hex) => fits_u256(hex, 16),
        None if !literal.bytes().all(|b| b.is_ascii_digit()) => false,
        None => match literal.strip_prefix('0') {
            Some(octal) if !octal.is_empty() => fits_u256(octal, 8),
            _ => fits_u256(literal, 10),
        },
    }
}

/// Whether `digits` in `radix` parse to a value below 2^256.
fn fits_u256(digits: &str, radix: u32) -> bool {
    if digits.is_empty() {
        return false;
    }

    // Little-endian limbs; value = value * radix + digit with carry out.
    let mut limbs = [0u64; LIMBS];
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            return false;
        };
        let mut carry = u128::from(digit);
        for limb in limbs.iter_mut() {
            let wide = u128::from(*limb) * u128::from(radix) + carry;
            *limb = wide as u64;
            carry = wide >> 64;
        }
        if carry != 0 {
            return false;
        }
    }
    true
}
