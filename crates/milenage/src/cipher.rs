//! The AES-128 kernel used by every MILENAGE function.

use aes::cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit};
use aes::Aes128;

/// Encrypts a single 128-bit block under `key` (the subscriber's permanent key K).
pub fn encrypt_block(key: &[u8; 16], block: &[u8; 16]) -> [u8; 16] {
    let cipher = Aes128::new(GenericArray::from_slice(key));
    let mut buf = GenericArray::clone_from_slice(block);
    cipher.encrypt_block(&mut buf);
    buf.into()
}

pub fn xor16(a: &[u8; 16], b: &[u8; 16]) -> [u8; 16] {
    let mut out = [0u8; 16];
    for i in 0..16 {
        out[i] = a[i] ^ b[i];
    }
    out
}

/// Rotates a 128-bit value left by `bits` bits, as required between the
/// TEMP XOR ci step and the final blinding in MILENAGE's f2..f5.
pub fn rotate_left(value: &[u8; 16], bits: u32) -> [u8; 16] {
    let bits = bits % 128;
    if bits == 0 {
        return *value;
    }
    let byte_shift = (bits / 8) as usize;
    let bit_shift = bits % 8;
    let mut out = [0u8; 16];
    for i in 0..16 {
        let src_hi = (i + byte_shift) % 16;
        let src_lo = (i + byte_shift + 1) % 16;
        if bit_shift == 0 {
            out[i] = value[src_hi];
        } else {
            out[i] = (value[src_hi] << bit_shift) | (value[src_lo] >> (8 - bit_shift));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_left_by_zero_is_identity() {
        let v = [1u8; 16];
        assert_eq!(rotate_left(&v, 0), v);
    }

    #[test]
    fn rotate_left_by_128_is_identity() {
        let mut v = [0u8; 16];
        for (i, b) in v.iter_mut().enumerate() {
            *b = i as u8;
        }
        assert_eq!(rotate_left(&v, 128), v);
    }

    #[test]
    fn rotate_left_by_8_shifts_one_byte() {
        let mut v = [0u8; 16];
        for (i, b) in v.iter_mut().enumerate() {
            *b = i as u8;
        }
        let rotated = rotate_left(&v, 8);
        assert_eq!(rotated[0], 1);
        assert_eq!(rotated[15], 0);
    }
}
