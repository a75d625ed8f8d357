use std::fmt;

use crate::bit_num_constants::DIGITS;

/// A growable non-negative number held as little-endian digits in `radix`.
///
/// Used to render a `BitUint` exactly: feeding its bits most significant
/// first through `mul_add(2, bit)` rebuilds the value in the target radix,
/// with no fixed-width intermediate.
#[derive(Debug, Clone)]
pub struct RadixAcc {
    radix: u32,
    digits: Vec<u8>,
}

impl RadixAcc {
    pub fn new(radix: u32) -> Self {
        debug_assert!((2..=36).contains(&radix));
        RadixAcc { radix, digits: vec![0] }
    }

    /// `self = self * mul + add`
    pub fn mul_add(&mut self, mul: u32, add: u32) {
        let mut carry = add;
        for d in self.digits.iter_mut() {
            let val = *d as u32 * mul + carry;
            *d = (val % self.radix) as u8;
            carry = val / self.radix;
        }
        while carry != 0 {
            self.digits.push((carry % self.radix) as u8);
            carry /= self.radix;
        }
    }

    fn significant_len(&self) -> usize {
        self.digits
            .iter()
            .rposition(|d| *d != 0)
            .map_or(1, |pos| pos + 1)
    }
}

impl fmt::Display for RadixAcc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.digits[..self.significant_len()]
            .iter()
            .rev()
            .map(|d| DIGITS[*d as usize])
            .collect();
        f.write_str(&s)
    }
}

#[test]
fn test_mul_add() {
    let mut acc = RadixAcc::new(10);
    assert_eq!(acc.to_string(), "0");

    // 2^70, far past u64
    acc.mul_add(1, 1);
    for _ in 0..70 {
        acc.mul_add(2, 0);
    }
    assert_eq!(acc.to_string(), "1180591620717411303424");

    let mut acc = RadixAcc::new(16);
    for d in [15, 15, 0, 10] {
        acc.mul_add(16, d);
    }
    assert_eq!(acc.to_string(), "ff0a");

    let mut acc = RadixAcc::new(36);
    acc.mul_add(36, 35);
    acc.mul_add(36, 0);
    assert_eq!(acc.to_string(), "z0");
}
