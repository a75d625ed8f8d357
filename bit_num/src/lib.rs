//! Bit Num \
//! This crate provides:
//! - [`BitUint`]: arbitrary-precision non-negative integers kept as a vector of binary digits,
//!   with ripple-carry addition, shift-and-add multiplication, ordering and exact rendering in any radix.
//! - [`ParseBitUintError`]: the error returned when parsing a `BitUint` from text.

mod bit_uint;
mod bit_num_cache;
mod bit_num_constants;
mod error;
mod radix_acc;

pub use bit_uint::BitUint;
pub use error::ParseBitUintError;

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::BitUint;

    fn big() -> impl Strategy<Value = BitUint> {
        proptest::collection::vec(any::<bool>(), 0..300).prop_map(|bits| BitUint::from_bits_le(&bits))
    }

    #[test]
    fn it_works() {
        assert_eq!(BitUint::from(0u32).to_decimal_string(), "0");
        assert_eq!(BitUint::from(0u32).to_binary_string(), "(0)_2");
        assert_eq!(BitUint::from(5u32).to_binary_string(), "(101)_2");
        assert_eq!((BitUint::from(5u32) + BitUint::from(3u32)).to_decimal_string(), "8");
        assert_eq!((BitUint::from(6u32) * BitUint::from(7u32)).to_decimal_string(), "42");
        assert!(BitUint::from(3u32) < BitUint::from(5u32));
        assert!(BitUint::from(5u32) >= BitUint::from(3u32));
        assert!(BitUint::from(255u32) == BitUint::from(255u32));
        assert!(BitUint::from(255u32) != BitUint::from(256u32));
    }

    proptest! {
        #[test]
        fn decimal_round_trip(v in any::<u128>()) {
            prop_assert_eq!(BitUint::from(v).to_decimal_string(), v.to_string());
        }

        #[test]
        fn binary_matches_native(v in any::<u128>()) {
            prop_assert_eq!(format!("{:b}", BitUint::from(v)), format!("{:b}", v));
            prop_assert_eq!(BitUint::from(v).to_binary_string(), format!("({:b})_2", v));
        }

        #[test]
        fn add_and_mul_match_native(a in any::<u64>(), b in any::<u64>()) {
            let x = BitUint::from(a);
            let y = BitUint::from(b);
            prop_assert_eq!(&x + &y, BitUint::from(a as u128 + b as u128));
            prop_assert_eq!(&x * &y, BitUint::from(a as u128 * b as u128));
        }

        #[test]
        fn comparisons_match_native(a in any::<u128>(), b in any::<u128>()) {
            let x = BitUint::from(a);
            let y = BitUint::from(b);
            prop_assert_eq!(x < y, a < b);
            prop_assert_eq!(x <= y, a <= b);
            prop_assert_eq!(x == y, a == b);
            prop_assert_eq!(x != y, a != b);
            prop_assert_eq!(x >= y, a >= b);
            prop_assert_eq!(x > y, a > b);
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        }

        #[test]
        fn comparisons_close_values(a in any::<u64>(), delta in 0u64..4) {
            // equal-length operands that differ only in low digits
            let x = BitUint::from(a);
            let y = BitUint::from(a as u128 + delta as u128);
            prop_assert_eq!(x < y, delta > 0);
            prop_assert_eq!(x == y, delta == 0);
        }

        #[test]
        fn add_commutes(a in big(), b in big()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associates(a in big(), b in big(), c in big()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn identities(a in big()) {
            prop_assert_eq!(&a + &BitUint::zero(), a.clone());
            prop_assert_eq!(&a * &BitUint::one(), a.clone());
            prop_assert_eq!(&a * &BitUint::zero(), BitUint::zero());
        }

        #[test]
        fn mul_distributes(a in big(), b in big(), c in big()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn trichotomy(a in big(), b in big()) {
            let holds = [a < b, a == b, a > b].iter().filter(|x| **x).count();
            prop_assert_eq!(holds, 1);
        }

        #[test]
        fn normalize_idempotent(bits in proptest::collection::vec(any::<bool>(), 0..64)) {
            let once = BitUint::normalize(bits);
            prop_assert_eq!(BitUint::normalize(once.clone()), once);
        }

        #[test]
        fn radix_round_trip(a in big(), radix in 2u32..=36) {
            prop_assert_eq!(BitUint::from_str_radix(&a.to_string_radix(radix), radix), Ok(a));
        }
    }
}
