use lazy_static::*;

use crate::BitUint;
use crate::bit_num_constants::*;

lazy_static! {
    pub static ref SMALL_CACHE: [BitUint; MAX_CONSTANT + 1] = [
        BitUint::from_raw(vec![false]),
        BitUint::from_raw(vec![true]),
        BitUint::from_raw(vec![false, true]),
        BitUint::from_raw(vec![true , true]),
        BitUint::from_raw(vec![false, false, true]),
        BitUint::from_raw(vec![true , false, true]),
        BitUint::from_raw(vec![false, true , true]),
        BitUint::from_raw(vec![true , true , true]),
        BitUint::from_raw(vec![false, false, false, true]),
        BitUint::from_raw(vec![true , false, false, true]),
        BitUint::from_raw(vec![false, true , false, true]),
        BitUint::from_raw(vec![true , true , false, true]),
        BitUint::from_raw(vec![false, false, true , true]),
        BitUint::from_raw(vec![true , false, true , true]),
        BitUint::from_raw(vec![false, true , true , true]),
        BitUint::from_raw(vec![true , true , true , true]),
        BitUint::from_raw(vec![false, false, false, false, true]),
    ];
}

#[test]
fn test_small_cache() {
    for (val, cached) in SMALL_CACHE.iter().enumerate() {
        assert_eq!(cached.to_decimal_string(), val.to_string());
        assert_eq!(cached, &BitUint::from_bits_le(&cached.to_bits()));
    }
}
