//! # BitUint
//! Unbounded non-negative integers, stored one binary digit per `bool`, least significant digit first.
//! There is no sign: every value is `>= 0` by construction.
//! # Example
//! ```
//! use bit_num::BitUint;
//!
//! let a = BitUint::from(6u32);
//! let b: BitUint = "7".parse().unwrap();
//! assert_eq!((&a + &b).to_decimal_string(), "13");
//! assert_eq!((&a * &b).to_decimal_string(), "42");
//! assert_eq!(a.to_binary_string(), "(110)_2");
//! assert!(a < b && a != b);
//! ```
//!

use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign,
    Mul, MulAssign,
    Shl, ShlAssign,
};
use std::cmp::{Ord, Eq, PartialEq, PartialOrd, Ordering};
use std::str::FromStr;

use log::{debug, trace};

use crate::bit_num_constants::*;
use crate::bit_num_cache::*;
use crate::error::ParseBitUintError;
use crate::radix_acc::RadixAcc;

#[derive(Debug, Clone)]
pub struct BitUint {
    // never empty, and the last digit is `true` unless the value is zero
    digits: Vec<bool>,
}

// 实现构造
impl BitUint {
    /// `digits` must already be normalized.
    pub(crate) fn from_raw(digits: Vec<bool>) -> Self {
        debug_assert!(BitUint::is_normalized(&digits), "unnormalized digits {:?}", digits);
        BitUint { digits }
    }
    fn new(digits: Vec<bool>) -> Self {
        BitUint { digits: BitUint::normalize(digits) }
    }
    pub fn zero() -> Self {
        BitUint::from_raw(vec![false])
    }
    pub fn one() -> Self {
        BitUint::from_raw(vec![true])
    }
    /// Builds a value from little-endian binary digits. High zero digits are dropped and an empty slice gives zero.
    pub fn from_bits_le(bits: &[bool]) -> Self {
        BitUint::new(bits.to_vec())
    }
}

impl Default for BitUint {
    fn default() -> Self {
        BitUint::zero()
    }
}

// 实现规范化
impl BitUint {
    /// Drops high-order `false` digits until the top digit is `true` or a single digit is left.
    ///
    /// An empty vector comes back as `[false]`, so the result is always a valid zero or non-zero value.
    /// Normalizing twice is the same as normalizing once.
    pub fn normalize(mut digits: Vec<bool>) -> Vec<bool> {
        if digits.is_empty() {
            digits.push(false);
            return digits;
        }
        while digits.len() > 1 && digits.last() == Some(&false) {
            digits.pop();
        }
        digits
    }
    fn is_normalized(digits: &[bool]) -> bool {
        match digits {
            [] => false,
            [_] => true,
            [.., top] => *top,
        }
    }
}

// 实现访问
impl BitUint {
    /// A copy of the little-endian digits.
    pub fn to_bits(&self) -> Vec<bool> {
        self.digits.clone()
    }
    /// Number of stored binary digits; `1` for zero.
    pub fn digit_len(&self) -> usize {
        self.digits.len()
    }
    pub fn is_zero(&self) -> bool {
        matches!(self.digits[..], [false])
    }
    /// `None` when the value needs more than 128 bits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.digits.len() > u128::BITS as usize {
            return None;
        }
        Some(self.digits.iter().rev().fold(0, |acc, &bit| (acc << 1) | bit as u128))
    }
}

macro_rules! impl_unsigned_to_bit_num {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BitUint {
        fn from(val: $u) -> Self {
            BitUint::value_of(val as u128)
        }
    }
    )*
    };
}
impl_unsigned_to_bit_num!(u8, u16, u32, usize, u64, u128);

impl BitUint {
    fn value_of(mut val: u128) -> BitUint {
        if val <= MAX_CONSTANT as u128 {
            return SMALL_CACHE[val as usize].clone();
        }
        let mut digits = Vec::with_capacity((u128::BITS - val.leading_zeros()) as usize);
        while val > 0 {
            digits.push(val % 2 == 1);
            val /= 2;
        }
        BitUint::new(digits)
    }
}

// 实现打印
impl Display for BitUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_decimal_string())
    }
}

impl fmt::Binary for BitUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits: String = self.bits_msb_first().collect();
        f.pad_integral(true, "0b", &bits)
    }
}

impl BitUint {
    /// Renders in any radix from 2 to 36 with lowercase digits. Other radixes fall back to 10.
    pub fn to_string_radix(&self, mut radix: u32) -> String {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            radix = DEFAULT_RADIX;
        }
        if radix == 2 {
            return self.bits_msb_first().collect();
        }

        let mut acc = RadixAcc::new(radix);
        for &bit in self.digits.iter().rev() {
            acc.mul_add(2, bit as u32);
        }
        acc.to_string()
    }
    pub fn to_decimal_string(&self) -> String {
        self.to_string_radix(DEFAULT_RADIX)
    }
    /// Most significant digit first, wrapped as `(..)_2`.
    pub fn to_binary_string(&self) -> String {
        let mut s = String::with_capacity(self.digits.len() + BINARY_PREFIX.len() + BINARY_SUFFIX.len());
        s.push_str(BINARY_PREFIX);
        s.extend(self.bits_msb_first());
        s.push_str(BINARY_SUFFIX);
        s
    }
    fn bits_msb_first(&self) -> impl Iterator<Item = char> + '_ {
        self.digits.iter().rev().map(|&bit| if bit { '1' } else { '0' })
    }
}

// 实现解析
impl FromStr for BitUint {
    type Err = ParseBitUintError;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        BitUint::from_str_radix(val, DEFAULT_RADIX)
    }
}

impl BitUint {
    /// Parses an optional `+` followed by digits of `radix`. Leading zeros are allowed.
    pub fn from_str_radix(val: &str, radix: u32) -> Result<BitUint, ParseBitUintError> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(ParseBitUintError::InvalidRadix(radix));
        }
        let (cursor, digits) = match val.strip_prefix('+') {
            Some(rest) => (1, rest),
            None => (0, val),
        };
        if digits.is_empty() {
            return Err(ParseBitUintError::Empty);
        }

        let base = BitUint::from(radix);
        let mut result = BitUint::zero();
        for (index, c) in digits.chars().enumerate() {
            let digit = c.to_digit(radix).ok_or_else(|| {
                debug!("rejecting {:?}: {:?} is not a radix {} digit", val, c, radix);
                ParseBitUintError::InvalidDigit { found: c, index: cursor + index }
            })?;
            result *= &base;
            result += BitUint::from(digit);
        }
        Ok(result)
    }
}

// 实现大小比较
impl BitUint {
    pub fn equals(&self, other: &BitUint) -> bool {
        self.digits.len() == other.digits.len() &&
            self.digits.iter().zip(other.digits.iter()).all(|(a, b)| a == b)
    }
    /// A longer normalized value is always the larger one. Equal lengths are decided by the
    /// most significant digit where the two differ.
    pub fn less_than(&self, other: &BitUint) -> bool {
        let self_len = self.digits.len();
        let other_len = other.digits.len();

        if self_len != other_len {
            return self_len < other_len;
        }

        for pos in (0..self_len).rev() {
            let a = self.digits[pos];
            let b = other.digits[pos];
            if a != b {
                return b;
            }
        }

        false
    }
    pub fn greater_than(&self, other: &BitUint) -> bool {
        other.less_than(self)
    }
    pub fn less_or_equal(&self, other: &BitUint) -> bool {
        !self.greater_than(other)
    }
    pub fn greater_or_equal(&self, other: &BitUint) -> bool {
        !self.less_than(other)
    }
    pub fn not_equals(&self, other: &BitUint) -> bool {
        !self.equals(other)
    }
}

impl PartialEq for BitUint {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Self) -> bool {
        self.not_equals(other)
    }
}
impl Eq for BitUint {}

impl Hash for BitUint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}

impl PartialOrd for BitUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
    fn lt(&self, other: &Self) -> bool {
        self.less_than(other)
    }
    fn le(&self, other: &Self) -> bool {
        self.less_or_equal(other)
    }
    fn gt(&self, other: &Self) -> bool {
        self.greater_than(other)
    }
    fn ge(&self, other: &Self) -> bool {
        self.greater_or_equal(other)
    }
}

impl Ord for BitUint {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.less_than(other) {
            Ordering::Less
        } else if self.equals(other) {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}

// 实现加法
impl BitUint {
    /// One full-adder step, returns `(sum, carry)`.
    #[inline(always)]
    fn full_add(a: bool, b: bool, carry: bool) -> (bool, bool) {
        (a ^ b ^ carry, (a & b) | (a & carry) | (b & carry))
    }

    fn add_digits(x: &[bool], y: &[bool]) -> Vec<bool> {
        // one spare slot for the final carry out
        let width = x.len().max(y.len()) + 1;
        let mut result = Vec::with_capacity(width);
        let mut carry = false;
        for i in 0..width {
            let a = x.get(i).copied().unwrap_or(false);
            let b = y.get(i).copied().unwrap_or(false);
            let (sum, carry_out) = BitUint::full_add(a, b, carry);
            result.push(sum);
            carry = carry_out;
        }
        debug_assert!(!carry);
        trace!("add: {} + {} digits -> {} slots", x.len(), y.len(), width);
        BitUint::normalize(result)
    }
}

impl Add for &BitUint {
    type Output = BitUint;

    fn add(self, rhs: Self) -> Self::Output {
        BitUint::from_raw(BitUint::add_digits(&self.digits, &rhs.digits))
    }
}

impl Add for BitUint {
    type Output = BitUint;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&BitUint> for BitUint {
    type Output = BitUint;

    fn add(self, rhs: &BitUint) -> Self::Output {
        &self + rhs
    }
}

impl AddAssign<&BitUint> for BitUint {
    fn add_assign(&mut self, rhs: &BitUint) {
        self.digits = BitUint::add_digits(&self.digits, &rhs.digits);
    }
}

impl AddAssign for BitUint {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

// 实现左移
/// Panics when the shifted value would need more than `usize::MAX` digits.
impl Shl<usize> for &BitUint {
    type Output = BitUint;

    fn shl(self, n: usize) -> Self::Output {
        if n == 0 || self.is_zero() {
            return self.clone();
        }
        let len = match n.checked_add(self.digits.len()) {
            Some(len) => len,
            None => panic!("shift by {} overflows the digit count", n),
        };
        let mut digits = vec![false; len];
        digits[n..].copy_from_slice(&self.digits);
        BitUint::from_raw(digits)
    }
}

impl Shl<usize> for BitUint {
    type Output = BitUint;

    fn shl(self, n: usize) -> Self::Output {
        &self << n
    }
}

impl ShlAssign<usize> for BitUint {
    fn shl_assign(&mut self, n: usize) {
        *self = &*self << n;
    }
}

// 实现乘法
impl BitUint {
    fn mul_digits(x: &[bool], y: &[bool]) -> Vec<bool> {
        debug_assert!(BitUint::is_normalized(x) && BitUint::is_normalized(y));
        if matches!(x, [false]) || matches!(y, [false]) {
            return vec![false];
        }

        let mut acc = vec![false; x.len() + y.len()];
        let mut partials = 0;
        for (shift, _) in y.iter().enumerate().filter(|(_, bit)| **bit) {
            BitUint::add_shifted(&mut acc, x, shift);
            partials += 1;
        }
        trace!("mul: {} x {} digits, {} partial products", x.len(), y.len(), partials);
        BitUint::normalize(acc)
    }

    /// `acc += x << shift`, with the carry chained through the rest of `acc`.
    fn add_shifted(acc: &mut [bool], x: &[bool], shift: usize) {
        let mut carry = false;
        for (i, slot) in acc.iter_mut().enumerate().skip(shift) {
            let pos = i - shift;
            if pos >= x.len() && !carry {
                break;
            }
            let a = x.get(pos).copied().unwrap_or(false);
            let (sum, carry_out) = BitUint::full_add(*slot, a, carry);
            *slot = sum;
            carry = carry_out;
        }
        debug_assert!(!carry, "accumulator too narrow");
    }
}

impl Mul for &BitUint {
    type Output = BitUint;

    fn mul(self, rhs: Self) -> Self::Output {
        BitUint::from_raw(BitUint::mul_digits(&self.digits, &rhs.digits))
    }
}

impl Mul for BitUint {
    type Output = BitUint;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&BitUint> for BitUint {
    type Output = BitUint;

    fn mul(self, rhs: &BitUint) -> Self::Output {
        &self * rhs
    }
}

impl MulAssign<&BitUint> for BitUint {
    fn mul_assign(&mut self, rhs: &BitUint) {
        self.digits = BitUint::mul_digits(&self.digits, &rhs.digits);
    }
}

impl MulAssign for BitUint {
    fn mul_assign(&mut self, rhs: Self) {
        *self *= &rhs;
    }
}

#[cfg(test)]
fn bits(s: &str) -> Vec<bool> {
    s.chars().rev().map(|c| c == '1').collect()
}

#[test]
fn test_from() {
    assert_eq!(BitUint::from(0u8).digits, vec![false]);
    assert_eq!(BitUint::from(1u16).digits, vec![true]);
    assert_eq!(BitUint::from(5u32).digits, bits("101"));
    assert_eq!(BitUint::from(16usize).digits, bits("10000"));
    assert_eq!(BitUint::from(17u64).digits, bits("10001"));
    assert_eq!(BitUint::from(u128::MAX).digits, vec![true; 128]);
    assert_eq!(BitUint::default(), BitUint::zero());
    assert!(BitUint::default().is_zero());
}

#[test]
fn test_normalize() {
    assert_eq!(BitUint::normalize(vec![]), vec![false]);
    assert_eq!(BitUint::normalize(vec![false, false, false]), vec![false]);
    assert_eq!(BitUint::normalize(bits("000101")), bits("101"));
    assert_eq!(BitUint::normalize(bits("1")), bits("1"));

    let once = BitUint::normalize(bits("0011010"));
    assert_eq!(BitUint::normalize(once.clone()), once);

    let a = BitUint::from_bits_le(&[true, false, true, false, false]);
    assert_eq!(a, BitUint::from(5u8));
    assert_eq!(a.digit_len(), 3);
    assert_eq!(BitUint::from_bits_le(&[]), BitUint::zero());
}

#[test]
fn test_to_bits_is_a_copy() {
    let a = BitUint::from(6u8);
    let mut copy = a.to_bits();
    copy[0] = true;
    assert_eq!(a.to_bits(), bits("110"));
    assert_eq!(a.to_decimal_string(), "6");
}

#[test]
fn test_add() {
    assert_eq!((BitUint::from(5u8) + BitUint::from(3u8)).to_decimal_string(), "8");
    assert_eq!(&BitUint::zero() + &BitUint::zero(), BitUint::zero());

    // operands of very different length, carry running all the way up
    let a = BitUint::from_bits_le(&vec![true; 200]);
    let sum = &a + &BitUint::one();
    assert_eq!(sum, BitUint::one() << 200);
    assert_eq!(&BitUint::one() + &a, sum);

    let mut c = BitUint::from(u64::MAX);
    c += BitUint::from(u64::MAX);
    assert_eq!(c.to_u128(), Some(u64::MAX as u128 * 2));

    let a = BitUint::from(9u8);
    let b = BitUint::from(4u8);
    let _ = &a + &b;
    assert_eq!(a.to_decimal_string(), "9");
    assert_eq!(b.to_decimal_string(), "4");
}

#[test]
fn test_add_assign_self() {
    let mut a = BitUint::from(21u8);
    let b = a.clone();
    a += &b;
    assert_eq!(a, BitUint::from(42u8));
}

#[test]
fn test_mul() {
    assert_eq!((BitUint::from(6u8) * BitUint::from(7u8)).to_decimal_string(), "42");
    assert_eq!(&BitUint::from(123u8) * &BitUint::zero(), BitUint::zero());
    assert_eq!(&BitUint::zero() * &BitUint::from(123u8), BitUint::zero());
    assert_eq!(&BitUint::from(123u8) * &BitUint::one(), BitUint::from(123u8));

    let a = BitUint::from(u128::MAX);
    let product = &a * &a;
    // (2^128 - 1)^2 = 2^256 - 2^129 + 1
    let mut expected = BitUint::one() << 256;
    expected += BitUint::one();
    assert_eq!(&product + &(BitUint::one() << 129), expected);

    let mut m = BitUint::from(1_000_000_000_000_000u64);
    m *= BitUint::from(1_000_000_000_000_000u64);
    assert_eq!(m.to_decimal_string(), format!("1{}", "0".repeat(30)));

    let mut sq = BitUint::from(12345u32);
    let copy = sq.clone();
    sq *= &copy;
    assert_eq!(sq, BitUint::from(12345u64 * 12345));
}

#[test]
fn test_shl() {
    assert_eq!(BitUint::from(5u8) << 3, BitUint::from(40u8));
    assert_eq!(BitUint::zero() << 10, BitUint::zero());
    let mut a = BitUint::from(3u8);
    a <<= 0;
    assert_eq!(a, BitUint::from(3u8));
    a <<= 64;
    assert_eq!(a.to_u128(), Some(3u128 << 64));
}

#[test]
#[should_panic(expected = "overflows the digit count")]
fn test_shl_overflow() {
    let _ = BitUint::from(3u8) << usize::MAX;
}

#[test]
fn test_cmp() {
    let three = BitUint::from(3u8);
    let five = BitUint::from(5u8);
    assert!(three.less_than(&five));
    assert!(five.greater_or_equal(&three));
    assert!(!five.less_than(&five));
    assert!(five.less_or_equal(&five));
    assert!(BitUint::from(255u16).equals(&BitUint::from(255u16)));
    assert!(BitUint::from(255u16).not_equals(&BitUint::from(256u16)));

    // same length, differing only in a low digit
    let a = BitUint::from_bits_le(&bits("1011000"));
    let b = BitUint::from_bits_le(&bits("1011001"));
    assert!(a < b && b > a && a <= b && b >= a && a != b);
    assert_eq!(a.cmp(&b), Ordering::Less);
    assert_eq!(a.cmp(&a.clone()), Ordering::Equal);

    // same length, high digit decides even though the rest favours the other side
    let c = BitUint::from_bits_le(&bits("10111"));
    let d = BitUint::from_bits_le(&bits("11000"));
    assert!(c < d);
    assert!(!(d < c));

    assert!(BitUint::zero() < BitUint::one());
    assert_eq!(std::cmp::max(three.clone(), five.clone()), five);
}

#[test]
fn test_to_string() {
    assert_eq!(BitUint::zero().to_decimal_string(), "0");
    assert_eq!(BitUint::zero().to_binary_string(), "(0)_2");
    assert_eq!(BitUint::from(5u8).to_binary_string(), "(101)_2");
    assert_eq!((BitUint::one() << 128).to_decimal_string(), "340282366920938463463374607431768211456");
    assert_eq!(
        (BitUint::one() << 256).to_decimal_string(),
        "115792089237316195423570985008687907853269984665640564039457584007913129639936"
    );
    assert_eq!(BitUint::from(255u8).to_string_radix(16), "ff");
    assert_eq!(BitUint::from(35u8).to_string_radix(36), "z");
    assert_eq!(BitUint::from(10u8).to_string_radix(2), "1010");
    assert_eq!(BitUint::from(10u8).to_string_radix(99), "10");

    assert_eq!(format!("{}", BitUint::from(42u8)), "42");
    assert_eq!(format!("{:>5}", BitUint::from(42u8)), "   42");
    assert_eq!(format!("{:b}", BitUint::from(5u8)), "101");
    assert_eq!(format!("{:#b}", BitUint::from(5u8)), "0b101");
    assert_eq!(format!("{:08b}", BitUint::from(5u8)), "00000101");
}

#[test]
fn test_from_str_radix() {
    let a: BitUint = "12345678909876523784950683472613487560983287654321".parse().unwrap();
    assert_eq!(a.to_decimal_string(), "12345678909876523784950683472613487560983287654321");

    let a = BitUint::from_str_radix("fafcfbffaffaffbffbffbffbffbff", 16).unwrap();
    assert_eq!(a.to_string_radix(16), "fafcfbffaffaffbffbffbffbffbff");

    assert_eq!("+0042".parse::<BitUint>(), Ok(BitUint::from(42u8)));
    assert_eq!("000".parse::<BitUint>(), Ok(BitUint::zero()));
    assert_eq!(BitUint::from_str_radix("101", 2), Ok(BitUint::from(5u8)));
    assert_eq!(BitUint::from_str_radix("Z", 36), Ok(BitUint::from(35u8)));

    assert_eq!("".parse::<BitUint>(), Err(ParseBitUintError::Empty));
    assert_eq!("+".parse::<BitUint>(), Err(ParseBitUintError::Empty));
    assert_eq!(
        "12a4".parse::<BitUint>(),
        Err(ParseBitUintError::InvalidDigit { found: 'a', index: 2 })
    );
    assert_eq!(
        "+-1".parse::<BitUint>(),
        Err(ParseBitUintError::InvalidDigit { found: '-', index: 1 })
    );
    assert_eq!(BitUint::from_str_radix("12", 2), Err(ParseBitUintError::InvalidDigit { found: '2', index: 1 }));
    assert_eq!(BitUint::from_str_radix("1", 1), Err(ParseBitUintError::InvalidRadix(1)));
    assert_eq!(BitUint::from_str_radix("1", 37), Err(ParseBitUintError::InvalidRadix(37)));
}

#[test]
fn test_to_u128() {
    assert_eq!(BitUint::from(123456789110u64).to_u128(), Some(123456789110));
    assert_eq!(BitUint::from(u128::MAX).to_u128(), Some(u128::MAX));
    assert_eq!((BitUint::one() << 128).to_u128(), None);
}
