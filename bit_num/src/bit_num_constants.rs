pub const DIGITS: [char; 36] = [
    '0' , '1' , '2' , '3' , '4' , '5' ,
    '6' , '7' , '8' , '9' , 'a' , 'b' ,
    'c' , 'd' , 'e' , 'f' , 'g' , 'h' ,
    'i' , 'j' , 'k' , 'l' , 'm' , 'n' ,
    'o' , 'p' , 'q' , 'r' , 's' , 't' ,
    'u' , 'v' , 'w' , 'x' , 'y' , 'z'
];

pub const MIN_RADIX: u32 = 2;

pub const MAX_RADIX: u32 = 36;

pub const DEFAULT_RADIX: u32 = 10;

/// Values `0..=MAX_CONSTANT` are handed out from the cache.
pub const MAX_CONSTANT: usize = 16;

pub const BINARY_PREFIX: &str = "(";

pub const BINARY_SUFFIX: &str = ")_2";
