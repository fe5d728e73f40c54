
use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    ops::{Add, Div, Mul, Neg, Sub},
};

/// An IEEE 754 binary16 value.
///
/// Only storage is half precision. Arithmetic widens to `f32` and rounds the
/// result back to the nearest representable value.
#[derive(Copy, Clone, Default)]
#[repr(transparent)]
pub struct Half(pub u16);

impl Half {
    pub const ZERO: Self = Self(0x0000);
    pub const ONE: Self = Self(0x3c00);
    pub const MIN: Self = Self(0xfbff);
    pub const MAX: Self = Self(0x7bff);
    pub const EPSILON: Self = Self(0x1400);
    pub const INFINITY: Self = Self(0x7c00);
    pub const NEG_INFINITY: Self = Self(0xfc00);
    pub const NAN: Self = Self(0x7e00);

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> u16 {
        self.0
    }

    pub fn is_nan(self) -> bool {
        self.0 & 0x7c00 == 0x7c00 && self.0 & 0x03ff != 0
    }

    /// Rounds to nearest, ties to even.
    pub fn from_f32(v: f32) -> Self {
        let x = v.to_bits();
        let sign = ((x >> 16) & 0x8000) as u16;
        let exp = ((x >> 23) & 0xff) as i32;
        let man = x & 0x007f_ffff;
        if exp == 0xff {
            let quiet = if man != 0 { 0x0200 } else { 0 };
            return Self(sign | 0x7c00 | quiet | (man >> 13) as u16);
        }
        let e = exp - 127 + 15;
        if e >= 0x1f {
            return Self(sign | 0x7c00);
        }
        if e <= 0 {
            if e < -10 {
                return Self(sign);
            }
            let m = man | 0x0080_0000;
            let shift = (14 - e) as u32;
            let round_bit = 1u32 << (shift - 1);
            let mut r = m >> shift;
            if m & round_bit != 0 && (m & (round_bit - 1) != 0 || r & 1 != 0) {
                r += 1;
            }
            return Self(sign | r as u16);
        }
        let mut r = ((e as u32) << 10) | (man >> 13);
        // a carry out of the mantissa correctly bumps the exponent
        if man & 0x1000 != 0 && (man & 0x0fff != 0 || r & 1 != 0) {
            r += 1;
        }
        Self(sign | r as u16)
    }

    pub fn to_f32(self) -> f32 {
        let h = self.0 as u32;
        let sign = (h & 0x8000) << 16;
        let exp = (h >> 10) & 0x1f;
        let man = h & 0x03ff;
        let bits = match exp {
            0 => {
                let v = man as f32 * (1.0 / 16_777_216.0);
                return if sign != 0 { -v } else { v };
            }
            0x1f => sign | 0x7f80_0000 | (man << 13),
            _ => sign | ((exp + 112) << 23) | (man << 13),
        };
        f32::from_bits(bits)
    }

    pub fn to_f64(self) -> f64 {
        self.to_f32() as f64
    }

    pub fn from_f64(v: f64) -> Self {
        Self::from_f32(v as f32)
    }
}

impl From<Half> for f32 {
    fn from(v: Half) -> Self {
        v.to_f32()
    }
}

impl From<Half> for f64 {
    fn from(v: Half) -> Self {
        v.to_f64()
    }
}

impl PartialEq for Half {
    fn eq(&self, other: &Self) -> bool {
        self.to_f32() == other.to_f32()
    }
}

impl PartialOrd for Half {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_f32().partial_cmp(&other.to_f32())
    }
}

impl Debug for Half {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.to_f32(), f)
    }
}

impl Display for Half {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.to_f32(), f)
    }
}

macro_rules! binop {
    ($tr:ident, $f:ident, $op:tt) => {
        impl $tr for Half {
            type Output = Self;

            fn $f(self, rhs: Self) -> Self::Output {
                Self::from_f32(self.to_f32() $op rhs.to_f32())
            }
        }
    };
}

binop!(Add, add, +);
binop!(Sub, sub, -);
binop!(Mul, mul, *);
binop!(Div, div, /);

impl Neg for Half {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0 ^ 0x8000)
    }
}
