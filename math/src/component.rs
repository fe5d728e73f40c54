use {
    crate::half::Half,
    num_traits::{AsPrimitive, Float},
    std::fmt::{Debug, Display},
};

/// Scalar type stored in a vertex.
///
/// Integer implementations wrap on overflow, the same way the native
/// fixed-width types behave. Division by zero panics for integers.
pub trait Component:
    Copy + PartialEq + PartialOrd + Default + Debug + Display + Send + Sync + 'static
{
    const ZERO: Self;
    const ONE: Self;
    /// The smallest finite value.
    const MIN: Self;
    /// The largest finite value.
    const MAX: Self;
    /// Zero for integer types.
    const EPSILON: Self;

    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    fn div(self, rhs: Self) -> Self;
    fn neg(self) -> Self;
    fn to_f64(self) -> f64;
    fn from_f64(v: f64) -> Self;
}

/// Floating point components: the ones with a meaningful magnitude.
pub trait Real: Component + Float {}

impl Real for f32 {}
impl Real for f64 {}

macro_rules! integer {
    ($($ty:ident,)*) => {
        $(
            impl Component for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MIN: Self = $ty::MIN;
                const MAX: Self = $ty::MAX;
                const EPSILON: Self = 0;

                fn add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                fn sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                fn mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                fn div(self, rhs: Self) -> Self {
                    self.wrapping_div(rhs)
                }

                fn neg(self) -> Self {
                    self.wrapping_neg()
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64(v: f64) -> Self {
                    v as $ty
                }
            }

            impl AsPrimitive<Half> for $ty {
                fn as_(self) -> Half {
                    Half::from_f32(self as f32)
                }
            }

            impl AsPrimitive<$ty> for Half {
                fn as_(self) -> $ty {
                    self.to_f32() as $ty
                }
            }
        )*
    };
}

integer! {
    u8, i8, u16, i16, u32, i32,
}

macro_rules! float {
    ($($ty:ident,)*) => {
        $(
            impl Component for $ty {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const MIN: Self = $ty::MIN;
                const MAX: Self = $ty::MAX;
                const EPSILON: Self = $ty::EPSILON;

                fn add(self, rhs: Self) -> Self {
                    self + rhs
                }

                fn sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                fn mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                fn div(self, rhs: Self) -> Self {
                    self / rhs
                }

                fn neg(self) -> Self {
                    -self
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64(v: f64) -> Self {
                    v as $ty
                }
            }

            impl AsPrimitive<Half> for $ty {
                fn as_(self) -> Half {
                    Half::from_f32(self as f32)
                }
            }

            impl AsPrimitive<$ty> for Half {
                fn as_(self) -> $ty {
                    self.to_f32() as $ty
                }
            }
        )*
    };
}

float! {
    f32, f64,
}

impl Component for Half {
    const ZERO: Self = Half::ZERO;
    const ONE: Self = Half::ONE;
    const MIN: Self = Half::MIN;
    const MAX: Self = Half::MAX;
    const EPSILON: Self = Half::EPSILON;

    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }

    fn mul(self, rhs: Self) -> Self {
        self * rhs
    }

    fn div(self, rhs: Self) -> Self {
        self / rhs
    }

    fn neg(self) -> Self {
        -self
    }

    fn to_f64(self) -> f64 {
        Half::to_f64(self)
    }

    fn from_f64(v: f64) -> Self {
        Half::from_f64(v)
    }
}

impl AsPrimitive<Half> for Half {
    fn as_(self) -> Half {
        self
    }
}
