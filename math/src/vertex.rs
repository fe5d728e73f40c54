mod convert;
#[cfg(test)]
mod tests;

use {
    crate::{component::Component, half::Half, Real},
    num_traits::AsPrimitive,
    std::{
        fmt::{Display, Formatter},
        ops::{
            Add, AddAssign, BitXor, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
        },
        slice,
    },
};

macro_rules! vertex {
    ($(#[$attr:meta])* $name:ident, $n:literal, $($field:ident),+) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, Default, PartialEq)]
        #[repr(C)]
        pub struct $name<T> {
            $(pub $field: T,)+
        }

        impl<T: Component> $name<T> {
            pub const ZERO: Self = Self { $($field: T::ZERO,)+ };
            pub const ONE: Self = Self { $($field: T::ONE,)+ };
            pub const MIN_VALUE: Self = Self { $($field: T::MIN,)+ };
            pub const MAX_VALUE: Self = Self { $($field: T::MAX,)+ };

            pub const fn new($($field: T),+) -> Self {
                Self { $($field,)+ }
            }

            pub const fn splat(v: T) -> Self {
                Self { $($field: v,)+ }
            }

            pub fn dot(self, rhs: Self) -> T {
                let mut acc = T::ZERO;
                $(acc = acc.add(self.$field.mul(rhs.$field));)+
                acc
            }

            /// Componentwise minimum over `items`, seeded with `T::MAX`.
            pub fn min(items: &[Self]) -> Self {
                let mut res = Self::MAX_VALUE;
                for v in items {
                    $(
                        if v.$field < res.$field {
                            res.$field = v.$field;
                        }
                    )+
                }
                res
            }

            /// Componentwise maximum over `items`, seeded with `T::MIN`.
            pub fn max(items: &[Self]) -> Self {
                let mut res = Self::MIN_VALUE;
                for v in items {
                    $(
                        if v.$field > res.$field {
                            res.$field = v.$field;
                        }
                    )+
                }
                res
            }

            /// Both reductions in a single pass.
            pub fn min_max(items: &[Self]) -> (Self, Self) {
                let mut min = Self::MAX_VALUE;
                let mut max = Self::MIN_VALUE;
                for v in items {
                    $(
                        if v.$field < min.$field {
                            min.$field = v.$field;
                        }
                        if v.$field > max.$field {
                            max.$field = v.$field;
                        }
                    )+
                }
                (min, max)
            }

            pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
                let tolerance = tolerance.to_f64();
                $((self.$field.to_f64() - other.$field.to_f64()).abs() <= tolerance)&&+
            }

            pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> $name<U> {
                $name { $($field: f(self.$field),)+ }
            }

            /// Converts every component with `as` semantics.
            pub fn cast<U>(self) -> $name<U>
            where
                T: AsPrimitive<U>,
                U: Component,
            {
                $name { $($field: self.$field.as_(),)+ }
            }

            pub fn as_array(&self) -> &[T; $n] {
                unsafe { &*(self as *const Self as *const [T; $n]) }
            }

            /// Flattens a vertex array into its components, in memory order.
            pub fn components(items: &[Self]) -> &[T] {
                unsafe { slice::from_raw_parts(items.as_ptr() as *const T, items.len() * $n) }
            }
        }

        impl<T: Real> $name<T> {
            pub fn module_squared(self) -> T {
                self.dot(self)
            }

            /// The euclidean length.
            pub fn module(self) -> T {
                self.module_squared().sqrt()
            }

            /// Leaves the vertex untouched if its module is below epsilon.
            pub fn normalize(&mut self) {
                let module = self.module();
                if module < <T as Component>::EPSILON {
                    return;
                }
                $(self.$field = self.$field / module;)+
            }

            pub fn normalized(mut self) -> Self {
                self.normalize();
                self
            }
        }

        /// Computed in f32 and rounded back.
        impl $name<Half> {
            pub fn module_squared(self) -> Half {
                Half::from_f32(self.cast::<f32>().module_squared())
            }

            pub fn module(self) -> Half {
                Half::from_f32(self.cast::<f32>().module())
            }

            /// Leaves the vertex untouched if its module is below epsilon.
            pub fn normalize(&mut self) {
                let v = self.cast::<f32>();
                let module = v.module();
                if module < Half::EPSILON.to_f32() {
                    return;
                }
                *self = (v / module).cast();
            }

            pub fn normalized(mut self) -> Self {
                self.normalize();
                self
            }
        }

        impl<T: Component> From<[T; $n]> for $name<T> {
            fn from(v: [T; $n]) -> Self {
                let [$($field),+] = v;
                Self { $($field,)+ }
            }
        }

        impl<T: Component> From<$name<T>> for [T; $n] {
            fn from(v: $name<T>) -> Self {
                [$(v.$field),+]
            }
        }

        impl<T: Component> Add for $name<T> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field.add(rhs.$field),)+ }
            }
        }

        impl<T: Component> Sub for $name<T> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field.sub(rhs.$field),)+ }
            }
        }

        impl<T: Component> Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self { $($field: self.$field.neg(),)+ }
            }
        }

        impl<T: Component> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self { $($field: self.$field.mul(rhs),)+ }
            }
        }

        impl<T: Component> Div<T> for $name<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                Self { $($field: self.$field.div(rhs),)+ }
            }
        }

        impl<T: Component> AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: Component> SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: Component> MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T: Component> DivAssign<T> for $name<T> {
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }

        impl<T: Component> Display for $name<T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "[")?;
                for (i, c) in self.as_array().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    Display::fmt(c, f)?;
                }
                write!(f, "]")
            }
        }
    };
}

vertex!(
    /// A two-component vertex.
    Vertex2, 2, x, y
);
vertex!(
    /// A three-component vertex.
    Vertex3, 3, x, y, z
);
vertex!(
    /// A four-component (homogeneous) vertex.
    Vertex4, 4, x, y, z, w
);

impl<T: Component> Vertex2<T> {
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO);
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE);
}

impl<T: Component> Vertex3<T> {
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    /// Right-handed cross product.
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y.mul(rhs.z).sub(self.z.mul(rhs.y)),
            self.z.mul(rhs.x).sub(self.x.mul(rhs.z)),
            self.x.mul(rhs.y).sub(self.y.mul(rhs.x)),
        )
    }

    pub fn xy(self) -> Vertex2<T> {
        Vertex2::new(self.x, self.y)
    }
}

impl<T: Component> BitXor for Vertex3<T> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.cross(rhs)
    }
}

impl<T: Component> Vertex4<T> {
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);
    pub const UNIT_W: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

    pub fn xy(self) -> Vertex2<T> {
        Vertex2::new(self.x, self.y)
    }

    /// Drops `w` without dividing by it.
    pub fn xyz(self) -> Vertex3<T> {
        Vertex3::new(self.x, self.y, self.z)
    }
}

impl<T: Real> Vertex4<T> {
    /// Perspective division. A zero `w` leaves the components as they are.
    pub fn to_cartesian(self) -> Vertex3<T> {
        if self.w == T::zero() {
            return self.xyz();
        }
        Vertex3::new(self.x / self.w, self.y / self.w, self.z / self.w)
    }
}

pub type Vertex2ub = Vertex2<u8>;
pub type Vertex2b = Vertex2<i8>;
pub type Vertex2us = Vertex2<u16>;
pub type Vertex2s = Vertex2<i16>;
pub type Vertex2ui = Vertex2<u32>;
pub type Vertex2i = Vertex2<i32>;
pub type Vertex2f = Vertex2<f32>;
pub type Vertex2d = Vertex2<f64>;
pub type Vertex2hf = Vertex2<Half>;

pub type Vertex3ub = Vertex3<u8>;
pub type Vertex3b = Vertex3<i8>;
pub type Vertex3us = Vertex3<u16>;
pub type Vertex3s = Vertex3<i16>;
pub type Vertex3ui = Vertex3<u32>;
pub type Vertex3i = Vertex3<i32>;
pub type Vertex3f = Vertex3<f32>;
pub type Vertex3d = Vertex3<f64>;
pub type Vertex3hf = Vertex3<Half>;

pub type Vertex4ub = Vertex4<u8>;
pub type Vertex4b = Vertex4<i8>;
pub type Vertex4us = Vertex4<u16>;
pub type Vertex4s = Vertex4<i16>;
pub type Vertex4ui = Vertex4<u32>;
pub type Vertex4i = Vertex4<i32>;
pub type Vertex4f = Vertex4<f32>;
pub type Vertex4d = Vertex4<f64>;
pub type Vertex4hf = Vertex4<Half>;
