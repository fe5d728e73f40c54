use crate::{
    component::Component,
    half::Half,
    vertex::{Vertex2, Vertex3, Vertex4},
};

// Lossless component conversions. Everything else goes through `cast`.
macro_rules! widen {
    (@one $name:ident, $from:ty, $to:ty, $($field:ident),+) => {
        impl From<$name<$from>> for $name<$to> {
            fn from(v: $name<$from>) -> Self {
                Self { $($field: <$to>::from(v.$field),)+ }
            }
        }
    };
    ($($from:ty => [$($to:ty),*],)*) => {
        $(
            $(
                widen!(@one Vertex2, $from, $to, x, y);
                widen!(@one Vertex3, $from, $to, x, y, z);
                widen!(@one Vertex4, $from, $to, x, y, z, w);
            )*
        )*
    };
}

widen! {
    u8 => [u16, i16, u32, i32, f32, f64],
    i8 => [i16, i32, f32, f64],
    u16 => [u32, i32, f32, f64],
    i16 => [i32, f32, f64],
    u32 => [f64],
    i32 => [f64],
    f32 => [f64],
    Half => [f32, f64],
}

impl<T: Component> From<Vertex2<T>> for Vertex3<T> {
    fn from(v: Vertex2<T>) -> Self {
        Self::new(v.x, v.y, T::ZERO)
    }
}

impl<T: Component> From<Vertex2<T>> for Vertex4<T> {
    fn from(v: Vertex2<T>) -> Self {
        Self::new(v.x, v.y, T::ZERO, T::ONE)
    }
}

/// Appends the homogeneous coordinate `w = 1`.
impl<T: Component> From<Vertex3<T>> for Vertex4<T> {
    fn from(v: Vertex3<T>) -> Self {
        Self::new(v.x, v.y, v.z, T::ONE)
    }
}
