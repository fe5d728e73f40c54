#![allow(clippy::needless_range_loop, clippy::should_implement_trait)]

pub mod component;
pub mod half;
pub mod matrix;
pub mod vertex;

pub use {
    component::{Component, Real},
    half::Half,
    matrix::{
        MathError, Matrix, Matrix2x2, Matrix2x2d, Matrix2x2f, Matrix3x3, Matrix3x3d, Matrix3x3f,
        Matrix4x4, Matrix4x4d, Matrix4x4f, SquareMatrix,
    },
    vertex::*,
};
