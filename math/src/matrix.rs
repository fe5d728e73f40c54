#[cfg(test)]
mod tests;

use {
    crate::{
        component::{Component, Real},
        vertex::{Vertex2, Vertex3, Vertex4},
    },
    std::ops::{Mul, MulAssign},
    thiserror::Error,
};

#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum MathError {
    #[error("The matrix is singular")]
    Singular,
}

/// Operations shared by all square matrices.
pub trait SquareMatrix: Copy + Sized {
    type Scalar: Real;
    type Vertex;

    fn identity() -> Self;

    fn transpose(&self) -> Self;

    fn determinant(&self) -> Self::Scalar;

    fn inverse(&self) -> Result<Self, MathError>;

    fn transform(&self, v: Self::Vertex) -> Self::Vertex;
}

/// A column-major square matrix, laid out the way `glUniformMatrix*` expects
/// it with `transpose = GL_FALSE`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Matrix<T, const N: usize> {
    pub columns: [[T; N]; N],
}

pub type Matrix2x2<T> = Matrix<T, 2>;
pub type Matrix3x3<T> = Matrix<T, 3>;
pub type Matrix4x4<T> = Matrix<T, 4>;
pub type Matrix2x2f = Matrix2x2<f32>;
pub type Matrix2x2d = Matrix2x2<f64>;
pub type Matrix3x3f = Matrix3x3<f32>;
pub type Matrix3x3d = Matrix3x3<f64>;
pub type Matrix4x4f = Matrix4x4<f32>;
pub type Matrix4x4d = Matrix4x4<f64>;

impl<T: Real, const N: usize> Matrix<T, N> {
    pub const fn from_columns(columns: [[T; N]; N]) -> Self {
        Self { columns }
    }

    pub fn from_rows(rows: [[T; N]; N]) -> Self {
        Self { columns: rows }.transpose_n()
    }

    pub fn identity_n() -> Self {
        let mut columns = [[T::zero(); N]; N];
        for i in 0..N {
            columns[i][i] = T::one();
        }
        Self { columns }
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        self.columns[col][row]
    }

    pub fn set(&mut self, row: usize, col: usize, v: T) {
        self.columns[col][row] = v;
    }

    pub fn transpose_n(&self) -> Self {
        let mut columns = self.columns;
        for col in 0..N {
            for row in 0..N {
                columns[col][row] = self.columns[row][col];
            }
        }
        Self { columns }
    }

    /// Gaussian elimination with partial pivoting.
    pub fn determinant_n(&self) -> T {
        let mut m = self.columns;
        let mut det = T::one();
        for col in 0..N {
            let pivot = pivot_row(&m, col);
            if m[col][pivot] == T::zero() {
                return T::zero();
            }
            if pivot != col {
                swap_rows(&mut m, pivot, col);
                det = -det;
            }
            let p = m[col][col];
            det = det * p;
            for row in col + 1..N {
                let factor = m[col][row] / p;
                for c in col..N {
                    m[c][row] = m[c][row] - factor * m[c][col];
                }
            }
        }
        det
    }

    /// Gauss-Jordan elimination with partial pivoting.
    ///
    /// Fails if the absolute determinant is below `T::EPSILON`.
    pub fn inverse_n(&self) -> Result<Self, MathError> {
        if self.determinant_n().abs() < <T as Component>::EPSILON {
            return Err(MathError::Singular);
        }
        let mut m = self.columns;
        let mut inv = Self::identity_n().columns;
        for col in 0..N {
            let pivot = pivot_row(&m, col);
            if m[col][pivot] == T::zero() {
                return Err(MathError::Singular);
            }
            swap_rows(&mut m, pivot, col);
            swap_rows(&mut inv, pivot, col);
            let p = m[col][col];
            for c in 0..N {
                m[c][col] = m[c][col] / p;
                inv[c][col] = inv[c][col] / p;
            }
            for row in 0..N {
                if row == col {
                    continue;
                }
                let factor = m[col][row];
                if factor == T::zero() {
                    continue;
                }
                for c in 0..N {
                    m[c][row] = m[c][row] - factor * m[c][col];
                    inv[c][row] = inv[c][row] - factor * inv[c][col];
                }
            }
        }
        Ok(Self { columns: inv })
    }

    pub fn mul_array(&self, v: [T; N]) -> [T; N] {
        let mut res = [T::zero(); N];
        for row in 0..N {
            let mut acc = T::zero();
            for col in 0..N {
                acc = acc + self.columns[col][row] * v[col];
            }
            res[row] = acc;
        }
        res
    }

    pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        self.columns
            .iter()
            .flatten()
            .zip(other.columns.iter().flatten())
            .all(|(a, b)| (*a - *b).abs() <= tolerance)
    }

    /// The `N * N` components in column-major order.
    pub fn as_slice(&self) -> &[T] {
        self.columns.as_flattened()
    }
}

fn pivot_row<T: Real, const N: usize>(m: &[[T; N]; N], col: usize) -> usize {
    let mut best = col;
    for row in col + 1..N {
        if m[col][row].abs() > m[col][best].abs() {
            best = row;
        }
    }
    best
}

fn swap_rows<T: Copy, const N: usize>(m: &mut [[T; N]; N], a: usize, b: usize) {
    if a == b {
        return;
    }
    for column in m.iter_mut() {
        column.swap(a, b);
    }
}

impl<T: Real, const N: usize> Default for Matrix<T, N> {
    fn default() -> Self {
        Self::identity_n()
    }
}

impl<T: Real, const N: usize> Mul for Matrix<T, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut columns = [[T::zero(); N]; N];
        for col in 0..N {
            columns[col] = self.mul_array(rhs.columns[col]);
        }
        Self { columns }
    }
}

impl<T: Real, const N: usize> MulAssign for Matrix<T, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

macro_rules! square {
    ($n:literal, $vertex:ident) => {
        impl<T: Real> SquareMatrix for Matrix<T, $n> {
            type Scalar = T;
            type Vertex = $vertex<T>;

            fn identity() -> Self {
                Self::identity_n()
            }

            fn transpose(&self) -> Self {
                self.transpose_n()
            }

            fn determinant(&self) -> T {
                self.determinant_n()
            }

            fn inverse(&self) -> Result<Self, MathError> {
                self.inverse_n()
            }

            fn transform(&self, v: $vertex<T>) -> $vertex<T> {
                $vertex::from(self.mul_array(v.into()))
            }
        }

        impl<T: Real> Mul<$vertex<T>> for Matrix<T, $n> {
            type Output = $vertex<T>;

            fn mul(self, rhs: $vertex<T>) -> Self::Output {
                self.transform(rhs)
            }
        }
    };
}

square!(2, Vertex2);
square!(3, Vertex3);
square!(4, Vertex4);

impl<T: Real> Matrix3x3<T> {
    /// The upper-left 3x3 block of a 4x4 matrix.
    pub fn from_upper_left(m: &Matrix4x4<T>) -> Self {
        let mut columns = [[T::zero(); 3]; 3];
        for col in 0..3 {
            columns[col].copy_from_slice(&m.columns[col][..3]);
        }
        Self { columns }
    }
}

impl<T: Real> Matrix4x4<T> {
    pub fn translation(v: Vertex3<T>) -> Self {
        let mut m = Self::identity_n();
        m.columns[3] = [v.x, v.y, v.z, T::one()];
        m
    }

    pub fn scaling(v: Vertex3<T>) -> Self {
        let mut m = Self::identity_n();
        m.columns[0][0] = v.x;
        m.columns[1][1] = v.y;
        m.columns[2][2] = v.z;
        m
    }

    /// Counter-clockwise rotation around the x axis, `angle` in radians.
    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::identity_n();
        m.columns[1][1] = c;
        m.columns[1][2] = s;
        m.columns[2][1] = -s;
        m.columns[2][2] = c;
        m
    }

    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::identity_n();
        m.columns[0][0] = c;
        m.columns[0][2] = -s;
        m.columns[2][0] = s;
        m.columns[2][2] = c;
        m
    }

    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::identity_n();
        m.columns[0][0] = c;
        m.columns[0][1] = s;
        m.columns[1][0] = -s;
        m.columns[1][1] = c;
        m
    }

    /// Same matrix as `glOrtho`.
    pub fn ortho(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let two = T::one() + T::one();
        let mut m = Self::identity_n();
        m.columns[0][0] = two / (right - left);
        m.columns[1][1] = two / (top - bottom);
        m.columns[2][2] = -two / (far - near);
        m.columns[3][0] = -(right + left) / (right - left);
        m.columns[3][1] = -(top + bottom) / (top - bottom);
        m.columns[3][2] = -(far + near) / (far - near);
        m
    }

    /// Same matrix as `gluPerspective`, `fovy` in radians.
    pub fn perspective(fovy: T, aspect: T, near: T, far: T) -> Self {
        let two = T::one() + T::one();
        let f = T::one() / (fovy / two).tan();
        let mut columns = [[T::zero(); 4]; 4];
        columns[0][0] = f / aspect;
        columns[1][1] = f;
        columns[2][2] = (far + near) / (near - far);
        columns[2][3] = -T::one();
        columns[3][2] = two * far * near / (near - far);
        Self { columns }
    }
}
