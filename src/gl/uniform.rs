use {
    crate::{
        error::GlError,
        gl::{Gl, sizei},
        sys::*,
    },
    glbind_math::{Matrix2x2, Matrix3x3, Matrix4x4, Vertex2, Vertex3, Vertex4},
};

/// Values that can be stored in a uniform or uniform array.
pub trait Uniform: Copy {
    /// # Safety
    ///
    /// A program must be in use on the current context.
    unsafe fn upload(gl: &Gl, location: GLint, values: &[Self]) -> Result<(), GlError>;
}

macro_rules! vertex_uniform {
    ($($vertex:ident<$ty:ty> => $cmd:ident,)*) => {
        $(
            impl Uniform for $vertex<$ty> {
                unsafe fn upload(gl: &Gl, location: GLint, values: &[Self]) -> Result<(), GlError> {
                    let count = sizei(values.len())?;
                    let components = $vertex::components(values);
                    unsafe { gl.$cmd(location, count, components.as_ptr()) }
                }
            }
        )*
    };
}

vertex_uniform! {
    Vertex2<f32> => uniform2fv,
    Vertex3<f32> => uniform3fv,
    Vertex4<f32> => uniform4fv,
    Vertex2<i32> => uniform2iv,
    Vertex3<i32> => uniform3iv,
    Vertex4<i32> => uniform4iv,
    Vertex2<u32> => uniform2uiv,
    Vertex3<u32> => uniform3uiv,
    Vertex4<u32> => uniform4uiv,
    Vertex2<f64> => uniform2dv,
    Vertex3<f64> => uniform3dv,
    Vertex4<f64> => uniform4dv,
}

macro_rules! matrix_uniform {
    ($($matrix:ident<$ty:ty> => $cmd:ident,)*) => {
        $(
            impl Uniform for $matrix<$ty> {
                unsafe fn upload(gl: &Gl, location: GLint, values: &[Self]) -> Result<(), GlError> {
                    let count = sizei(values.len())?;
                    // Matrices are stored column-major, as GL expects.
                    let ptr = values.as_ptr() as *const $ty;
                    unsafe { gl.$cmd(location, count, GL_FALSE, ptr) }
                }
            }
        )*
    };
}

matrix_uniform! {
    Matrix2x2<f32> => uniform_matrix2fv,
    Matrix3x3<f32> => uniform_matrix3fv,
    Matrix4x4<f32> => uniform_matrix4fv,
    Matrix2x2<f64> => uniform_matrix2dv,
    Matrix3x3<f64> => uniform_matrix3dv,
    Matrix4x4<f64> => uniform_matrix4dv,
}

impl Gl {
    /// Uploads `values` to the uniform (array) at `location`.
    pub fn set_uniform<U: Uniform>(&self, location: GLint, values: &[U]) -> Result<(), GlError> {
        if values.is_empty() {
            return Ok(());
        }
        unsafe { U::upload(self, location, values) }
    }

    pub fn set_uniform_i32(&self, location: GLint, value: i32) -> Result<(), GlError> {
        unsafe { self.uniform1i(location, value) }
    }

    pub fn set_uniform_f32(&self, location: GLint, value: f32) -> Result<(), GlError> {
        unsafe { self.uniform1f(location, value) }
    }
}
