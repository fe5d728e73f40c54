use {
    crate::{
        error::GlError,
        gl::{Gl, sizei},
        sys::*,
    },
    glbind_math::{Component, Half},
    std::{ffi::c_void, mem},
};

/// Component types that can be read by `glVertexAttribPointer`.
pub trait AttribType: Component {
    const GL_TYPE: GLenum;
}

macro_rules! attrib_type {
    ($($ty:ty => $gl:ident,)*) => {
        $(
            impl AttribType for $ty {
                const GL_TYPE: GLenum = $gl;
            }
        )*
    };
}

attrib_type! {
    i8 => GL_BYTE,
    u8 => GL_UNSIGNED_BYTE,
    i16 => GL_SHORT,
    u16 => GL_UNSIGNED_SHORT,
    i32 => GL_INT,
    u32 => GL_UNSIGNED_INT,
    f32 => GL_FLOAT,
    f64 => GL_DOUBLE,
    Half => GL_HALF_FLOAT,
}

impl Gl {
    /// Uploads `data` to the buffer bound to `target`.
    ///
    /// `T` should be a plain `repr(C)` type such as a vertex or matrix.
    pub fn buffer_slice<T: Copy>(
        &self,
        target: GLenum,
        data: &[T],
        usage: GLenum,
    ) -> Result<(), GlError> {
        let size = mem::size_of_val(data) as GLsizeiptr;
        unsafe { self.buffer_data(target, size, data.as_ptr() as *const c_void, usage) }
    }

    /// Replaces the elements starting at element `first`.
    pub fn buffer_sub_slice<T: Copy>(
        &self,
        target: GLenum,
        first: usize,
        data: &[T],
    ) -> Result<(), GlError> {
        let offset = (first * size_of::<T>()) as GLintptr;
        let size = mem::size_of_val(data) as GLsizeiptr;
        unsafe { self.buffer_sub_data(target, offset, size, data.as_ptr() as *const c_void) }
    }

    /// Describes attribute `index` as `components` values of type `T`
    /// starting `offset` bytes into the bound array buffer.
    ///
    /// # Safety
    ///
    /// A buffer must be bound to `GL_ARRAY_BUFFER`. Otherwise `offset` is
    /// read as a client memory address by the next draw call.
    pub unsafe fn attrib_layout<T: AttribType>(
        &self,
        index: GLuint,
        components: GLint,
        normalized: bool,
        stride: usize,
        offset: usize,
    ) -> Result<(), GlError> {
        unsafe {
            self.vertex_attrib_pointer(
                index,
                components,
                T::GL_TYPE,
                normalized as GLboolean,
                sizei(stride)?,
                offset as *const c_void,
            )
        }
    }
}
