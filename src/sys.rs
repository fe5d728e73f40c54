mod gl;
mod wgl;

pub use {
    gl::*,
    std::ffi::{c_char, c_int, c_uint, c_void},
    wgl::*,
};

pub type GLenum = c_uint;
pub type GLboolean = u8;
pub type GLbitfield = c_uint;
pub type GLbyte = i8;
pub type GLshort = i16;
pub type GLint = c_int;
pub type GLsizei = c_int;
pub type GLubyte = u8;
pub type GLushort = u16;
pub type GLuint = c_uint;
pub type GLhalf = u16;
pub type GLfloat = f32;
pub type GLclampf = f32;
pub type GLdouble = f64;
pub type GLclampd = f64;
pub type GLchar = c_char;
pub type GLintptr = isize;
pub type GLsizeiptr = isize;
pub type GLint64 = i64;
pub type GLuint64 = u64;

handle_transparent!(GLsync);

pub type BOOL = c_int;
pub type UINT = c_uint;
pub type FLOAT = f32;

handle_transparent!(HDC);
handle_transparent!(HGLRC);
handle_transparent!(HANDLE);

pub const TRUE: BOOL = 1;
pub const FALSE: BOOL = 0;
