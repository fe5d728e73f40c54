use {
    crate::{
        error::GlError,
        gl::{Gl, sizei},
        sys::*,
    },
};

fn gen_names(
    n: usize,
    f: impl FnOnce(GLsizei, *mut GLuint) -> Result<(), GlError>,
) -> Result<Vec<GLuint>, GlError> {
    let mut names = vec![0; n];
    if n > 0 {
        f(sizei(n)?, names.as_mut_ptr())?;
    }
    Ok(names)
}

fn delete_names(
    names: &[GLuint],
    f: impl FnOnce(GLsizei, *const GLuint) -> Result<(), GlError>,
) -> Result<(), GlError> {
    if names.is_empty() {
        return Ok(());
    }
    f(sizei(names.len())?, names.as_ptr())
}

macro_rules! names {
    ($($gen_names:ident, $delete_names:ident => $gen:ident, $delete:ident;)*) => {
        impl Gl {
            $(
                pub fn $gen_names(&self, n: usize) -> Result<Vec<GLuint>, GlError> {
                    gen_names(n, |n, p| unsafe { self.$gen(n, p) })
                }

                pub fn $delete_names(&self, names: &[GLuint]) -> Result<(), GlError> {
                    delete_names(names, |n, p| unsafe { self.$delete(n, p) })
                }
            )*
        }
    };
}

names! {
    gen_buffer_names, delete_buffer_names => gen_buffers, delete_buffers;
    gen_vertex_array_names, delete_vertex_array_names => gen_vertex_arrays, delete_vertex_arrays;
    gen_texture_names, delete_texture_names => gen_textures, delete_textures;
    gen_framebuffer_names, delete_framebuffer_names => gen_framebuffers, delete_framebuffers;
    gen_renderbuffer_names, delete_renderbuffer_names => gen_renderbuffers, delete_renderbuffers;
    gen_query_names, delete_query_names => gen_queries, delete_queries;
}
