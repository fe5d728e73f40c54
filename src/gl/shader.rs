use {
    crate::{
        error::GlError,
        gl::{Gl, sizei},
        sys::*,
        utils::errorfmt::ErrorFmt,
    },
    std::ffi::CString,
};

impl Gl {
    /// Compiles a shader of type `ty` from `source`.
    ///
    /// On failure the shader is deleted and the info log is returned in the
    /// error.
    pub fn compile_shader_source(&self, ty: GLenum, source: &str) -> Result<GLuint, GlError> {
        let source = CString::new(source)?;
        unsafe {
            let shader = self.create_shader(ty)?;
            let res = self.compile_into(shader, &source);
            if res.is_err() {
                if let Err(e) = self.delete_shader(shader) {
                    log::warn!("Could not delete shader {}: {}", shader, ErrorFmt(e));
                }
            }
            res.map(|_| shader)
        }
    }

    unsafe fn compile_into(&self, shader: GLuint, source: &CString) -> Result<(), GlError> {
        unsafe {
            self.shader_source(shader, 1, &source.as_ptr(), std::ptr::null())?;
            self.compile_shader(shader)?;
            let mut ok = 0;
            self.get_shaderiv(shader, GL_COMPILE_STATUS, &mut ok)?;
            if ok == GL_TRUE as GLint {
                return Ok(());
            }
            let log = self.shader_info_log(shader)?;
            Err(GlError::ShaderCompile(log))
        }
    }

    pub fn shader_info_log(&self, shader: GLuint) -> Result<String, GlError> {
        let mut len = 0;
        unsafe {
            self.get_shaderiv(shader, GL_INFO_LOG_LENGTH, &mut len)?;
        }
        read_log(len, |size, len, buf| unsafe {
            self.get_shader_info_log(shader, size, len, buf)
        })
    }

    /// Links the shaders into a new program.
    ///
    /// The shaders are detached afterwards and can be deleted by the caller.
    /// On failure the program is deleted.
    pub fn link_program_shaders(&self, shaders: &[GLuint]) -> Result<GLuint, GlError> {
        unsafe {
            let program = self.create_program()?;
            let res = self.link_into(program, shaders);
            if res.is_err() {
                if let Err(e) = self.delete_program(program) {
                    log::warn!("Could not delete program {}: {}", program, ErrorFmt(e));
                }
            }
            res.map(|_| program)
        }
    }

    unsafe fn link_into(&self, program: GLuint, shaders: &[GLuint]) -> Result<(), GlError> {
        unsafe {
            for &shader in shaders {
                self.attach_shader(program, shader)?;
            }
            self.link_program(program)?;
            for &shader in shaders {
                self.detach_shader(program, shader)?;
            }
            let mut ok = 0;
            self.get_programiv(program, GL_LINK_STATUS, &mut ok)?;
            if ok == GL_TRUE as GLint {
                return Ok(());
            }
            Err(GlError::ProgramLink(self.program_info_log(program)?))
        }
    }

    pub fn program_info_log(&self, program: GLuint) -> Result<String, GlError> {
        let mut len = 0;
        unsafe {
            self.get_programiv(program, GL_INFO_LOG_LENGTH, &mut len)?;
        }
        read_log(len, |size, len, buf| unsafe {
            self.get_program_info_log(program, size, len, buf)
        })
    }

    /// `None` if the program has no active uniform called `name`.
    pub fn uniform_location(&self, program: GLuint, name: &str) -> Result<Option<GLint>, GlError> {
        let name = CString::new(name)?;
        let loc = unsafe { self.get_uniform_location(program, name.as_ptr())? };
        Ok((loc >= 0).then_some(loc))
    }

    pub fn attrib_location(&self, program: GLuint, name: &str) -> Result<Option<GLuint>, GlError> {
        let name = CString::new(name)?;
        let loc = unsafe { self.get_attrib_location(program, name.as_ptr())? };
        Ok((loc >= 0).then_some(loc as GLuint))
    }
}

fn read_log(
    len: GLint,
    f: impl FnOnce(GLsizei, *mut GLsizei, *mut GLchar) -> Result<(), GlError>,
) -> Result<String, GlError> {
    if len <= 0 {
        return Ok(String::new());
    }
    let mut buf = vec![0u8; len as usize];
    let mut written = 0;
    f(sizei(buf.len())?, &mut written, buf.as_mut_ptr().cast())?;
    buf.truncate((written.max(0) as usize).min(buf.len()));
    Ok(String::from_utf8_lossy(&buf).trim_end().to_string())
}
