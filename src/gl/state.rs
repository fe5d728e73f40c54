use {
    crate::{
        error::GlError,
        ext::Extensions,
        gl::Gl,
        sys::*,
        version::{KhronosApi, KhronosVersion},
    },
    glbind_math::Vertex4f,
    std::ffi::CStr,
};

impl Gl {
    /// Queries a string such as `GL_VENDOR`. Drivers return NULL for names
    /// they do not know.
    pub fn get_string_value(&self, name: GLenum) -> Result<Option<String>, GlError> {
        let s = unsafe { self.get_string(name)? };
        Ok(unsafe { owned(s) })
    }

    pub fn get_integer(&self, pname: GLenum) -> Result<GLint, GlError> {
        let mut res = 0;
        unsafe {
            self.get_integerv(pname, &mut res)?;
        }
        Ok(res)
    }

    pub fn version(&self) -> Result<KhronosVersion, GlError> {
        match self.get_string_value(GL_VERSION)? {
            Some(s) => KhronosVersion::parse_gl(&s),
            _ => Err(GlError::InvalidVersion(String::new())),
        }
    }

    pub fn shading_language_version(&self) -> Result<KhronosVersion, GlError> {
        match self.get_string_value(GL_SHADING_LANGUAGE_VERSION)? {
            Some(s) => KhronosVersion::parse_glsl(&s),
            _ => Err(GlError::InvalidVersion(String::new())),
        }
    }

    /// The extensions of the context.
    ///
    /// Contexts of version 3.0 and later are asked one name at a time since
    /// core profiles no longer accept `GL_EXTENSIONS` in `glGetString`.
    pub fn extensions(&self) -> Result<Extensions, GlError> {
        let version = self.version()?;
        let indexed = version.at_least(KhronosApi::Gl, 3, 0)
            || version.at_least(KhronosApi::Gles, 3, 0);
        if indexed && self.get_stringi.is_available() {
            let n = self.get_integer(GL_NUM_EXTENSIONS)?;
            let mut names = Vec::with_capacity(n.max(0) as usize);
            for i in 0..n.max(0) as GLuint {
                let s = unsafe { self.get_stringi(GL_EXTENSIONS, i)? };
                if let Some(s) = unsafe { owned(s) } {
                    names.push(s);
                }
            }
            return Ok(names.into_iter().collect());
        }
        let s = unsafe { self.get_string(GL_EXTENSIONS)? };
        Ok(unsafe { Extensions::from_ptr(s.cast()) }.unwrap_or_default())
    }

    /// Sets the depth range with whichever of `glDepthRange` and
    /// `glDepthRangef` the context provides. GLES only has the latter.
    pub fn set_depth_range(&self, near: f64, far: f64) -> Result<(), GlError> {
        unsafe {
            if self.depth_range.is_available() {
                self.depth_range(near, far)
            } else {
                self.depth_rangef(near as f32, far as f32)
            }
        }
    }

    pub fn set_clear_color(&self, color: Vertex4f) -> Result<(), GlError> {
        unsafe { self.clear_color(color.x, color.y, color.z, color.w) }
    }

    pub fn set_capability(&self, cap: GLenum, enabled: bool) -> Result<(), GlError> {
        unsafe {
            match enabled {
                true => self.enable(cap),
                false => self.disable(cap),
            }
        }
    }

    pub fn set_viewport(&self, x: i32, y: i32, width: i32, height: i32) -> Result<(), GlError> {
        unsafe { self.viewport(x, y, width, height) }
    }
}

unsafe fn owned(s: *const GLubyte) -> Option<String> {
    if s.is_null() {
        return None;
    }
    let s = unsafe { CStr::from_ptr(s.cast()) };
    Some(s.to_string_lossy().into_owned())
}
