mod buffer;
mod names;
mod shader;
mod state;
mod uniform;

use {
    crate::{
        dispatch::ReturnValue,
        error::{ErrorCode, GlError},
        sys::*,
    },
    std::ffi::c_void,
};

pub use {buffer::AttribType, uniform::Uniform};

/// How many queued error flags are drained after a failed call.
const MAX_DRAINED_ERRORS: usize = 8;

commands! {
    /// The GL commands of one context.
    ///
    /// Command pointers may differ between contexts on some platforms. Load
    /// one table per context.
    ///
    /// The safe wrappers on this type require the context the table was
    /// loaded for to be current on the calling thread. They only hand the
    /// driver pointers to memory they own for the duration of the call.
    pub struct Gl {
        fn get_error() -> GLenum = ["glGetError"] unchecked;
        fn get_string(name: GLenum) -> *const GLubyte = ["glGetString"];
        fn get_stringi(name: GLenum, index: GLuint) -> *const GLubyte = ["glGetStringi"];
        fn get_integerv(pname: GLenum, data: *mut GLint) -> () = ["glGetIntegerv"];
        fn get_floatv(pname: GLenum, data: *mut GLfloat) -> () = ["glGetFloatv"];
        fn get_booleanv(pname: GLenum, data: *mut GLboolean) -> () = ["glGetBooleanv"];
        fn enable(cap: GLenum) -> () = ["glEnable"];
        fn disable(cap: GLenum) -> () = ["glDisable"];
        fn is_enabled(cap: GLenum) -> GLboolean = ["glIsEnabled"];
        fn enablei(cap: GLenum, index: GLuint) -> () = [
            "glEnablei",
            "glEnableIndexedEXT",
            "glEnableiEXT",
            "glEnableiNV",
            "glEnableiOES",
        ];
        fn disablei(cap: GLenum, index: GLuint) -> () = [
            "glDisablei",
            "glDisableIndexedEXT",
            "glDisableiEXT",
            "glDisableiNV",
            "glDisableiOES",
        ];
        fn clear(mask: GLbitfield) -> () = ["glClear"];
        fn clear_color(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) -> () = ["glClearColor"];
        fn clear_depth(depth: GLdouble) -> () = ["glClearDepth"];
        fn clear_depthf(depth: GLfloat) -> () = ["glClearDepthf", "glClearDepthfOES"];
        fn clear_stencil(s: GLint) -> () = ["glClearStencil"];
        fn depth_range(near: GLdouble, far: GLdouble) -> () = ["glDepthRange"];
        fn depth_rangef(near: GLfloat, far: GLfloat) -> () = ["glDepthRangef", "glDepthRangefOES"];
        fn depth_func(func: GLenum) -> () = ["glDepthFunc"];
        fn depth_mask(flag: GLboolean) -> () = ["glDepthMask"];
        fn color_mask(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean) -> () = ["glColorMask"];
        fn blend_func(sfactor: GLenum, dfactor: GLenum) -> () = ["glBlendFunc"];
        fn blend_func_separate(
            src_rgb: GLenum,
            dst_rgb: GLenum,
            src_alpha: GLenum,
            dst_alpha: GLenum,
        ) -> () = ["glBlendFuncSeparate", "glBlendFuncSeparateEXT", "glBlendFuncSeparateINGR"];
        fn blend_equation(mode: GLenum) -> () = ["glBlendEquation", "glBlendEquationEXT"];
        fn cull_face(mode: GLenum) -> () = ["glCullFace"];
        fn front_face(mode: GLenum) -> () = ["glFrontFace"];
        fn line_width(width: GLfloat) -> () = ["glLineWidth"];
        fn viewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei) -> () = ["glViewport"];
        fn scissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei) -> () = ["glScissor"];
        fn pixel_storei(pname: GLenum, param: GLint) -> () = ["glPixelStorei"];
        fn flush() -> () = ["glFlush"];
        fn finish() -> () = ["glFinish"];

        fn gen_buffers(n: GLsizei, buffers: *mut GLuint) -> () = ["glGenBuffers", "glGenBuffersARB"];
        fn delete_buffers(n: GLsizei, buffers: *const GLuint) -> () = ["glDeleteBuffers", "glDeleteBuffersARB"];
        fn is_buffer(buffer: GLuint) -> GLboolean = ["glIsBuffer", "glIsBufferARB"];
        fn bind_buffer(target: GLenum, buffer: GLuint) -> () = ["glBindBuffer", "glBindBufferARB"];
        fn bind_buffer_base(target: GLenum, index: GLuint, buffer: GLuint) -> () = [
            "glBindBufferBase",
            "glBindBufferBaseEXT",
            "glBindBufferBaseNV",
        ];
        fn buffer_data(
            target: GLenum,
            size: GLsizeiptr,
            data: *const c_void,
            usage: GLenum,
        ) -> () = ["glBufferData", "glBufferDataARB"];
        fn buffer_sub_data(
            target: GLenum,
            offset: GLintptr,
            size: GLsizeiptr,
            data: *const c_void,
        ) -> () = ["glBufferSubData", "glBufferSubDataARB"];
        fn map_buffer(target: GLenum, access: GLenum) -> *mut c_void = [
            "glMapBuffer",
            "glMapBufferARB",
            "glMapBufferOES",
        ];
        fn unmap_buffer(target: GLenum) -> GLboolean = [
            "glUnmapBuffer",
            "glUnmapBufferARB",
            "glUnmapBufferOES",
        ];

        fn gen_vertex_arrays(n: GLsizei, arrays: *mut GLuint) -> () = [
            "glGenVertexArrays",
            "glGenVertexArraysAPPLE",
            "glGenVertexArraysOES",
        ];
        fn delete_vertex_arrays(n: GLsizei, arrays: *const GLuint) -> () = [
            "glDeleteVertexArrays",
            "glDeleteVertexArraysAPPLE",
            "glDeleteVertexArraysOES",
        ];
        fn bind_vertex_array(array: GLuint) -> () = [
            "glBindVertexArray",
            "glBindVertexArrayAPPLE",
            "glBindVertexArrayOES",
        ];
        fn enable_vertex_attrib_array(index: GLuint) -> () = [
            "glEnableVertexAttribArray",
            "glEnableVertexAttribArrayARB",
        ];
        fn disable_vertex_attrib_array(index: GLuint) -> () = [
            "glDisableVertexAttribArray",
            "glDisableVertexAttribArrayARB",
        ];
        fn vertex_attrib_pointer(
            index: GLuint,
            size: GLint,
            ty: GLenum,
            normalized: GLboolean,
            stride: GLsizei,
            pointer: *const c_void,
        ) -> () = ["glVertexAttribPointer", "glVertexAttribPointerARB"];
        fn vertex_attrib_divisor(index: GLuint, divisor: GLuint) -> () = [
            "glVertexAttribDivisor",
            "glVertexAttribDivisorANGLE",
            "glVertexAttribDivisorARB",
            "glVertexAttribDivisorEXT",
            "glVertexAttribDivisorNV",
        ];

        fn draw_arrays(mode: GLenum, first: GLint, count: GLsizei) -> () = ["glDrawArrays", "glDrawArraysEXT"];
        fn draw_elements(
            mode: GLenum,
            count: GLsizei,
            ty: GLenum,
            indices: *const c_void,
        ) -> () = ["glDrawElements"];
        fn draw_arrays_instanced(
            mode: GLenum,
            first: GLint,
            count: GLsizei,
            instancecount: GLsizei,
        ) -> () = [
            "glDrawArraysInstanced",
            "glDrawArraysInstancedANGLE",
            "glDrawArraysInstancedARB",
            "glDrawArraysInstancedEXT",
            "glDrawArraysInstancedNV",
        ];
        fn draw_elements_instanced(
            mode: GLenum,
            count: GLsizei,
            ty: GLenum,
            indices: *const c_void,
            instancecount: GLsizei,
        ) -> () = [
            "glDrawElementsInstanced",
            "glDrawElementsInstancedANGLE",
            "glDrawElementsInstancedARB",
            "glDrawElementsInstancedEXT",
            "glDrawElementsInstancedNV",
        ];

        /// Querying the error state between `glBegin` and `glEnd` is itself an
        /// error, so the immediate mode commands are not checked. `glEnd`
        /// reports errors of the whole block.
        fn begin(mode: GLenum) -> () = ["glBegin"] unchecked;
        fn end() -> () = ["glEnd"];
        fn vertex2f(x: GLfloat, y: GLfloat) -> () = ["glVertex2f"] unchecked;
        fn vertex3f(x: GLfloat, y: GLfloat, z: GLfloat) -> () = ["glVertex3f"] unchecked;
        fn normal3f(x: GLfloat, y: GLfloat, z: GLfloat) -> () = ["glNormal3f"] unchecked;
        fn color4f(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) -> () = ["glColor4f"] unchecked;
        fn tex_coord2f(s: GLfloat, t: GLfloat) -> () = ["glTexCoord2f"] unchecked;

        fn create_shader(ty: GLenum) -> GLuint = ["glCreateShader"];
        fn delete_shader(shader: GLuint) -> () = ["glDeleteShader"];
        fn shader_source(
            shader: GLuint,
            count: GLsizei,
            string: *const *const GLchar,
            length: *const GLint,
        ) -> () = ["glShaderSource", "glShaderSourceARB"];
        fn compile_shader(shader: GLuint) -> () = ["glCompileShader", "glCompileShaderARB"];
        fn get_shaderiv(shader: GLuint, pname: GLenum, params: *mut GLint) -> () = ["glGetShaderiv"];
        fn get_shader_info_log(
            shader: GLuint,
            buf_size: GLsizei,
            length: *mut GLsizei,
            info_log: *mut GLchar,
        ) -> () = ["glGetShaderInfoLog"];
        fn create_program() -> GLuint = ["glCreateProgram"];
        fn delete_program(program: GLuint) -> () = ["glDeleteProgram"];
        fn attach_shader(program: GLuint, shader: GLuint) -> () = ["glAttachShader"];
        fn detach_shader(program: GLuint, shader: GLuint) -> () = ["glDetachShader"];
        fn link_program(program: GLuint) -> () = ["glLinkProgram", "glLinkProgramARB"];
        fn validate_program(program: GLuint) -> () = ["glValidateProgram", "glValidateProgramARB"];
        fn use_program(program: GLuint) -> () = ["glUseProgram", "glUseProgramObjectARB"];
        fn get_programiv(program: GLuint, pname: GLenum, params: *mut GLint) -> () = ["glGetProgramiv"];
        fn get_program_info_log(
            program: GLuint,
            buf_size: GLsizei,
            length: *mut GLsizei,
            info_log: *mut GLchar,
        ) -> () = ["glGetProgramInfoLog"];
        fn get_uniform_location(program: GLuint, name: *const GLchar) -> GLint = [
            "glGetUniformLocation",
            "glGetUniformLocationARB",
        ];
        fn get_attrib_location(program: GLuint, name: *const GLchar) -> GLint = [
            "glGetAttribLocation",
            "glGetAttribLocationARB",
        ];
        fn bind_attrib_location(program: GLuint, index: GLuint, name: *const GLchar) -> () = [
            "glBindAttribLocation",
            "glBindAttribLocationARB",
        ];

        fn uniform1i(location: GLint, v0: GLint) -> () = ["glUniform1i", "glUniform1iARB"];
        fn uniform1f(location: GLint, v0: GLfloat) -> () = ["glUniform1f", "glUniform1fARB"];
        fn uniform2fv(location: GLint, count: GLsizei, value: *const GLfloat) -> () = ["glUniform2fv", "glUniform2fvARB"];
        fn uniform3fv(location: GLint, count: GLsizei, value: *const GLfloat) -> () = ["glUniform3fv", "glUniform3fvARB"];
        fn uniform4fv(location: GLint, count: GLsizei, value: *const GLfloat) -> () = ["glUniform4fv", "glUniform4fvARB"];
        fn uniform2iv(location: GLint, count: GLsizei, value: *const GLint) -> () = ["glUniform2iv", "glUniform2ivARB"];
        fn uniform3iv(location: GLint, count: GLsizei, value: *const GLint) -> () = ["glUniform3iv", "glUniform3ivARB"];
        fn uniform4iv(location: GLint, count: GLsizei, value: *const GLint) -> () = ["glUniform4iv", "glUniform4ivARB"];
        fn uniform2uiv(location: GLint, count: GLsizei, value: *const GLuint) -> () = ["glUniform2uiv", "glUniform2uivEXT"];
        fn uniform3uiv(location: GLint, count: GLsizei, value: *const GLuint) -> () = ["glUniform3uiv", "glUniform3uivEXT"];
        fn uniform4uiv(location: GLint, count: GLsizei, value: *const GLuint) -> () = ["glUniform4uiv", "glUniform4uivEXT"];
        fn uniform2dv(location: GLint, count: GLsizei, value: *const GLdouble) -> () = ["glUniform2dv"];
        fn uniform3dv(location: GLint, count: GLsizei, value: *const GLdouble) -> () = ["glUniform3dv"];
        fn uniform4dv(location: GLint, count: GLsizei, value: *const GLdouble) -> () = ["glUniform4dv"];
        fn uniform_matrix2fv(
            location: GLint,
            count: GLsizei,
            transpose: GLboolean,
            value: *const GLfloat,
        ) -> () = ["glUniformMatrix2fv", "glUniformMatrix2fvARB"];
        fn uniform_matrix3fv(
            location: GLint,
            count: GLsizei,
            transpose: GLboolean,
            value: *const GLfloat,
        ) -> () = ["glUniformMatrix3fv", "glUniformMatrix3fvARB"];
        fn uniform_matrix4fv(
            location: GLint,
            count: GLsizei,
            transpose: GLboolean,
            value: *const GLfloat,
        ) -> () = ["glUniformMatrix4fv", "glUniformMatrix4fvARB"];
        fn uniform_matrix2dv(
            location: GLint,
            count: GLsizei,
            transpose: GLboolean,
            value: *const GLdouble,
        ) -> () = ["glUniformMatrix2dv"];
        fn uniform_matrix3dv(
            location: GLint,
            count: GLsizei,
            transpose: GLboolean,
            value: *const GLdouble,
        ) -> () = ["glUniformMatrix3dv"];
        fn uniform_matrix4dv(
            location: GLint,
            count: GLsizei,
            transpose: GLboolean,
            value: *const GLdouble,
        ) -> () = ["glUniformMatrix4dv"];

        fn gen_textures(n: GLsizei, textures: *mut GLuint) -> () = ["glGenTextures", "glGenTexturesEXT"];
        fn delete_textures(n: GLsizei, textures: *const GLuint) -> () = ["glDeleteTextures", "glDeleteTexturesEXT"];
        fn bind_texture(target: GLenum, texture: GLuint) -> () = ["glBindTexture", "glBindTextureEXT"];
        fn active_texture(texture: GLenum) -> () = ["glActiveTexture", "glActiveTextureARB"];
        fn tex_parameteri(target: GLenum, pname: GLenum, param: GLint) -> () = ["glTexParameteri"];
        fn tex_image_2d(
            target: GLenum,
            level: GLint,
            internalformat: GLint,
            width: GLsizei,
            height: GLsizei,
            border: GLint,
            format: GLenum,
            ty: GLenum,
            pixels: *const c_void,
        ) -> () = ["glTexImage2D"];
        fn tex_sub_image_2d(
            target: GLenum,
            level: GLint,
            xoffset: GLint,
            yoffset: GLint,
            width: GLsizei,
            height: GLsizei,
            format: GLenum,
            ty: GLenum,
            pixels: *const c_void,
        ) -> () = ["glTexSubImage2D", "glTexSubImage2DEXT"];
        fn generate_mipmap(target: GLenum) -> () = [
            "glGenerateMipmap",
            "glGenerateMipmapEXT",
            "glGenerateMipmapOES",
        ];
        fn read_pixels(
            x: GLint,
            y: GLint,
            width: GLsizei,
            height: GLsizei,
            format: GLenum,
            ty: GLenum,
            pixels: *mut c_void,
        ) -> () = ["glReadPixels"];

        fn gen_framebuffers(n: GLsizei, framebuffers: *mut GLuint) -> () = [
            "glGenFramebuffers",
            "glGenFramebuffersEXT",
            "glGenFramebuffersOES",
        ];
        fn delete_framebuffers(n: GLsizei, framebuffers: *const GLuint) -> () = [
            "glDeleteFramebuffers",
            "glDeleteFramebuffersEXT",
            "glDeleteFramebuffersOES",
        ];
        fn bind_framebuffer(target: GLenum, framebuffer: GLuint) -> () = [
            "glBindFramebuffer",
            "glBindFramebufferEXT",
            "glBindFramebufferOES",
        ];
        fn framebuffer_texture_2d(
            target: GLenum,
            attachment: GLenum,
            textarget: GLenum,
            texture: GLuint,
            level: GLint,
        ) -> () = [
            "glFramebufferTexture2D",
            "glFramebufferTexture2DEXT",
            "glFramebufferTexture2DOES",
        ];
        fn check_framebuffer_status(target: GLenum) -> GLenum = [
            "glCheckFramebufferStatus",
            "glCheckFramebufferStatusEXT",
            "glCheckFramebufferStatusOES",
        ];
        fn gen_renderbuffers(n: GLsizei, renderbuffers: *mut GLuint) -> () = [
            "glGenRenderbuffers",
            "glGenRenderbuffersEXT",
            "glGenRenderbuffersOES",
        ];
        fn delete_renderbuffers(n: GLsizei, renderbuffers: *const GLuint) -> () = [
            "glDeleteRenderbuffers",
            "glDeleteRenderbuffersEXT",
            "glDeleteRenderbuffersOES",
        ];
        fn bind_renderbuffer(target: GLenum, renderbuffer: GLuint) -> () = [
            "glBindRenderbuffer",
            "glBindRenderbufferEXT",
            "glBindRenderbufferOES",
        ];
        fn renderbuffer_storage(
            target: GLenum,
            internalformat: GLenum,
            width: GLsizei,
            height: GLsizei,
        ) -> () = [
            "glRenderbufferStorage",
            "glRenderbufferStorageEXT",
            "glRenderbufferStorageOES",
        ];
        fn framebuffer_renderbuffer(
            target: GLenum,
            attachment: GLenum,
            renderbuffertarget: GLenum,
            renderbuffer: GLuint,
        ) -> () = [
            "glFramebufferRenderbuffer",
            "glFramebufferRenderbufferEXT",
            "glFramebufferRenderbufferOES",
        ];

        fn fence_sync(condition: GLenum, flags: GLbitfield) -> GLsync = ["glFenceSync", "glFenceSyncAPPLE"];
        fn client_wait_sync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum = [
            "glClientWaitSync",
            "glClientWaitSyncAPPLE",
        ];
        fn delete_sync(sync: GLsync) -> () = ["glDeleteSync", "glDeleteSyncAPPLE"];

        fn gen_queries(n: GLsizei, ids: *mut GLuint) -> () = [
            "glGenQueries",
            "glGenQueriesARB",
            "glGenQueriesEXT",
        ];
        fn delete_queries(n: GLsizei, ids: *const GLuint) -> () = [
            "glDeleteQueries",
            "glDeleteQueriesARB",
            "glDeleteQueriesEXT",
        ];
        fn begin_query(target: GLenum, id: GLuint) -> () = [
            "glBeginQuery",
            "glBeginQueryARB",
            "glBeginQueryEXT",
        ];
        fn end_query(target: GLenum) -> () = ["glEndQuery", "glEndQueryARB", "glEndQueryEXT"];
        fn get_query_objectuiv(id: GLuint, pname: GLenum, params: *mut GLuint) -> () = [
            "glGetQueryObjectuiv",
            "glGetQueryObjectuivARB",
            "glGetQueryObjectuivEXT",
        ];
    }
}

impl Gl {
    /// Surfaces the first queued error flag of the context.
    ///
    /// Later flags are drained and logged so that they are not attributed to
    /// the next command.
    fn check_error<R: ReturnValue>(&self, command: &'static str, _res: &R) -> Result<(), GlError> {
        if !self.config.check_errors {
            return Ok(());
        }
        let Some((_, get_error)) = self.get_error.select() else {
            return Ok(());
        };
        let code = unsafe { get_error() };
        if code == GL_NO_ERROR {
            return Ok(());
        }
        for _ in 0..MAX_DRAINED_ERRORS {
            let next = unsafe { get_error() };
            if next == GL_NO_ERROR {
                break;
            }
            log::debug!("`{}` also raised {}", command, ErrorCode(next));
        }
        Err(GlError::Native {
            command,
            code: ErrorCode(code),
        })
    }
}

pub(crate) fn sizei(n: usize) -> Result<GLsizei, GlError> {
    GLsizei::try_from(n).map_err(|_| GlError::TooManyElements(n))
}
