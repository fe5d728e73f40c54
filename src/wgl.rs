
use {
    crate::{dispatch::ReturnValue, error::GlError, ext::Extensions, gl::sizei, sys::*},
    std::io,
};

commands! {
    /// WGL commands, including the ones only reachable through
    /// `wglGetProcAddress` once a context is current.
    pub struct Wgl {
        fn create_context(hdc: HDC) -> HGLRC = ["wglCreateContext"];
        fn delete_context(hglrc: HGLRC) -> BOOL = ["wglDeleteContext"];
        fn make_current(hdc: HDC, hglrc: HGLRC) -> BOOL = ["wglMakeCurrent"];
        fn share_lists(hglrc1: HGLRC, hglrc2: HGLRC) -> BOOL = ["wglShareLists"];
        /// NULL if no context is current.
        fn get_current_context() -> HGLRC = ["wglGetCurrentContext"] unchecked;
        fn get_current_dc() -> HDC = ["wglGetCurrentDC"] unchecked;

        fn get_extensions_string_arb(hdc: HDC) -> *const c_char = ["wglGetExtensionsStringARB"];
        fn get_extensions_string_ext() -> *const c_char = ["wglGetExtensionsStringEXT"];
        fn create_context_attribs(
            hdc: HDC,
            share_context: HGLRC,
            attrib_list: *const c_int,
        ) -> HGLRC = ["wglCreateContextAttribsARB"];
        fn choose_pixel_format(
            hdc: HDC,
            attrib_ilist: *const c_int,
            attrib_flist: *const FLOAT,
            max_formats: UINT,
            formats: *mut c_int,
            num_formats: *mut UINT,
        ) -> BOOL = ["wglChoosePixelFormatARB", "wglChoosePixelFormatEXT"];
        fn get_pixel_format_attribiv(
            hdc: HDC,
            pixel_format: c_int,
            layer_plane: c_int,
            num_attributes: UINT,
            attributes: *const c_int,
            values: *mut c_int,
        ) -> BOOL = ["wglGetPixelFormatAttribivARB", "wglGetPixelFormatAttribivEXT"];
        fn swap_interval(interval: c_int) -> BOOL = ["wglSwapIntervalEXT"];
        /// Zero is a valid interval.
        fn get_swap_interval() -> c_int = ["wglGetSwapIntervalEXT"] unchecked;
    }
}

/// The most pixel formats returned by `choose_pixel_formats`.
const MAX_PIXEL_FORMATS: usize = 64;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ContextProfile {
    Core,
    Compatibility,
    Es2,
}

impl Wgl {
    /// WGL reports failure through the return value and the thread's last
    /// OS error.
    fn check_error<R: ReturnValue>(&self, command: &'static str, res: &R) -> Result<(), GlError> {
        if !self.config.check_errors || !res.failed() {
            return Ok(());
        }
        Err(GlError::Platform {
            command,
            source: io::Error::last_os_error(),
        })
    }

    /// The WGL extensions of the device context, from whichever of the ARB
    /// and EXT queries is available.
    pub fn extensions(&self, hdc: HDC) -> Result<Extensions, GlError> {
        let s = if self.get_extensions_string_arb.is_available() {
            unsafe { self.get_extensions_string_arb(hdc)? }
        } else {
            unsafe { self.get_extensions_string_ext()? }
        };
        Ok(unsafe { Extensions::from_ptr(s) }.unwrap_or_default())
    }

    /// Creates a context of the given version with `wglCreateContextAttribsARB`.
    pub fn create_context_with(
        &self,
        hdc: HDC,
        share: HGLRC,
        major: c_int,
        minor: c_int,
        profile: ContextProfile,
        debug: bool,
    ) -> Result<HGLRC, GlError> {
        let profile = match profile {
            ContextProfile::Core => WGL_CONTEXT_CORE_PROFILE_BIT_ARB,
            ContextProfile::Compatibility => WGL_CONTEXT_COMPATIBILITY_PROFILE_BIT_ARB,
            ContextProfile::Es2 => WGL_CONTEXT_ES2_PROFILE_BIT_EXT,
        };
        let mut flags = 0;
        if debug {
            flags |= WGL_CONTEXT_DEBUG_BIT_ARB;
        }
        let attribs = [
            WGL_CONTEXT_MAJOR_VERSION_ARB,
            major,
            WGL_CONTEXT_MINOR_VERSION_ARB,
            minor,
            WGL_CONTEXT_PROFILE_MASK_ARB,
            profile,
            WGL_CONTEXT_FLAGS_ARB,
            flags,
            0,
        ];
        unsafe { self.create_context_attribs(hdc, share, attribs.as_ptr()) }
    }

    /// Pixel formats matching the `(attribute, value)` pairs, best first.
    pub fn choose_pixel_formats(
        &self,
        hdc: HDC,
        attribs: &[(c_int, c_int)],
    ) -> Result<Vec<c_int>, GlError> {
        let mut list: Vec<c_int> = attribs.iter().flat_map(|(k, v)| [*k, *v]).collect();
        list.push(0);
        let mut formats = vec![0; MAX_PIXEL_FORMATS];
        let mut num = 0;
        unsafe {
            self.choose_pixel_format(
                hdc,
                list.as_ptr(),
                std::ptr::null(),
                MAX_PIXEL_FORMATS as UINT,
                formats.as_mut_ptr(),
                &mut num,
            )?;
        }
        formats.truncate((num as usize).min(MAX_PIXEL_FORMATS));
        Ok(formats)
    }

    /// Reads one attribute value per entry of `attributes`.
    pub fn pixel_format_attribs(
        &self,
        hdc: HDC,
        pixel_format: c_int,
        attributes: &[c_int],
    ) -> Result<Vec<c_int>, GlError> {
        let mut values = vec![0; attributes.len()];
        unsafe {
            self.get_pixel_format_attribiv(
                hdc,
                pixel_format,
                0,
                sizei(attributes.len())? as UINT,
                attributes.as_ptr(),
                values.as_mut_ptr(),
            )?;
        }
        Ok(values)
    }

    pub fn set_swap_interval(&self, interval: c_int) -> Result<(), GlError> {
        unsafe { self.swap_interval(interval).map(drop) }
    }
}
