#[cfg(test)]
mod tests;

use {
    ahash::AHashSet,
    bstr::ByteSlice,
    std::{
        ffi::{CStr, c_char},
        ops::BitOrAssign,
        str,
    },
};

/// The set of extension names advertised by a driver.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Extensions {
    names: AHashSet<String>,
}

impl Extensions {
    /// Parses a whitespace separated extension string.
    ///
    /// Names that are not valid UTF-8 are skipped.
    pub fn parse(ext: &[u8]) -> Self {
        let mut names = AHashSet::new();
        for name in ext.fields_with(|c| c.is_ascii_whitespace()) {
            if let Ok(s) = str::from_utf8(name) {
                names.insert(s.to_string());
            }
        }
        Self { names }
    }

    /// # Safety
    ///
    /// `ext` must be null or point to a nul-terminated string.
    pub unsafe fn from_ptr(ext: *const c_char) -> Option<Self> {
        if ext.is_null() {
            return None;
        }
        let ext = unsafe { CStr::from_ptr(ext) };
        Some(Self::parse(ext.to_bytes()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The names in lexicographic order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.names.iter().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn gl_ext(&self) -> GlExt {
        let map = [
            ("GL_ARB_debug_output", GlExt::ARB_DEBUG_OUTPUT),
            ("GL_KHR_debug", GlExt::KHR_DEBUG),
            ("GL_ARB_vertex_array_object", GlExt::ARB_VERTEX_ARRAY_OBJECT),
            ("GL_OES_vertex_array_object", GlExt::OES_VERTEX_ARRAY_OBJECT),
            (
                "GL_APPLE_vertex_array_object",
                GlExt::APPLE_VERTEX_ARRAY_OBJECT,
            ),
            ("GL_ARB_instanced_arrays", GlExt::ARB_INSTANCED_ARRAYS),
            ("GL_ARB_draw_instanced", GlExt::ARB_DRAW_INSTANCED),
            ("GL_EXT_draw_instanced", GlExt::EXT_DRAW_INSTANCED),
            ("GL_ARB_framebuffer_object", GlExt::ARB_FRAMEBUFFER_OBJECT),
            ("GL_EXT_framebuffer_object", GlExt::EXT_FRAMEBUFFER_OBJECT),
            ("GL_ARB_sync", GlExt::ARB_SYNC),
            ("GL_ARB_ES2_compatibility", GlExt::ARB_ES2_COMPATIBILITY),
            ("GL_OES_single_precision", GlExt::OES_SINGLE_PRECISION),
            ("GL_EXT_draw_buffers2", GlExt::EXT_DRAW_BUFFERS2),
            ("GL_OES_draw_buffers_indexed", GlExt::OES_DRAW_BUFFERS_INDEXED),
        ];
        get_typed_ext(self, GlExt::empty(), &map)
    }

    pub fn wgl_ext(&self) -> WglExt {
        let map = [
            ("WGL_ARB_extensions_string", WglExt::ARB_EXTENSIONS_STRING),
            ("WGL_EXT_extensions_string", WglExt::EXT_EXTENSIONS_STRING),
            ("WGL_ARB_create_context", WglExt::ARB_CREATE_CONTEXT),
            (
                "WGL_ARB_create_context_profile",
                WglExt::ARB_CREATE_CONTEXT_PROFILE,
            ),
            (
                "WGL_EXT_create_context_es2_profile",
                WglExt::EXT_CREATE_CONTEXT_ES2_PROFILE,
            ),
            ("WGL_ARB_pixel_format", WglExt::ARB_PIXEL_FORMAT),
            ("WGL_EXT_pixel_format", WglExt::EXT_PIXEL_FORMAT),
            ("WGL_EXT_swap_control", WglExt::EXT_SWAP_CONTROL),
            ("WGL_ARB_multisample", WglExt::ARB_MULTISAMPLE),
            ("WGL_ARB_framebuffer_sRGB", WglExt::ARB_FRAMEBUFFER_SRGB),
        ];
        get_typed_ext(self, WglExt::empty(), &map)
    }
}

impl FromIterator<String> for Extensions {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().filter(|n| n.len() > 0).collect(),
        }
    }
}

fn get_typed_ext<T>(exts: &Extensions, mut base: T, map: &[(&str, T)]) -> T
where
    T: BitOrAssign + Copy,
{
    for (name, ext) in map.iter().copied() {
        if exts.contains(name) {
            base |= ext;
        }
    }
    base
}

bitflags::bitflags! {
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct GlExt: u32 {
        const ARB_DEBUG_OUTPUT           = 1 << 0;
        const KHR_DEBUG                  = 1 << 1;
        const ARB_VERTEX_ARRAY_OBJECT    = 1 << 2;
        const OES_VERTEX_ARRAY_OBJECT    = 1 << 3;
        const APPLE_VERTEX_ARRAY_OBJECT  = 1 << 4;
        const ARB_INSTANCED_ARRAYS       = 1 << 5;
        const ARB_DRAW_INSTANCED         = 1 << 6;
        const EXT_DRAW_INSTANCED         = 1 << 7;
        const ARB_FRAMEBUFFER_OBJECT     = 1 << 8;
        const EXT_FRAMEBUFFER_OBJECT     = 1 << 9;
        const ARB_SYNC                   = 1 << 10;
        const ARB_ES2_COMPATIBILITY      = 1 << 11;
        const OES_SINGLE_PRECISION       = 1 << 12;
        const EXT_DRAW_BUFFERS2          = 1 << 13;
        const OES_DRAW_BUFFERS_INDEXED   = 1 << 14;
    }
}

impl GlExt {
    pub fn vertex_array_object(self) -> bool {
        self.intersects(
            Self::ARB_VERTEX_ARRAY_OBJECT
                | Self::OES_VERTEX_ARRAY_OBJECT
                | Self::APPLE_VERTEX_ARRAY_OBJECT,
        )
    }

    pub fn debug_output(self) -> bool {
        self.intersects(Self::ARB_DEBUG_OUTPUT | Self::KHR_DEBUG)
    }
}

bitflags::bitflags! {
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct WglExt: u32 {
        const ARB_EXTENSIONS_STRING          = 1 << 0;
        const EXT_EXTENSIONS_STRING          = 1 << 1;
        const ARB_CREATE_CONTEXT             = 1 << 2;
        const ARB_CREATE_CONTEXT_PROFILE     = 1 << 3;
        const EXT_CREATE_CONTEXT_ES2_PROFILE = 1 << 4;
        const ARB_PIXEL_FORMAT               = 1 << 5;
        const EXT_PIXEL_FORMAT               = 1 << 6;
        const EXT_SWAP_CONTROL               = 1 << 7;
        const ARB_MULTISAMPLE                = 1 << 8;
        const ARB_FRAMEBUFFER_SRGB           = 1 << 9;
    }
}
