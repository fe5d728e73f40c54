use {
    crate::ext::{Extensions, GlExt, WglExt},
    std::ffi::CString,
};

#[test]
fn parse() {
    let exts = Extensions::parse(b"  GL_KHR_debug GL_ARB_sync\tGL_ARB_sync \n");
    assert_eq!(exts.len(), 2);
    assert!(exts.contains("GL_KHR_debug"));
    assert!(exts.contains("GL_ARB_sync"));
    assert!(!exts.contains("GL_ARB"));
    assert_eq!(exts.sorted(), ["GL_ARB_sync", "GL_KHR_debug"]);
}

#[test]
fn empty() {
    assert!(Extensions::parse(b"").is_empty());
    assert!(Extensions::parse(b"   ").is_empty());
    assert!(unsafe { Extensions::from_ptr(std::ptr::null()) }.is_none());
}

#[test]
fn invalid_utf8_is_skipped() {
    let exts = Extensions::parse(b"GL_KHR_debug GL_\xff_bad");
    assert_eq!(exts.sorted(), ["GL_KHR_debug"]);
}

#[test]
fn from_ptr() {
    let s = CString::new("WGL_ARB_pixel_format WGL_EXT_swap_control").unwrap();
    let exts = unsafe { Extensions::from_ptr(s.as_ptr()) }.unwrap();
    assert_eq!(
        exts.wgl_ext(),
        WglExt::ARB_PIXEL_FORMAT | WglExt::EXT_SWAP_CONTROL
    );
    assert_eq!(exts.gl_ext(), GlExt::empty());
}

#[test]
fn typed() {
    let exts: Extensions = ["GL_OES_vertex_array_object", "GL_KHR_debug", ""]
        .into_iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(exts.len(), 2);
    let gl = exts.gl_ext();
    assert_eq!(gl, GlExt::OES_VERTEX_ARRAY_OBJECT | GlExt::KHR_DEBUG);
    assert!(gl.vertex_array_object());
    assert!(gl.debug_output());
    assert!(!GlExt::ARB_SYNC.vertex_array_object());
}
