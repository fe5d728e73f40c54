use crate::{
    error::GlError,
    version::{KhronosApi, KhronosVersion},
};

fn gl(s: &str) -> KhronosVersion {
    KhronosVersion::parse_gl(s).unwrap()
}

fn glsl(s: &str) -> KhronosVersion {
    KhronosVersion::parse_glsl(s).unwrap()
}

#[test]
fn desktop() {
    let v = gl("4.6.0 NVIDIA 550.54.14");
    assert_eq!(v.api, KhronosApi::Gl);
    assert_eq!((v.major, v.minor, v.revision), (4, 6, 0));
    let v = gl("3.3 (Core Profile) Mesa 24.0.1");
    assert_eq!((v.major, v.minor, v.revision), (3, 3, 0));
    assert_eq!(v.number(), 330);
    let v = gl("1.2.1");
    assert_eq!(v.revision, 1);
    assert_eq!(v.to_string(), "OpenGL 1.2.1");
}

#[test]
fn embedded() {
    let v = gl("OpenGL ES 3.2 Mesa 24.0.1");
    assert_eq!(v.api, KhronosApi::Gles);
    assert_eq!((v.major, v.minor), (3, 2));
    assert!(v.is_es());
    let v = gl("OpenGL ES-CM 1.1");
    assert_eq!(v.api, KhronosApi::Gles);
    assert_eq!((v.major, v.minor), (1, 1));
    let v = gl("OpenGL ES-CL 1.0");
    assert_eq!((v.major, v.minor), (1, 0));
}

#[test]
fn shading_language() {
    let v = glsl("4.60 NVIDIA");
    assert_eq!(v.api, KhronosApi::Glsl);
    assert_eq!((v.major, v.minor), (4, 60));
    assert_eq!(v.number(), 460);
    assert_eq!(glsl("1.1"), glsl("1.10"));
    let v = glsl("OpenGL ES GLSL ES 3.20");
    assert_eq!(v.api, KhronosApi::Essl);
    assert_eq!(v.number(), 320);
    assert_eq!(v.to_string(), "GLSL ES 3.20");
}

#[test]
fn invalid() {
    for s in ["", "OpenGL", "four point six", "4"] {
        match KhronosVersion::parse_gl(s) {
            Err(GlError::InvalidVersion(v)) => assert_eq!(v, s),
            r => panic!("unexpected result for `{}`: {:?}", s, r),
        }
    }
}

#[test]
fn ordering() {
    assert!(gl("4.6.0") > gl("4.5.1"));
    assert!(gl("3.3") < gl("3.3.1"));
    assert!(gl("2.1") >= KhronosVersion::new(KhronosApi::Gl, 2, 1));
    let es = gl("OpenGL ES 3.0");
    let desktop = gl("3.0");
    assert_eq!(es.partial_cmp(&desktop), None);
    assert!(!(es < desktop) && !(es > desktop));
    assert!(desktop.at_least(KhronosApi::Gl, 3, 0));
    assert!(!es.at_least(KhronosApi::Gl, 3, 0));
    assert!(!desktop.at_least(KhronosApi::Gl, 3, 1));
}
