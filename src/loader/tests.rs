use {
    crate::{
        config::GlConfig,
        error::GlError,
        loader::{Api, LibraryLoader, ProcLoader, filter_proc, open_first},
    },
    std::{ffi::c_void, ptr},
};

#[test]
fn closure_loader() {
    let mut asked = vec![];
    let mut loader = |name: &str| {
        asked.push(name.to_string());
        match name {
            "glFlush" => 0x10 as *const c_void,
            _ => ptr::null(),
        }
    };
    assert!(loader.get_proc_address("glFlush").is_some());
    assert!(loader.get_proc_address("glFinish").is_none());
    assert_eq!(asked, ["glFlush", "glFinish"]);
}

#[test]
fn missing_library_override() {
    let config = GlConfig {
        library: Some("/nonexistent/libGL-glbind-test.so".into()),
        ..Default::default()
    };
    match LibraryLoader::open(Api::Gl, &config) {
        Err(GlError::LoadLibrary { name, .. }) => {
            assert_eq!(name, "/nonexistent/libGL-glbind-test.so");
        }
        Err(e) => panic!("unexpected error: {}", e),
        Ok(l) => panic!("unexpectedly opened {}", l.name()),
    }
}

#[test]
fn wgl_sentinels_are_not_found() {
    for sentinel in [-1isize, 0, 1, 2, 3] {
        assert!(filter_proc(sentinel as *const c_void).is_none(), "{}", sentinel);
    }
    let ptr = filter_proc(0x1000 as *const c_void);
    assert_eq!(ptr.map(|p| p.as_ptr() as usize), Some(0x1000));
    assert!(filter_proc(4 as *const c_void).is_some());
}

#[test]
fn first_candidate_reports_last_failure() {
    assert!(open_first(&[]).is_none());
    let res = open_first(&["/nonexistent/libGL-a.so", "/nonexistent/libGL-b.so"]);
    match res {
        Some(Err(GlError::LoadLibrary { name, .. })) => {
            assert_eq!(name, "/nonexistent/libGL-b.so");
        }
        Some(Err(e)) => panic!("unexpected error: {}", e),
        Some(Ok((name, _))) => panic!("unexpectedly opened {}", name),
        None => panic!("no candidate was tried"),
    }
}
