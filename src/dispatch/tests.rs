use {
    crate::{dispatch::Command, error::GlError},
    std::{ffi::c_void, ptr},
};

type Twice = unsafe extern "system" fn(i32) -> i32;

unsafe extern "system" fn twice_core(v: i32) -> i32 {
    v * 2
}

unsafe extern "system" fn twice_ext(v: i32) -> i32 {
    v * 2 + 1
}

fn loader(available: &'static [&'static str]) -> impl FnMut(&str) -> *const c_void {
    move |name: &str| {
        if !available.iter().any(|a| *a == name) {
            return ptr::null();
        }
        match name {
            "glTwice" => twice_core as *const c_void,
            _ => twice_ext as *const c_void,
        }
    }
}

const NAMES: &[&str] = &["glTwice", "glTwiceARB", "glTwiceEXT"];

#[test]
fn prefers_first_candidate() {
    let cmd = Command::<Twice>::resolve(NAMES, &mut loader(&["glTwice", "glTwiceEXT"]));
    let (name, f) = cmd.get().unwrap();
    assert_eq!(name, "glTwice");
    assert_eq!(unsafe { f(4) }, 8);
}

#[test]
fn falls_back_in_order() {
    let cmd = Command::<Twice>::resolve(NAMES, &mut loader(&["glTwiceEXT", "glTwiceARB"]));
    let (name, f) = cmd.get().unwrap();
    assert_eq!(name, "glTwiceARB");
    assert_eq!(unsafe { f(4) }, 9);
    assert!(cmd.is_available());
}

#[test]
fn missing_is_not_implemented() {
    let cmd = Command::<Twice>::resolve(NAMES, &mut loader(&[]));
    assert!(!cmd.is_available());
    assert!(cmd.select().is_none());
    match cmd.get() {
        Err(GlError::NotImplemented(name)) => assert_eq!(name, "glTwice"),
        _ => panic!("expected NotImplemented"),
    }
}

#[test]
fn status_reports_selection() {
    let cmd = Command::<Twice>::resolve(NAMES, &mut loader(&["glTwiceEXT"]));
    let status = cmd.status("twice");
    assert_eq!(status.logical, "twice");
    assert_eq!(status.names, NAMES);
    assert_eq!(status.selected, Some("glTwiceEXT"));
    assert_eq!(Command::<Twice>::resolve(NAMES, &mut loader(&[])).status("twice").selected, None);
}

#[test]
fn resolves_each_name_once() {
    let mut queried = vec![];
    let mut counting = |name: &str| {
        queried.push(name.to_string());
        ptr::null::<c_void>()
    };
    let _ = Command::<Twice>::resolve(NAMES, &mut counting);
    assert_eq!(queried, NAMES);
}
