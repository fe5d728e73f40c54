use {
    crate::{
        config::GlConfig,
        current::{clear_current, current, make_current, with_current},
        error::GlError,
        gl::Gl,
    },
    std::{ffi::c_void, ptr, rc::Rc},
};

fn empty_table() -> Rc<Gl> {
    let mut loader = |_: &str| ptr::null::<c_void>();
    Rc::new(Gl::load(&mut loader, GlConfig::default()))
}

#[test]
fn no_table() {
    clear_current();
    assert!(current().is_none());
    let res = with_current(|_| Ok(()));
    assert!(matches!(res, Err(GlError::NoCurrentTable)));
}

#[test]
fn install_and_replace() {
    let a = empty_table();
    let b = empty_table();
    assert!(make_current(a.clone()).is_none());
    assert!(Rc::ptr_eq(&current().unwrap(), &a));
    let prev = make_current(b.clone()).unwrap();
    assert!(Rc::ptr_eq(&prev, &a));
    let res = with_current(|gl| Ok(ptr::eq(gl, &*b)));
    assert!(res.unwrap());
    assert!(Rc::ptr_eq(&clear_current().unwrap(), &b));
    assert!(current().is_none());
}

#[test]
fn errors_pass_through() {
    make_current(empty_table());
    let res = with_current(|gl| unsafe { gl.get_error() });
    assert!(matches!(res, Err(GlError::NotImplemented("glGetError"))));
    clear_current();
}

#[test]
fn per_thread() {
    make_current(empty_table());
    let other = std::thread::spawn(|| current().is_none()).join().unwrap();
    assert!(other);
    clear_current();
}
