#[cfg(test)]
mod tests;

use {
    crate::{error::GlError, gl::Gl},
    std::{cell::RefCell, rc::Rc},
};

thread_local! {
    static CURRENT: RefCell<Option<Rc<Gl>>> = const { RefCell::new(None) };
}

/// Installs `gl` as the table of the context current on this thread and
/// returns the previous one.
pub fn make_current(gl: Rc<Gl>) -> Option<Rc<Gl>> {
    CURRENT.with(|c| c.borrow_mut().replace(gl))
}

pub fn clear_current() -> Option<Rc<Gl>> {
    CURRENT.with(|c| c.borrow_mut().take())
}

pub fn current() -> Option<Rc<Gl>> {
    CURRENT.with(|c| c.borrow().clone())
}

/// Runs `f` with the table current on this thread.
///
/// The table stays installed while `f` runs even if `f` replaces it.
pub fn with_current<T>(f: impl FnOnce(&Gl) -> Result<T, GlError>) -> Result<T, GlError> {
    let gl = current().ok_or(GlError::NoCurrentTable)?;
    f(&gl)
}
