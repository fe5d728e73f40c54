#[cfg(test)]
mod tests;

use {
    crate::{error::GlError, loader::ProcLoader},
    smallvec::SmallVec,
    std::{
        ffi::c_void,
        fmt::{Debug, Display, Formatter},
        mem,
        ptr::NonNull,
    },
};

/// A logical command together with every native name it may be exported
/// under.
///
/// Pointers are resolved once, in the order of `names`. At call time the
/// first non-null pointer wins.
pub struct Command<F> {
    names: &'static [&'static str],
    procs: SmallVec<[Option<F>; 4]>,
}

impl<F: Copy> Command<F> {
    /// `F` must be an `unsafe extern "system" fn` type matching the native
    /// signature of every name in `names`.
    pub fn resolve(names: &'static [&'static str], loader: &mut dyn ProcLoader) -> Self {
        const { assert!(size_of::<F>() == size_of::<*const c_void>()) };
        let procs = names
            .iter()
            .map(|name| {
                let ptr = loader.get_proc_address(name)?;
                log::trace!("Resolved `{}` at {:?}", name, ptr);
                Some(unsafe { mem::transmute_copy::<NonNull<c_void>, F>(&ptr) })
            })
            .collect();
        Self { names, procs }
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    pub fn select(&self) -> Option<(&'static str, F)> {
        self.names
            .iter()
            .zip(self.procs.iter())
            .find_map(|(name, proc)| proc.map(|p| (*name, p)))
    }

    pub fn get(&self) -> Result<(&'static str, F), GlError> {
        match self.select() {
            Some(s) => Ok(s),
            _ => Err(GlError::NotImplemented(self.names[0])),
        }
    }

    pub fn is_available(&self) -> bool {
        self.procs.iter().any(|p| p.is_some())
    }

    pub fn status(&self, logical: &'static str) -> CommandStatus {
        CommandStatus {
            logical,
            names: self.names,
            selected: self.select().map(|(name, _)| name),
        }
    }
}

impl<F> Debug for Command<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let resolved: SmallVec<[bool; 4]> = self.procs.iter().map(|p| p.is_some()).collect();
        f.debug_struct("Command")
            .field("names", &self.names)
            .field("resolved", &resolved)
            .finish()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommandStatus {
    pub logical: &'static str,
    pub names: &'static [&'static str],
    pub selected: Option<&'static str>,
}

/// Return values that a platform API uses to signal failure.
pub trait ReturnValue: Debug {
    fn failed(&self) -> bool {
        false
    }
}

impl ReturnValue for () {}
impl ReturnValue for u8 {}
impl ReturnValue for u32 {}
impl ReturnValue for u64 {}

/// WGL returns `FALSE` on failure.
impl ReturnValue for i32 {
    fn failed(&self) -> bool {
        *self == 0
    }
}

impl<T> ReturnValue for *const T {
    fn failed(&self) -> bool {
        self.is_null()
    }
}

impl<T> ReturnValue for *mut T {
    fn failed(&self) -> bool {
        self.is_null()
    }
}

struct CallArgs<'a>(&'a [&'a dyn Debug]);

impl Display for CallArgs<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, arg) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", arg)?;
        }
        Ok(())
    }
}

pub fn log_call<R: Debug>(command: &str, args: &[&dyn Debug], res: &R) {
    if size_of::<R>() == 0 {
        log::trace!("{}({})", command, CallArgs(args));
    } else {
        log::trace!("{}({}) = {:?}", command, CallArgs(args), res);
    }
}
