#[cfg(test)]
mod tests;

use {
    crate::{config::GlConfig, error::GlError},
    libloading::Library,
    std::{
        ffi::{CString, c_char, c_void},
        path::Path,
        ptr::NonNull,
    },
};

/// Looks up native entry points by name.
pub trait ProcLoader {
    fn get_proc_address(&mut self, name: &str) -> Option<NonNull<c_void>>;
}

impl<F> ProcLoader for F
where
    F: FnMut(&str) -> *const c_void,
{
    fn get_proc_address(&mut self, name: &str) -> Option<NonNull<c_void>> {
        NonNull::new(self(name) as *mut c_void)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Api {
    Gl,
    Gles,
}

struct Platform {
    libraries: &'static [&'static str],
    /// Library exporting the `get_proc` function if it is not `libraries`.
    proc_libraries: &'static [&'static str],
    get_proc: &'static [&'static str],
    /// Whether `get_proc` is consulted before the library's symbol table.
    proc_first: bool,
}

#[cfg(windows)]
fn platform(api: Api) -> Platform {
    match api {
        Api::Gl => Platform {
            libraries: &["opengl32.dll"],
            proc_libraries: &[],
            get_proc: &["wglGetProcAddress"],
            proc_first: true,
        },
        Api::Gles => Platform {
            libraries: &["libGLESv2.dll"],
            proc_libraries: &["libEGL.dll"],
            get_proc: &["eglGetProcAddress"],
            proc_first: false,
        },
    }
}

#[cfg(target_os = "macos")]
fn platform(api: Api) -> Platform {
    match api {
        Api::Gl => Platform {
            libraries: &["/System/Library/Frameworks/OpenGL.framework/OpenGL"],
            proc_libraries: &[],
            get_proc: &[],
            proc_first: false,
        },
        Api::Gles => Platform {
            libraries: &[],
            proc_libraries: &[],
            get_proc: &[],
            proc_first: false,
        },
    }
}

// glXGetProcAddress returns a non-null pointer for any name, so the symbol
// table is asked first.
#[cfg(all(unix, not(target_os = "macos")))]
fn platform(api: Api) -> Platform {
    match api {
        Api::Gl => Platform {
            libraries: &["libGL.so.1", "libGL.so"],
            proc_libraries: &[],
            get_proc: &["glXGetProcAddressARB", "glXGetProcAddress"],
            proc_first: false,
        },
        Api::Gles => Platform {
            libraries: &["libGLESv2.so.2", "libGLESv2.so"],
            proc_libraries: &["libEGL.so.1", "libEGL.so"],
            get_proc: &["eglGetProcAddress"],
            proc_first: false,
        },
    }
}

type GetProcAddress = unsafe extern "system" fn(name: *const c_char) -> *const c_void;

/// Resolves entry points from the platform's GL library.
pub struct LibraryLoader {
    name: String,
    lib: Library,
    get_proc: Option<GetProcAddress>,
    proc_first: bool,
    _proc_lib: Option<Library>,
}

impl LibraryLoader {
    pub fn open(api: Api, config: &GlConfig) -> Result<Self, GlError> {
        let platform = platform(api);
        let (name, lib) = match &config.library {
            Some(path) => open_path(path)?,
            _ => open_first(platform.libraries).ok_or(GlError::NoLibrary(api))??,
        };
        let mut get_proc = None;
        let mut proc_lib = None;
        let proc_src = if platform.proc_libraries.is_empty() {
            Some(&lib)
        } else {
            match open_first(platform.proc_libraries) {
                Some(Ok((proc_name, l))) => {
                    log::debug!("Loaded `{}`", proc_name);
                    Some(&*proc_lib.insert(l))
                }
                Some(Err(e)) => {
                    log::warn!("Could not open the loader library: {}", e);
                    None
                }
                None => None,
            }
        };
        if let Some(src) = proc_src {
            for sym in platform.get_proc {
                let res = unsafe { src.get::<GetProcAddress>(sym.as_bytes()) };
                if let Ok(f) = res {
                    log::debug!("Using `{}` to resolve extension commands", sym);
                    get_proc = Some(*f);
                    break;
                }
            }
        }
        log::info!("Loaded `{}`", name);
        Ok(Self {
            name,
            lib,
            get_proc,
            proc_first: platform.proc_first,
            _proc_lib: proc_lib,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn symbol(&self, name: &CString) -> Option<NonNull<c_void>> {
        let sym = unsafe { self.lib.get::<*mut c_void>(name.as_bytes_with_nul()) };
        sym.ok().and_then(|s| NonNull::new(*s))
    }

    fn proc(&self, name: &CString) -> Option<NonNull<c_void>> {
        let get_proc = self.get_proc?;
        filter_proc(unsafe { get_proc(name.as_ptr()) })
    }
}

/// Some WGL implementations return small integers instead of NULL.
fn filter_proc(ptr: *const c_void) -> Option<NonNull<c_void>> {
    match ptr as isize {
        -1 | 0 | 1 | 2 | 3 => None,
        _ => NonNull::new(ptr as *mut c_void),
    }
}

impl ProcLoader for LibraryLoader {
    fn get_proc_address(&mut self, name: &str) -> Option<NonNull<c_void>> {
        let name = CString::new(name).ok()?;
        if self.proc_first {
            self.proc(&name).or_else(|| self.symbol(&name))
        } else {
            self.symbol(&name).or_else(|| self.proc(&name))
        }
    }
}

fn open_path(path: &Path) -> Result<(String, Library), GlError> {
    let name = path.display().to_string();
    match unsafe { Library::new(path) } {
        Ok(lib) => Ok((name, lib)),
        Err(source) => Err(GlError::LoadLibrary { name, source }),
    }
}

fn open_first(candidates: &[&str]) -> Option<Result<(String, Library), GlError>> {
    let mut last = None;
    for &name in candidates {
        match unsafe { Library::new(name) } {
            Ok(lib) => return Some(Ok((name.to_string(), lib))),
            Err(source) => {
                log::debug!("Could not open `{}`: {}", name, source);
                last = Some(Err(GlError::LoadLibrary {
                    name: name.to_string(),
                    source,
                }));
            }
        }
    }
    last
}
