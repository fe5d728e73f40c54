use {
    crate::{
        loader::Api,
        sys::{
            GL_CONTEXT_LOST, GL_INVALID_ENUM, GL_INVALID_FRAMEBUFFER_OPERATION,
            GL_INVALID_OPERATION, GL_INVALID_VALUE, GL_NO_ERROR, GL_OUT_OF_MEMORY,
            GL_STACK_OVERFLOW, GL_STACK_UNDERFLOW, GLenum,
        },
    },
    std::{
        ffi::NulError,
        fmt::{Display, Formatter},
        io,
    },
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum GlError {
    #[error("No implementation of `{0}` is available")]
    NotImplemented(&'static str),
    #[error("`{command}` raised {code}")]
    Native {
        command: &'static str,
        code: ErrorCode,
    },
    #[error("`{command}` failed")]
    Platform {
        command: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("Could not load `{name}`")]
    LoadLibrary {
        name: String,
        #[source]
        source: libloading::Error,
    },
    #[error("There is no {0:?} library for this platform")]
    NoLibrary(Api),
    #[error("No command table is current on this thread")]
    NoCurrentTable,
    #[error("String argument contains a nul byte")]
    InteriorNul(#[from] NulError),
    #[error("{0} elements exceed the range of GLsizei")]
    TooManyElements(usize),
    #[error("Could not parse the version string `{0}`")]
    InvalidVersion(String),
    #[error("Could not compile a shader: {0}")]
    ShaderCompile(String),
    #[error("Could not link a program: {0}")]
    ProgramLink(String),
}

/// A value returned by `glGetError`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ErrorCode(pub GLenum);

impl ErrorCode {
    pub fn name(self) -> &'static str {
        macro_rules! en {
            ($($name:ident,)*) => {
                match self.0 {
                    $($name => stringify!($name),)*
                    _ => "unknown",
                }
            }
        }
        en! {
            GL_NO_ERROR,
            GL_INVALID_ENUM,
            GL_INVALID_VALUE,
            GL_INVALID_OPERATION,
            GL_STACK_OVERFLOW,
            GL_STACK_UNDERFLOW,
            GL_OUT_OF_MEMORY,
            GL_INVALID_FRAMEBUFFER_OPERATION,
            GL_CONTEXT_LOST,
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (0x{:04x})", self.name(), self.0)
    }
}
