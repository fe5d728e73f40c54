#![allow(
    clippy::len_zero,
    clippy::missing_safety_doc,
    clippy::too_many_arguments,
    clippy::new_without_default
)]

#[macro_use]
mod macros;

pub mod config;
pub mod current;
pub mod dispatch;
pub mod error;
pub mod ext;
pub mod gl;
pub mod loader;
pub mod logger;
pub mod sys;
pub mod utils;
pub mod version;
pub mod wgl;

pub use {
    config::GlConfig,
    error::GlError,
    gl::Gl,
    glbind_math as math,
    loader::{Api, LibraryLoader, ProcLoader},
    wgl::Wgl,
};
