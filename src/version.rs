#[cfg(test)]
mod tests;

use {
    crate::error::GlError,
    regex::Regex,
    std::{
        cmp::Ordering,
        fmt::{Display, Formatter},
        sync::LazyLock,
    },
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum KhronosApi {
    Gl,
    Gles,
    Glsl,
    Essl,
}

/// A version as reported by `GL_VERSION` or `GL_SHADING_LANGUAGE_VERSION`.
///
/// Versions of different APIs are unordered.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct KhronosVersion {
    pub api: KhronosApi,
    pub major: u32,
    pub minor: u32,
    pub revision: u32,
}

static VERSION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let re = Regex::new(
        r"^\s*(?P<es>OpenGL ES(?:-CM|-CL)?(?: GLSL ES)?\s+)?(?P<major>\d+)\.(?P<minor>\d+)(?:\.(?P<revision>\d+))?",
    );
    match re {
        Ok(re) => Some(re),
        Err(e) => {
            log::error!("Could not compile the version pattern: {}", e);
            None
        }
    }
});

impl KhronosVersion {
    pub const fn new(api: KhronosApi, major: u32, minor: u32) -> Self {
        Self {
            api,
            major,
            minor,
            revision: 0,
        }
    }

    /// Parses a `GL_VERSION` string such as `4.6.0 NVIDIA 550.54` or
    /// `OpenGL ES 3.2 Mesa 24.0.1`.
    pub fn parse_gl(s: &str) -> Result<Self, GlError> {
        Self::parse(s, false)
    }

    /// Parses a `GL_SHADING_LANGUAGE_VERSION` string such as `4.60 NVIDIA`
    /// or `OpenGL ES GLSL ES 3.20`.
    ///
    /// The minor version is normalized to two digits so that `1.1` and
    /// `1.10` compare equal.
    pub fn parse_glsl(s: &str) -> Result<Self, GlError> {
        Self::parse(s, true)
    }

    fn parse(s: &str, shading: bool) -> Result<Self, GlError> {
        let invalid = || GlError::InvalidVersion(s.to_string());
        let Some(re) = &*VERSION else {
            return Err(invalid());
        };
        let caps = re.captures(s).ok_or_else(invalid)?;
        let num = |name: &str| -> Result<u32, GlError> {
            match caps.name(name) {
                Some(m) => m.as_str().parse().map_err(|_| invalid()),
                _ => Ok(0),
            }
        };
        let es = caps.name("es").is_some();
        let api = match (shading, es) {
            (false, false) => KhronosApi::Gl,
            (false, true) => KhronosApi::Gles,
            (true, false) => KhronosApi::Glsl,
            (true, true) => KhronosApi::Essl,
        };
        let mut minor = num("minor")?;
        if shading && caps.name("minor").is_some_and(|m| m.len() == 1) {
            minor *= 10;
        }
        Ok(Self {
            api,
            major: num("major")?,
            minor,
            revision: num("revision")?,
        })
    }

    /// The version as used by `#version` directives, e.g. `330` for both
    /// GL 3.3 and GLSL 3.30.
    pub fn number(&self) -> u32 {
        match self.api {
            KhronosApi::Gl | KhronosApi::Gles => self.major * 100 + self.minor * 10,
            KhronosApi::Glsl | KhronosApi::Essl => self.major * 100 + self.minor,
        }
    }

    pub fn is_es(&self) -> bool {
        matches!(self.api, KhronosApi::Gles | KhronosApi::Essl)
    }

    /// Whether this is `api` in at least version `major.minor`.
    pub fn at_least(&self, api: KhronosApi, major: u32, minor: u32) -> bool {
        self.api == api && (self.major, self.minor) >= (major, minor)
    }
}

impl PartialOrd for KhronosVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.api != other.api {
            return None;
        }
        Some(
            (self.major, self.minor, self.revision).cmp(&(
                other.major,
                other.minor,
                other.revision,
            )),
        )
    }
}

impl Display for KhronosVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.api {
            KhronosApi::Gl => write!(f, "OpenGL {}.{}", self.major, self.minor)?,
            KhronosApi::Gles => write!(f, "OpenGL ES {}.{}", self.major, self.minor)?,
            KhronosApi::Glsl => write!(f, "GLSL {}.{:02}", self.major, self.minor)?,
            KhronosApi::Essl => write!(f, "GLSL ES {}.{:02}", self.major, self.minor)?,
        }
        if self.revision != 0 {
            write!(f, ".{}", self.revision)?;
        }
        Ok(())
    }
}
