use super::c_int;

pub const WGL_CONTEXT_DEBUG_BIT_ARB: c_int = 0x0001;
pub const WGL_CONTEXT_FORWARD_COMPATIBLE_BIT_ARB: c_int = 0x0002;
pub const WGL_CONTEXT_MAJOR_VERSION_ARB: c_int = 0x2091;
pub const WGL_CONTEXT_MINOR_VERSION_ARB: c_int = 0x2092;
pub const WGL_CONTEXT_LAYER_PLANE_ARB: c_int = 0x2093;
pub const WGL_CONTEXT_FLAGS_ARB: c_int = 0x2094;
pub const ERROR_INVALID_VERSION_ARB: c_int = 0x2095;
pub const ERROR_INVALID_PROFILE_ARB: c_int = 0x2096;
pub const WGL_CONTEXT_PROFILE_MASK_ARB: c_int = 0x9126;
pub const WGL_CONTEXT_CORE_PROFILE_BIT_ARB: c_int = 0x0000_0001;
pub const WGL_CONTEXT_COMPATIBILITY_PROFILE_BIT_ARB: c_int = 0x0000_0002;
pub const WGL_CONTEXT_ES2_PROFILE_BIT_EXT: c_int = 0x0000_0004;

pub const WGL_NUMBER_PIXEL_FORMATS_ARB: c_int = 0x2000;
pub const WGL_DRAW_TO_WINDOW_ARB: c_int = 0x2001;
pub const WGL_DRAW_TO_BITMAP_ARB: c_int = 0x2002;
pub const WGL_ACCELERATION_ARB: c_int = 0x2003;
pub const WGL_SUPPORT_OPENGL_ARB: c_int = 0x2010;
pub const WGL_DOUBLE_BUFFER_ARB: c_int = 0x2011;
pub const WGL_STEREO_ARB: c_int = 0x2012;
pub const WGL_PIXEL_TYPE_ARB: c_int = 0x2013;
pub const WGL_COLOR_BITS_ARB: c_int = 0x2014;
pub const WGL_RED_BITS_ARB: c_int = 0x2015;
pub const WGL_GREEN_BITS_ARB: c_int = 0x2017;
pub const WGL_BLUE_BITS_ARB: c_int = 0x2019;
pub const WGL_ALPHA_BITS_ARB: c_int = 0x201B;
pub const WGL_DEPTH_BITS_ARB: c_int = 0x2022;
pub const WGL_STENCIL_BITS_ARB: c_int = 0x2023;
pub const WGL_NO_ACCELERATION_ARB: c_int = 0x2025;
pub const WGL_GENERIC_ACCELERATION_ARB: c_int = 0x2026;
pub const WGL_FULL_ACCELERATION_ARB: c_int = 0x2027;
pub const WGL_TYPE_RGBA_ARB: c_int = 0x202B;
pub const WGL_TYPE_COLORINDEX_ARB: c_int = 0x202C;
pub const WGL_SAMPLE_BUFFERS_ARB: c_int = 0x2041;
pub const WGL_SAMPLES_ARB: c_int = 0x2042;
pub const WGL_FRAMEBUFFER_SRGB_CAPABLE_ARB: c_int = 0x20A9;
