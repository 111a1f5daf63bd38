use web_sys::WebGl2RenderingContext as Gl;

use super::backend::GraphicsBackend;
use crate::domain::logging::{LogComponent, get_logger};

/// Upper bound on polls per drain. A lost context keeps answering
/// `CONTEXT_LOST_WEBGL`, so the queue may never report empty.
pub const MAX_ERRORS_PER_DRAIN: usize = 64;

/// Human-readable name of a `getError` code.
pub fn describe_error(code: u32) -> &'static str {
    match code {
        Gl::NO_ERROR => "NO_ERROR",
        Gl::INVALID_ENUM => "INVALID_ENUM",
        Gl::INVALID_VALUE => "INVALID_VALUE",
        Gl::INVALID_OPERATION => "INVALID_OPERATION",
        Gl::INVALID_FRAMEBUFFER_OPERATION => "INVALID_FRAMEBUFFER_OPERATION",
        Gl::OUT_OF_MEMORY => "OUT_OF_MEMORY",
        Gl::CONTEXT_LOST_WEBGL => "CONTEXT_LOST_WEBGL",
        _ => "UNKNOWN",
    }
}

/// Drains the context error queue after each setup stage.
pub struct Diagnostics;

impl Diagnostics {
    /// Pop and log every pending error code under `label`, returning them in
    /// the order they were reported. An empty result means the queue was
    /// clean.
    pub fn drain<B: GraphicsBackend>(gl: &B, label: &str) -> Vec<u32> {
        let mut codes = Vec::new();
        while codes.len() < MAX_ERRORS_PER_DRAIN {
            let code = gl.get_error();
            if code == Gl::NO_ERROR {
                break;
            }
            get_logger().diagnostic(
                LogComponent::Infrastructure("Diagnostics"),
                &format!("[{}] GL error 0x{:04X} ({})", label, code, describe_error(code)),
                None,
            );
            codes.push(code);
        }
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_have_names() {
        assert_eq!(describe_error(Gl::INVALID_ENUM), "INVALID_ENUM");
        assert_eq!(describe_error(Gl::OUT_OF_MEMORY), "OUT_OF_MEMORY");
        assert_eq!(describe_error(0xDEAD), "UNKNOWN");
    }
}
