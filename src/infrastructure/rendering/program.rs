use super::backend::GraphicsBackend;
use super::shader::Shader;
use crate::domain::errors::{LayoutError, RenderingError, SandboxResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::log_debug;

/// Collects shaders to link. Shaders are borrowed, so the same shader object
/// can be attached to more than one program.
pub struct ProgramBuilder<'a, B: GraphicsBackend> {
    shaders: Vec<&'a Shader<B>>,
}

impl<'a, B: GraphicsBackend> Default for ProgramBuilder<'a, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, B: GraphicsBackend> ProgramBuilder<'a, B> {
    pub fn new() -> Self {
        Self { shaders: Vec::new() }
    }

    pub fn attach(mut self, shader: &'a Shader<B>) -> Self {
        self.shaders.push(shader);
        self
    }

    /// Create a program, attach every shader in order and link.
    ///
    /// Link failure is logged, not returned; check [`Program::is_linked`].
    pub fn link(self, gl: &B) -> SandboxResult<Program<B>> {
        let handle = gl.create_program().ok_or(RenderingError::ProgramAllocationFailed)?;
        for shader in &self.shaders {
            gl.attach_shader(&handle, shader.handle());
        }
        gl.link_program(&handle);

        let linked = gl.program_link_status(&handle);
        let info_log = gl.program_info_log(&handle).unwrap_or_default();

        if linked {
            log_debug!(
                LogComponent::Infrastructure("Program"),
                "program linked from {} shaders",
                self.shaders.len()
            );
        } else {
            get_logger().diagnostic(
                LogComponent::Infrastructure("Program"),
                "failed to link program",
                Some(info_log.as_str()),
            );
        }

        Ok(Program { handle, linked })
    }
}

/// A linked (or failed) program object.
pub struct Program<B: GraphicsBackend> {
    handle: B::Program,
    linked: bool,
}

impl<B: GraphicsBackend> Program<B> {
    pub fn handle(&self) -> &B::Program {
        &self.handle
    }

    pub fn is_linked(&self) -> bool {
        self.linked
    }

    /// Slot of the named vertex input. Inputs the linker optimised away or
    /// that do not exist report `-1`, which becomes an error here.
    pub fn attribute_location(&self, gl: &B, name: &str) -> SandboxResult<u32> {
        let location = gl.attrib_location(&self.handle, name);
        u32::try_from(location).map_err(|_| LayoutError::AttributeNotFound(name.to_string()).into())
    }
}
