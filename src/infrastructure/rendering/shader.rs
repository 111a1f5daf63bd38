use super::backend::{GraphicsBackend, ShaderStage};
use crate::domain::errors::{RenderingError, SandboxResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::log_debug;

/// Source text waiting to be compiled for one stage.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    stage: ShaderStage,
    source: String,
}

impl ShaderSource {
    pub fn new(stage: ShaderStage) -> Self {
        Self { stage, source: String::new() }
    }

    /// Without this the stage compiles an empty string.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Compile into a shader object.
    ///
    /// A compile error is logged together with the info log but does not fail
    /// the call; check [`Shader::is_compiled`]. Only a refused handle
    /// allocation is an error.
    pub fn compile<B: GraphicsBackend>(self, gl: &B) -> SandboxResult<Shader<B>> {
        let handle = gl
            .create_shader(self.stage)
            .ok_or(RenderingError::ShaderAllocationFailed(self.stage.label()))?;
        gl.shader_source(&handle, &self.source);
        gl.compile_shader(&handle);

        let compiled = gl.shader_compile_status(&handle);
        let info_log = gl.shader_info_log(&handle).unwrap_or_default();

        if compiled {
            log_debug!(
                LogComponent::Infrastructure("Shader"),
                "{} shader compiled ({} bytes of source)",
                self.stage.label(),
                self.source.len()
            );
            if !info_log.trim().is_empty() {
                log_debug!(LogComponent::Infrastructure("Shader"), "info log: {}", info_log.trim());
            }
        } else {
            get_logger().diagnostic(
                LogComponent::Infrastructure("Shader"),
                &format!("failed to compile {} shader", self.stage.label()),
                Some(info_log.as_str()),
            );
        }

        Ok(Shader { stage: self.stage, handle, compiled })
    }
}

/// A compiled (or failed) shader object. Never mutated after compilation.
pub struct Shader<B: GraphicsBackend> {
    stage: ShaderStage,
    handle: B::Shader,
    compiled: bool,
}

impl<B: GraphicsBackend> Shader<B> {
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn handle(&self) -> &B::Shader {
        &self.handle
    }

    pub fn is_compiled(&self) -> bool {
        self.compiled
    }
}
