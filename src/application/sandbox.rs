use serde::Serialize;
use web_sys::HtmlCanvasElement;

use crate::domain::config::SandboxConfig;
use crate::domain::errors::SandboxResult;
use crate::domain::geometry::{QUAD_INDICES, QUAD_VERTICES};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::shaders::POSITION_ATTRIBUTE;
use crate::infrastructure::rendering::{
    BufferSpec, BufferTarget, BufferUsage, Diagnostics, DrawCall, DrawState, ElementType, GraphicsBackend,
    PrimitiveType, ProgramBuilder, Renderer, ShaderSource, ShaderStage, VertexArray, VertexLayout,
};
use crate::infrastructure::surface::{Surface, acquire_context};
use crate::{log_debug, log_info, log_warn};

/// The single draw issued by the sandbox: both quad triangles from the
/// `u8` index buffer.
pub const QUAD_DRAW: DrawCall = DrawCall {
    primitive: PrimitiveType::Triangles,
    count: QUAD_INDICES.len() as i32,
    offset: 0,
    index_type: Some(ElementType::UnsignedByte),
};

/// Error codes drained after one setup stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageDiagnostics {
    pub stage: &'static str,
    pub codes: Vec<u32>,
}

/// Outcome of a full setup run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SandboxReport {
    pub surface_side: u32,
    pub vertex_shader_compiled: bool,
    pub fragment_shader_compiled: bool,
    pub program_linked: bool,
    /// Location bound to the quad positions, `None` when the lookup missed
    pub position_attribute: Option<u32>,
    pub stages: Vec<StageDiagnostics>,
}

impl SandboxReport {
    /// Every stage succeeded and no GL error was reported.
    pub fn is_clean(&self) -> bool {
        self.vertex_shader_compiled
            && self.fragment_shader_compiled
            && self.program_linked
            && self.position_attribute.is_some()
            && self.stages.iter().all(|s| s.codes.is_empty())
    }

    fn record<B: GraphicsBackend>(&mut self, gl: &B, stage: &'static str) {
        let codes = Diagnostics::drain(gl, stage);
        self.stages.push(StageDiagnostics { stage, codes });
    }
}

/// Runs the one-shot setup: shaders, program, buffers, vertex format, draw.
pub struct Sandbox {
    config: SandboxConfig,
}

impl Sandbox {
    pub fn new(config: SandboxConfig) -> Self {
        Self { config }
    }

    /// Create the page surface and run on it.
    pub fn launch(&self) -> SandboxResult<SandboxReport> {
        let surface = Surface::create()?;
        self.run_on_canvas(surface.canvas(), surface.side())
    }

    /// Acquire WebGL2 on `canvas` and run. Without a context nothing else is
    /// attempted.
    pub fn run_on_canvas(&self, canvas: &HtmlCanvasElement, side: u32) -> SandboxResult<SandboxReport> {
        let gl = acquire_context(canvas)?;
        self.run(&gl, side)
    }

    /// Execute every stage in order on `gl`, draining the error queue after
    /// each. Compile and link failures and a missing position attribute are
    /// recorded and logged but do not stop the sequence; only a refused
    /// handle allocation does.
    pub fn run<B: GraphicsBackend>(&self, gl: &B, surface_side: u32) -> SandboxResult<SandboxReport> {
        let mut report = SandboxReport {
            surface_side,
            vertex_shader_compiled: false,
            fragment_shader_compiled: false,
            program_linked: false,
            position_attribute: None,
            stages: Vec::new(),
        };

        let vertex_shader = ShaderSource::new(ShaderStage::Vertex)
            .with_source(self.config.vertex_shader.as_str())
            .compile(gl)?;
        report.vertex_shader_compiled = vertex_shader.is_compiled();
        report.record(gl, "Vertex Shader");

        let fragment_shader = ShaderSource::new(ShaderStage::Fragment)
            .with_source(self.config.fragment_shader.as_str())
            .compile(gl)?;
        report.fragment_shader_compiled = fragment_shader.is_compiled();
        report.record(gl, "Fragment Shader");

        let program = ProgramBuilder::new()
            .attach(&vertex_shader)
            .attach(&fragment_shader)
            .link(gl)?;
        report.program_linked = program.is_linked();
        report.record(gl, "Program");

        let _vertex_buffer = BufferSpec::new(BufferTarget::Vertex, BufferUsage::StaticDraw)
            .with_pod_data(&QUAD_VERTICES)
            .create(gl)?;
        report.record(gl, "Vertex Buffer");

        // An unlinked program has no attributes; the quad then draws with no
        // enabled inputs.
        let layout = match program.attribute_location(gl, POSITION_ATTRIBUTE) {
            Ok(location) => {
                let mut layout = VertexLayout::new(location);
                layout.add_layout(2, ElementType::Float, false)?;
                layout
            }
            Err(e) => {
                get_logger().diagnostic(LogComponent::Application("Sandbox"), &e.to_string(), None);
                VertexLayout::default()
            }
        };
        report.position_attribute = layout.entries().first().map(|entry| entry.location);
        report.record(gl, "Vertex Buffer Layout");

        let vertex_array = VertexArray::create(gl, &layout)?;
        report.record(gl, "Vertex Array");

        // Bound while the vertex array is current, so the VAO captures it.
        let _index_buffer = BufferSpec::new(BufferTarget::Index, BufferUsage::StaticDraw)
            .with_pod_data(&QUAD_INDICES)
            .create(gl)?;
        report.record(gl, "Vertex Index Buffer");

        DrawState::new(&program, &vertex_array).activate(gl);
        report.record(gl, "Finalizer");

        let side = i32::try_from(surface_side).unwrap_or(i32::MAX);
        gl.viewport(0, 0, side, side);
        gl.clear(self.config.clear_color);
        Renderer::draw(gl, QUAD_DRAW);
        report.record(gl, "Renderer");

        if report.is_clean() {
            log_info!(LogComponent::Application("Sandbox"), "quad drawn on {}px surface", surface_side);
        } else {
            log_warn!(
                LogComponent::Application("Sandbox"),
                "setup finished with problems: compiled={}/{}, linked={}",
                report.vertex_shader_compiled,
                report.fragment_shader_compiled,
                report.program_linked
            );
        }
        log_debug!(LogComponent::Application("Sandbox"), "{:?}", report);

        Ok(report)
    }
}
