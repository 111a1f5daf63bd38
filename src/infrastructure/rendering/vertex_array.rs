use super::backend::GraphicsBackend;
use super::layout::VertexLayout;
use crate::domain::errors::{RenderingError, SandboxResult};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Vertex array object recording the attribute pointers of one layout.
pub struct VertexArray<B: GraphicsBackend> {
    handle: B::VertexArray,
}

impl<B: GraphicsBackend> VertexArray<B> {
    /// Create and bind a vertex array, then point each layout entry at the
    /// buffer currently bound to the vertex target. Bind the vertex buffer
    /// before calling this.
    pub fn create(gl: &B, layout: &VertexLayout) -> SandboxResult<Self> {
        let handle = gl
            .create_vertex_array()
            .ok_or(RenderingError::VertexArrayAllocationFailed)?;
        gl.bind_vertex_array(Some(&handle));

        for entry in layout.entries() {
            gl.enable_vertex_attrib_array(entry.location);
            gl.vertex_attrib_pointer(
                entry.location,
                entry.count,
                entry.element_type,
                entry.normalized,
                entry.stride,
                entry.offset,
            );
        }

        log_debug!(
            LogComponent::Infrastructure("VertexArray"),
            "vertex array configured: {} attributes, stride {}",
            layout.entries().len(),
            layout.stride()
        );

        Ok(Self { handle })
    }

    pub fn handle(&self) -> &B::VertexArray {
        &self.handle
    }
}
