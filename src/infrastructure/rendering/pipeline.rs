use super::backend::{ElementType, GraphicsBackend, PrimitiveType};
use super::program::Program;
use super::vertex_array::VertexArray;

/// The program and vertex format used by the next draw.
pub struct DrawState<'a, B: GraphicsBackend> {
    program: &'a Program<B>,
    vertex_array: &'a VertexArray<B>,
}

impl<'a, B: GraphicsBackend> DrawState<'a, B> {
    pub fn new(program: &'a Program<B>, vertex_array: &'a VertexArray<B>) -> Self {
        Self { program, vertex_array }
    }

    /// Make this pair current. Safe to call repeatedly.
    pub fn activate(&self, gl: &B) {
        gl.use_program(Some(self.program.handle()));
        gl.bind_vertex_array(Some(self.vertex_array.handle()));
    }
}

/// Parameters of a single draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub primitive: PrimitiveType,
    pub count: i32,
    /// Byte offset into the index buffer when indexed, first vertex otherwise
    pub offset: i32,
    /// `Some` draws from the bound index buffer with this index type
    pub index_type: Option<ElementType>,
}

impl DrawCall {
    pub fn indexed(primitive: PrimitiveType, count: i32, offset: i32, index_type: ElementType) -> Self {
        Self { primitive, count, offset, index_type: Some(index_type) }
    }

    pub fn arrays(primitive: PrimitiveType, first: i32, count: i32) -> Self {
        Self { primitive, count, offset: first, index_type: None }
    }

    pub fn is_indexed(&self) -> bool {
        self.index_type.is_some()
    }
}

/// Issues draw calls against whatever state is currently active.
pub struct Renderer;

impl Renderer {
    pub fn draw<B: GraphicsBackend>(gl: &B, call: DrawCall) {
        match call.index_type {
            Some(index_type) => gl.draw_elements(call.primitive, call.count, index_type, call.offset),
            None => gl.draw_arrays(call.primitive, call.offset, call.count),
        }
    }
}
