pub mod backend;
pub mod buffer;
pub mod diagnostics;
pub mod layout;
pub mod pipeline;
pub mod program;
pub mod shader;
pub mod vertex_array;
pub mod webgl;

// Re-exports for convenient access
pub use backend::{BufferTarget, BufferUsage, ElementType, GraphicsBackend, PrimitiveType, ShaderStage};
pub use buffer::{BufferSpec, GpuBuffer};
pub use diagnostics::Diagnostics;
pub use layout::{LayoutEntry, VertexLayout};
pub use pipeline::{DrawCall, DrawState, Renderer};
pub use program::{Program, ProgramBuilder};
pub use shader::{Shader, ShaderSource};
pub use vertex_array::VertexArray;
