use strum::{EnumIter, IntoStaticStr};
use web_sys::WebGl2RenderingContext as Gl;

use crate::domain::errors::LayoutError;

/// Pipeline stage a shader object is compiled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => Gl::VERTEX_SHADER,
            ShaderStage::Fragment => Gl::FRAGMENT_SHADER,
        }
    }

    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Binding point a buffer holds data for
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum BufferTarget {
    #[strum(serialize = "vertex")]
    Vertex,
    #[strum(serialize = "index")]
    Index,
}

impl BufferTarget {
    pub fn gl_enum(self) -> u32 {
        match self {
            BufferTarget::Vertex => Gl::ARRAY_BUFFER,
            BufferTarget::Index => Gl::ELEMENT_ARRAY_BUFFER,
        }
    }

    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Upload frequency hint passed to `bufferData`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    StaticDraw,
    DynamicDraw,
    StreamDraw,
}

impl BufferUsage {
    pub fn gl_enum(self) -> u32 {
        match self {
            BufferUsage::StaticDraw => Gl::STATIC_DRAW,
            BufferUsage::DynamicDraw => Gl::DYNAMIC_DRAW,
            BufferUsage::StreamDraw => Gl::STREAM_DRAW,
        }
    }
}

/// Scalar type of vertex attribute components and indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum ElementType {
    Byte,
    UnsignedByte,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    HalfFloat,
    Float,
}

impl ElementType {
    pub fn size_in_bytes(self) -> i32 {
        match self {
            ElementType::Byte | ElementType::UnsignedByte => 1,
            ElementType::Short | ElementType::UnsignedShort | ElementType::HalfFloat => 2,
            ElementType::Int | ElementType::UnsignedInt | ElementType::Float => 4,
        }
    }

    pub fn gl_enum(self) -> u32 {
        match self {
            ElementType::Byte => Gl::BYTE,
            ElementType::UnsignedByte => Gl::UNSIGNED_BYTE,
            ElementType::Short => Gl::SHORT,
            ElementType::UnsignedShort => Gl::UNSIGNED_SHORT,
            ElementType::Int => Gl::INT,
            ElementType::UnsignedInt => Gl::UNSIGNED_INT,
            ElementType::HalfFloat => Gl::HALF_FLOAT,
            ElementType::Float => Gl::FLOAT,
        }
    }

    pub fn from_gl(code: u32) -> Result<Self, LayoutError> {
        match code {
            Gl::BYTE => Ok(ElementType::Byte),
            Gl::UNSIGNED_BYTE => Ok(ElementType::UnsignedByte),
            Gl::SHORT => Ok(ElementType::Short),
            Gl::UNSIGNED_SHORT => Ok(ElementType::UnsignedShort),
            Gl::INT => Ok(ElementType::Int),
            Gl::UNSIGNED_INT => Ok(ElementType::UnsignedInt),
            Gl::HALF_FLOAT => Ok(ElementType::HalfFloat),
            Gl::FLOAT => Ok(ElementType::Float),
            other => Err(LayoutError::UnknownElementType(other)),
        }
    }
}

/// Primitive topology for draw calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    Points,
    Lines,
    LineLoop,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl PrimitiveType {
    pub fn gl_enum(self) -> u32 {
        match self {
            PrimitiveType::Points => Gl::POINTS,
            PrimitiveType::Lines => Gl::LINES,
            PrimitiveType::LineLoop => Gl::LINE_LOOP,
            PrimitiveType::LineStrip => Gl::LINE_STRIP,
            PrimitiveType::Triangles => Gl::TRIANGLES,
            PrimitiveType::TriangleStrip => Gl::TRIANGLE_STRIP,
            PrimitiveType::TriangleFan => Gl::TRIANGLE_FAN,
        }
    }
}

/// The subset of a WebGL2-style API the sandbox drives.
///
/// Handle allocation returns `None` when the context refuses (typically a
/// lost context). Every other call is fire-and-forget; failures surface
/// through [`GraphicsBackend::get_error`].
pub trait GraphicsBackend {
    type Shader;
    type Program;
    type Buffer;
    type VertexArray;

    fn create_shader(&self, stage: ShaderStage) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn shader_compile_status(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> Option<String>;

    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn program_link_status(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> Option<String>;
    fn attrib_location(&self, program: &Self::Program, name: &str) -> i32;
    fn use_program(&self, program: Option<&Self::Program>);

    fn create_buffer(&self) -> Option<Self::Buffer>;
    fn bind_buffer(&self, target: BufferTarget, buffer: Option<&Self::Buffer>);
    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage);

    fn create_vertex_array(&self) -> Option<Self::VertexArray>;
    fn bind_vertex_array(&self, vertex_array: Option<&Self::VertexArray>);
    fn enable_vertex_attrib_array(&self, location: u32);
    #[allow(clippy::too_many_arguments)]
    fn vertex_attrib_pointer(
        &self,
        location: u32,
        count: i32,
        element_type: ElementType,
        normalized: bool,
        stride: i32,
        offset: i32,
    );

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    /// Clear the color buffer to `color`.
    fn clear(&self, color: [f32; 4]);
    fn draw_elements(&self, primitive: PrimitiveType, count: i32, index_type: ElementType, offset: i32);
    fn draw_arrays(&self, primitive: PrimitiveType, first: i32, count: i32);

    /// Pop one code off the error queue; 0 means the queue is empty.
    fn get_error(&self) -> u32;
}
