use web_sys::{WebGl2RenderingContext as Gl, WebGlBuffer, WebGlProgram, WebGlShader, WebGlVertexArrayObject};

use super::backend::{BufferTarget, BufferUsage, ElementType, GraphicsBackend, PrimitiveType, ShaderStage};

impl GraphicsBackend for Gl {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type VertexArray = WebGlVertexArrayObject;

    fn create_shader(&self, stage: ShaderStage) -> Option<WebGlShader> {
        Gl::create_shader(self, stage.gl_enum())
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        Gl::shader_source(self, shader, source);
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        Gl::compile_shader(self, shader);
    }

    fn shader_compile_status(&self, shader: &WebGlShader) -> bool {
        self.get_shader_parameter(shader, Gl::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> Option<String> {
        self.get_shader_info_log(shader)
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        Gl::create_program(self)
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        Gl::attach_shader(self, program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) {
        Gl::link_program(self, program);
    }

    fn program_link_status(&self, program: &WebGlProgram) -> bool {
        self.get_program_parameter(program, Gl::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> Option<String> {
        self.get_program_info_log(program)
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> i32 {
        self.get_attrib_location(program, name)
    }

    fn use_program(&self, program: Option<&WebGlProgram>) {
        Gl::use_program(self, program);
    }

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        Gl::create_buffer(self)
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<&WebGlBuffer>) {
        Gl::bind_buffer(self, target.gl_enum(), buffer);
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage) {
        self.buffer_data_with_u8_array(target.gl_enum(), data, usage.gl_enum());
    }

    fn create_vertex_array(&self) -> Option<WebGlVertexArrayObject> {
        Gl::create_vertex_array(self)
    }

    fn bind_vertex_array(&self, vertex_array: Option<&WebGlVertexArrayObject>) {
        Gl::bind_vertex_array(self, vertex_array);
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        Gl::enable_vertex_attrib_array(self, location);
    }

    fn vertex_attrib_pointer(
        &self,
        location: u32,
        count: i32,
        element_type: ElementType,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.vertex_attrib_pointer_with_i32(location, count, element_type.gl_enum(), normalized, stride, offset);
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        Gl::viewport(self, x, y, width, height);
    }

    fn clear(&self, color: [f32; 4]) {
        self.clear_color(color[0], color[1], color[2], color[3]);
        Gl::clear(self, Gl::COLOR_BUFFER_BIT);
    }

    fn draw_elements(&self, primitive: PrimitiveType, count: i32, index_type: ElementType, offset: i32) {
        self.draw_elements_with_i32(primitive.gl_enum(), count, index_type.gl_enum(), offset);
    }

    fn draw_arrays(&self, primitive: PrimitiveType, first: i32, count: i32) {
        Gl::draw_arrays(self, primitive.gl_enum(), first, count);
    }

    fn get_error(&self) -> u32 {
        Gl::get_error(self)
    }
}
