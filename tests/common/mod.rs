#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use web_sys::WebGl2RenderingContext as Gl;
use webgl2_quad_sandbox::infrastructure::rendering::{
    BufferTarget, BufferUsage, ElementType, GraphicsBackend, PrimitiveType, ShaderStage,
};

/// In-memory stand-in for a WebGL2 context that records every call.
///
/// Handles are plain ids. Misuse that a real context would flag, such as
/// drawing without a program or uploading with no buffer bound, queues
/// `INVALID_OPERATION`.
pub struct RecordingGl {
    calls: RefCell<Vec<String>>,
    errors: RefCell<VecDeque<u32>>,
    next_id: Cell<u32>,
    current_program: Cell<Option<u32>>,
    array_buffer: Cell<Option<u32>>,
    element_buffer: Cell<Option<u32>>,
    uploads: RefCell<HashMap<u32, Vec<u8>>>,
    pub compile_ok: Cell<bool>,
    pub link_ok: Cell<bool>,
    pub refuse_allocations: Cell<bool>,
    pub context_lost: Cell<bool>,
    pub attrib_locations: RefCell<HashMap<String, i32>>,
}

impl Default for RecordingGl {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingGl {
    pub fn new() -> Self {
        let mut locations = HashMap::new();
        locations.insert("positionAttribute".to_string(), 0);
        Self {
            calls: RefCell::new(Vec::new()),
            errors: RefCell::new(VecDeque::new()),
            next_id: Cell::new(1),
            current_program: Cell::new(None),
            array_buffer: Cell::new(None),
            element_buffer: Cell::new(None),
            uploads: RefCell::new(HashMap::new()),
            compile_ok: Cell::new(true),
            link_ok: Cell::new(true),
            refuse_allocations: Cell::new(false),
            context_lost: Cell::new(false),
            attrib_locations: RefCell::new(locations),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Call names without arguments, in order.
    pub fn call_names(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|c| c.split('(').next().unwrap_or_default().to_string())
            .collect()
    }

    pub fn uploaded(&self, buffer: u32) -> Option<Vec<u8>> {
        self.uploads.borrow().get(&buffer).cloned()
    }

    pub fn push_error(&self, code: u32) {
        self.errors.borrow_mut().push_back(code);
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    /// A real context never links a program whose shaders failed to compile.
    fn links(&self) -> bool {
        self.link_ok.get() && self.compile_ok.get()
    }

    fn allocate(&self) -> Option<u32> {
        if self.refuse_allocations.get() {
            return None;
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        Some(id)
    }
}

impl GraphicsBackend for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;

    fn create_shader(&self, stage: ShaderStage) -> Option<u32> {
        let id = self.allocate();
        self.record(format!("create_shader({})", stage.label()));
        id
    }

    fn shader_source(&self, shader: &u32, source: &str) {
        self.record(format!("shader_source({}, {} bytes)", shader, source.len()));
    }

    fn compile_shader(&self, shader: &u32) {
        self.record(format!("compile_shader({})", shader));
    }

    fn shader_compile_status(&self, _shader: &u32) -> bool {
        self.compile_ok.get()
    }

    fn shader_info_log(&self, _shader: &u32) -> Option<String> {
        if self.compile_ok.get() {
            Some(String::new())
        } else {
            Some("ERROR: 0:1: syntax error".to_string())
        }
    }

    fn create_program(&self) -> Option<u32> {
        let id = self.allocate();
        self.record("create_program()".to_string());
        id
    }

    fn attach_shader(&self, program: &u32, shader: &u32) {
        self.record(format!("attach_shader({}, {})", program, shader));
    }

    fn link_program(&self, program: &u32) {
        self.record(format!("link_program({})", program));
    }

    fn program_link_status(&self, _program: &u32) -> bool {
        self.links()
    }

    fn program_info_log(&self, _program: &u32) -> Option<String> {
        Some(String::new())
    }

    fn attrib_location(&self, _program: &u32, name: &str) -> i32 {
        if !self.links() {
            self.push_error(Gl::INVALID_OPERATION);
            return -1;
        }
        self.attrib_locations.borrow().get(name).copied().unwrap_or(-1)
    }

    fn use_program(&self, program: Option<&u32>) {
        self.current_program.set(program.copied());
        self.record(format!("use_program({:?})", program));
    }

    fn create_buffer(&self) -> Option<u32> {
        let id = self.allocate();
        self.record("create_buffer()".to_string());
        id
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<&u32>) {
        match target {
            BufferTarget::Vertex => self.array_buffer.set(buffer.copied()),
            BufferTarget::Index => self.element_buffer.set(buffer.copied()),
        }
        self.record(format!("bind_buffer({}, {:?})", target.label(), buffer));
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage) {
        self.record(format!("buffer_data({}, {} bytes, {:?})", target.label(), data.len(), usage));
        let bound = match target {
            BufferTarget::Vertex => self.array_buffer.get(),
            BufferTarget::Index => self.element_buffer.get(),
        };
        match bound {
            Some(id) => {
                self.uploads.borrow_mut().insert(id, data.to_vec());
            }
            None => self.push_error(Gl::INVALID_OPERATION),
        }
    }

    fn create_vertex_array(&self) -> Option<u32> {
        let id = self.allocate();
        self.record("create_vertex_array()".to_string());
        id
    }

    fn bind_vertex_array(&self, vertex_array: Option<&u32>) {
        self.record(format!("bind_vertex_array({:?})", vertex_array));
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        self.record(format!("enable_vertex_attrib_array({})", location));
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
        if self.array_buffer.get().is_none() {
            self.push_error(Gl::INVALID_OPERATION);
        }
        self.record(format!(
            "vertex_attrib_pointer({}, {}, {:?}, {}, {}, {})",
            location, count, element_type, normalized, stride, offset
        ));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(format!("viewport({}, {}, {}, {})", x, y, width, height));
    }

    fn clear(&self, color: [f32; 4]) {
        self.record(format!("clear({:?})", color));
    }

    fn draw_elements(&self, primitive: PrimitiveType, count: i32, index_type: ElementType, offset: i32) {
        if self.current_program.get().is_none() {
            self.push_error(Gl::INVALID_OPERATION);
        }
        self.record(format!("draw_elements({:?}, {}, {:?}, {})", primitive, count, index_type, offset));
    }

    fn draw_arrays(&self, primitive: PrimitiveType, first: i32, count: i32) {
        if self.current_program.get().is_none() {
            self.push_error(Gl::INVALID_OPERATION);
        }
        self.record(format!("draw_arrays({:?}, {}, {})", primitive, first, count));
    }

    fn get_error(&self) -> u32 {
        if self.context_lost.get() {
            return Gl::CONTEXT_LOST_WEBGL;
        }
        self.errors.borrow_mut().pop_front().unwrap_or(Gl::NO_ERROR)
    }
}
