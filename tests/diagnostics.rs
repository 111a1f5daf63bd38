mod common;

use common::RecordingGl;
use web_sys::WebGl2RenderingContext as Gl;
use webgl2_quad_sandbox::infrastructure::rendering::diagnostics::MAX_ERRORS_PER_DRAIN;
use webgl2_quad_sandbox::infrastructure::rendering::{Diagnostics, DrawCall, PrimitiveType, Renderer};

#[test]
fn clean_queue_drains_nothing() {
    let gl = RecordingGl::new();
    assert!(Diagnostics::drain(&gl, "Idle").is_empty());
}

#[test]
fn invalid_draw_is_reported_then_clean() {
    let gl = RecordingGl::new();
    // No program in use.
    Renderer::draw(&gl, DrawCall::arrays(PrimitiveType::Triangles, 0, 3));

    let codes = Diagnostics::drain(&gl, "Renderer");
    assert_eq!(codes, vec![Gl::INVALID_OPERATION]);
    assert!(Diagnostics::drain(&gl, "Renderer").is_empty());
}

#[test]
fn drains_codes_in_order() {
    let gl = RecordingGl::new();
    gl.push_error(Gl::INVALID_ENUM);
    gl.push_error(Gl::INVALID_VALUE);
    assert_eq!(Diagnostics::drain(&gl, "Stage"), vec![Gl::INVALID_ENUM, Gl::INVALID_VALUE]);
}

#[test]
fn lost_context_drain_is_bounded() {
    let gl = RecordingGl::new();
    gl.context_lost.set(true);
    let codes = Diagnostics::drain(&gl, "Lost");
    assert_eq!(codes.len(), MAX_ERRORS_PER_DRAIN);
    assert!(codes.iter().all(|c| *c == Gl::CONTEXT_LOST_WEBGL));
}
