//! Built-in GLSL ES 3.00 sources for the quad.

/// Name of the vertex input carrying the 2D position.
pub const POSITION_ATTRIBUTE: &str = "positionAttribute";

/// Color written by the fragment stage, RGBA.
pub const FILL_COLOR: [f32; 4] = [0.25, 0.50, 0.75, 1.00];

/// Passes the position straight through. The attribute is declared as
/// `vec4`, so a 2-component buffer fills in z = 0 and w = 1.
pub const VERTEX_SHADER_SOURCE: &str = r#"#version 300 es

in vec4 positionAttribute;

void main() {
    gl_Position = positionAttribute;
}
"#;

pub const FRAGMENT_SHADER_SOURCE: &str = r#"#version 300 es

precision highp float;

out vec4 colorOutput;

void main() {
    colorOutput = vec4(0.25, 0.50, 0.75, 1.00);
}
"#;
