pub mod sandbox;

pub use sandbox::{QUAD_DRAW, Sandbox, SandboxReport, StageDiagnostics};
