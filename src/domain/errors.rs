use std::fmt::{Display, Formatter, Result as FmtResult};

use wasm_bindgen::JsValue;

/// Root error type for the sandbox
#[derive(Debug, Clone, PartialEq)]
pub enum SandboxError {
    Platform(PlatformError),
    Rendering(RenderingError),
    Layout(LayoutError),
    Configuration(ConfigurationError),
}

/// Browser capabilities the page could not provide
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformError {
    WindowUnavailable,
    DocumentUnavailable,
    BodyUnavailable,
    ElementCreationFailed(String),
    ContextUnavailable(String),
    StyleUpdateFailed(String),
}

/// GPU object allocation failures
#[derive(Debug, Clone, PartialEq)]
pub enum RenderingError {
    ShaderAllocationFailed(&'static str),
    ProgramAllocationFailed,
    BufferAllocationFailed(&'static str),
    VertexArrayAllocationFailed,
}

/// Vertex layout description errors
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    UnknownElementType(u32),
    InvalidComponentCount(i32),
    AttributeNotFound(String),
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    InvalidJson(String),
    InvalidClearColor([f32; 4]),
}

impl Display for SandboxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            SandboxError::Platform(e) => write!(f, "Platform Error: {}", e),
            SandboxError::Rendering(e) => write!(f, "Rendering Error: {}", e),
            SandboxError::Layout(e) => write!(f, "Layout Error: {}", e),
            SandboxError::Configuration(e) => write!(f, "Configuration Error: {}", e),
        }
    }
}

impl Display for PlatformError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PlatformError::WindowUnavailable => write!(f, "window not available"),
            PlatformError::DocumentUnavailable => write!(f, "document not available"),
            PlatformError::BodyUnavailable => write!(f, "document has no <body>"),
            PlatformError::ElementCreationFailed(tag) => write!(f, "failed to create <{}>", tag),
            PlatformError::ContextUnavailable(kind) => {
                write!(f, "rendering context '{}' is not supported", kind)
            }
            PlatformError::StyleUpdateFailed(msg) => write!(f, "failed to update style: {}", msg),
        }
    }
}

impl Display for RenderingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            RenderingError::ShaderAllocationFailed(stage) => {
                write!(f, "context refused to allocate a {} shader", stage)
            }
            RenderingError::ProgramAllocationFailed => write!(f, "context refused to allocate a program"),
            RenderingError::BufferAllocationFailed(target) => {
                write!(f, "context refused to allocate a {} buffer", target)
            }
            RenderingError::VertexArrayAllocationFailed => {
                write!(f, "context refused to allocate a vertex array")
            }
        }
    }
}

impl Display for LayoutError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LayoutError::UnknownElementType(code) => write!(f, "unknown element type 0x{:04X}", code),
            LayoutError::InvalidComponentCount(count) => {
                write!(f, "component count {} is outside 1..=4", count)
            }
            LayoutError::AttributeNotFound(name) => {
                write!(f, "attribute '{}' is not an active program input", name)
            }
        }
    }
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ConfigurationError::InvalidJson(msg) => write!(f, "invalid JSON: {}", msg),
            ConfigurationError::InvalidClearColor(color) => {
                write!(f, "clear color {:?} has a channel outside 0.0..=1.0", color)
            }
        }
    }
}

impl std::error::Error for SandboxError {}

impl From<PlatformError> for SandboxError {
    fn from(error: PlatformError) -> Self {
        SandboxError::Platform(error)
    }
}

impl From<RenderingError> for SandboxError {
    fn from(error: RenderingError) -> Self {
        SandboxError::Rendering(error)
    }
}

impl From<LayoutError> for SandboxError {
    fn from(error: LayoutError) -> Self {
        SandboxError::Layout(error)
    }
}

impl From<ConfigurationError> for SandboxError {
    fn from(error: ConfigurationError) -> Self {
        SandboxError::Configuration(error)
    }
}

impl From<SandboxError> for JsValue {
    fn from(error: SandboxError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

pub type SandboxResult<T> = Result<T, SandboxError>;
