use serde::{Deserialize, Serialize};

use crate::domain::errors::{ConfigurationError, SandboxResult};
use crate::domain::logging::LogLevel;
use crate::domain::shaders::{FRAGMENT_SHADER_SOURCE, VERTEX_SHADER_SOURCE};

/// Runtime settings for one sandbox run.
///
/// Every field is optional in JSON; missing fields take the built-in values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub log_level: LogLevel,
    /// RGBA value the color buffer is cleared to before the draw
    pub clear_color: [f32; 4],
    pub vertex_shader: String,
    pub fragment_shader: String,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            log_level: if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info },
            clear_color: [0.0, 0.0, 0.0, 0.0],
            vertex_shader: VERTEX_SHADER_SOURCE.to_string(),
            fragment_shader: FRAGMENT_SHADER_SOURCE.to_string(),
        }
    }
}

impl SandboxConfig {
    pub fn from_json(json: &str) -> SandboxResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ConfigurationError::InvalidJson(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SandboxResult<()> {
        if self.clear_color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(ConfigurationError::InvalidClearColor(self.clear_color).into());
        }
        Ok(())
    }
}
