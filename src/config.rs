//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`SF_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use starfield_core::{FieldConfig, FieldError};
use starfield_math::Vec3;
use starfield_render::camera::Camera;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Particle field configuration
    #[serde(default)]
    pub field: FieldConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Animation timing
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`SF_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // SF_FIELD__COUNT=100 -> field.count = 100
        figment = figment.merge(Env::prefixed("SF_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that deserialize fine but cannot drive the field
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.field.validate()?;
        if let Some(max) = self.animation.max_frame_delta {
            if !(max.is_finite() && max >= 0.0) {
                return Err(ConfigError {
                    message: format!(
                        "animation.max_frame_delta must be a non-negative number, got {}",
                        max
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Starfield".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Eye position [x, y, z]
    pub position: [f32; 3],
    /// Look-at target [x, y, z]
    pub target: [f32; 3],
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            target: [0.0, 0.0, 0.0],
            fov: 60.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl CameraConfig {
    /// Build the render camera
    pub fn to_camera(&self) -> Camera {
        Camera {
            position: Vec3::from(self.position),
            target: Vec3::from(self.target),
            up: Vec3::Y,
            fov_y: self.fov,
            near: self.near,
            far: self.far,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Point color [r, g, b, a]
    pub point_color: [f32; 4],
    /// Point size (world units when attenuated, pixels otherwise)
    pub point_size: f32,
    /// Shrink points with distance from the camera
    pub size_attenuation: bool,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            point_color: [1.0, 1.0, 1.0, 1.0],
            point_size: 0.01,
            size_attenuation: true,
        }
    }
}

/// Animation timing configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Upper bound on a single frame delta in seconds; unset means uncapped
    pub max_frame_delta: Option<f64>,
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl From<FieldError> for ConfigError {
    fn from(e: FieldError) -> Self {
        ConfigError {
            message: format!("field: {}", e),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.field.count, 5000);
        assert_eq!(config.camera.fov, 60.0);
        assert_eq!(config.rendering.background_color, [0.0, 0.0, 0.0, 1.0]);
        assert!(config.animation.max_frame_delta.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("radius_min"));
        assert!(toml.contains("point_size"));
    }

    #[test]
    fn test_camera_config_to_camera() {
        let camera = CameraConfig::default().to_camera();
        assert_eq!(camera, Camera::new());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_finite_rotation() {
        let mut config = AppConfig::default();
        config.field.rotation_rate = [f64::NAN, -0.04];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("rotation_rate.x"));
    }

    #[test]
    fn test_validate_rejects_bad_frame_cap() {
        let mut config = AppConfig::default();
        config.animation.max_frame_delta = Some(-0.1);
        assert!(config.validate().is_err());
        config.animation.max_frame_delta = Some(f64::NAN);
        assert!(config.validate().is_err());
        config.animation.max_frame_delta = Some(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_missing_dir_gives_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert_eq!(config.field.radius_max, 3.0);
        assert_eq!(config.rendering.point_size, 0.01);
    }
}
