use thiserror::Error;

use crate::math::ShapeError;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("could not create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("could not create drawing surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no graphics adapter compatible with the window surface")]
    NoAdapter,

    #[error("could not open graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("Error in vertex shader: {0}")]
    VertexShader(String),

    #[error("Error in fragment shader: {0}")]
    FragmentShader(String),

    #[error("Link error in pipeline: {0}")]
    Link(String),

    #[error("invalid surface: {0}")]
    Shape(#[from] ShapeError),
}

impl SetupError {
    /// True when no usable graphics context exists, so nothing can be drawn.
    pub fn is_context(&self) -> bool {
        matches!(
            self,
            SetupError::Window(_)
                | SetupError::Surface(_)
                | SetupError::NoAdapter
                | SetupError::Device(_)
        )
    }

    pub fn user_message(&self) -> String {
        if self.is_context() {
            "Sorry, could not get a graphics context.".to_string()
        } else {
            format!("Sorry, could not initialize the graphics context: {}", self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_failures() {
        let err = SetupError::NoAdapter;
        assert!(err.is_context());
        assert_eq!(err.user_message(), "Sorry, could not get a graphics context.");
    }

    #[test]
    fn test_shader_failures_carry_compiler_log() {
        let err = SetupError::VertexShader("expected `;`, found `}`".to_string());
        assert!(!err.is_context());
        assert_eq!(
            err.user_message(),
            "Sorry, could not initialize the graphics context: Error in vertex shader: expected `;`, found `}`"
        );

        let err = SetupError::Link("location 0 is not bound".to_string());
        assert!(!err.is_context());
        assert!(err.user_message().ends_with("Link error in pipeline: location 0 is not bound"));
    }

    #[test]
    fn test_shape_errors_convert() {
        let err: SetupError = ShapeError::NonPositive { name: "a", value: -1.0 }.into();
        assert!(!err.is_context());
        assert!(err.to_string().contains("`a`"));
    }
}
