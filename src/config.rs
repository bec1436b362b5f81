use std::f32::consts::PI;

use glam::Vec3;

use crate::renderer::StripMode;

pub struct SurfaceConfig {
    pub u_segments: u32,
    pub v_segments: u32,
    pub scale: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            u_segments: 30,
            v_segments: 30,
            scale: 0.5,
        }
    }
}

/// Fixed framing of the surface: a perspective frustum that just encloses the
/// model pushed `distance` units down the view axis, with a constant tilt so
/// the ring is seen at an angle before any dragging.
#[derive(Clone, Copy)]
pub struct ViewConfig {
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub distance: f32,
    pub tilt_axis: Vec3,
    pub tilt_angle: f32,
    pub line_color: [f32; 4],
    pub clear_color: wgpu::Color,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            fov_y: PI / 8.0,
            near: 8.0,
            far: 12.0,
            distance: 10.0,
            tilt_axis: Vec3::new(0.707, 0.707, 0.0),
            tilt_angle: 0.7,
            line_color: [1.0, 1.0, 0.0, 1.0],
            clear_color: wgpu::Color::BLACK,
        }
    }
}

pub struct ViewerConfig {
    pub title: &'static str,
    pub window_size: (u32, u32),
    pub vsync: bool,
    pub strip_mode: StripMode,
    pub surface: SurfaceConfig,
    pub view: ViewConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Elliptic Supertoroid",
            window_size: (800, 800),
            vsync: true,
            strip_mode: StripMode::Independent,
            surface: SurfaceConfig::default(),
            view: ViewConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::ShapeParams;

    #[test]
    fn test_default_surface_is_valid() {
        let config = ViewerConfig::default();
        assert!(ShapeParams::from_scale(config.surface.scale).is_ok());
        assert_eq!(config.surface.u_segments, 30);
        assert_eq!(config.surface.v_segments, 30);
    }

    #[test]
    fn test_default_frustum_encloses_model() {
        let view = ViewConfig::default();
        assert!(view.near > 0.0 && view.near < view.distance);
        assert!(view.far > view.distance);
        assert!(view.tilt_axis.length() > 0.0);
    }
}
