use glam::{Mat4, Quat, Vec2, Vec3};

use crate::config::ViewConfig;

/// Virtual trackball: pointer positions are projected onto a unit sphere
/// inscribed in the viewport and each drag step rotates the model by the arc
/// between consecutive projections.
pub struct Trackball {
    orientation: Quat,
    viewport: Vec2,
    anchor: Option<Vec3>,
}

impl Default for Trackball {
    fn default() -> Self {
        Self {
            orientation: Quat::IDENTITY,
            viewport: Vec2::ONE,
            anchor: None,
        }
    }
}

impl Trackball {
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(1.0), height.max(1.0));
    }

    pub fn begin_drag(&mut self, cursor: Vec2) {
        self.anchor = Some(self.project(cursor));
    }

    /// Returns true when the orientation changed and a redraw is due.
    pub fn drag_to(&mut self, cursor: Vec2) -> bool {
        let Some(from) = self.anchor else {
            return false;
        };

        let to = self.project(cursor);
        self.anchor = Some(to);

        if from.abs_diff_eq(to, 1e-6) {
            return false;
        }

        let delta = Quat::from_rotation_arc(from, to);
        self.orientation = (delta * self.orientation).normalize();
        true
    }

    pub fn end_drag(&mut self) {
        self.anchor = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn reset(&mut self) {
        self.orientation = Quat::IDENTITY;
        self.anchor = None;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.orientation)
    }

    fn project(&self, cursor: Vec2) -> Vec3 {
        let centre = self.viewport * 0.5;
        let radius = centre.x.min(centre.y);

        let x = (cursor.x - centre.x) / radius;
        let y = (centre.y - cursor.y) / radius;
        let d2 = x * x + y * y;

        if d2 <= 1.0 {
            Vec3::new(x, y, (1.0 - d2).sqrt())
        } else {
            Vec3::new(x, y, 0.0).normalize()
        }
    }
}

pub struct ViewTransform {
    pub view: ViewConfig,
    pub aspect: f32,
}

impl ViewTransform {
    pub fn new(view: ViewConfig) -> Self {
        Self { view, aspect: 1.0 }
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.view.fov_y, self.aspect, self.view.near, self.view.far)
    }

    pub fn model_view(&self, rotation: Mat4) -> Mat4 {
        let tilt = Mat4::from_axis_angle(self.view.tilt_axis.normalize(), self.view.tilt_angle);
        let push_back = Mat4::from_translation(Vec3::new(0.0, 0.0, -self.view.distance));
        push_back * tilt * rotation
    }

    pub fn model_view_projection(&self, rotation: Mat4) -> Mat4 {
        self.projection_matrix() * self.model_view(rotation)
    }
}

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub model_view_projection: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl TransformUniform {
    pub fn new(transform: &ViewTransform, rotation: Mat4) -> Self {
        Self {
            model_view_projection: transform.model_view_projection(rotation).to_cols_array_2d(),
            color: transform.view.line_color,
        }
    }
}
