use crate::math::{ShapeParams, WireframeMesh};
use crate::renderer::StripMode;

/// Read-only facts about the sampled surface shown in the HUD.
pub struct SurfaceInfo {
    pub shape: ShapeParams,
    pub u_segments: u32,
    pub v_segments: u32,
    pub t_vertices: u32,
    pub v_vertices: u32,
}

impl SurfaceInfo {
    pub fn new(mesh: &WireframeMesh, shape: ShapeParams) -> Self {
        Self {
            shape,
            u_segments: mesh.u_segments,
            v_segments: mesh.v_segments,
            t_vertices: (mesh.t_polylines.len() / 3) as u32,
            v_vertices: (mesh.v_polylines.len() / 3) as u32,
        }
    }
}

pub struct HudState {
    pub visible: bool,
    pub strip_mode: StripMode,
    pub surface: Option<SurfaceInfo>,
}

impl HudState {
    pub fn new(strip_mode: StripMode) -> Self {
        Self {
            visible: true,
            strip_mode,
            surface: None,
        }
    }
}
