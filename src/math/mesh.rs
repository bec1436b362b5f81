/// Two interleaved polyline families over the same parametric grid, stored as
/// flat `xyz` triples ready for upload.
pub struct WireframeMesh {
    /// Outer loop over `t`: `u_segments + 1` polylines of `v_segments + 1` points.
    pub t_polylines: Vec<f32>,
    /// Outer loop over `v`: `v_segments + 1` polylines of `u_segments + 1` points.
    pub v_polylines: Vec<f32>,
    pub u_segments: u32,
    pub v_segments: u32,
}

impl WireframeMesh {
    pub fn points_per_family(&self) -> usize {
        (self.u_segments as usize + 1) * (self.v_segments as usize + 1)
    }
}
