use std::f64::consts::TAU;

use crate::math::mesh::WireframeMesh;
use crate::math::shape::ShapeParams;

/// Angle of sample `index` out of `segments` equal steps over `[0, 2π]`.
/// Zero segments collapse the direction to the single angle `0`.
fn sweep_angle(index: u32, segments: u32) -> f64 {
    if segments == 0 {
        return 0.0;
    }
    (index as f64 / segments as f64) * TAU
}

fn push_point(vertices: &mut Vec<f32>, shape: &ShapeParams, t: f64, v: f64) {
    let p = shape.point(t, v);
    vertices.push(p.x as f32);
    vertices.push(p.y as f32);
    vertices.push(p.z as f32);
}

pub fn sample_surface(u_segments: u32, v_segments: u32, shape: &ShapeParams) -> WireframeMesh {
    let points = (u_segments as usize + 1) * (v_segments as usize + 1);
    let mut t_polylines = Vec::with_capacity(points * 3);
    let mut v_polylines = Vec::with_capacity(points * 3);

    for i in 0..=u_segments {
        let t = sweep_angle(i, u_segments);
        for j in 0..=v_segments {
            let v = sweep_angle(j, v_segments);
            push_point(&mut t_polylines, shape, t, v);
        }
    }

    for j in 0..=v_segments {
        let v = sweep_angle(j, v_segments);
        for i in 0..=u_segments {
            let t = sweep_angle(i, u_segments);
            push_point(&mut v_polylines, shape, t, v);
        }
    }

    WireframeMesh {
        t_polylines,
        v_polylines,
        u_segments,
        v_segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_shape() -> ShapeParams {
        ShapeParams::from_scale(0.5).unwrap()
    }

    fn triple(vertices: &[f32], index: usize) -> [f32; 3] {
        let base = index * 3;
        [vertices[base], vertices[base + 1], vertices[base + 2]]
    }

    #[test]
    fn test_reference_grid_size() {
        let mesh = sample_surface(30, 30, &reference_shape());
        assert_eq!(mesh.points_per_family(), 961);
        assert_eq!(mesh.t_polylines.len(), 961 * 3);
        assert_eq!(mesh.v_polylines.len(), 961 * 3);
    }

    #[test]
    fn test_uneven_grid_size() {
        let shape = ShapeParams::new(0.4, 1.1, 0.3, 0.8).unwrap();
        for (u, v) in [(1, 1), (3, 7), (12, 5), (0, 9), (4, 0), (0, 0)] {
            let mesh = sample_surface(u, v, &shape);
            let expected = (u as usize + 1) * (v as usize + 1) * 3;
            assert_eq!(mesh.t_polylines.len(), expected, "t family for {u}x{v}");
            assert_eq!(mesh.v_polylines.len(), expected, "v family for {u}x{v}");
        }
    }

    #[test]
    fn test_first_point_of_reference_surface() {
        let mesh = sample_surface(30, 30, &reference_shape());
        let [x, y, z] = triple(&mesh.t_polylines, 0);
        assert!((x - 0.75).abs() < 1e-6);
        assert!(y.abs() < 1e-6);
        assert!(z.abs() < 1e-6);
        assert_eq!(triple(&mesh.t_polylines, 0), triple(&mesh.v_polylines, 0));
    }

    #[test]
    fn test_families_agree_on_shared_samples() {
        let shape = ShapeParams::new(0.6, 1.7, 0.9, 1.4).unwrap();
        let (u_segments, v_segments) = (11u32, 7u32);
        let mesh = sample_surface(u_segments, v_segments, &shape);

        for i in 0..=u_segments as usize {
            for j in 0..=v_segments as usize {
                let t_index = i * (v_segments as usize + 1) + j;
                let v_index = j * (u_segments as usize + 1) + i;
                assert_eq!(triple(&mesh.t_polylines, t_index), triple(&mesh.v_polylines, v_index), "i={i} j={j}");
            }
        }
    }

    #[test]
    fn test_zero_u_segments_repeats_t_zero() {
        let shape = reference_shape();
        let mesh = sample_surface(0, 6, &shape);
        assert_eq!(mesh.points_per_family(), 7);
        assert_eq!(mesh.t_polylines.len(), 7 * 3);

        for j in 0..=6 {
            let p = shape.point(0.0, sweep_angle(j, 6));
            let [x, y, z] = triple(&mesh.t_polylines, j as usize);
            assert_eq!([x, y, z], [p.x as f32, p.y as f32, p.z as f32]);
            assert_eq!(z, 0.0);
        }
    }

    #[test]
    fn test_polylines_close_on_themselves() {
        let mesh = sample_surface(16, 24, &reference_shape());
        let row = 25;
        for i in 0..=16 {
            let first = triple(&mesh.t_polylines, i * row);
            let last = triple(&mesh.t_polylines, i * row + 24);
            for axis in 0..3 {
                assert!((first[axis] - last[axis]).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_sweep_angle_bounds() {
        assert_eq!(sweep_angle(0, 30), 0.0);
        assert_eq!(sweep_angle(30, 30), TAU);
        assert_eq!(sweep_angle(5, 0), 0.0);
    }
}
