use glam::DVec3;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("shape constant `{name}` must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f64 },
}

/// Constants of the elliptic supertoroid.
///
/// `a` and `b` are the semi-axes of the ellipse driving the radius function,
/// `c` and `d` shape the cross-section through `d² - c²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl ShapeParams {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Result<Self, ShapeError> {
        for (name, value) in [("a", a), ("b", b), ("c", c), ("d", d)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ShapeError::NonPositive { name, value });
            }
        }

        Ok(Self { a, b, c, d })
    }

    /// The reference proportions `a : b : c : d = 1.5 : 3 : 2 : 2`.
    pub fn from_scale(scale: f64) -> Result<Self, ShapeError> {
        Self::new(1.5 * scale, 3.0 * scale, 2.0 * scale, 2.0 * scale)
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn d(&self) -> f64 {
        self.d
    }

    /// `f(v) = ab / sqrt(a² sin²v + b² cos²v)`. Never divides by zero since
    /// `a, b > 0`.
    pub fn radius(&self, v: f64) -> f64 {
        let (sin_v, cos_v) = v.sin_cos();
        (self.a * self.b)
            / (self.a * self.a * sin_v * sin_v + self.b * self.b * cos_v * cos_v).sqrt()
    }

    pub fn point(&self, t: f64, v: f64) -> DVec3 {
        let fv = self.radius(v);
        let (sin_t, cos_t) = t.sin_cos();
        let (sin_v, cos_v) = v.sin_cos();
        let k = self.d * self.d - self.c * self.c;

        let ring = 0.5 * (fv * (1.0 + cos_t) + k * (1.0 - cos_t) / fv);

        DVec3::new(ring * cos_v, ring * sin_v, 0.5 * (fv - k / fv) * sin_t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn test_from_scale_proportions() {
        let shape = ShapeParams::from_scale(0.5).unwrap();
        assert_eq!(shape.a(), 0.75);
        assert_eq!(shape.b(), 1.5);
        assert_eq!(shape.c(), 1.0);
        assert_eq!(shape.d(), 1.0);
    }

    #[test]
    fn test_rejects_non_positive_constants() {
        assert_eq!(
            ShapeParams::new(1.0, 0.0, 1.0, 1.0),
            Err(ShapeError::NonPositive { name: "b", value: 0.0 })
        );
        assert!(ShapeParams::new(-1.0, 1.0, 1.0, 1.0).is_err());
        assert!(ShapeParams::new(1.0, 1.0, f64::NAN, 1.0).is_err());
        assert!(ShapeParams::new(1.0, 1.0, 1.0, f64::INFINITY).is_err());
        assert!(ShapeParams::from_scale(0.0).is_err());
    }

    #[test]
    fn test_radius_hits_semi_axes() {
        let shape = ShapeParams::new(0.75, 1.5, 1.0, 1.0).unwrap();
        assert!((shape.radius(0.0) - 0.75).abs() < 1e-12);
        assert!((shape.radius(PI / 2.0) - 1.5).abs() < 1e-12);
        assert!((shape.radius(PI) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_radius_has_period_pi() {
        let shape = ShapeParams::new(0.7, 2.3, 1.0, 1.2).unwrap();
        for step in 0..50 {
            let v = step as f64 * TAU / 50.0;
            assert!((shape.radius(v) - shape.radius(v + PI)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_radius_is_constant_for_circle() {
        let shape = ShapeParams::new(1.25, 1.25, 0.5, 0.9).unwrap();
        for step in 0..64 {
            let v = step as f64 * TAU / 64.0 - 3.0;
            assert!((shape.radius(v) - 1.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_point_at_origin_angles() {
        let shape = ShapeParams::from_scale(0.5).unwrap();
        let p = shape.point(0.0, 0.0);
        assert!((p.x - 0.75).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
        assert!(p.z.abs() < 1e-12);
    }

    #[test]
    fn test_point_cross_section_term() {
        // d² - c² = 3, f(0) = 1 for a = b = 1
        let shape = ShapeParams::new(1.0, 1.0, 1.0, 2.0).unwrap();

        let p = shape.point(PI, 0.0);
        assert!((p.x - 3.0).abs() < 1e-12);
        assert!(p.z.abs() < 1e-12);

        let q = shape.point(PI / 2.0, 0.0);
        assert!((q.x - 2.0).abs() < 1e-12);
        assert!((q.z - -1.0).abs() < 1e-12);
    }
}
