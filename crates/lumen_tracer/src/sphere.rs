//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use lumen_math::{Interval, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. A negative radius flips the normals inward,
    /// which turns a dielectric sphere into a hollow shell. A zero-radius
    /// sphere is never hit.
    pub fn new(center: Vec3, radius: f64, material: impl Into<Material>) -> Self {
        Self {
            center,
            radius,
            material: material.into(),
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    fn record<'a>(&'a self, ray: &Ray, t: f64) -> HitRecord<'a> {
        let p = ray.at(t);
        HitRecord {
            t,
            p,
            normal: (p - self.center) / self.radius,
            material: &self.material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        // The normal divides by the radius
        if self.radius == 0.0 {
            return None;
        }

        // |origin + t*dir - center|^2 = r^2 as a*t^2 + b*t + c = 0
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root first, then the far one
        let near = (-b - sqrtd) / (2.0 * a);
        if ray_t.surrounds(near) {
            return Some(self.record(ray, near));
        }

        let far = (-b + sqrtd) / (2.0 * a);
        if ray_t.surrounds(far) {
            return Some(self.record(ray, far));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;
    use lumen_math::Color;

    fn grey() -> Lambertian {
        Lambertian::new(Color::new(0.5, 0.5, 0.5))
    }

    fn interval() -> Interval {
        Interval::new(0.001, f64::INFINITY)
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, interval()).expect("ray should hit");
        assert!((rec.t - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_hit_distance_and_radius() {
        for r in [0.25, 1.0, 2.5, 4.0] {
            let sphere = Sphere::new(Vec3::ZERO, r, grey());
            let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

            let rec = sphere.hit(&ray, interval()).expect("ray should hit");
            assert!((rec.t - (5.0 - r)).abs() < 1e-9, "r = {r}");
            assert!((rec.p.length() - r).abs() < 1e-9, "r = {r}");
            assert!((rec.normal - Vec3::Z).length() < 1e-9);
        }
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, grey());

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, interval()).is_none());
    }

    #[test]
    fn test_tangent_ray_misses() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, grey());

        // Grazes the sphere at (1, 0, 0): discriminant is exactly zero
        let ray = Ray::new(Vec3::new(1.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&ray, interval()).is_none());
    }

    #[test]
    fn test_inside_hit_uses_far_root_with_outward_normal() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let rec = sphere.hit(&ray, interval()).expect("ray from inside should hit");
        assert!((rec.t - 2.0).abs() < 1e-12);
        // Outward, same direction as the ray
        assert!((rec.normal - Vec3::X).length() < 1e-12);
    }

    #[test]
    fn test_hit_respects_lower_bound() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0, grey());

        // Origin sits on the surface; only the far side qualifies
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&ray, interval()).expect("far side should hit");
        assert!((rec.t - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_radius_flips_normal_inward() {
        let sphere = Sphere::new(Vec3::ZERO, -1.0, grey());
        assert_eq!(sphere.radius(), -1.0);

        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&ray, interval()).expect("ray should hit");
        assert!((rec.t - 4.0).abs() < 1e-12);
        assert!((rec.normal - Vec3::NEG_Z).length() < 1e-12);
    }

    #[test]
    fn test_zero_radius_is_never_hit() {
        use lumen_math::sampling::gen_f64;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        fn random_point(rng: &mut StdRng) -> Vec3 {
            Vec3::new(gen_f64(rng), gen_f64(rng), gen_f64(rng)) * 20.0 - Vec3::splat(10.0)
        }

        let mut rng = StdRng::seed_from_u64(17);

        // Aimed straight at the centre, where rounding can leave the
        // discriminant just above zero
        for _ in 0..10_000 {
            let center = random_point(&mut rng);
            let origin = random_point(&mut rng);
            let sphere = Sphere::new(center, 0.0, grey());
            let ray = Ray::new(origin, center - origin);
            assert!(sphere.hit(&ray, interval()).is_none(), "center = {center:?}");
        }
    }
}
