//! The showcase scene: three large spheres on a ground sphere, surrounded
//! by a grid of small random ones.

use lumen_math::sampling::gen_f64;
use lumen_tracer::{Color, Dielectric, Lambertian, Material, Metal, Scene, Sphere, Vec3};
use rand::RngCore;

const SMALL_RADIUS: f64 = 0.2;

/// Small spheres closer than this to the metal sphere's footprint are
/// skipped so they do not poke into it.
const CLEARANCE: f64 = 0.9;

pub fn showcase(rng: &mut dyn RngCore) -> Scene {
    let mut scene = Scene::with_capacity(4 + 22 * 22);

    // Ground
    scene.add(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Lambertian::new(Color::new(0.5, 0.5, 0.5)),
    ));

    // Three main spheres
    scene.add(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, Dielectric::new(1.5)));
    scene.add(Sphere::new(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Lambertian::new(Color::new(0.4, 0.2, 0.1)),
    ));
    scene.add(Sphere::new(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Metal::new(Color::new(0.7, 0.65, 0.5), 0.0),
    ));

    let keep_out = Vec3::new(4.0, SMALL_RADIUS, 0.0);
    for a in -11..11 {
        for b in -11..11 {
            // Material is picked before the position is jittered
            let choose_mat = gen_f64(rng);
            let center = Vec3::new(
                a as f64 + 0.9 * gen_f64(rng),
                SMALL_RADIUS,
                b as f64 + 0.9 * gen_f64(rng),
            );

            if (center - keep_out).length() > CLEARANCE {
                let material = small_sphere_material(choose_mat, rng);
                scene.add(Sphere::new(center, SMALL_RADIUS, material));
            }
        }
    }

    log::debug!("Showcase scene built with {} spheres", scene.len());
    scene
}

/// 80% diffuse, 15% metal, 5% glass.
fn small_sphere_material(choose_mat: f64, rng: &mut dyn RngCore) -> Material {
    if choose_mat < 0.8 {
        let albedo = Color::new(
            gen_f64(rng) * gen_f64(rng),
            gen_f64(rng) * gen_f64(rng),
            gen_f64(rng) * gen_f64(rng),
        );
        Lambertian::new(albedo).into()
    } else if choose_mat < 0.95 {
        let albedo = Color::new(
            0.5 * (1.0 + gen_f64(rng)),
            0.5 * (1.0 + gen_f64(rng)),
            0.5 * (1.0 + gen_f64(rng)),
        );
        Metal::new(albedo, 0.5 * gen_f64(rng)).into()
    } else {
        Dielectric::new(1.5).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_showcase_layout() {
        let scene = showcase(&mut StdRng::seed_from_u64(1));
        let spheres = scene.spheres();

        assert!(spheres.len() > 4 && spheres.len() <= 4 + 22 * 22);
        assert_eq!(spheres[0].radius(), 1000.0);
        assert!(matches!(spheres[1].material(), Material::Dielectric(_)));
        assert!(matches!(spheres[2].material(), Material::Lambertian(_)));
        assert!(matches!(spheres[3].material(), Material::Metal(_)));

        for sphere in &spheres[4..] {
            assert_eq!(sphere.radius(), SMALL_RADIUS);
            assert_eq!(sphere.center().y, SMALL_RADIUS);
            assert!((sphere.center() - Vec3::new(4.0, 0.2, 0.0)).length() > CLEARANCE);
        }
    }

    #[test]
    fn test_showcase_materials_in_range() {
        let scene = showcase(&mut StdRng::seed_from_u64(2));
        let mut kinds = [0usize; 3];

        for sphere in &scene.spheres()[4..] {
            match sphere.material() {
                Material::Lambertian(m) => {
                    kinds[0] += 1;
                    assert!(m.albedo().cmpge(Vec3::ZERO).all());
                    assert!(m.albedo().cmplt(Vec3::ONE).all());
                }
                Material::Metal(m) => {
                    kinds[1] += 1;
                    assert!(m.albedo().cmpge(Vec3::splat(0.5)).all());
                    assert!(m.fuzz() < 0.5);
                }
                Material::Dielectric(m) => {
                    kinds[2] += 1;
                    assert_eq!(m.ior(), 1.5);
                }
            }
        }

        // Diffuse dominates the mix
        assert!(kinds[0] > kinds[1] && kinds[1] > 0);
    }

    #[test]
    fn test_showcase_is_deterministic_for_a_seed() {
        let a = showcase(&mut StdRng::seed_from_u64(3));
        let b = showcase(&mut StdRng::seed_from_u64(3));
        assert_eq!(a.spheres(), b.spheres());
    }
}
