use crate::geom::*;
use crate::prims::*;
use crate::scene::*;
use crate::types::*;

/// Maximum number of times a single primary ray may split.
pub const MAX_DEPTH: u32 = 5;
/// Offset along the surface normal keeping secondary rays from
/// re-intersecting the surface that spawned them.
pub const BIAS: Float = 1e-4;

const AMBIENT: Float = 0.05;
const SPECULAR_EXPONENT: i32 = 50;

/// Nearest hit of `ray` against the scene, locally shaded.
///
/// Returns `None` when the ray escapes the scene, and also when the hit
/// point is occluded from the light: an occluded point contributes nothing
/// at all, including reflection and refraction. Intentional; a hard shadow
/// here swallows the secondary bounces too.
pub fn trace_ray<'a>(ctx: &'a RenderContext, ray: Ray3f) -> Option<HitRecord<'a>> {
    let mut t = Float::INFINITY;
    let mut nearest = None;
    for (i, obj) in ctx.objects.iter().enumerate() {
        let t_obj = obj.shape.intersect(ray);
        if t_obj < t {
            t = t_obj;
            nearest = Some(i);
        }
    }
    let idx = nearest?;
    let object = &ctx.objects[idx];

    let point = ray.at(t);
    let normal = object.shape.normal_at(point);
    let color = object.material.texture.color_at(point);
    let to_light = (ctx.light.position - point).normalize();
    let to_camera = (ctx.camera.origin - point).normalize();

    // Shadow: probe every other object on the way to the light.
    let shadow = Ray3f { origin: point + normal * BIAS, direction: to_light };
    let occluded = ctx
        .objects
        .iter()
        .enumerate()
        .any(|(k, other)| k != idx && other.shape.intersect(shadow).is_finite());
    if occluded {
        return None;
    }

    let half = (to_light + to_camera).normalize();
    let mut radiance = Vector3f::from_value(AMBIENT);
    // Lambert
    radiance += color * (object.material.diffuse * max!(normal.dot(to_light), 0.0));
    // Blinn-Phong
    radiance += ctx.light.color
        * (object.material.specular * max!(normal.dot(half), 0.0).powi(SPECULAR_EXPONENT));
    Some(HitRecord { object, point, normal, radiance })
}

/// Mirror of `v` across the unit normal `n`.
pub fn reflect(v: Vector3f, n: Vector3f) -> Vector3f {
    (v - n * v.dot(n) * 2.0).normalize()
}

/// Transmitted ray for a hit at `point` with surface normal `normal`, an
/// incoming direction `direction`, and an index-of-refraction ratio `ratio`
/// (Snell's law in vector form).
///
/// Returns `None` past the critical angle (total internal reflection), where
/// the transmitted angle has no real solution; the caller falls back to
/// reflection alone.
pub fn find_refracted(
    normal: Vector3f, point: Point3f, direction: Vector3f, ratio: Float,
) -> Option<Ray3f> {
    // Face the normal against the incoming ray; flipped means we are exiting.
    let n = iff!(direction.dot(normal) > 0.0, -normal, normal);
    let origin = point - n * BIAS;
    let cos_in = direction.dot(n);
    let sin_in = (1.0 - cos_in * cos_in).sqrt();
    let sin_out = sin_in * ratio;
    if sin_out >= 1.0 {
        return None;
    }
    if sin_in < 1e-9 {
        // Normal incidence: the ray passes straight through.
        return Some(Ray3f::new(origin, direction));
    }
    let cos_out = (1.0 - sin_out * sin_out).sqrt();
    let surf_dir = direction - n * cos_in;
    Some(Ray3f::new(origin, surf_dir * (cos_out / sin_out) - n))
}

/// Radiance arriving along `ray`, following reflection and refraction up to
/// `MAX_DEPTH` bounces.
///
/// `reflection` is the reflectivity accumulated along the path so far (1.0
/// for primary rays). Each level multiplies in its object's reflectivity,
/// scales the local color by the product, and threads the product into the
/// reflected branch; the refracted branch is added undiminished. Not energy
/// conserving: refraction and reflection are additive here on purpose.
pub fn cast_ray(ctx: &RenderContext, ray: Ray3f, reflection: Float, depth: u32) -> Vector3f {
    if depth > MAX_DEPTH {
        return Vector3f::zero();
    }
    let hit = match trace_ray(ctx, ray) {
        Some(hit) => hit,
        None => return Vector3f::zero(),
    };
    let reflected =
        Ray3f::new(hit.point + hit.normal * BIAS, reflect(ray.direction, hit.normal));

    let mut sum = Vector3f::zero();
    if let Some(ratio) = hit.object.material.refraction {
        if let Some(refracted) = find_refracted(hit.normal, hit.point, ray.direction, ratio) {
            sum += cast_ray(ctx, refracted, reflection, depth + 1);
        }
    }
    let reflection = reflection * hit.object.material.reflectivity;
    sum += cast_ray(ctx, reflected, reflection, depth + 1);
    sum + hit.radiance * reflection
}
