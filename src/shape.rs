use crate::geom::*;
use crate::types::*;

/// The closed set of surfaces the tracer knows how to intersect.
#[derive(Copy, Clone, Debug)]
pub enum Shape {
    Sphere { center: Point3f, radius: Float },
    Plane { point: Point3f, normal: Vector3f },
}

impl Shape {
    /// Distance along `r` to the nearest visible intersection, or +infinity.
    pub fn intersect(&self, r: Ray3f) -> Float {
        match *self {
            Shape::Sphere { center, radius } => {
                intersect_sphere(r.origin, r.direction, center, radius)
            }
            Shape::Plane { point, normal } => {
                intersect_plane(r.origin, r.direction, point, normal)
            }
        }
    }

    /// Surface normal at a point `m` on the shape.
    // Plane normals are unit length by construction and are not re-normalized here.
    pub fn normal_at(&self, m: Point3f) -> Vector3f {
        match *self {
            Shape::Sphere { center, .. } => (m - center).normalize(),
            Shape::Plane { normal, .. } => normal,
        }
    }
}

/// Distance from `origin` to the sphere `(center, radius)` along `direction`,
/// or +infinity if the ray misses. Returns the smallest non-negative root;
/// when the origin is inside the sphere that is the far (exit) root, which
/// lets refracted rays continue through the interior.
pub fn intersect_sphere(
    origin: Point3f, direction: Vector3f, center: Point3f, radius: Float,
) -> Float {
    let a = direction.dot(direction);
    let os = origin - center;
    let b = 2.0 * direction.dot(os);
    let c = os.dot(os) - radius * radius;
    let disc = b * b - 4.0 * a * c;
    if disc > 0.0 {
        let dist_sqrt = disc.sqrt();
        let q = iff!(b < 0.0, (-b - dist_sqrt) / 2.0, (-b + dist_sqrt) / 2.0);
        let (t0, t1) = (q / a, c / q);
        let (t0, t1) = (t0.min(t1), t0.max(t1));
        if t1 >= 0.0 {
            return iff!(t0 < 0.0, t1, t0);
        }
    }
    Float::INFINITY
}

/// Distance from `origin` to the plane `(point, normal)` along `direction`,
/// or +infinity if the ray is parallel to the plane or the plane lies behind.
pub fn intersect_plane(
    origin: Point3f, direction: Vector3f, point: Point3f, normal: Vector3f,
) -> Float {
    let denom = direction.dot(normal);
    if denom.abs() < 1e-6 {
        return Float::INFINITY;
    }
    let d = (point - origin).dot(normal) / denom;
    iff!(d < 0.0, Float::INFINITY, d)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: Float = 1e-9;

    #[test]
    fn test_sphere_head_on_hit_returns_near_root() {
        let t = intersect_sphere(
            Point3f::new(0.0, 0.0, -5.0),
            Vector3f::new(0.0, 0.0, 1.0),
            Point3f::new(0.0, 0.0, 0.0),
            1.0,
        );
        // distance to center minus radius
        assert!((t - 4.0).abs() < EPS);
    }

    #[test]
    fn test_sphere_origin_inside_returns_exit_root() {
        let t = intersect_sphere(
            Point3f::new(0.0, 0.0, 0.0),
            Vector3f::new(0.0, 0.0, 1.0),
            Point3f::new(0.0, 0.0, 0.0),
            1.0,
        );
        assert!(t >= 0.0);
        assert!((t - 1.0).abs() < EPS);
    }

    #[test]
    fn test_sphere_behind_origin_misses() {
        let t = intersect_sphere(
            Point3f::new(0.0, 0.0, 5.0),
            Vector3f::new(0.0, 0.0, 1.0),
            Point3f::new(0.0, 0.0, 0.0),
            1.0,
        );
        assert!(t.is_infinite());
    }

    #[test]
    fn test_sphere_offset_ray_misses() {
        let t = intersect_sphere(
            Point3f::new(0.0, 2.0, -5.0),
            Vector3f::new(0.0, 0.0, 1.0),
            Point3f::new(0.0, 0.0, 0.0),
            1.0,
        );
        assert!(t.is_infinite());
    }

    #[test]
    fn test_plane_parallel_ray_misses() {
        let t = intersect_plane(
            Point3f::new(0.0, 1.0, 0.0),
            Vector3f::new(1.0, 0.0, 0.0),
            Point3f::new(0.0, 0.0, 0.0),
            Vector3f::new(0.0, 1.0, 0.0),
        );
        assert!(t.is_infinite());
    }

    #[test]
    fn test_plane_behind_origin_misses() {
        let t = intersect_plane(
            Point3f::new(0.0, 1.0, 0.0),
            Vector3f::new(0.0, 1.0, 0.0),
            Point3f::new(0.0, 0.0, 0.0),
            Vector3f::new(0.0, 1.0, 0.0),
        );
        assert!(t.is_infinite());
    }

    #[test]
    fn test_plane_hit_distance() {
        let t = intersect_plane(
            Point3f::new(0.0, 2.0, 0.0),
            Vector3f::new(0.0, -1.0, 0.0),
            Point3f::new(0.0, -0.5, 0.0),
            Vector3f::new(0.0, 1.0, 0.0),
        );
        assert!((t - 2.5).abs() < EPS);
    }

    #[test]
    fn test_shape_dispatch_and_normals() {
        let sphere = Shape::Sphere { center: Point3f::new(0.0, 0.0, 0.0), radius: 1.0 };
        let r = Ray3f::new(Point3f::new(0.0, 0.0, -3.0), Vector3f::new(0.0, 0.0, 1.0));
        let t = sphere.intersect(r);
        assert!((t - 2.0).abs() < EPS);
        let n = sphere.normal_at(r.at(t));
        assert!((n.z + 1.0).abs() < EPS);

        let plane =
            Shape::Plane { point: Point3f::new(0.0, -0.5, 0.0), normal: Vector3f::unit_y() };
        let n = plane.normal_at(Point3f::new(3.0, -0.5, 7.0));
        assert!((n.y - 1.0).abs() < EPS);
    }
}
