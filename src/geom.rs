use crate::types::*;

#[derive(Copy, Clone, Debug)]
pub struct Ray3f {
    pub origin: Point3f,
    pub direction: Vector3f,
}

impl Ray3f {
    pub fn new(origin: Point3f, direction: Vector3f) -> Self {
        Self { origin, direction: direction.normalize() }
    }

    pub fn at(&self, t: Float) -> Point3f {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_direction() {
        let r = Ray3f::new(Point3f::new(0.0, 0.0, 0.0), Vector3f::new(0.0, 3.0, 4.0));
        assert!((r.direction.magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_at_walks_along_direction() {
        let r = Ray3f::new(Point3f::new(1.0, 0.0, 0.0), Vector3f::new(0.0, 0.0, 2.0));
        let p = r.at(3.0);
        assert!((p.x - 1.0).abs() < 1e-12);
        assert!((p.z - 3.0).abs() < 1e-12);
    }
}
