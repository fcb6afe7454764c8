use crate::geom::*;
use crate::types::*;

/// Pinhole camera looking through an axis-aligned view plane placed at the
/// look-at depth. The plane spans x in [-1, 1] and y in
/// [-1/aspect + 0.25, 1/aspect + 0.25].
pub struct Camera {
    /// Eye point; also the viewer position used for specular highlights.
    pub origin: Point3f,
    /// Point the camera looks at; its z fixes the view-plane depth.
    target: Point3f,
    left: Float,
    right: Float,
    bottom: Float,
    top: Float,
    width: u32,
    height: u32,
}

impl Camera {
    pub fn new(origin: Point3f, target: Point3f, width: u32, height: u32) -> Camera {
        let aspect = Float::from(width) / Float::from(height);
        Camera {
            origin,
            target,
            left: -1.0,
            right: 1.0,
            bottom: -1.0 / aspect + 0.25,
            top: 1.0 / aspect + 0.25,
            width,
            height,
        }
    }

    /// Primary ray through pixel `(x, y)`; y counts up from the bottom row.
    /// Pixels sample the view plane inclusively of its edges.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray3f {
        let sx = lerp(self.left, self.right, Float::from(x) / Float::from(self.width - 1));
        let sy = lerp(self.bottom, self.top, Float::from(y) / Float::from(self.height - 1));
        let through = Point3f::new(sx, sy, self.target.z);
        Ray3f::new(self.origin, through - self.origin)
    }
}

fn lerp(a: Float, b: Float, t: Float) -> Float {
    a + (b - a) * t
}
