use crate::types::*;

/// Surface color: either a constant or a procedure of the hit point.
#[derive(Copy, Clone, Debug)]
pub enum Texture {
    Constant(Vector3f),
    Procedural(fn(Point3f) -> Vector3f),
}

impl Texture {
    pub fn color_at(&self, m: Point3f) -> Vector3f {
        match *self {
            Texture::Constant(c) => c,
            Texture::Procedural(f) => f(m),
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Material {
    pub texture: Texture,
    pub diffuse: Float,
    pub specular: Float,
    /// How much of the reflected ray's result contributes to the final color, in [0, 1].
    pub reflectivity: Float,
    /// Index-of-refraction ratio; `None` means the surface is opaque.
    pub refraction: Option<Float>,
}

impl Default for Material {
    fn default() -> Material {
        Material {
            texture: Texture::Constant(Vector3f::from_value(1.0)),
            diffuse: 1.0,
            specular: 1.0,
            reflectivity: 1.0,
            refraction: None,
        }
    }
}

/// Unit checkerboard over the XZ plane: cells flip on the parity of
/// `floor(2x)` and `floor(2z)`; matching parities are white.
pub fn checkerboard(m: Point3f) -> Vector3f {
    let cx = (2.0 * m.x).floor() as i64;
    let cz = (2.0 * m.z).floor() as i64;
    iff!((cx & 1) == (cz & 1), Vector3f::from_value(1.0), Vector3f::zero())
}
