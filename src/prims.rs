use failure::{ensure, Error};

use crate::material::*;
use crate::shape::*;
use crate::types::*;

/// A scene object: a shape paired with its surface properties.
#[derive(Copy, Clone, Debug)]
pub struct Object {
    pub shape: Shape,
    pub material: Material,
}

impl Object {
    /// An opaque sphere with a constant color.
    pub fn sphere(center: Point3f, radius: Float, color: Vector3f) -> Result<Object, Error> {
        ensure!(radius > 0.0, "sphere radius must be positive, got {}", radius);
        Ok(Object {
            shape: Shape::Sphere { center, radius },
            material: Material {
                texture: Texture::Constant(color),
                reflectivity: 0.5,
                ..Material::default()
            },
        })
    }

    /// A sphere that also transmits light with the given index-of-refraction ratio.
    pub fn transparent_sphere(
        center: Point3f, radius: Float, color: Vector3f, refraction: Float,
    ) -> Result<Object, Error> {
        ensure!(radius > 0.0, "sphere radius must be positive, got {}", radius);
        ensure!(refraction > 0.0, "refraction ratio must be positive, got {}", refraction);
        Ok(Object {
            shape: Shape::Sphere { center, radius },
            material: Material {
                texture: Texture::Constant(color),
                reflectivity: 0.5,
                refraction: Some(refraction),
                ..Material::default()
            },
        })
    }

    /// A checkered ground plane through `point` with the given unit normal.
    pub fn plane(point: Point3f, normal: Vector3f) -> Result<Object, Error> {
        ensure!(
            (normal.magnitude2() - 1.0).abs() < 1e-9,
            "plane normal must be unit length, got |n| = {}",
            normal.magnitude()
        );
        Ok(Object {
            shape: Shape::Plane { point, normal },
            material: Material {
                texture: Texture::Procedural(checkerboard),
                diffuse: 0.75,
                specular: 0.5,
                reflectivity: 0.25,
                refraction: None,
            },
        })
    }
}

/// A resolved ray-object intersection, consumed immediately by the caster.
pub struct HitRecord<'a> {
    pub object: &'a Object,
    pub point: Point3f,
    pub normal: Vector3f,
    /// Locally shaded color (ambient + diffuse + specular), before any
    /// reflected or refracted contribution.
    pub radiance: Vector3f,
}
