use failure::Error;

use crate::camera::*;
use crate::prims::*;
use crate::types::*;

/// Single point light.
pub struct Light {
    pub position: Point3f,
    pub color: Vector3f,
}

/// Everything a render pass reads: constructed once, immutable thereafter.
pub struct RenderContext {
    pub objects: Vec<Object>,
    pub light: Light,
    pub camera: Camera,
}

/// Three spheres over a checkered ground plane, lit from the upper left.
pub fn new_demo_scene(width: u32, height: u32) -> Result<RenderContext, Error> {
    let objects = vec![
        Object::sphere(Point3f::new(0.75, 0.1, 1.0), 0.6, Vector3f::new(0.0, 0.0, 1.0))?,
        Object::transparent_sphere(
            Point3f::new(-0.75, 0.1, 2.25),
            0.6,
            Vector3f::new(0.5, 0.223, 0.5),
            0.8,
        )?,
        Object::sphere(Point3f::new(-2.75, 0.1, 3.5), 0.6, Vector3f::new(1.0, 0.572, 0.184))?,
        Object::plane(Point3f::new(0.0, -0.5, 0.0), Vector3f::unit_y())?,
    ];
    Ok(RenderContext {
        objects,
        light: Light {
            position: Point3f::new(5.0, 5.0, -10.0),
            color: Vector3f::from_value(1.0),
        },
        camera: Camera::new(
            Point3f::new(0.0, 0.35, -1.0),
            Point3f::new(0.0, 0.0, 0.0),
            width,
            height,
        ),
    })
}
