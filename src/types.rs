pub use cgmath::{Array, ElementWise, EuclideanSpace, InnerSpace, Zero};
pub use cgmath::{Point3, Vector3};

pub type Float = f64;
pub type Vector3f = Vector3<Float>;
pub type Point3f = Point3<Float>;
