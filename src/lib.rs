#[macro_use]
pub mod macros;

pub mod camera;
pub mod framebuf;
pub mod geom;
pub mod material;
pub mod prims;
pub mod scene;
pub mod shape;
pub mod tracer;
pub mod types;

pub use self::camera::*;
pub use self::framebuf::*;
pub use self::geom::*;
pub use self::material::*;
pub use self::prims::*;
pub use self::scene::*;
pub use self::shape::*;
pub use self::tracer::*;
pub use self::types::*;
