pub mod layer;
pub mod params;
pub mod point;
pub mod request;
pub mod section;
pub mod vector;

pub use layer::*;
pub use params::*;
pub use point::Point3d;
pub use request::*;
pub use section::*;
pub use vector::Vec3;
