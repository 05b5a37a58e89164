//! A physically-motivated ray tracing playground.
//!
//! The crate is organized around a single intersection pipeline: a
//! [`camera`] turns pixels into rays, [`shapes`] test them against the scene
//! honoring per-query [`requirements`], [`texture`]s couple the resulting
//! hits to colors and scattered rays, and the [`renderer`] integrates
//! everything into a [`raster`] that the [`io`] codecs can write out.

pub mod alpha_triangle;
pub mod camera;
pub mod capabilities;
pub mod error;
pub mod intersection;
pub mod io;
pub mod raster;
pub mod ray_parameters;
pub mod renderer;
pub mod requirements;
pub mod rgbcolor;
pub mod samplegen;
pub mod shapes;
pub mod texture;

pub use camera::{Camera, PinholeCamera};
pub use capabilities::{IntersectionCapabilities, MaterialCapabilities, ObjectCapabilities};
pub use error::{Error, ParseError, Result};
pub use intersection::IntersectionInfo;
pub use raster::Raster;
pub use ray_parameters::RayParameters;
pub use requirements::IntersectionRequirements;
pub use rgbcolor::Rgbcolor;
pub use shapes::{Aggregate, Disc, Plane, Rectangle, Shape, ShapeRef, Sphere, Triangle};
pub use texture::{Scatter, Texture};
