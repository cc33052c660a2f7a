//! Reader and writer for the `.scene` format: brace-delimited blocks of `key: value` fields
//! describing primitives, materials, textures, cameras and lights for a raytracer.
//!
//! ```text
//! background_color: 0.1 0.1 0.1
//! sphere {
//!     position: 1.0 1.0 0.0
//!     material: lambert_material {
//!         texture: single_color_texture { color: 1.0 0.0 0.0 }
//!     }
//! }
//! ```

pub mod error;
mod lexer;
pub mod parsed_scene;
pub mod scene_parser;
pub mod scene_writer;
pub mod types;

pub use error::ParseError;
pub use parsed_scene::{Camera, CameraKind, Light, Material, Scene, Shape, ShapeKind, Texture, Transform};
pub use scene_parser::{load_scene, parse_scene};
pub use scene_writer::write_scene;
