use cgmath::{Vector2, Vector3};

pub type Float = f64;
pub type Vec2 = Vector2<Float>;
pub type Vec3 = Vector3<Float>;
pub type RGB = Vector3<Float>;
