use cgmath::{num_traits::zero, vec3};
use serde::{Deserialize, Serialize};

use crate::types::{Float, Vec2, Vec3, RGB};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Texture {
    SingleColor { color: RGB },
    Grid { border: RGB, face: RGB, width: Float },
    ChessBoard { a: RGB, b: RGB },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Material {
    Unshaded { texture: Texture },
    Lambert { texture: Texture },
    Phong {
        diffuse_texture: Texture,
        specular_texture: Texture,
        exponent: Float,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeKind {
    Plane,
    Sphere,
    Box,
    Cylinder,
    Disc,
    Triangle {
        a: Vec3,
        b: Vec3,
        c: Vec3,
        na: Vec3,
        nb: Vec3,
        nc: Vec3,
        uv: Option<[Vec2; 3]>,
    },
}

/// Placement of a unit primitive. Rotation is in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub scale: Vec3,
    pub rotation: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub transform: Transform,
    pub material: Material,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CameraKind {
    Orthographic { scale: Float },
    Perspective { field_of_view: Float, lens_radius: Float, focal_length: Float },
    Pinhole { field_of_view: Float },
    Spherical { field_of_view: Float },
    Fisheye { psi: Float },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub id: String,
    pub eye_position: Vec3,
    pub gaze_direction: Vec3,
    pub up_vector: Vec3,
    pub kind: CameraKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Light {
    Point { color: RGB, position: Vec3 },
    Spot { color: RGB, position: Vec3, direction: Vec3, angle: Float },
    AmbientOcclusion { color: RGB, distance: Float, e: Float },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub background_color: RGB,
    pub ambient_light: Option<RGB>,
    pub shapes: Vec<Shape>,
    pub cameras: Vec<Camera>,
    pub lights: Vec<Light>,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Plane => "plane",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Box => "box",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Disc => "disc",
            ShapeKind::Triangle { .. } => "triangle",
        }
    }
}

impl Material {
    pub fn name(&self) -> &'static str {
        match self {
            Material::Unshaded { .. } => "unshaded_material",
            Material::Lambert { .. } => "lambert_material",
            Material::Phong { .. } => "phong_material",
        }
    }
}

impl Texture {
    pub fn name(&self) -> &'static str {
        match self {
            Texture::SingleColor { .. } => "single_color_texture",
            Texture::Grid { .. } => "grid_texture",
            Texture::ChessBoard { .. } => "chess_board_texture",
        }
    }
}

impl CameraKind {
    pub fn name(&self) -> &'static str {
        match self {
            CameraKind::Orthographic { .. } => "orthographic_camera",
            CameraKind::Perspective { .. } => "perspective_camera",
            CameraKind::Pinhole { .. } => "pinhole_camera",
            CameraKind::Spherical { .. } => "spherical_camera",
            CameraKind::Fisheye { .. } => "fisheye_camera",
        }
    }
}

impl Light {
    pub fn name(&self) -> &'static str {
        match self {
            Light::Point { .. } => "point_light",
            Light::Spot { .. } => "spot_light",
            Light::AmbientOcclusion { .. } => "ambient_occlusion_light",
        }
    }

    pub fn color(&self) -> RGB {
        match self {
            Light::Point { color, .. } | Light::Spot { color, .. } | Light::AmbientOcclusion { color, .. } => *color,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self { position: zero(), scale: vec3(1.0, 1.0, 1.0), rotation: zero() }
    }
}

impl Camera {
    /// Camera with the format's defaults: at the origin, looking down -z, y up.
    pub fn new(kind: CameraKind) -> Self {
        Self {
            id: "main".to_string(),
            eye_position: zero(),
            gaze_direction: -Vec3::unit_z(),
            up_vector: Vec3::unit_y(),
            kind,
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Self { background_color: zero(), ambient_light: None, shapes: vec![], cameras: vec![], lights: vec![] }
    }

    /// Last camera declared with `id`, matching how later declarations shadow earlier ones.
    pub fn camera(&self, id: &str) -> Option<&Camera> {
        self.cameras.iter().rev().find(|camera| camera.id == id)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
