use std::{fmt, io::{self, Write}};

use crate::{
    parsed_scene::{Camera, CameraKind, Light, Material, Scene, Shape, ShapeKind, Texture},
    types::{Float, Vec2, Vec3},
};

pub fn write_scene(scene: &Scene, mut out: impl Write) -> io::Result<()> {
    write!(out, "{scene}")
}

/// Canonical `.scene` text. Numbers use the shortest form that reads back to the same value,
/// so the output parses to a scene equal to `self`.
impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = Indented { f, depth: 0 };

        out.vec3("background_color", self.background_color)?;
        if let Some(ambient_light) = self.ambient_light {
            out.vec3("ambient_light", ambient_light)?;
        }
        for shape in &self.shapes {
            out.blank()?;
            out.shape(shape)?;
        }
        for camera in &self.cameras {
            out.blank()?;
            out.camera(camera)?;
        }
        for light in &self.lights {
            out.blank()?;
            out.light(light)?;
        }
        Ok(())
    }
}

struct Indented<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    depth: usize,
}

impl Indented<'_, '_> {
    fn line(&mut self, args: fmt::Arguments) -> fmt::Result {
        writeln!(self.f, "{:indent$}{args}", "", indent = self.depth * 4)
    }

    fn blank(&mut self) -> fmt::Result {
        writeln!(self.f)
    }

    fn open(&mut self, args: fmt::Arguments) -> fmt::Result {
        self.line(format_args!("{args} {{"))?;
        self.depth += 1;
        Ok(())
    }

    fn close(&mut self) -> fmt::Result {
        self.depth -= 1;
        self.line(format_args!("}}"))
    }

    fn float(&mut self, key: &str, value: Float) -> fmt::Result {
        self.line(format_args!("{key}: {value:?}"))
    }

    fn vec2(&mut self, key: &str, value: Vec2) -> fmt::Result {
        self.line(format_args!("{key}: {:?} {:?}", value.x, value.y))
    }

    fn vec3(&mut self, key: &str, value: Vec3) -> fmt::Result {
        self.line(format_args!("{key}: {:?} {:?} {:?}", value.x, value.y, value.z))
    }

    fn shape(&mut self, shape: &Shape) -> fmt::Result {
        self.open(format_args!("{}", shape.kind.name()))?;
        self.vec3("position", shape.transform.position)?;
        self.vec3("scale", shape.transform.scale)?;
        self.vec3("rotation", shape.transform.rotation)?;
        if let ShapeKind::Triangle { a, b, c, na, nb, nc, uv } = &shape.kind {
            for (key, value) in [("a", a), ("b", b), ("c", c), ("na", na), ("nb", nb), ("nc", nc)] {
                self.vec3(key, *value)?;
            }
            if let Some([uva, uvb, uvc]) = uv {
                self.vec2("uva", *uva)?;
                self.vec2("uvb", *uvb)?;
                self.vec2("uvc", *uvc)?;
            }
        }
        self.material(&shape.material)?;
        self.close()
    }

    fn material(&mut self, material: &Material) -> fmt::Result {
        self.open(format_args!("material: {}", material.name()))?;
        match material {
            Material::Unshaded { texture } | Material::Lambert { texture } => self.texture("texture", texture)?,
            Material::Phong { diffuse_texture, specular_texture, exponent } => {
                self.texture("diffuse_texture", diffuse_texture)?;
                self.texture("specular_texture", specular_texture)?;
                self.float("exponent", *exponent)?;
            }
        }
        self.close()
    }

    fn texture(&mut self, key: &str, texture: &Texture) -> fmt::Result {
        self.open(format_args!("{key}: {}", texture.name()))?;
        match texture {
            Texture::SingleColor { color } => self.vec3("color", *color)?,
            Texture::Grid { border, face, width } => {
                self.vec3("border", *border)?;
                self.vec3("face", *face)?;
                self.float("width", *width)?;
            }
            Texture::ChessBoard { a, b } => {
                self.vec3("a", *a)?;
                self.vec3("b", *b)?;
            }
        }
        self.close()
    }

    fn camera(&mut self, camera: &Camera) -> fmt::Result {
        self.open(format_args!("{}", camera.kind.name()))?;
        self.line(format_args!("id: {}", camera.id))?;
        self.vec3("eye_position", camera.eye_position)?;
        self.vec3("gaze_direction", camera.gaze_direction)?;
        self.vec3("up_vector", camera.up_vector)?;
        match camera.kind {
            CameraKind::Orthographic { scale } => self.float("scale", scale)?,
            CameraKind::Perspective { field_of_view, lens_radius, focal_length } => {
                self.float("field_of_view", field_of_view)?;
                self.float("lens_radius", lens_radius)?;
                self.float("focal_length", focal_length)?;
            }
            CameraKind::Pinhole { field_of_view } | CameraKind::Spherical { field_of_view } => {
                self.float("field_of_view", field_of_view)?
            }
            CameraKind::Fisheye { psi } => self.float("psi", psi)?,
        }
        self.close()
    }

    fn light(&mut self, light: &Light) -> fmt::Result {
        self.open(format_args!("{}", light.name()))?;
        self.vec3("color", light.color())?;
        match *light {
            Light::Point { position, .. } => self.vec3("position", position)?,
            Light::Spot { position, direction, angle, .. } => {
                self.vec3("position", position)?;
                self.vec3("direction", direction)?;
                self.float("angle", angle)?;
            }
            Light::AmbientOcclusion { distance, e, .. } => {
                self.float("distance", distance)?;
                self.float("e", e)?;
            }
        }
        self.close()
    }
}
