use crate::{
    error::Result,
    lexer::Tokens,
    parsed_scene::{Shape, ShapeKind, Transform},
    types::{Vec2, Vec3},
};

use super::{block, material::parse_material, missing, unknown_field};

/// Returns `Ok(None)` without consuming anything when `name` is not a shape.
pub(super) fn parse_shape(name: &str, tokens: &mut Tokens) -> Result<Option<Shape>> {
    // triangles are the only primitive whose kind is built from fields
    let unit_kind = match name {
        "plane" => Some(ShapeKind::Plane),
        "sphere" => Some(ShapeKind::Sphere),
        "box" => Some(ShapeKind::Box),
        "cylinder" => Some(ShapeKind::Cylinder),
        "disc" => Some(ShapeKind::Disc),
        "triangle" => None,
        _ => return Ok(None),
    };

    let shape = block(tokens, name, |tokens, line| {
        let mut transform = Transform::default();
        let mut material = None;
        let mut vertices = Vertices::default();

        while let Some(key) = tokens.next_key()? {
            match key {
                "position" => transform.position = tokens.next_vec3()?,
                "scale"    => transform.scale    = tokens.next_vec3()?,
                "rotation" => transform.rotation = tokens.next_vec3()?,
                "material" => material = Some(parse_material(tokens)?),
                _ if unit_kind.is_none() && vertices.read(key, tokens)? => {}
                _ => return Err(unknown_field(tokens, name, key)),
            }
        }

        let kind = match unit_kind {
            Some(kind) => kind,
            None => vertices.into_triangle(line)?,
        };
        let material = material.ok_or_else(|| missing(line, name, "material"))?;

        Ok(Shape { kind, transform, material })
    })?;

    Ok(Some(shape))
}

#[derive(Default)]
struct Vertices {
    a: Option<Vec3>,
    b: Option<Vec3>,
    c: Option<Vec3>,
    na: Option<Vec3>,
    nb: Option<Vec3>,
    nc: Option<Vec3>,
    uva: Option<Vec2>,
    uvb: Option<Vec2>,
    uvc: Option<Vec2>,
}

impl Vertices {
    /// Reads the value of a triangle field; false if `key` is not one.
    fn read(&mut self, key: &str, tokens: &mut Tokens) -> Result<bool> {
        match key {
            "a"   => self.a   = Some(tokens.next_vec3()?),
            "b"   => self.b   = Some(tokens.next_vec3()?),
            "c"   => self.c   = Some(tokens.next_vec3()?),
            "na"  => self.na  = Some(tokens.next_vec3()?),
            "nb"  => self.nb  = Some(tokens.next_vec3()?),
            "nc"  => self.nc  = Some(tokens.next_vec3()?),
            "uva" => self.uva = Some(tokens.next_vec2()?),
            "uvb" => self.uvb = Some(tokens.next_vec2()?),
            "uvc" => self.uvc = Some(tokens.next_vec2()?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn into_triangle(self, line: usize) -> Result<ShapeKind> {
        let required = |value: Option<Vec3>, field| value.ok_or_else(|| missing(line, "triangle", field));

        // texture coordinates come as a set of three or not at all
        let uv = match (self.uva, self.uvb, self.uvc) {
            (None, None, None) => None,
            (Some(uva), Some(uvb), Some(uvc)) => Some([uva, uvb, uvc]),
            (None, _, _) => return Err(missing(line, "triangle", "uva")),
            (_, None, _) => return Err(missing(line, "triangle", "uvb")),
            (_, _, None) => return Err(missing(line, "triangle", "uvc")),
        };

        Ok(ShapeKind::Triangle {
            a: required(self.a, "a")?,
            b: required(self.b, "b")?,
            c: required(self.c, "c")?,
            na: required(self.na, "na")?,
            nb: required(self.nb, "nb")?,
            nc: required(self.nc, "nc")?,
            uv,
        })
    }
}
