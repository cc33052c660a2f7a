use crate::{
    error::{ParseError, Result},
    lexer::Tokens,
    parsed_scene::{Material, Texture},
};

use super::{block, missing, unknown_field};

/// Reads `<type>_material { ... }` following a `material:` key.
pub(super) fn parse_material(tokens: &mut Tokens) -> Result<Material> {
    let name = tokens.next_word("a material type")?;
    match name {
        "unshaded_material" => block(tokens, name, |tokens, line| {
            Ok(Material::Unshaded { texture: single_texture(tokens, name, line)? })
        }),
        "lambert_material" => block(tokens, name, |tokens, line| {
            Ok(Material::Lambert { texture: single_texture(tokens, name, line)? })
        }),
        "phong_material" => block(tokens, name, |tokens, line| {
            let mut diffuse_texture = None;
            let mut specular_texture = None;
            let mut exponent = 1.0;

            while let Some(key) = tokens.next_key()? {
                match key {
                    "diffuse_texture"  => diffuse_texture  = Some(parse_texture(tokens)?),
                    "specular_texture" => specular_texture = Some(parse_texture(tokens)?),
                    "exponent"         => exponent         = tokens.next_float()?,
                    _ => return Err(unknown_field(tokens, name, key)),
                }
            }

            Ok(Material::Phong {
                diffuse_texture: diffuse_texture.ok_or_else(|| missing(line, name, "diffuse_texture"))?,
                specular_texture: specular_texture.ok_or_else(|| missing(line, name, "specular_texture"))?,
                exponent,
            })
        }),
        _ => Err(ParseError::UnknownBlock { line: tokens.line(), category: "material", name: name.to_string() }),
    }
}

fn single_texture(tokens: &mut Tokens, material: &str, line: usize) -> Result<Texture> {
    let mut texture = None;
    while let Some(key) = tokens.next_key()? {
        match key {
            "texture" => texture = Some(parse_texture(tokens)?),
            _ => return Err(unknown_field(tokens, material, key)),
        }
    }
    texture.ok_or_else(|| missing(line, material, "texture"))
}

/// Reads `<type>_texture { ... }` following a texture key.
pub(super) fn parse_texture(tokens: &mut Tokens) -> Result<Texture> {
    let name = tokens.next_word("a texture type")?;
    match name {
        "single_color_texture" => block(tokens, name, |tokens, line| {
            let mut color = None;
            while let Some(key) = tokens.next_key()? {
                match key {
                    "color" => color = Some(tokens.next_vec3()?),
                    _ => return Err(unknown_field(tokens, name, key)),
                }
            }
            Ok(Texture::SingleColor { color: color.ok_or_else(|| missing(line, name, "color"))? })
        }),
        "grid_texture" => block(tokens, name, |tokens, line| {
            let (mut border, mut face, mut width) = (None, None, None);
            while let Some(key) = tokens.next_key()? {
                match key {
                    "border" => border = Some(tokens.next_vec3()?),
                    "face"   => face   = Some(tokens.next_vec3()?),
                    "width"  => width  = Some(tokens.next_float()?),
                    _ => return Err(unknown_field(tokens, name, key)),
                }
            }
            Ok(Texture::Grid {
                border: border.ok_or_else(|| missing(line, name, "border"))?,
                face: face.ok_or_else(|| missing(line, name, "face"))?,
                width: width.ok_or_else(|| missing(line, name, "width"))?,
            })
        }),
        "chess_board_texture" => block(tokens, name, |tokens, line| {
            let (mut a, mut b) = (None, None);
            while let Some(key) = tokens.next_key()? {
                match key {
                    "a" => a = Some(tokens.next_vec3()?),
                    "b" => b = Some(tokens.next_vec3()?),
                    _ => return Err(unknown_field(tokens, name, key)),
                }
            }
            Ok(Texture::ChessBoard {
                a: a.ok_or_else(|| missing(line, name, "a"))?,
                b: b.ok_or_else(|| missing(line, name, "b"))?,
            })
        }),
        _ => Err(ParseError::UnknownBlock { line: tokens.line(), category: "texture", name: name.to_string() }),
    }
}
