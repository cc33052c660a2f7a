use cgmath::num_traits::zero;

use crate::{
    error::Result,
    lexer::Tokens,
    parsed_scene::Light,
};

use super::{block, missing, unknown_field};

/// Returns `Ok(None)` without consuming anything when `name` is not a light.
pub(super) fn parse_light(name: &str, tokens: &mut Tokens) -> Result<Option<Light>> {
    let light = match name {
        "point_light" => block(tokens, name, |tokens, _| {
            let (mut color, mut position) = (zero(), zero());
            while let Some(key) = tokens.next_key()? {
                match key {
                    "color"    => color    = tokens.next_vec3()?,
                    "position" => position = tokens.next_vec3()?,
                    _ => return Err(unknown_field(tokens, name, key)),
                }
            }
            Ok(Light::Point { color, position })
        })?,
        "spot_light" => block(tokens, name, |tokens, line| {
            let (mut color, mut position) = (zero(), zero());
            let (mut direction, mut angle) = (None, None);
            while let Some(key) = tokens.next_key()? {
                match key {
                    "color"     => color     = tokens.next_vec3()?,
                    "position"  => position  = tokens.next_vec3()?,
                    "direction" => direction = Some(tokens.next_vec3()?),
                    "angle"     => angle     = Some(tokens.next_float()?),
                    _ => return Err(unknown_field(tokens, name, key)),
                }
            }
            Ok(Light::Spot {
                color,
                position,
                direction: direction.ok_or_else(|| missing(line, name, "direction"))?,
                angle: angle.ok_or_else(|| missing(line, name, "angle"))?,
            })
        })?,
        "ambient_occlusion_light" => block(tokens, name, |tokens, line| {
            let mut color = zero();
            let mut distance = None;
            let mut e = 0.0;
            while let Some(key) = tokens.next_key()? {
                match key {
                    "color"                  => color    = tokens.next_vec3()?,
                    "distance"               => distance = Some(tokens.next_float()?),
                    "e" | "mapping_exponent" => e        = tokens.next_float()?,
                    _ => return Err(unknown_field(tokens, name, key)),
                }
            }
            Ok(Light::AmbientOcclusion {
                color,
                distance: distance.ok_or_else(|| missing(line, name, "distance"))?,
                e,
            })
        })?,
        _ => return Ok(None),
    };

    Ok(Some(light))
}
