use crate::{
    error::Result,
    lexer::Tokens,
    parsed_scene::{Camera, CameraKind},
};

use super::{block, unknown_field};

/// Returns `Ok(None)` without consuming anything when `name` is not a camera.
pub(super) fn parse_camera(name: &str, tokens: &mut Tokens) -> Result<Option<Camera>> {
    let kind = match name {
        "orthographic_camera" => CameraKind::Orthographic { scale: 1.0 },
        "perspective_camera" => CameraKind::Perspective { field_of_view: 0.0, lens_radius: 1.0, focal_length: 1.0 },
        "pinhole_camera" => CameraKind::Pinhole { field_of_view: 0.0 },
        "spherical_camera" => CameraKind::Spherical { field_of_view: 0.0 },
        "fisheye_camera" => CameraKind::Fisheye { psi: 0.0 },
        _ => return Ok(None),
    };

    let camera = block(tokens, name, |tokens, _| {
        let mut camera = Camera::new(kind);
        while let Some(key) = tokens.next_key()? {
            match key {
                "id"             => camera.id             = tokens.next_word("a camera id")?.to_string(),
                "eye_position"   => camera.eye_position   = tokens.next_vec3()?,
                "gaze_direction" => camera.gaze_direction = tokens.next_vec3()?,
                "up_vector"      => camera.up_vector      = tokens.next_vec3()?,
                _ if read_projection(&mut camera.kind, key, tokens)? => {}
                _ => return Err(unknown_field(tokens, name, key)),
            }
        }
        Ok(camera)
    })?;

    Ok(Some(camera))
}

/// Reads a field specific to the projection; false if the projection has no such field.
fn read_projection(kind: &mut CameraKind, key: &str, tokens: &mut Tokens) -> Result<bool> {
    let field = match (kind, key) {
        (CameraKind::Orthographic { scale }, "scale") => scale,
        (
            CameraKind::Perspective { field_of_view, .. }
            | CameraKind::Pinhole { field_of_view }
            | CameraKind::Spherical { field_of_view },
            "field_of_view",
        ) => field_of_view,
        (CameraKind::Perspective { lens_radius, .. }, "lens_radius") => lens_radius,
        (CameraKind::Perspective { focal_length, .. }, "focal_length") => focal_length,
        (CameraKind::Fisheye { psi }, "psi") => psi,
        _ => return Ok(false),
    };
    *field = tokens.next_float()?;
    Ok(true)
}
