use std::{fs, path::Path, str::FromStr};

use crate::{
    error::{ParseError, Result},
    lexer::{unexpected, TokenKind, Tokens},
    parsed_scene::Scene,
};

mod camera;
mod geometry;
mod light;
mod material;

pub fn parse_scene(source: &str) -> Result<Scene> {
    let mut tokens = Tokens::new(source);
    let mut scene = Scene::new();

    while let Some(token) = tokens.peek().copied() {
        tokens.next_token("a scene element")?;
        match token.kind {
            TokenKind::Word(name) => parse_element(&mut scene, name, &mut tokens)?,
            TokenKind::Key("background_color") => scene.background_color = tokens.next_vec3()?,
            TokenKind::Key("ambient_light") => scene.ambient_light = Some(tokens.next_vec3()?),
            TokenKind::Key(field) => return Err(unknown_field(&tokens, "scene", field)),
            TokenKind::Open | TokenKind::Close => return Err(unexpected(&token, "a scene element")),
        }
    }

    if scene.cameras.is_empty() {
        log::warn!("scene declares no camera");
    }
    log::debug!(
        "parsed scene: {} shapes, {} cameras, {} lights",
        scene.shapes.len(), scene.cameras.len(), scene.lights.len()
    );

    Ok(scene)
}

pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .map_err(|source| ParseError::Io { path: path.to_path_buf(), source })?;
    log::debug!("loaded {} ({} bytes)", path.display(), source.len());
    parse_scene(&source)
}

impl FromStr for Scene {
    type Err = ParseError;

    fn from_str(source: &str) -> Result<Self> {
        parse_scene(source)
    }
}

fn parse_element(scene: &mut Scene, name: &str, tokens: &mut Tokens) -> Result<()> {
    let line = tokens.line();

    if let Some(shape) = geometry::parse_shape(name, tokens)? {
        scene.shapes.push(shape);
    } else if let Some(camera) = camera::parse_camera(name, tokens)? {
        if scene.camera(&camera.id).is_some() {
            log::warn!("line {line}: camera `{}` shadows an earlier camera with the same id", camera.id);
        }
        scene.cameras.push(camera);
    } else if let Some(light) = light::parse_light(name, tokens)? {
        scene.lights.push(light);
    } else {
        return Err(ParseError::UnknownBlock { line, category: category_of(name), name: name.to_string() });
    }

    log::debug!("line {line}: parsed {name}");
    Ok(())
}

/// Best guess at what an unrecognised block was meant to be, for the error message.
fn category_of(name: &str) -> &'static str {
    if name.ends_with("_camera") {
        "camera"
    } else if name.ends_with("_light") {
        "light"
    } else {
        "scene element"
    }
}

/// Parses `{ ... }` after a block name, attaching the block to any error raised inside.
/// `body` receives the line of the block header.
fn block<'a, T>(
    tokens: &mut Tokens<'a>,
    name: &str,
    body: impl FnOnce(&mut Tokens<'a>, usize) -> Result<T>,
) -> Result<T> {
    let line = tokens.line();
    tokens
        .expect_open()
        .and_then(|()| body(tokens, line))
        .map_err(|error| error.in_block(name, line))
}

fn unknown_field(tokens: &Tokens, block: &str, field: &str) -> ParseError {
    ParseError::UnknownField { line: tokens.line(), block: block.to_string(), field: field.to_string() }
}

fn missing(line: usize, block: &str, field: &'static str) -> ParseError {
    ParseError::MissingField { line, block: block.to_string(), field }
}

#[cfg(test)]
mod test {
    use cgmath::vec3;

    use crate::{
        error::ParseError,
        parsed_scene::{CameraKind, Light, Material, ShapeKind, Texture},
    };

    use super::{load_scene, parse_scene};

    const SPHERE: &str = "
        sphere {
            position: 1.0 1.0 0.0
            scale: 1.0 1.0 1.0
            rotation: 0.0 0.0 45.0
            material: phong_material {
                diffuse_texture: single_color_texture { color: 1.0 0.0 0.0 }
                specular_texture: single_color_texture { color: 1.0 1.0 1.0 }
                exponent: 64.0
            }
        }
    ";

    #[test]
    fn sphere_example() {
        let scene = parse_scene(SPHERE).unwrap();
        assert_eq!(scene.shapes.len(), 1);

        let sphere = &scene.shapes[0];
        assert_eq!(sphere.kind, ShapeKind::Sphere);
        assert_eq!(sphere.transform.position, vec3(1.0, 1.0, 0.0));
        assert_eq!(sphere.transform.rotation, vec3(0.0, 0.0, 45.0));
        let Material::Phong { exponent, diffuse_texture, .. } = &sphere.material else {
            panic!("expected phong material, got {:?}", sphere.material);
        };
        assert_eq!(*exponent, 64.0);
        assert_eq!(*diffuse_texture, Texture::SingleColor { color: vec3(1.0, 0.0, 0.0) });
    }

    #[test]
    fn shapes_keep_file_order() {
        let source = "
            box { material: lambert_material { texture: single_color_texture { color: 1 1 1 } } }
            plane { material: lambert_material { texture: single_color_texture { color: 1 1 1 } } }
            disc { material: unshaded_material { texture: single_color_texture { color: 1 1 1 } } }
            sphere { material: lambert_material { texture: single_color_texture { color: 1 1 1 } } }
            cylinder { material: lambert_material { texture: single_color_texture { color: 1 1 1 } } }
        ";
        let scene = parse_scene(source).unwrap();
        let names: Vec<&str> = scene.shapes.iter().map(|shape| shape.kind.name()).collect();
        assert_eq!(names, vec!["box", "plane", "disc", "sphere", "cylinder"]);
    }

    #[test]
    fn top_level_attributes() {
        let scene = parse_scene("background_color: 0.1 0.2 0.3\nambient_light: 0.05 0.05 0.05\n").unwrap();
        assert_eq!(scene.background_color, vec3(0.1, 0.2, 0.3));
        assert_eq!(scene.ambient_light, Some(vec3(0.05, 0.05, 0.05)));
        assert!(scene.shapes.is_empty());
    }

    #[test]
    fn empty_input_is_an_empty_scene() {
        let scene = parse_scene("  # nothing here\n").unwrap();
        assert_eq!(scene, crate::parsed_scene::Scene::new());
    }

    #[test]
    fn unknown_camera_type_is_rejected() {
        let error = parse_scene("cubemap_camera { id: main }").unwrap_err();
        assert!(matches!(
            error,
            ParseError::UnknownBlock { category: "camera", ref name, line: 1 } if name == "cubemap_camera"
        ));
    }

    #[test]
    fn unknown_top_level_key_is_rejected() {
        let error = parse_scene("background_colour: 0 0 0").unwrap_err();
        assert!(matches!(error, ParseError::UnknownField { ref field, .. } if field == "background_colour"));
    }

    #[test]
    fn unbalanced_braces_are_rejected() {
        let open = parse_scene("point_light { color: 1 1 1 position: 0 1 0").unwrap_err();
        assert!(matches!(open.root_cause(), ParseError::UnexpectedEnd { .. }));

        let stray = parse_scene("point_light { color: 1 1 1 } }").unwrap_err();
        assert!(matches!(stray, ParseError::UnexpectedToken { ref found, .. } if found == "}"));
    }

    #[test]
    fn malformed_number_reports_its_line() {
        let source = "sphere {\n  position: 1.0 abc 0.0\n}";
        let error = parse_scene(source).unwrap_err();
        assert!(matches!(error, ParseError::InBlock { line: 1, ref block, .. } if block == "sphere"));
        assert!(matches!(
            error.root_cause(),
            ParseError::MalformedNumber { line: 2, token } if token == "abc"
        ));
    }

    #[test]
    fn cameras_and_lights_are_collected() {
        let source = "
            pinhole_camera { id: left field_of_view: 60 }
            orthographic_camera { scale: 2.5 }
            point_light { color: 1 1 1 position: 0 5 0 }
        ";
        let scene = parse_scene(source).unwrap();
        assert_eq!(scene.cameras.len(), 2);
        assert_eq!(scene.camera("left").unwrap().kind, CameraKind::Pinhole { field_of_view: 60.0 });
        assert_eq!(scene.camera("main").unwrap().kind, CameraKind::Orthographic { scale: 2.5 });
        assert_eq!(scene.lights, vec![Light::Point { color: vec3(1.0, 1.0, 1.0), position: vec3(0.0, 5.0, 0.0) }]);
    }

    #[test]
    fn repeated_key_keeps_last_value() {
        let source = "
            sphere {
                position: 1 1 1
                position: 2 2 2
                material: lambert_material { texture: single_color_texture { color: 1 1 1 } }
            }
        ";
        let scene = parse_scene(source).unwrap();
        assert_eq!(scene.shapes[0].transform.position, vec3(2.0, 2.0, 2.0));
    }

    #[test]
    fn duplicate_camera_ids_are_kept_in_order() {
        let source = "
            pinhole_camera { id: a field_of_view: 30 }
            pinhole_camera { id: a field_of_view: 75 }
        ";
        let scene = parse_scene(source).unwrap();
        assert_eq!(scene.cameras.len(), 2);
        assert_eq!(scene.cameras[0].kind, CameraKind::Pinhole { field_of_view: 30.0 });
        assert_eq!(scene.camera("a").unwrap().kind, CameraKind::Pinhole { field_of_view: 75.0 });
    }

    #[test]
    fn from_str_matches_parse_scene() {
        let scene: crate::parsed_scene::Scene = SPHERE.parse().unwrap();
        assert_eq!(scene, parse_scene(SPHERE).unwrap());
    }

    #[test]
    fn showcase_sample() {
        let scene = parse_scene(include_str!("../scenes/showcase.scene")).unwrap();
        assert_eq!(scene.shapes.len(), 4);
        assert_eq!(scene.cameras.len(), 1);
    }

    #[test]
    fn cameras_sample() {
        let scene = parse_scene(include_str!("../scenes/cameras.scene")).unwrap();
        assert_eq!(scene.shapes.len(), 4);
        assert_eq!(scene.cameras.len(), 4);
        let kinds: Vec<&str> = scene.cameras.iter().map(|camera| camera.kind.name()).collect();
        assert_eq!(kinds, vec!["perspective_camera", "spherical_camera", "pinhole_camera", "fisheye_camera"]);
    }

    #[test]
    fn load_scene_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.scene");
        std::fs::write(&path, SPHERE).unwrap();
        assert_eq!(load_scene(&path).unwrap().shapes.len(), 1);

        let error = load_scene(dir.path().join("missing.scene")).unwrap_err();
        assert!(matches!(error, ParseError::Io { .. }));
    }
}
