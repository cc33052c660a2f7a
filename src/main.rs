use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::{Parser, ValueEnum};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use scene_format::{load_scene, write_scene, Scene};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "scene-format")]
#[command(about = "Read .scene files and print them as a summary, JSON or canonical scene text", long_about = None)]
struct Cli {
    /// How to print each parsed scene
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,

    /// Only log warnings and errors
    #[arg(long, short)]
    quiet: bool,

    /// Scene files to read
    #[arg(required = true, value_name = "FILES")]
    files: Vec<PathBuf>,
}

/// One scene in multi-file JSON output, so each document names its source.
#[derive(Serialize)]
struct JsonDocument<'a> {
    path: &'a Path,
    scene: &'a Scene,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Counts and kinds of shapes, cameras and lights
    Summary,
    /// Pretty-printed JSON
    Json,
    /// Canonical .scene text
    Scene,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let now = Instant::now();
    let scenes: Vec<_> = cli.files.par_iter().map(|path| (path, load_scene(path))).collect();
    log::info!("Parsed {} file(s) in {:?}", scenes.len(), now.elapsed());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let with_headers = scenes.len() > 1;
    let mut failed = 0;

    for (path, scene) in scenes {
        let printed = scene
            .map_err(|error| error.to_string())
            .and_then(|scene| print_scene(&mut out, path, &scene, cli.format, with_headers).map_err(|error| error.to_string()));
        if let Err(error) = printed {
            log::error!("{}: {error}", path.display());
            failed += 1;
        }
    }

    if failed > 0 {
        log::error!("{failed} of {} file(s) failed", cli.files.len());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn print_scene(out: &mut impl Write, path: &Path, scene: &Scene, format: OutputFormat, with_header: bool) -> io::Result<()> {
    match format {
        OutputFormat::Summary => write_summary(out, path, scene),
        OutputFormat::Json => {
            if with_header {
                serde_json::to_writer_pretty(&mut *out, &JsonDocument { path, scene })?;
            } else {
                serde_json::to_writer_pretty(&mut *out, scene)?;
            }
            writeln!(out)
        }
        OutputFormat::Scene => {
            if with_header {
                writeln!(out, "# {}", path.display())?;
            }
            write_scene(scene, &mut *out)?;
            writeln!(out)
        }
    }
}

fn write_summary(out: &mut impl Write, path: &Path, scene: &Scene) -> io::Result<()> {
    writeln!(
        out,
        "{}: {} shape(s), {} camera(s), {} light(s)",
        path.display(), scene.shapes.len(), scene.cameras.len(), scene.lights.len()
    )?;

    let shapes: Vec<&str> = scene.shapes.iter().map(|shape| shape.kind.name()).collect();
    let cameras: Vec<String> = scene.cameras.iter().map(|camera| format!("{} ({})", camera.id, camera.kind.name())).collect();
    let lights: Vec<&str> = scene.lights.iter().map(|light| light.name()).collect();

    writeln!(out, "  shapes:  {}", shapes.join(", "))?;
    writeln!(out, "  cameras: {}", cameras.join(", "))?;
    writeln!(out, "  lights:  {}", lights.join(", "))
}
