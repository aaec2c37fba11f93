/// WIRE3D Terminal Demo - Orbiting wireframe meshes
///
/// Controls:
///   - P: Pause / resume
///   - +/-: Zoom
///   - Q/ESC: Quit
use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use wire3d_core::{Color, Engine, EngineConfig, MeshDescriptor};
use wire3d_terminal::{AppOptions, StatusLogger, TerminalApp};

#[derive(Parser, Debug)]
#[command(name = "wire3d-terminal", version, about = "Wireframe mesh renderer for the terminal")]
struct Cli {
    /// Mesh to render, e.g. "sphere(12, 16, 16)" or "torus(10, 3, 24, 12)".
    /// Repeat to add more meshes.
    #[arg(long = "mesh", default_value = "sphere(12, 16, 16)")]
    meshes: Vec<MeshDescriptor>,

    /// Projection scale
    #[arg(long, default_value_t = 8.0)]
    scale: f32,

    /// Radius of the orbit path, in cells
    #[arg(long, default_value_t = 12.0)]
    orbit_radius: f32,

    /// Background color as #RRGGBB; pixels of this color print as blanks
    #[arg(long, default_value = "#ffffff")]
    background: Color,

    /// Wireframe color as #RRGGBB
    #[arg(long, default_value = "#0000ff")]
    foreground: Color,

    /// Target frames per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Exit after this many frames
    #[arg(long)]
    frames: Option<u64>,

    /// Lowest log level shown in the status line
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    StatusLogger::init(cli.log_level).context("installing logger")?;

    let config = EngineConfig::default()
        .with_scale(cli.scale)
        .with_orbit_radius(cli.orbit_radius)
        .with_colors(cli.background, cli.foreground);
    let mut engine = Engine::new(config)?;
    for descriptor in &cli.meshes {
        let mesh = descriptor
            .build()
            .with_context(|| format!("building {descriptor}"))?;
        engine.add_mesh(mesh);
    }

    let options = AppOptions {
        fps: cli.fps,
        max_frames: cli.frames,
    };
    let mut app = TerminalApp::new(engine, options)?;
    app.run()?;

    println!(
        "Rendered {} frames. Thank you for using WIRE3D Terminal Renderer!",
        app.engine().frame()
    );
    Ok(())
}
