use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use flycam_camera::{CameraState, FlycamConfig, FrameContext};
use flycam_input::{InputFrame, LookDelta, MoveIntent};
use flycam_render::{DebugTextSink, RecordingSink, TransformSink, run_frame};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flycam-cli", about = "Headless driver for the fly camera")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON config file; defaults apply to anything it leaves out
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Print the effective configuration as JSON
    Config,
    /// Print the transform for the starting pose
    Frame {
        /// Digits after the decimal point
        #[arg(short, long, default_value = "4")]
        precision: usize,
    },
    /// Step the camera through a sequence of input frames
    Simulate {
        /// JSON array of input frames, e.g. [{"look":{"dx":0.01},"movement":{"forward":1}}]
        #[arg(short, long, conflicts_with_all = ["frames", "turn"])]
        script: Option<PathBuf>,
        /// Number of synthesized frames when no script is given
        #[arg(short, long, default_value = "60")]
        frames: usize,
        /// Yaw delta applied every synthesized frame
        #[arg(short, long, default_value = "0.0", allow_negative_numbers = true)]
        turn: f32,
        /// Print every frame's transform, not just the last
        #[arg(long)]
        every_frame: bool,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<FlycamConfig> {
    let config = match path {
        Some(path) => FlycamConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => FlycamConfig::default(),
    };
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn load_script(path: &Path) -> anyhow::Result<Vec<InputFrame>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading input script {}", path.display()))?;
    let frames: Vec<InputFrame> = serde_json::from_str(&data)
        .with_context(|| format!("parsing input script {}", path.display()))?;
    tracing::debug!(frames = frames.len(), "loaded input script");
    Ok(frames)
}

fn synthesize(frames: usize, turn: f32) -> Vec<InputFrame> {
    let input = InputFrame::new(LookDelta::new(turn, 0.0), MoveIntent::new(1, 0));
    vec![input; frames]
}

fn print_pose(label: &str, camera: &CameraState) {
    let p = camera.position;
    let d = camera.direction;
    println!(
        "{label}: position=({:.3}, {:.3}, {:.3}) direction=({:.4}, {:.4}, {:.4})",
        p.x, p.y, p.z, d.x, d.y, d.z
    );
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("flycam-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("math: {}", flycam_math::crate_info());
            println!("camera: {}", flycam_camera::crate_info());
            println!("input: {}", flycam_input::crate_info());
            println!("render: {}", flycam_render::crate_info());
        }
        Commands::Config => {
            let config = load_config(cli.config.as_deref())?;
            println!("{}", config.to_json()?);
        }
        Commands::Frame { precision } => {
            let config = load_config(cli.config.as_deref())?;
            let mut ctx = FrameContext::from_config(&config)?;
            print_pose("Camera", ctx.camera());

            let mut sink = DebugTextSink::new(precision);
            let transform = ctx.build_transform();
            sink.submit(ctx.frame_index(), &transform);
            print!("{}", sink.output());
        }
        Commands::Simulate {
            script,
            frames,
            turn,
            every_frame,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let inputs = match script {
                Some(path) => load_script(&path)?,
                None => synthesize(frames, turn),
            };

            let mut ctx = FrameContext::from_config(&config)?;
            print_pose("Start", ctx.camera());

            let mut recording = RecordingSink::new();
            let mut text = DebugTextSink::default();
            for input in &inputs {
                let transform = run_frame(&mut ctx, input, &mut recording);
                if every_frame {
                    text.submit(ctx.frame_index() - 1, &transform);
                }
            }

            print_pose("End", ctx.camera());
            println!("Frames: {}", recording.len());
            if let Some((frame, transform)) = recording.frames().last().filter(|_| !every_frame) {
                text.submit(*frame, transform);
            }
            print!("{}", text.output());
        }
    }

    Ok(())
}
