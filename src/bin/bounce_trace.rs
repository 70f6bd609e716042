//! Headless trace of the animation loop.
//! Steps the loop without a window and prints the sampled frames.
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use chroma_bounce::rendering::{FrameRecord, RecordingRenderer};
use chroma_bounce::AnimationLoop;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Ron,
}

#[derive(Parser, Debug)]
#[command(about = "Run the bouncing sphere headlessly and print its trajectory", version)]
struct Args {
    /// Number of frame steps to run.
    #[arg(long, default_value_t = 600)]
    frames: u64,
    /// Keep every Nth frame.
    #[arg(long, default_value_t = 1)]
    every: u64,
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(Serialize)]
struct Trace<'a> {
    frames: u64,
    contacts: u64,
    corner_hits: u64,
    final_velocity: [f32; 2],
    final_color_index: usize,
    records: &'a [FrameRecord],
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut anim = AnimationLoop::default();
    let mut recorder = RecordingRenderer::new(args.every);
    let mut corner_hits = 0u64;
    for _ in 0..args.frames {
        if anim.frame(&mut recorder).is_corner_hit() {
            corner_hits += 1;
        }
    }

    let s = anim.state();
    let trace = Trace {
        frames: anim.frame_count(),
        contacts: anim.contact_count(),
        corner_hits,
        final_velocity: [s.velocity.x, s.velocity.y],
        final_color_index: s.color_index(),
        records: &recorder.records,
    };
    let out = match args.format {
        Format::Json => serde_json::to_string_pretty(&trace).context("serialize trace as JSON")?,
        Format::Ron => ron::ser::to_string_pretty(&trace, ron::ser::PrettyConfig::default())
            .context("serialize trace as RON")?,
    };
    println!("{out}");
    eprintln!(
        "Traced {} frames ({} kept): {} contacts, {} corner hits, final pos=({:.1},{:.1}) color={}",
        trace.frames,
        recorder.records.len(),
        trace.contacts,
        trace.corner_hits,
        s.position.x,
        s.position.y,
        trace.final_color_index
    );
    Ok(())
}
