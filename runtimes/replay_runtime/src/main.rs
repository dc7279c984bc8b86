// Replay Runtime - headless pull-locomotion playback
//
// Feeds a recorded input trace through the parkour session frame by frame, so
// locomotion tuning can be compared without a headset.

mod trace;

use anyhow::Result;
use clap::Parser;
use engine::{logging::init_logging_with, profile, scoped_log};
use parkourvr::{Effect, GameConfig, ParkourSession, Time, config::LOG_ENV_VAR};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

use trace::{InputTrace, to_vec};

#[derive(Parser)]
#[command(name = "replay_runtime")]
#[command(about = "Replay a recorded input trace through pull locomotion")]
struct Args {
    /// Input trace (JSON) to replay
    trace: PathBuf,

    /// Config file (TOML); defaults to parkour.toml when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every effect emitted per frame
    #[arg(long)]
    log_effects: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = GameConfig::load(args.config.as_deref())?;
    if args.log_effects {
        config
            .logging
            .scopes
            .insert("effects".to_string(), "debug".to_string());
    }
    init_logging_with(&config.logging, LOG_ENV_VAR);

    let trace = InputTrace::load(&args.trace)?;
    info!(
        "Replaying {} frames from {}",
        trace.frames.len(),
        args.trace.display()
    );

    let summary = profile!("replay", run(&config, &trace, args.log_effects));
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn run(config: &GameConfig, trace: &InputTrace, log_effects: bool) -> serde_json::Value {
    let mut session = ParkourSession::new(config, to_vec(trace.spawn));
    for volume in trace.trigger_volumes() {
        session.add_volume(volume);
    }
    if let Some(checkpoint) = trace.checkpoint {
        session.progress.start(to_vec(checkpoint));
    }
    if let Some(first) = trace.frames.first() {
        session.locomotion.prime(&first.input_context());
    }

    let mut time = Time::default();
    let mut sounds = Vec::new();
    let mut pulling_frames = 0;

    for (index, frame) in trace.frames.iter().enumerate() {
        time = Time::from_delta_secs(frame.dt, time.total + time.elapsed);
        let effects = session.tick(&time, &frame.input_context(), &frame.entered_volumes());

        if session.locomotion.state().is_pulling {
            pulling_frames += 1;
        }
        for effect in effects.iter() {
            if log_effects {
                scoped_log!(DEBUG, "effects", frame = index, ?effect, "effect");
            }
            if let Effect::PlaySound { name } = effect {
                sounds.push(name.clone());
            }
        }
    }

    let position = session.player.position;
    let velocity = session.locomotion.state().velocity;
    json!({
        "frames": trace.frames.len(),
        "pulling_frames": pulling_frames,
        "position": [position.x, position.y, position.z],
        "velocity": [velocity.x, velocity.y, velocity.z],
        "stage": session.progress.current_stage,
        "coins": session.progress.coin_count,
        "sounds": sounds,
    })
}
