//! Headless simulation entry point.
mod config;
mod world;

use anyhow::{Context, Result};
use npc::{Agent, AgentConfig};

use config::SimConfig;
use world::{Boy, World};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env();
    let agent_config = match &config.agent_config {
        Some(path) => AgentConfig::load_from_file(path)
            .with_context(|| format!("loading agent config {}", path.display()))?,
        None => AgentConfig::default(),
    };

    let zombie = Agent::spawn_random(&agent_config, config.seed)?;
    let mut world = World::new(zombie, Boy::default(), config.pickup_interval);
    let dt = config.frame_time();

    tracing::info!(
        frames = config.frames,
        frame_rate = config.frame_rate,
        seed = config.seed,
        wander = %agent_config.wander,
        "simulation started"
    );

    for _ in 0..config.frames {
        let status = world
            .step(dt)
            .with_context(|| format!("zombie update failed on frame {}", world.frame()))?;

        if world.frame() % config.log_every == 0 {
            let zombie = &world.zombie;
            let pos = zombie.position();
            tracing::info!(
                frame = world.frame(),
                %status,
                state = zombie.motion().label(),
                x = pos.x.round(),
                y = pos.y.round(),
                target = ?zombie.target(),
                zombie_score = zombie.score(),
                boy_score = world.boy.score,
                "tick"
            );
        }
    }

    tracing::info!(frames = world.frame(), "simulation finished");
    Ok(())
}
