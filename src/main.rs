//! Headless sandbox driver
//!
//! Builds the walled arena, spawns agents, and drives them at a scripted
//! roaming target with a fixed timestep. Stands in for the windowed build,
//! where the target would be the pointer position.

use std::path::Path;

use glam::Vec2;

use arena_bots::Settings;
use arena_bots::consts::{SIM_DT, WORLD_HEIGHT, WORLD_WIDTH};
use arena_bots::sim::Arena;

fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(Path::new(&path)),
        None => Settings::default(),
    };
    log::info!("arena-bots starting: {settings:?}");

    let mut arena = Arena::new(settings.seed);
    for _ in 0..settings.agent_count {
        arena.spawn_agent(settings.agent_radius);
    }

    for tick in 0..settings.ticks {
        let target = roaming_target(tick as f32 * SIM_DT);
        arena.tick(target, SIM_DT);

        if settings.vision_interval > 0 && tick % settings.vision_interval == 0 {
            arena.refresh_visibility();
            for agent in arena.agents() {
                log::debug!(
                    "tick {tick}: agent {} sees {:?}",
                    agent.id.0,
                    arena.visible_from(agent.id)
                );
            }
        }
    }

    for agent in arena.agents() {
        let pose = agent.pose(arena.world());
        log::info!(
            "agent {} finished at ({:.2}, {:.2}), heading {:.2}",
            agent.id.0,
            pose.position.x,
            pose.position.y,
            pose.angle
        );
    }
}

/// Target point tracing a slow ellipse around the arena center.
fn roaming_target(t: f32) -> Vec2 {
    let center = Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0);
    center + Vec2::new(
        WORLD_WIDTH * 0.3 * (0.2 * t).cos(),
        WORLD_HEIGHT * 0.3 * (0.2 * t).sin(),
    )
}
