//! Arena Bots - a bounded-arena 2D physics sandbox
//!
//! Circular agents roam a walled arena under autonomous steering, with
//! rigid-body dynamics delegated to rapier2d.
//!
//! Core modules:
//! - `sim`: simulation core (steering, commands, visibility, physics world)
//! - `settings`: run configuration

pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Arena dimensions (engine units)
    pub const WORLD_WIDTH: f32 = 50.0;
    pub const WORLD_HEIGHT: f32 = 30.0;
    pub const WALL_THICKNESS: f32 = 1.0 / 3.0;

    /// Agent body defaults
    pub const AGENT_RADIUS: f32 = 0.65;
    pub const AGENT_DENSITY: f32 = 1000.0;
    pub const AGENT_FRICTION: f32 = 0.05;
    /// Linear and angular damping; released controls coast to a stop
    pub const AGENT_DAMPING: f32 = 5.0;

    /// Linear acceleration one thrust bit requests (units/s^2)
    pub const TARGET_ACCELERATION: f32 = 100.0;
    /// Angular acceleration one turn bit requests (rad/s^2)
    pub const TARGET_ANGULAR_ACCELERATION: f32 = 30.0;

    /// Bot planner limits
    pub const MAX_ACCELERATION_BOT: f32 = 10.0;
    /// Degrees of heading swing per planning step
    pub const MAX_ANGULAR_SPEED_BOT: f32 = 10.0;
    pub const MAX_SPEED_BOT: f32 = 20.0;
}

/// Normalize an angle into [-π, π] by repeated ±2π correction
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle > PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
