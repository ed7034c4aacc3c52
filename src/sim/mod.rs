//! Simulation core
//!
//! Single-threaded, frame-stepped: each tick plans and actuates every
//! agent, then advances the physics world once. Raycast queries run
//! strictly between steps so they always see a consistent snapshot.
//! No rendering or platform dependencies in here.

pub mod agent;
pub mod arena;
pub mod command;
pub mod steering;
pub mod vision;
pub mod world;

pub use agent::{Agent, AgentId, IdAllocator};
pub use arena::Arena;
pub use command::DirectionCommand;
pub use steering::{Steering, plan};
pub use vision::refresh_visibility;
pub use world::{BodyHandle, Pose, World, WorldSnapshot};
