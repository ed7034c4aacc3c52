//! Agents and their actuation surface
//!
//! An agent is a dynamic circle body plus identity and the mass properties
//! captured once at spawn. The engine owns the body; the agent only holds a
//! handle to query and push against it.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::command::DirectionCommand;
use super::world::{BodyHandle, Pose, World};
use crate::consts::{
    TARGET_ACCELERATION, TARGET_ANGULAR_ACCELERATION, WALL_THICKNESS, WORLD_HEIGHT, WORLD_WIDTH,
};

/// Stable per-agent identity, unique within one allocator's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u32);

/// Monotonic ID source, passed explicitly into agent construction instead
/// of living in process-wide state.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> AgentId {
        let id = AgentId(self.next);
        self.next += 1;
        id
    }
}

/// A dynamic circular body under planner or player control.
pub struct Agent {
    pub id: AgentId,
    pub radius: f32,
    /// Engine-reported mass, captured at spawn and immutable after
    mass: f32,
    /// Engine-reported rotational inertia, captured at spawn
    inertia: f32,
    body: BodyHandle,
}

impl Agent {
    /// Spawn a circle body at `position` and capture its mass properties.
    pub fn spawn(world: &mut World, ids: &mut IdAllocator, radius: f32, position: Vec2) -> Self {
        let body = world.spawn_circle(radius, position);
        let agent = Self {
            id: ids.next_id(),
            radius,
            mass: world.mass(body),
            inertia: world.angular_inertia(body),
            body,
        };
        log::debug!(
            "agent {} spawned at ({:.2}, {:.2}): mass {:.1}, inertia {:.1}",
            agent.id.0,
            position.x,
            position.y,
            agent.mass,
            agent.inertia
        );
        agent
    }

    /// Spawn at a seeded random position inside the walled interior.
    pub fn spawn_random(
        world: &mut World,
        ids: &mut IdAllocator,
        radius: f32,
        rng: &mut Pcg32,
    ) -> Self {
        let margin = WALL_THICKNESS + radius;
        let position = Vec2::new(
            rng.random_range(margin..WORLD_WIDTH - margin),
            rng.random_range(margin..WORLD_HEIGHT - margin),
        );
        Self::spawn(world, ids, radius, position)
    }

    pub fn body(&self) -> BodyHandle {
        self.body
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn inertia(&self) -> f32 {
        self.inertia
    }

    /// Current pose, read fresh from the engine.
    pub fn pose(&self, world: &World) -> Pose {
        world.pose(self.body)
    }

    /// Push a command into the engine as force and torque on the body.
    ///
    /// Torque is scaled by the captured inertia and thrust by the captured
    /// mass, so every agent responds with the same angular and linear
    /// acceleration regardless of its size.
    pub fn apply_command(&self, world: &mut World, cmd: DirectionCommand) {
        let torque = TARGET_ANGULAR_ACCELERATION * self.inertia;
        if cmd.turn_right {
            world.apply_torque(self.body, torque);
        }
        if cmd.turn_left {
            world.apply_torque(self.body, -torque);
        }

        let heading = world.pose(self.body).angle;
        let force = TARGET_ACCELERATION * self.mass * Vec2::from_angle(heading);
        if cmd.forward {
            world.apply_force(self.body, force);
        }
        if cmd.backward {
            world.apply_force(self.body, -force);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_allocator_is_monotonic() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_id(), AgentId(0));
        assert_eq!(ids.next_id(), AgentId(1));
        assert_eq!(ids.next_id(), AgentId(2));
    }

    #[test]
    fn test_spawn_captures_engine_mass_properties() {
        let mut world = World::new();
        let mut ids = IdAllocator::new();
        let agent = Agent::spawn(&mut world, &mut ids, 0.65, Vec2::new(10.0, 10.0));

        assert!(agent.mass() > 0.0);
        assert!(agent.inertia() > 0.0);
        assert_eq!(agent.mass(), world.mass(agent.body()));
        assert_eq!(agent.inertia(), world.angular_inertia(agent.body()));
    }

    #[test]
    fn test_forward_command_accelerates_along_heading() {
        let mut world = World::new();
        let mut ids = IdAllocator::new();
        let agent = Agent::spawn(&mut world, &mut ids, 0.65, Vec2::new(10.0, 10.0));

        let cmd = DirectionCommand {
            forward: true,
            ..Default::default()
        };
        for _ in 0..10 {
            agent.apply_command(&mut world, cmd);
            world.step(1.0 / 60.0);
        }

        let pose = agent.pose(&world);
        assert!(pose.linvel.x > 0.0, "expected +x drift, got {:?}", pose.linvel);
        assert!(pose.linvel.y.abs() < 1e-3);
    }

    #[test]
    fn test_turn_command_rotates_body() {
        let mut world = World::new();
        let mut ids = IdAllocator::new();
        let agent = Agent::spawn(&mut world, &mut ids, 0.65, Vec2::new(10.0, 10.0));

        let cmd = DirectionCommand {
            turn_right: true,
            ..Default::default()
        };
        for _ in 0..10 {
            agent.apply_command(&mut world, cmd);
            world.step(1.0 / 60.0);
        }
        assert!(agent.pose(&world).angle > 0.0);
    }

    #[test]
    fn test_opposing_bits_cancel() {
        let mut world = World::new();
        let mut ids = IdAllocator::new();
        let agent = Agent::spawn(&mut world, &mut ids, 0.65, Vec2::new(10.0, 10.0));

        let cmd = DirectionCommand {
            forward: true,
            backward: true,
            ..Default::default()
        };
        for _ in 0..10 {
            agent.apply_command(&mut world, cmd);
            world.step(1.0 / 60.0);
        }
        assert!(agent.pose(&world).linvel.length() < 1e-6);
    }

    #[test]
    fn test_spawn_random_stays_inside_walls() {
        use rand::SeedableRng;

        let mut world = World::new();
        let mut ids = IdAllocator::new();
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..20 {
            let agent = Agent::spawn_random(&mut world, &mut ids, 0.65, &mut rng);
            let p = agent.pose(&world).position;
            assert!(p.x > WALL_THICKNESS && p.x < WORLD_WIDTH - WALL_THICKNESS);
            assert!(p.y > WALL_THICKNESS && p.y < WORLD_HEIGHT - WALL_THICKNESS);
        }
    }
}
