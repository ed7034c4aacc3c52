//! Thin wrapper over the rapier2d world
//!
//! Owns the rigid-body and collider sets plus the stepping machinery, and
//! exposes the handful of queries the rest of the sim needs: spawn walls and
//! circle bodies, read poses and mass properties, push forces and torques,
//! and run the fixture-level segment scan the visibility resolver relies on.
//! nalgebra types stop at this boundary; everything outward speaks `glam`.

use glam::Vec2;
use rapier2d::prelude::*;

/// Non-owning handle to a body living in the engine's own arena.
pub type BodyHandle = RigidBodyHandle;

/// Instantaneous kinematic state of a body.
///
/// Re-read from the engine each tick, never cached across steps.
#[derive(Debug, Clone, Copy)]
pub struct Pose {
    pub position: Vec2,
    /// Heading in radians, engine convention
    pub angle: f32,
    pub linvel: Vec2,
}

/// Snapshot interface the visibility resolver scans against.
///
/// The `World` impl below is the literal nested iteration over every body's
/// every collider; a spatial index could stand in behind the same trait
/// without touching the resolver.
pub trait WorldSnapshot {
    /// Current position of a body's origin.
    fn body_position(&self, body: BodyHandle) -> Vec2;

    /// Nearest hit fraction in `[0, 1]` along the segment `from -> to`,
    /// ignoring colliders attached to the `skip` bodies. `1.0` means the
    /// segment is clear.
    fn nearest_hit(&self, from: Vec2, to: Vec2, skip: &[BodyHandle]) -> f32;
}

/// The physics world: bodies, colliders, and the rapier stepping pipeline.
pub struct World {
    bodies: RigidBodySet,
    colliders: ColliderSet,
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: BroadPhaseMultiSap,
    narrow_phase: NarrowPhase,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Create an empty, gravity-free world.
    pub fn new() -> Self {
        Self {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            gravity: vector![0.0, 0.0],
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: BroadPhaseMultiSap::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    /// Add a static rectangular wall centered at `center`.
    pub fn add_wall(&mut self, center: Vec2, half_extents: Vec2) -> BodyHandle {
        let body = RigidBodyBuilder::fixed()
            .translation(vector![center.x, center.y])
            .build();
        let handle = self.bodies.insert(body);
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y).build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Add a dynamic circle body with the sandbox's standard material:
    /// dense, low-friction, heavily damped so released keys coast to a stop.
    pub fn spawn_circle(&mut self, radius: f32, position: Vec2) -> BodyHandle {
        use crate::consts::{AGENT_DAMPING, AGENT_DENSITY, AGENT_FRICTION};

        let body = RigidBodyBuilder::dynamic()
            .translation(vector![position.x, position.y])
            .linear_damping(AGENT_DAMPING)
            .angular_damping(AGENT_DAMPING)
            .build();
        let handle = self.bodies.insert(body);
        let collider = ColliderBuilder::ball(radius)
            .density(AGENT_DENSITY)
            .friction(AGENT_FRICTION)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Advance the simulation by `dt` seconds, then clear accumulated
    /// forces so each tick starts from a clean slate.
    pub fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );

        for (_, body) in self.bodies.iter_mut() {
            body.reset_forces(false);
            body.reset_torques(false);
        }
    }

    /// Current pose of a body. Precondition: `handle` is live.
    pub fn pose(&self, handle: BodyHandle) -> Pose {
        let body = &self.bodies[handle];
        Pose {
            position: to_glam(body.translation()),
            angle: body.rotation().angle(),
            linvel: to_glam(body.linvel()),
        }
    }

    /// Engine-reported mass of a body.
    pub fn mass(&self, handle: BodyHandle) -> f32 {
        self.bodies[handle].mass()
    }

    /// Engine-reported rotational inertia of a body.
    pub fn angular_inertia(&self, handle: BodyHandle) -> f32 {
        self.bodies[handle]
            .mass_properties()
            .local_mprops
            .principal_inertia()
    }

    /// Accumulate a force at the body's center of mass for this tick.
    pub fn apply_force(&mut self, handle: BodyHandle, force: Vec2) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.add_force(vector![force.x, force.y], true);
        }
    }

    /// Accumulate a torque on the body for this tick.
    pub fn apply_torque(&mut self, handle: BodyHandle, torque: f32) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.add_torque(torque, true);
        }
    }
}

impl WorldSnapshot for World {
    fn body_position(&self, body: BodyHandle) -> Vec2 {
        to_glam(self.bodies[body].translation())
    }

    fn nearest_hit(&self, from: Vec2, to: Vec2, skip: &[BodyHandle]) -> f32 {
        // Segment cast phrased as a ray with unnormalized direction, so a
        // reported time of impact is directly a fraction along the segment.
        let ray = Ray::new(
            point![from.x, from.y],
            vector![to.x - from.x, to.y - from.y],
        );

        let mut max_fraction = 1.0;
        for (handle, body) in self.bodies.iter() {
            if skip.contains(&handle) {
                continue;
            }
            for &collider_handle in body.colliders() {
                let collider = &self.colliders[collider_handle];
                if let Some(fraction) =
                    collider
                        .shape()
                        .cast_ray(collider.position(), &ray, max_fraction, true)
                {
                    if fraction < max_fraction {
                        max_fraction = fraction;
                    }
                }
            }
        }
        max_fraction
    }
}

fn to_glam(v: &Vector<Real>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_spawn_circle_reports_disk_mass_properties() {
        use crate::consts::AGENT_DENSITY;

        let mut world = World::new();
        let radius = 0.65;
        let handle = world.spawn_circle(radius, Vec2::new(3.0, 4.0));

        let expected_mass = AGENT_DENSITY * PI * radius * radius;
        let mass = world.mass(handle);
        assert!(
            (mass - expected_mass).abs() / expected_mass < 1e-3,
            "mass {mass} vs expected {expected_mass}"
        );

        // Solid disk: I = m r^2 / 2
        let expected_inertia = expected_mass * radius * radius / 2.0;
        let inertia = world.angular_inertia(handle);
        assert!(
            (inertia - expected_inertia).abs() / expected_inertia < 1e-3,
            "inertia {inertia} vs expected {expected_inertia}"
        );
    }

    #[test]
    fn test_pose_reflects_spawn_position() {
        let mut world = World::new();
        let handle = world.spawn_circle(0.5, Vec2::new(3.0, 4.0));
        let pose = world.pose(handle);
        assert!((pose.position - Vec2::new(3.0, 4.0)).length() < 1e-6);
        assert_eq!(pose.angle, 0.0);
        assert_eq!(pose.linvel, Vec2::ZERO);
    }

    #[test]
    fn test_force_moves_body_on_step() {
        let mut world = World::new();
        let handle = world.spawn_circle(0.5, Vec2::new(5.0, 5.0));
        for _ in 0..10 {
            world.apply_force(handle, Vec2::new(1.0e5, 0.0));
            world.step(1.0 / 60.0);
        }
        let pose = world.pose(handle);
        assert!(pose.linvel.x > 0.0);
        assert!(pose.position.x > 5.0);
    }

    #[test]
    fn test_torque_spins_body_on_step() {
        let mut world = World::new();
        let handle = world.spawn_circle(0.5, Vec2::new(5.0, 5.0));
        for _ in 0..10 {
            world.apply_torque(handle, 1.0e4);
            world.step(1.0 / 60.0);
        }
        assert!(world.pose(handle).angle > 0.0);
    }

    #[test]
    fn test_nearest_hit_clear_segment() {
        let world = World::new();
        assert_eq!(
            world.nearest_hit(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), &[]),
            1.0
        );
    }

    #[test]
    fn test_nearest_hit_wall_blocks_segment() {
        let mut world = World::new();
        world.add_wall(Vec2::new(5.0, 0.0), Vec2::new(0.25, 2.0));

        let hit = world.nearest_hit(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), &[]);
        assert!(hit < 1.0);
        // Near face of the wall sits at x = 4.75 on a 10-long segment.
        assert!((hit - 0.475).abs() < 1e-3);

        // Segment passing above the wall is clear.
        let clear = world.nearest_hit(Vec2::new(0.0, 3.0), Vec2::new(10.0, 3.0), &[]);
        assert_eq!(clear, 1.0);
    }

    #[test]
    fn test_nearest_hit_skips_listed_bodies() {
        let mut world = World::new();
        let blocker = world.spawn_circle(0.5, Vec2::new(5.0, 0.0));

        let blocked = world.nearest_hit(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), &[]);
        assert!(blocked < 1.0);

        let skipped = world.nearest_hit(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), &[blocker]);
        assert_eq!(skipped, 1.0);
    }
}
