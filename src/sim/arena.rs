//! The arena: physics world, walls, and the agent roster
//!
//! Ties the pieces together the way the per-tick driver consumes them:
//! plan and actuate every agent, step the engine once, and refresh the
//! visible-neighbor sets on demand. Everything here runs on one thread in
//! tick order, so raycasts never interleave with an engine step.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::agent::{Agent, AgentId, IdAllocator};
use super::steering;
use super::vision;
use super::world::World;
use crate::consts::{WALL_THICKNESS, WORLD_HEIGHT, WORLD_WIDTH};

pub struct Arena {
    world: World,
    agents: Vec<Agent>,
    ids: IdAllocator,
    rng: Pcg32,
    /// Visible-neighbor sets, parallel to `agents`; wholly replaced on
    /// each refresh
    visibility: Vec<Vec<AgentId>>,
    time_ticks: u64,
}

impl Arena {
    /// Build a walled, gravity-free arena. `seed` drives spawn placement.
    pub fn new(seed: u64) -> Self {
        let mut world = World::new();

        let (w, h, t) = (WORLD_WIDTH, WORLD_HEIGHT, WALL_THICKNESS);
        world.add_wall(Vec2::new(w / 2.0, t / 2.0), Vec2::new(w / 2.0, t / 2.0));
        world.add_wall(Vec2::new(w / 2.0, h - t / 2.0), Vec2::new(w / 2.0, t / 2.0));
        world.add_wall(Vec2::new(w - t / 2.0, h / 2.0), Vec2::new(t / 2.0, h / 2.0));
        world.add_wall(Vec2::new(t / 2.0, h / 2.0), Vec2::new(t / 2.0, h / 2.0));

        log::info!("arena ready: {w}x{h}, seed {seed}");

        Self {
            world,
            agents: Vec::new(),
            ids: IdAllocator::new(),
            rng: Pcg32::seed_from_u64(seed),
            visibility: Vec::new(),
            time_ticks: 0,
        }
    }

    /// Spawn an agent at a seeded random interior position.
    pub fn spawn_agent(&mut self, radius: f32) -> AgentId {
        let agent = Agent::spawn_random(&mut self.world, &mut self.ids, radius, &mut self.rng);
        let id = agent.id;
        self.agents.push(agent);
        self.visibility.push(Vec::new());
        id
    }

    /// Spawn an agent at an explicit position.
    pub fn spawn_agent_at(&mut self, radius: f32, position: Vec2) -> AgentId {
        let agent = Agent::spawn(&mut self.world, &mut self.ids, radius, position);
        let id = agent.id;
        self.agents.push(agent);
        self.visibility.push(Vec::new());
        id
    }

    /// Advance one fixed step: plan and actuate every agent toward
    /// `target`, then step the engine once.
    pub fn tick(&mut self, target: Vec2, dt: f32) {
        for agent in &self.agents {
            let pose = agent.pose(&self.world);
            let cmd = steering::plan(&pose, target).command();
            agent.apply_command(&mut self.world, cmd);
        }
        self.world.step(dt);
        self.time_ticks += 1;
    }

    /// Recompute every agent's visible-neighbor set.
    pub fn refresh_visibility(&mut self) {
        for (i, agent) in self.agents.iter().enumerate() {
            self.visibility[i] = vision::refresh_visibility(&self.world, agent, &self.agents);
        }
    }

    /// Last refreshed visibility set for `id`, if the agent exists.
    pub fn visible_from(&self, id: AgentId) -> Option<&[AgentId]> {
        self.agents
            .iter()
            .position(|a| a.id == id)
            .map(|i| self.visibility[i].as_slice())
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }
}
