//! Bundled kinematic world backend.
//!
//! `SimWorld` is the reference [`Simulator`]: actors are rigid boxes on the
//! [`LaneMap`] road, advanced by straight velocity integration each step.
//! No tyre model, no controller lag — maneuvers command velocities and the
//! world obeys exactly.  That is deliberate: scenario logic (triggers,
//! behavior trees, criteria) is what is under test here, and an exact world
//! keeps those tests deterministic.
//!
//! Actor storage is a `BTreeMap` so iteration order (and therefore contact
//! checks and spawn-blockage checks) is identical across runs.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;

use sr_core::{Aabb, ActorId, ActorRole, Transform, Vec2};

use crate::error::{SpawnError, WorldError};
use crate::map::LaneMap;
use crate::world::{ActorFactory, Simulator, WorldControl, WorldView};

/// Collision-box half extents applied to every spawned actor, metres.
/// A mid-size sedan's footprint.
pub const DEFAULT_HALF_EXTENTS: Vec2 = Vec2 { x: 2.4, y: 1.0 };

/// Blueprint names pre-loaded by [`SimWorldBuilder::default_catalog`].
pub const DEFAULT_BLUEPRINTS: &[&str] = &[
    "vehicle.tesla.model3",
    "vehicle.toyota.prius",
    "vehicle.lincoln.mkz2017",
    "vehicle.audi.tt",
    "vehicle.nissan.patrol",
];

// ── ActorState ────────────────────────────────────────────────────────────────

/// Full kinematic state of one actor.
#[derive(Clone, Debug)]
pub struct ActorState {
    pub transform:    Transform,
    pub velocity:     Vec2,
    pub half_extents: Vec2,
    pub role:         ActorRole,
    pub blueprint:    String,
    /// Tag only — `SimWorld`'s ambient traffic holds commanded velocity.
    pub autopilot:    bool,
}

impl ActorState {
    /// Collision box at the current position.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.transform.position, self.half_extents)
    }
}

// ── SimWorld ──────────────────────────────────────────────────────────────────

/// The bundled kinematic backend.  Construct via [`SimWorldBuilder`].
pub struct SimWorld {
    map:        LaneMap,
    actors:     BTreeMap<ActorId, ActorState>,
    blueprints: FxHashSet<String>,
    next_id:    u32,
}

impl SimWorld {
    pub fn builder() -> SimWorldBuilder {
        SimWorldBuilder::new()
    }

    /// Number of live actors.
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Direct state access, mostly for tests and report writers.
    pub fn actor(&self, id: ActorId) -> Option<&ActorState> {
        self.actors.get(&id)
    }

    /// `true` if `blueprint` is in the catalog.
    pub fn has_blueprint(&self, blueprint: &str) -> bool {
        self.blueprints.contains(blueprint)
    }

    fn get(&self, actor: ActorId) -> Result<&ActorState, WorldError> {
        self.actors.get(&actor).ok_or(WorldError::ActorNotFound(actor))
    }

    fn get_mut(&mut self, actor: ActorId) -> Result<&mut ActorState, WorldError> {
        self.actors.get_mut(&actor).ok_or(WorldError::ActorNotFound(actor))
    }
}

impl WorldView for SimWorld {
    fn map(&self) -> &LaneMap {
        &self.map
    }

    fn transform(&self, actor: ActorId) -> Result<Transform, WorldError> {
        Ok(self.get(actor)?.transform)
    }

    fn velocity(&self, actor: ActorId) -> Result<Vec2, WorldError> {
        Ok(self.get(actor)?.velocity)
    }

    fn bounding_box(&self, actor: ActorId) -> Result<Aabb, WorldError> {
        Ok(self.get(actor)?.aabb())
    }

    fn is_alive(&self, actor: ActorId) -> bool {
        self.actors.contains_key(&actor)
    }

    fn actors(&self) -> Vec<ActorId> {
        // BTreeMap keys are already ascending.
        self.actors.keys().copied().collect()
    }
}

impl WorldControl for SimWorld {
    fn set_velocity(&mut self, actor: ActorId, vel: Vec2) -> Result<(), WorldError> {
        self.get_mut(actor)?.velocity = vel;
        Ok(())
    }

    fn set_transform(&mut self, actor: ActorId, tf: Transform) -> Result<(), WorldError> {
        self.get_mut(actor)?.transform = tf;
        Ok(())
    }

    fn set_autopilot(&mut self, actor: ActorId, enabled: bool) -> Result<(), WorldError> {
        self.get_mut(actor)?.autopilot = enabled;
        Ok(())
    }
}

impl ActorFactory for SimWorld {
    fn spawn(
        &mut self,
        blueprint: &str,
        at:        Transform,
        role:      ActorRole,
    ) -> Result<ActorId, SpawnError> {
        if !self.blueprints.contains(blueprint) {
            return Err(SpawnError::UnknownBlueprint(blueprint.to_string()));
        }

        let footprint = Aabb::new(at.position, DEFAULT_HALF_EXTENTS);
        if self.actors.values().any(|s| s.aabb().intersects(footprint)) {
            return Err(SpawnError::Blocked(at.position));
        }

        let id = ActorId(self.next_id);
        self.next_id += 1;
        self.actors.insert(id, ActorState {
            transform:    at,
            velocity:     Vec2::ZERO,
            half_extents: DEFAULT_HALF_EXTENTS,
            role,
            blueprint:    blueprint.to_string(),
            autopilot:    false,
        });
        Ok(id)
    }

    fn destroy(&mut self, actor: ActorId) -> Result<(), WorldError> {
        self.actors
            .remove(&actor)
            .map(|_| ())
            .ok_or(WorldError::ActorNotFound(actor))
    }
}

impl Simulator for SimWorld {
    fn step(&mut self, dt_ms: u32) -> Result<(), WorldError> {
        let dt = dt_ms as f32 / 1_000.0;
        for state in self.actors.values_mut() {
            state.transform.position = state.transform.position + state.velocity * dt;
        }
        Ok(())
    }
}

// ── SimWorldBuilder ───────────────────────────────────────────────────────────

/// Construct a [`SimWorld`]: pick a road, load a blueprint catalog, build.
///
/// # Example
///
/// ```
/// use sr_world::{LaneMap, SimWorld};
///
/// let world = SimWorld::builder()
///     .map(LaneMap::highway(3))
///     .default_catalog()
///     .build();
/// assert!(world.has_blueprint("vehicle.tesla.model3"));
/// ```
pub struct SimWorldBuilder {
    map:        LaneMap,
    blueprints: FxHashSet<String>,
}

impl SimWorldBuilder {
    pub fn new() -> Self {
        Self {
            map:        LaneMap::highway(1),
            blueprints: FxHashSet::default(),
        }
    }

    /// Replace the default single-lane road.
    pub fn map(mut self, map: LaneMap) -> Self {
        self.map = map;
        self
    }

    /// Register one spawnable blueprint name.
    pub fn blueprint(mut self, name: impl Into<String>) -> Self {
        self.blueprints.insert(name.into());
        self
    }

    /// Register the stock vehicle catalog ([`DEFAULT_BLUEPRINTS`]).
    pub fn default_catalog(mut self) -> Self {
        self.blueprints
            .extend(DEFAULT_BLUEPRINTS.iter().map(|s| s.to_string()));
        self
    }

    /// Consume the builder and produce an empty world.
    pub fn build(self) -> SimWorld {
        SimWorld {
            map:        self.map,
            actors:     BTreeMap::new(),
            blueprints: self.blueprints,
            next_id:    0,
        }
    }
}

impl Default for SimWorldBuilder {
    fn default() -> Self {
        Self::new()
    }
}
