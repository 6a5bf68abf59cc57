//! Bridges a frozen bridge design into a rigid-body world and reads it
//! back.
//!
//! The snapshot is rebuilt from scratch every time simulate mode is
//! entered and discarded when it ends; the design itself is never mutated
//! from here. Stress is a magnitude-only proxy derived from constraint
//! impulses, so tension and compression are not distinguished.

use std::collections::HashMap;

use nalgebra::Vector2;
use tracing::debug;

use crate::design::{BridgeDesign, MemberId, PointId};
use crate::geometry::Point;
use crate::level::Level;
use crate::physics::{BodyHandle, CollisionGroup, ConstraintHandle, RigidWorld};
use crate::solver::ImpulseWorld;

/// Constant downward gravity, in distance units per second squared.
pub const GRAVITY: f64 = 900.0;
/// Fixed number of equal sub-steps per advance.
pub const SUBSTEPS: u32 = 5;
/// Impulse magnitude at which a member's stress reading saturates at 1.0.
pub const STRESS_IMPULSE_LIMIT: f64 = 2000.0;

/// Mass of a dynamic joint body.
const JOINT_MASS: f64 = 1.0;
/// Collider radius of a dynamic joint body.
const JOINT_RADIUS: f64 = 3.0;
/// Fraction of velocity a joint body retains per second. Kept low to
/// suppress oscillation of the constraint lattice.
const JOINT_DAMPING: f64 = 0.1;
/// Collider radius of a static anchor body.
const ANCHOR_RADIUS: f64 = 5.0;
/// Half-width of a terrain bank collider.
const BANK_THICKNESS: f64 = 4.0;
/// Friction of terrain banks.
const BANK_FRICTION: f64 = 1.0;
/// Restitution of terrain banks.
const BANK_ELASTICITY: f64 = 0.0;
/// Shared group so structural bodies never physically collide with each
/// other; they interact through pins only.
const STRUCTURE_GROUP: CollisionGroup = CollisionGroup(1);

/// A live physics snapshot of a design over a level.
#[derive(Debug)]
pub struct Simulation<W: RigidWorld = ImpulseWorld> {
    /// The rigid-body world.
    world: W,
    /// Body handle per structural point.
    bodies: HashMap<PointId, BodyHandle>,
    /// Constraint handle per member.
    constraints: HashMap<MemberId, ConstraintHandle>,
}

impl Simulation<ImpulseWorld> {
    /// Build a snapshot of `design` over `level` using the default engine.
    #[must_use]
    pub fn new(level: &Level, design: &BridgeDesign) -> Self {
        Self::with_world(ImpulseWorld::new(), level, design)
    }
}

impl<W: RigidWorld> Simulation<W> {
    /// Build a snapshot of `design` over `level` inside the supplied
    /// world.
    pub fn with_world(mut world: W, level: &Level, design: &BridgeDesign) -> Self {
        world.set_gravity(Vector2::new(0.0, GRAVITY));

        for bank in level.banks() {
            world.add_static_segment(
                bank.start,
                bank.end,
                BANK_THICKNESS,
                BANK_FRICTION,
                BANK_ELASTICITY,
            );
        }

        let mut bodies = HashMap::new();
        for anchor in level.anchors() {
            let handle =
                world.add_static_circle(anchor.position, ANCHOR_RADIUS, Some(STRUCTURE_GROUP));
            bodies.insert(PointId::Anchor(anchor.id), handle);
        }
        for (joint, position) in design.joints() {
            let handle = world.add_dynamic_circle(
                position,
                JOINT_RADIUS,
                JOINT_MASS,
                JOINT_DAMPING,
                Some(STRUCTURE_GROUP),
            );
            bodies.insert(PointId::Joint(joint), handle);
        }

        let mut constraints = HashMap::new();
        for member in design.members() {
            let (Some(&a), Some(&b)) = (bodies.get(&member.a), bodies.get(&member.b)) else {
                continue;
            };
            if let Some(handle) = world.add_pin(a, b) {
                constraints.insert(member.id, handle);
            }
        }

        debug!(
            bodies = bodies.len(),
            constraints = constraints.len(),
            banks = level.banks().len(),
            "simulation world built"
        );
        Self {
            world,
            bodies,
            constraints,
        }
    }

    /// Advance the world by `dt` seconds, split into [`SUBSTEPS`] equal
    /// sub-steps for solver stability under gravity loading.
    pub fn step(&mut self, dt: f64) {
        let sub = dt / f64::from(SUBSTEPS);
        for _ in 0..SUBSTEPS {
            self.world.step(sub);
        }
    }

    /// Current position of a structural point's body, or `None` for an
    /// unknown identifier.
    #[must_use]
    pub fn position(&self, id: PointId) -> Option<Point> {
        self.world.body_position(*self.bodies.get(&id)?)
    }

    /// Normalized stress of a member in `[0, 1]`, or `None` for an unknown
    /// identifier.
    #[must_use]
    pub fn stress(&self, id: MemberId) -> Option<f64> {
        let impulse = self.world.constraint_impulse(*self.constraints.get(&id)?)?;
        Some((impulse / STRESS_IMPULSE_LIMIT).min(1.0))
    }

    /// Stress readings for every simulated member, ordered by member
    /// identifier.
    #[must_use]
    pub fn member_stresses(&self) -> Vec<(MemberId, f64)> {
        let mut readings: Vec<(MemberId, f64)> = self
            .constraints
            .keys()
            .filter_map(|&id| self.stress(id).map(|stress| (id, stress)))
            .collect();
        readings.sort_by_key(|(id, _)| *id);
        readings
    }
}
