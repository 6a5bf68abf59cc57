//! Narrow rigid-body capability interface consumed by the simulation layer.
//!
//! Only the operations the bridge snapshot actually needs are exposed, so
//! any constraint-solving engine that can honour this contract can sit
//! behind it. The crate ships [`crate::solver::ImpulseWorld`] as the
//! default implementation.

use nalgebra::Vector2;

use crate::geometry::Point;

/// Opaque handle to a rigid body inside a [`RigidWorld`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyHandle(pub(crate) usize);

/// Opaque handle to a constraint inside a [`RigidWorld`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstraintHandle(pub(crate) usize);

/// Collision group tag. Bodies sharing a group never collide with each
/// other; bodies without a group collide with everything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CollisionGroup(pub u32);

/// The rigid-body world contract.
///
/// Position and impulse queries return `None` for unknown handles rather
/// than failing; there are no fatal conditions behind this interface.
pub trait RigidWorld {
    /// Set the constant global acceleration applied to dynamic bodies.
    fn set_gravity(&mut self, gravity: Vector2<f64>);

    /// Add a static body with a thick segment collider.
    fn add_static_segment(
        &mut self,
        start: Point,
        end: Point,
        thickness: f64,
        friction: f64,
        elasticity: f64,
    ) -> BodyHandle;

    /// Add a static body with a circular collider, usable as a constraint
    /// anchor.
    fn add_static_circle(
        &mut self,
        position: Point,
        radius: f64,
        group: Option<CollisionGroup>,
    ) -> BodyHandle;

    /// Add a dynamic body with a circular collider.
    ///
    /// `damping` is the fraction of velocity a body retains per second of
    /// simulated time; `1.0` disables damping.
    fn add_dynamic_circle(
        &mut self,
        position: Point,
        radius: f64,
        mass: f64,
        damping: f64,
        group: Option<CollisionGroup>,
    ) -> BodyHandle;

    /// Add a rigid pin constraint between two bodies, locking their
    /// separation at its current value while permitting rotation.
    ///
    /// Returns `None` when either handle is unknown.
    fn add_pin(&mut self, a: BodyHandle, b: BodyHandle) -> Option<ConstraintHandle>;

    /// Advance the world by `dt` seconds.
    fn step(&mut self, dt: f64);

    /// Current position of a body, or `None` for an unknown handle.
    fn body_position(&self, body: BodyHandle) -> Option<Point>;

    /// Magnitude of the corrective impulse a constraint accumulated during
    /// the most recent [`RigidWorld::step`], or `None` for an unknown
    /// handle.
    fn constraint_impulse(&self, constraint: ConstraintHandle) -> Option<f64>;
}
