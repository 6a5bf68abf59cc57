//! Default impulse-based constraint engine behind [`RigidWorld`].
//!
//! Semi-implicit Euler integration, a fixed number of sequential-impulse
//! passes over the pin constraints with Baumgarte positional bias, and
//! zero-restitution circle contacts against static segment terrain. Dynamic
//! circles are treated as point masses: pins and contacts act through the
//! body centre, so the rotational state of a small node never influences
//! the structure.

use nalgebra::Vector2;
use tracing::trace;

use crate::geometry::Point;
use crate::physics::{BodyHandle, CollisionGroup, ConstraintHandle, RigidWorld};

/// Velocity-solver passes per step.
const SOLVER_ITERATIONS: usize = 8;
/// Fraction of positional error fed back into the pin velocity bias.
const BAUMGARTE: f64 = 0.2;
/// Penetration below this depth is ignored by the projection pass.
const PENETRATION_SLOP: f64 = 0.01;

/// Collider attached to a body.
#[derive(Clone, Copy, Debug)]
enum Shape {
    /// Circular collider of the given radius.
    Circle {
        /// Collider radius.
        radius: f64,
    },
    /// Thick segment collider, stored in world coordinates (static only).
    Segment {
        /// One endpoint.
        start: Vector2<f64>,
        /// The other endpoint.
        end: Vector2<f64>,
        /// Half-width of the collider.
        thickness: f64,
    },
}

/// One rigid body. Static bodies carry `inv_mass == 0.0`.
#[derive(Clone, Copy, Debug)]
struct Body {
    /// Centre position; for segments, the midpoint.
    position: Vector2<f64>,
    /// Linear velocity.
    velocity: Vector2<f64>,
    /// Inverse mass, zero for static bodies.
    inv_mass: f64,
    /// Fraction of velocity retained per second.
    damping: f64,
    /// Collision group, if any.
    group: Option<CollisionGroup>,
    /// Attached collider.
    shape: Shape,
    /// Contact friction coefficient.
    friction: f64,
    /// Contact restitution.
    elasticity: f64,
}

impl Body {
    /// Whether this body responds to forces.
    fn is_dynamic(&self) -> bool {
        self.inv_mass > 0.0
    }
}

/// A rigid distance constraint between two body centres.
#[derive(Clone, Copy, Debug)]
struct Pin {
    /// Index of the first body.
    a: usize,
    /// Index of the second body.
    b: usize,
    /// Separation locked in at creation.
    rest_length: f64,
    /// Corrective impulse magnitude accumulated during the current step.
    accumulated: f64,
}

/// Sequential-impulse rigid-body world.
#[derive(Debug, Default)]
pub struct ImpulseWorld {
    /// Global acceleration applied to dynamic bodies.
    gravity: Vector2<f64>,
    /// All bodies, indexed by handle.
    bodies: Vec<Body>,
    /// All pin constraints, indexed by handle.
    pins: Vec<Pin>,
}

impl ImpulseWorld {
    /// Create an empty world with zero gravity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bodies in the world.
    #[must_use]
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Number of pin constraints in the world.
    #[must_use]
    pub fn constraint_count(&self) -> usize {
        self.pins.len()
    }

    /// Whether two bodies are allowed to collide.
    fn collides(a: &Body, b: &Body) -> bool {
        match (a.group, b.group) {
            (Some(left), Some(right)) => left != right,
            _ => true,
        }
    }

    /// One velocity pass over every pin constraint.
    fn solve_pins(&mut self, dt: f64) {
        for pin in &mut self.pins {
            let body_a = self.bodies[pin.a];
            let body_b = self.bodies[pin.b];
            let inv_mass_sum = body_a.inv_mass + body_b.inv_mass;
            if inv_mass_sum == 0.0 {
                continue;
            }
            let delta = body_b.position - body_a.position;
            let length = delta.norm();
            if length == 0.0 {
                continue;
            }
            let normal = delta / length;
            let error = length - pin.rest_length;
            let relative = (body_b.velocity - body_a.velocity).dot(&normal);
            let lambda = -(relative + BAUMGARTE * error / dt) / inv_mass_sum;

            self.bodies[pin.a].velocity -= normal * (lambda * body_a.inv_mass);
            self.bodies[pin.b].velocity += normal * (lambda * body_b.inv_mass);
            pin.accumulated += lambda.abs();
        }
    }

    /// One velocity pass over circle contacts (against segments and other
    /// circles). Zero-restitution normal impulses with a tangential
    /// friction clamp.
    fn solve_contacts(&mut self) {
        for index in 0..self.bodies.len() {
            let body = self.bodies[index];
            let (Shape::Circle { radius }, true) = (body.shape, body.is_dynamic()) else {
                continue;
            };
            for other_index in 0..self.bodies.len() {
                if other_index == index {
                    continue;
                }
                let other = self.bodies[other_index];
                if !Self::collides(&body, &other) {
                    continue;
                }
                let Some((normal, depth)) = contact_normal(&self.bodies[index], radius, &other)
                else {
                    continue;
                };
                if depth <= 0.0 {
                    continue;
                }
                let relative = self.bodies[index].velocity - other.velocity;
                let approaching = relative.dot(&normal);
                if approaching >= 0.0 {
                    continue;
                }
                let inv_mass_sum = body.inv_mass + other.inv_mass;
                let restitution = body.elasticity.min(other.elasticity);
                let normal_impulse = -(1.0 + restitution) * approaching / inv_mass_sum;

                let tangent = Vector2::new(-normal.y, normal.x);
                let sliding = relative.dot(&tangent);
                let friction = body.friction.min(other.friction);
                let max_friction = friction * normal_impulse;
                let tangent_impulse = (-sliding / inv_mass_sum).clamp(-max_friction, max_friction);

                let impulse = normal * normal_impulse + tangent * tangent_impulse;
                self.bodies[index].velocity += impulse * body.inv_mass;
                if other.is_dynamic() {
                    self.bodies[other_index].velocity -= impulse * other.inv_mass;
                }
            }
        }
    }

    /// Push penetrating circles back out after integration.
    fn resolve_penetrations(&mut self) {
        for index in 0..self.bodies.len() {
            let body = self.bodies[index];
            let (Shape::Circle { radius }, true) = (body.shape, body.is_dynamic()) else {
                continue;
            };
            for other_index in 0..self.bodies.len() {
                if other_index == index {
                    continue;
                }
                let other = self.bodies[other_index];
                if !Self::collides(&body, &other) {
                    continue;
                }
                let Some((normal, depth)) = contact_normal(&self.bodies[index], radius, &other)
                else {
                    continue;
                };
                if depth <= PENETRATION_SLOP {
                    continue;
                }
                let inv_mass_sum = body.inv_mass + other.inv_mass;
                let correction = normal * (depth / inv_mass_sum);
                self.bodies[index].position += correction * body.inv_mass;
                if other.is_dynamic() {
                    self.bodies[other_index].position -= correction * other.inv_mass;
                }
            }
        }
    }
}

/// Contact normal (pointing towards the circle) and penetration depth of a
/// dynamic circle against another body, or `None` when the pair is
/// separated or unsupported.
fn contact_normal(circle: &Body, radius: f64, other: &Body) -> Option<(Vector2<f64>, f64)> {
    match other.shape {
        Shape::Circle { radius: other_radius } => {
            let delta = circle.position - other.position;
            let distance = delta.norm();
            let depth = radius + other_radius - distance;
            if depth <= 0.0 || distance == 0.0 {
                return None;
            }
            Some((delta / distance, depth))
        }
        Shape::Segment {
            start,
            end,
            thickness,
        } => {
            let axis = end - start;
            let length_sq = axis.norm_squared();
            let to_circle = circle.position - start;
            let t = if length_sq == 0.0 {
                0.0
            } else {
                (to_circle.dot(&axis) / length_sq).clamp(0.0, 1.0)
            };
            let closest = start + axis * t;
            let delta = circle.position - closest;
            let distance = delta.norm();
            let depth = radius + thickness - distance;
            if depth <= 0.0 {
                return None;
            }
            if distance == 0.0 {
                // Centre exactly on the segment axis; push straight up.
                return Some((Vector2::new(0.0, -1.0), depth));
            }
            Some((delta / distance, depth))
        }
    }
}

impl RigidWorld for ImpulseWorld {
    fn set_gravity(&mut self, gravity: Vector2<f64>) {
        self.gravity = gravity;
    }

    fn add_static_segment(
        &mut self,
        start: Point,
        end: Point,
        thickness: f64,
        friction: f64,
        elasticity: f64,
    ) -> BodyHandle {
        let start = start.to_vector();
        let end = end.to_vector();
        self.bodies.push(Body {
            position: (start + end) * 0.5,
            velocity: Vector2::zeros(),
            inv_mass: 0.0,
            damping: 1.0,
            group: None,
            shape: Shape::Segment {
                start,
                end,
                thickness,
            },
            friction,
            elasticity,
        });
        BodyHandle(self.bodies.len() - 1)
    }

    fn add_static_circle(
        &mut self,
        position: Point,
        radius: f64,
        group: Option<CollisionGroup>,
    ) -> BodyHandle {
        self.bodies.push(Body {
            position: position.to_vector(),
            velocity: Vector2::zeros(),
            inv_mass: 0.0,
            damping: 1.0,
            group,
            shape: Shape::Circle { radius },
            friction: 0.5,
            elasticity: 0.0,
        });
        BodyHandle(self.bodies.len() - 1)
    }

    fn add_dynamic_circle(
        &mut self,
        position: Point,
        radius: f64,
        mass: f64,
        damping: f64,
        group: Option<CollisionGroup>,
    ) -> BodyHandle {
        self.bodies.push(Body {
            position: position.to_vector(),
            velocity: Vector2::zeros(),
            inv_mass: 1.0 / mass,
            damping,
            group,
            shape: Shape::Circle { radius },
            friction: 0.5,
            elasticity: 0.0,
        });
        BodyHandle(self.bodies.len() - 1)
    }

    fn add_pin(&mut self, a: BodyHandle, b: BodyHandle) -> Option<ConstraintHandle> {
        let body_a = self.bodies.get(a.0)?;
        let body_b = self.bodies.get(b.0)?;
        let rest_length = (body_b.position - body_a.position).norm();
        self.pins.push(Pin {
            a: a.0,
            b: b.0,
            rest_length,
            accumulated: 0.0,
        });
        trace!(a = a.0, b = b.0, rest_length, "pin constraint added");
        Some(ConstraintHandle(self.pins.len() - 1))
    }

    fn step(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        for body in &mut self.bodies {
            if body.is_dynamic() {
                body.velocity += self.gravity * dt;
                body.velocity *= body.damping.powf(dt);
            }
        }
        for pin in &mut self.pins {
            pin.accumulated = 0.0;
        }
        for _ in 0..SOLVER_ITERATIONS {
            self.solve_pins(dt);
            self.solve_contacts();
        }
        for body in &mut self.bodies {
            if body.is_dynamic() {
                let velocity = body.velocity;
                body.position += velocity * dt;
            }
        }
        self.resolve_penetrations();
    }

    fn body_position(&self, body: BodyHandle) -> Option<Point> {
        self.bodies.get(body.0).map(|body| body.position.into())
    }

    fn constraint_impulse(&self, constraint: ConstraintHandle) -> Option<f64> {
        self.pins.get(constraint.0).map(|pin| pin.accumulated)
    }
}
