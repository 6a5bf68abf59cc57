//! The structural design model: joints, members and cost accounting.
//!
//! The design performs no validation of its own; the rules that gate member
//! creation live in [`crate::validate`] so callers can compose them. The one
//! structural invariant the design does enforce is that removing a joint
//! cascades to every member referencing it, so a completed mutation never
//! leaves a member with a dangling endpoint.

use std::collections::BTreeMap;

use tracing::debug;

use crate::geometry::Point;

/// Identifier of a level-defined anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnchorId(u32);

impl AnchorId {
    /// Build an anchor identifier from its load-order index.
    pub(crate) const fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// Load-order index of the anchor within its level.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identifier of a player-created joint.
///
/// Assigned monotonically starting at 1 and never reused, even after the
/// joint is deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JointId(u32);

/// Identifier of a structural member.
///
/// Assigned monotonically starting at 1 and never reused, even after the
/// member is deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(u32);

/// A point a member may attach to: the union of the anchor and joint
/// namespaces. The two variants cannot collide by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PointId {
    /// A fixed, level-defined anchor.
    Anchor(AnchorId),
    /// A player-created joint.
    Joint(JointId),
}

/// Material a member is built from. Currently a single fixed value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Material {
    /// Rigid timber strut.
    #[default]
    Wood,
}

/// A rigid structural connection between two points.
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    /// Identifier of the member.
    pub id: MemberId,
    /// First endpoint.
    pub a: PointId,
    /// Second endpoint.
    pub b: PointId,
    /// Material tag.
    pub material: Material,
    /// Cost locked in at creation time.
    pub cost: u32,
}

impl Member {
    /// Whether this member has `point` as either endpoint.
    #[must_use]
    pub fn references(&self, point: PointId) -> bool {
        self.a == point || self.b == point
    }

    /// Whether this member connects the unordered pair `(a, b)`.
    #[must_use]
    pub fn joins(&self, a: PointId, b: PointId) -> bool {
        (self.a == a && self.b == b) || (self.a == b && self.b == a)
    }
}

/// A bridge design: the mutable set of joints and members built by the
/// player on top of a level's anchors.
#[derive(Clone, Debug, PartialEq)]
pub struct BridgeDesign {
    /// Live members in insertion order.
    members: Vec<Member>,
    /// Live joints keyed by identifier.
    joints: BTreeMap<JointId, Point>,
    /// Next member identifier to hand out.
    next_member: u32,
    /// Next joint identifier to hand out.
    next_joint: u32,
}

impl Default for BridgeDesign {
    fn default() -> Self {
        Self::new()
    }
}

impl BridgeDesign {
    /// Create an empty design.
    #[must_use]
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            joints: BTreeMap::new(),
            next_member: 1,
            next_joint: 1,
        }
    }

    /// Number of live joints.
    #[must_use]
    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    /// Number of live members.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Live members in insertion order.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Look up a member by identifier.
    #[must_use]
    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    /// Live joints with their positions, in identifier order.
    pub fn joints(&self) -> impl Iterator<Item = (JointId, Point)> + '_ {
        self.joints.iter().map(|(id, position)| (*id, *position))
    }

    /// Position of a joint, or `None` if it does not exist.
    #[must_use]
    pub fn joint_position(&self, id: JointId) -> Option<Point> {
        self.joints.get(&id).copied()
    }

    /// Whether a member already connects the unordered pair `(a, b)`.
    #[must_use]
    pub fn member_exists(&self, a: PointId, b: PointId) -> bool {
        self.members.iter().any(|member| member.joins(a, b))
    }

    /// Create a joint at `position` and return its fresh identifier.
    pub fn add_joint(&mut self, position: Point) -> JointId {
        let id = JointId(self.next_joint);
        self.next_joint += 1;
        self.joints.insert(id, position);
        debug!(?id, x = position.x, y = position.y, "joint created");
        id
    }

    /// Append a member between `a` and `b` with a fresh identifier.
    ///
    /// No validation happens here; callers are expected to have run the
    /// design through [`crate::validate::validate_member`] first and to
    /// pass the quoted cost along unchanged.
    pub fn add_member(&mut self, a: PointId, b: PointId, material: Material, cost: u32) -> MemberId {
        let id = MemberId(self.next_member);
        self.next_member += 1;
        self.members.push(Member {
            id,
            a,
            b,
            material,
            cost,
        });
        id
    }

    /// Remove the member with identifier `id`. No-op if it does not exist.
    pub fn remove_member(&mut self, id: MemberId) {
        self.members.retain(|member| member.id != id);
    }

    /// Remove a joint and, first, every member referencing it.
    ///
    /// No-op if the joint does not exist. From the caller's perspective the
    /// cascade is a single atomic operation.
    pub fn remove_joint(&mut self, id: JointId) {
        if self.joints.remove(&id).is_none() {
            return;
        }
        let point = PointId::Joint(id);
        let before = self.members.len();
        self.members.retain(|member| !member.references(point));
        debug!(?id, severed = before - self.members.len(), "joint removed");
    }

    /// Sum of all live members' costs, recomputed on demand.
    #[must_use]
    pub fn total_cost(&self) -> u32 {
        self.members.iter().map(|member| member.cost).sum()
    }
}
