#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod design;
pub mod editor;
pub mod errors;
pub mod geometry;
pub mod level;
pub mod physics;
pub mod report;
pub mod simulation;
pub mod solver;
pub mod validate;
pub mod view;

pub use design::{AnchorId, BridgeDesign, JointId, Material, Member, MemberId, PointId};
pub use editor::{Editor, GridSettings, MEMBER_HIT_DISTANCE, SNAP_RADIUS};
pub use errors::{LevelError, MemberRejection};
pub use geometry::{distance, point, segment_distance, snap_to_grid, Point};
pub use level::{AnchorPoint, BankSegment, Goal, Level};
pub use physics::{BodyHandle, CollisionGroup, ConstraintHandle, RigidWorld};
pub use report::{render_summary, MemberReading, SimulationSummary};
pub use simulation::{Simulation, GRAVITY, STRESS_IMPULSE_LIMIT, SUBSTEPS};
pub use solver::ImpulseWorld;
pub use validate::{member_cost, validate_member, MemberQuote, Points, Rules};
pub use view::{FrameView, MemberView, PointView, PreviewView};
