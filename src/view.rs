//! Per-frame render snapshot handed to the embedding application.
//!
//! Pure data: the renderer draws it and issues no mutations back into the
//! core. Positions come from the design in build mode and from the physics
//! snapshot while simulating.

use crate::design::{MemberId, PointId};
use crate::editor::GridSettings;
use crate::geometry::Point;

/// One drawable structural point.
#[derive(Clone, Debug, PartialEq)]
pub struct PointView {
    /// Point identifier.
    pub id: PointId,
    /// Current position (design or simulation).
    pub position: Point,
    /// Whether the point is a fixed anchor.
    pub fixed: bool,
}

/// One drawable member.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberView {
    /// Member identifier.
    pub id: MemberId,
    /// Current position of endpoint A.
    pub start: Point,
    /// Current position of endpoint B.
    pub end: Point,
    /// Normalized stress in `[0, 1]` while simulating, `None` in build
    /// mode.
    pub stress: Option<f64>,
}

/// Ghost line from the active selection to the pointer, shown while a
/// member is being drawn out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewView {
    /// Position of the selected point.
    pub start: Point,
    /// Target position: an existing point under the pointer, or the
    /// (possibly grid-snapped) pointer itself.
    pub end: Point,
    /// Whether a member along this line would pass validation right now.
    pub valid: bool,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameView {
    /// All structural points: anchors first, then joints.
    pub points: Vec<PointView>,
    /// All live members.
    pub members: Vec<MemberView>,
    /// The active selection, if any.
    pub selection: Option<PointId>,
    /// Ghost line for the member being drawn out, when a pointer position
    /// was supplied and a point is selected. Always `None` while
    /// simulating.
    pub preview: Option<PreviewView>,
    /// Member under the pointer, for hover highlighting. Suppressed when a
    /// point is under the pointer, and always `None` while simulating.
    pub hovered_member: Option<MemberId>,
    /// Whether simulate mode is active.
    pub simulating: bool,
    /// Grid settings for overlay drawing.
    pub grid: GridSettings,
    /// Level budget.
    pub budget: u32,
    /// Total cost of the current design.
    pub spent: u32,
}
