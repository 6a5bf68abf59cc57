//! Build-mode interaction state machine and the simulate-mode toggle.
//!
//! All session state lives in one [`Editor`] value: the design being
//! edited, the active selection, grid settings and, while simulate mode is
//! active, the physics snapshot. Input handling is a set of explicit
//! methods driven once per frame by the embedding application; there are
//! no ambient globals.

use tracing::debug;

use crate::design::{BridgeDesign, Material, MemberId, PointId};
use crate::geometry::{self, Point};
use crate::level::Level;
use crate::simulation::Simulation;
use crate::validate::{member_cost, validate_member, Points, Rules};
use crate::view::{FrameView, MemberView, PointView, PreviewView};

/// Maximum pointer distance for hitting a point.
pub const SNAP_RADIUS: f64 = 18.0;
/// Maximum perpendicular pointer distance for hitting a member.
pub const MEMBER_HIT_DISTANCE: f64 = 8.0;
/// Default grid spacing.
const GRID_DEFAULT: f64 = 40.0;
/// Grid spacing adjustment increment.
const GRID_STEP: f64 = 10.0;
/// Smallest allowed grid spacing.
const GRID_MIN: f64 = 10.0;
/// Largest allowed grid spacing.
const GRID_MAX: f64 = 100.0;

/// Grid snapping settings for build mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSettings {
    /// Whether pointer positions snap to the grid.
    pub enabled: bool,
    /// Grid spacing in distance units.
    pub spacing: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            spacing: GRID_DEFAULT,
        }
    }
}

/// Interaction mode the editor is in.
#[derive(Debug)]
enum Mode {
    /// Build mode, with an optional selected point.
    Build {
        /// The active selection, if any.
        selection: Option<PointId>,
    },
    /// Simulate mode, observing the design through a physics snapshot.
    Simulating(Simulation),
}

/// The interactive bridge editing session.
#[derive(Debug)]
pub struct Editor {
    /// The immutable level being built over.
    level: Level,
    /// The design under construction.
    design: BridgeDesign,
    /// Validation rules in force.
    rules: Rules,
    /// Grid snapping settings.
    grid: GridSettings,
    /// Current interaction mode.
    mode: Mode,
}

impl Editor {
    /// Start an editing session over `level` with default rules.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self::with_rules(level, Rules::default())
    }

    /// Start an editing session with explicit validation rules.
    #[must_use]
    pub fn with_rules(level: Level, rules: Rules) -> Self {
        Self {
            level,
            design: BridgeDesign::new(),
            rules,
            grid: GridSettings::default(),
            mode: Mode::Build { selection: None },
        }
    }

    /// The level being built over.
    #[must_use]
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// The design under construction.
    #[must_use]
    pub fn design(&self) -> &BridgeDesign {
        &self.design
    }

    /// The active selection, if any. Always `None` while simulating.
    #[must_use]
    pub fn selection(&self) -> Option<PointId> {
        match &self.mode {
            Mode::Build { selection } => *selection,
            Mode::Simulating(_) => None,
        }
    }

    /// Whether simulate mode is active.
    #[must_use]
    pub fn is_simulating(&self) -> bool {
        matches!(self.mode, Mode::Simulating(_))
    }

    /// Current grid settings.
    #[must_use]
    pub fn grid(&self) -> GridSettings {
        self.grid
    }

    /// Enable or disable grid snapping.
    pub fn set_grid_enabled(&mut self, enabled: bool) {
        self.grid.enabled = enabled;
    }

    /// Adjust the grid spacing by a number of increments, clamped to the
    /// supported range.
    pub fn adjust_grid_spacing(&mut self, steps: i32) {
        self.grid.spacing =
            (self.grid.spacing + GRID_STEP * f64::from(steps)).clamp(GRID_MIN, GRID_MAX);
    }

    /// Cancel: clears the selection in build mode, exits simulate mode.
    pub fn cancel(&mut self) {
        match &mut self.mode {
            Mode::Build { selection } => *selection = None,
            Mode::Simulating(_) => self.exit_simulation(),
        }
    }

    /// Toggle simulate mode. Entering snapshots the current design into a
    /// physics world; leaving discards the snapshot. The design itself is
    /// never touched by simulation.
    pub fn toggle_simulation(&mut self) {
        match &self.mode {
            Mode::Build { .. } => {
                let simulation = Simulation::new(&self.level, &self.design);
                self.mode = Mode::Simulating(simulation);
                debug!("entered simulate mode");
            }
            Mode::Simulating(_) => self.exit_simulation(),
        }
    }

    /// Advance the simulation by a frame's time delta. No-op in build
    /// mode.
    pub fn tick(&mut self, dt: f64) {
        if let Mode::Simulating(simulation) = &mut self.mode {
            simulation.step(dt);
        }
    }

    /// Primary build action at a pointer position.
    ///
    /// Selects points, connects the selection to other points through the
    /// validation engine, and creates joints on empty space (grid-snapped
    /// when enabled). Ignored while simulating.
    pub fn click(&mut self, position: Point) {
        if self.is_simulating() {
            return;
        }
        let next = match (self.selection(), self.point_at(position)) {
            // Nothing selected: pick up a point if one is under the
            // pointer, otherwise stay idle.
            (None, hit) => hit,
            // Selection onto an existing point: attempt the member and
            // carry the selection to the target so spans can be chained.
            (Some(selected), Some(hit)) => {
                self.attempt_member(selected, hit);
                Some(hit)
            }
            // Selection onto empty space: place a joint, snapped when the
            // grid is on. When the snapped position lands on an existing
            // point, treat it as selecting that point instead.
            (Some(selected), None) => {
                let target = if self.grid.enabled {
                    geometry::snap_to_grid(position, self.grid.spacing)
                } else {
                    position
                };
                match self.point_at(target) {
                    Some(hit) => {
                        self.attempt_member(selected, hit);
                        Some(hit)
                    }
                    None => self.connect_new_joint(selected, target),
                }
            }
        };
        self.set_selection(next);
    }

    /// Delete whatever sits at a pointer position: a joint first (with its
    /// attached members), otherwise a member. Anchors are never deleted.
    /// Ignored while simulating.
    pub fn delete_at(&mut self, position: Point) {
        if self.is_simulating() {
            return;
        }
        if let Some(PointId::Joint(joint)) = self.point_at(position) {
            self.design.remove_joint(joint);
            self.set_selection(None);
            return;
        }
        if let Some(member) = self.member_at(position) {
            self.design.remove_member(member);
            debug!(?member, "member deleted");
            self.set_selection(None);
        }
    }

    /// Snapshot the current visual state for the renderer, without any
    /// pointer-dependent feedback.
    #[must_use]
    pub fn frame(&self) -> FrameView {
        self.compose_frame(None)
    }

    /// Snapshot the current visual state for the renderer, including the
    /// feedback tied to a pointer position: the member under the pointer
    /// and, while a point is selected, a ghost line from the selection to
    /// the pointer with a validity flag.
    #[must_use]
    pub fn frame_at(&self, pointer: Point) -> FrameView {
        self.compose_frame(Some(pointer))
    }

    /// Build a [`FrameView`], with pointer feedback when a position is
    /// supplied.
    fn compose_frame(&self, pointer: Option<Point>) -> FrameView {
        let simulation = match &self.mode {
            Mode::Simulating(simulation) => Some(simulation),
            Mode::Build { .. } => None,
        };
        let live_position = |id: PointId, design_position: Point| {
            simulation
                .and_then(|simulation| simulation.position(id))
                .unwrap_or(design_position)
        };

        let mut points = Vec::with_capacity(self.level.anchors().len() + self.design.joint_count());
        for anchor in self.level.anchors() {
            points.push(PointView {
                id: PointId::Anchor(anchor.id),
                position: live_position(PointId::Anchor(anchor.id), anchor.position),
                fixed: anchor.fixed,
            });
        }
        for (joint, position) in self.design.joints() {
            points.push(PointView {
                id: PointId::Joint(joint),
                position: live_position(PointId::Joint(joint), position),
                fixed: false,
            });
        }

        let resolve = |id: PointId| points.iter().find(|view| view.id == id).map(|view| view.position);
        let members = self
            .design
            .members()
            .iter()
            .filter_map(|member| {
                Some(MemberView {
                    id: member.id,
                    start: resolve(member.a)?,
                    end: resolve(member.b)?,
                    stress: simulation.and_then(|simulation| simulation.stress(member.id)),
                })
            })
            .collect();

        let (preview, hovered_member) = match (&self.mode, pointer) {
            (Mode::Build { selection }, Some(pointer)) => {
                let hovered_point = self.point_at(pointer);
                let hovered_member = if hovered_point.is_none() {
                    self.member_at(pointer)
                } else {
                    None
                };
                let preview = (*selection)
                    .and_then(|selected| self.preview(selected, pointer, hovered_point));
                (preview, hovered_member)
            }
            _ => (None, None),
        };

        FrameView {
            points,
            members,
            selection: self.selection(),
            preview,
            hovered_member,
            simulating: simulation.is_some(),
            grid: self.grid,
            budget: self.level.budget,
            spent: self.design.total_cost(),
        }
    }

    /// Leave simulate mode, discarding the snapshot.
    fn exit_simulation(&mut self) {
        self.mode = Mode::Build { selection: None };
        debug!("left simulate mode");
    }

    /// Write the selection. Only meaningful in build mode.
    fn set_selection(&mut self, next: Option<PointId>) {
        if let Mode::Build { selection } = &mut self.mode {
            *selection = next;
        }
    }

    /// Nearest point within the snap radius of a position.
    fn point_at(&self, position: Point) -> Option<PointId> {
        let anchors = self
            .level
            .anchors()
            .iter()
            .map(|anchor| (PointId::Anchor(anchor.id), anchor.position));
        let joints = self
            .design
            .joints()
            .map(|(joint, joint_position)| (PointId::Joint(joint), joint_position));
        anchors
            .chain(joints)
            .map(|(id, point_position)| (id, geometry::distance(position, point_position)))
            .filter(|(_, d)| *d <= SNAP_RADIUS)
            .min_by(|(_, left), (_, right)| left.total_cmp(right))
            .map(|(id, _)| id)
    }

    /// First member within the hit distance of a position.
    fn member_at(&self, position: Point) -> Option<MemberId> {
        let points = Points::new(&self.level, &self.design);
        self.design
            .members()
            .iter()
            .filter_map(|member| {
                let start = points.position(member.a)?;
                let end = points.position(member.b)?;
                Some((member.id, geometry::segment_distance(position, start, end)))
            })
            .find(|(_, d)| *d <= MEMBER_HIT_DISTANCE)
            .map(|(id, _)| id)
    }

    /// Ghost line from the selected point towards the pointer, resolved the
    /// same way a click would be: an existing point under the (raw or
    /// snapped) pointer wins, otherwise the line ends at the would-be joint
    /// position. The validity flag reflects what validation would say for
    /// that member right now.
    fn preview(
        &self,
        selected: PointId,
        pointer: Point,
        hovered: Option<PointId>,
    ) -> Option<PreviewView> {
        let points = Points::new(&self.level, &self.design);
        let start = points.position(selected)?;

        let target = if self.grid.enabled && hovered.is_none() {
            geometry::snap_to_grid(pointer, self.grid.spacing)
        } else {
            pointer
        };
        if let Some(hit) = hovered.or_else(|| self.point_at(target)) {
            let end = points.position(hit)?;
            let valid = validate_member(
                &points,
                &self.design,
                &self.rules,
                self.level.budget,
                selected,
                hit,
            )
            .is_ok();
            return Some(PreviewView { start, end, valid });
        }

        // Empty space: the member would go to a fresh joint at `target`,
        // so only the span and budget rules can reject it.
        let length = geometry::distance(start, target);
        let cost = member_cost(length, self.rules.cost_per_unit);
        let valid = length <= self.rules.max_span
            && self.design.total_cost() + cost <= self.level.budget;
        Some(PreviewView {
            start,
            end: target,
            valid,
        })
    }

    /// Create a joint at `target` and try to connect the selection to it.
    ///
    /// When validation rejects the member the freshly created joint is
    /// left behind, disconnected, and the selection clears. That mirrors
    /// how the game has always behaved; a stricter design would roll the
    /// joint back.
    fn connect_new_joint(&mut self, selected: PointId, target: Point) -> Option<PointId> {
        let joint = self.design.add_joint(target);
        if self.attempt_member(selected, PointId::Joint(joint)) {
            Some(PointId::Joint(joint))
        } else {
            None
        }
    }

    /// Validate and, on acceptance, add a member. Rejections are silent
    /// beyond a debug event; no state changes on failure.
    fn attempt_member(&mut self, a: PointId, b: PointId) -> bool {
        let verdict = {
            let points = Points::new(&self.level, &self.design);
            validate_member(&points, &self.design, &self.rules, self.level.budget, a, b)
        };
        match verdict {
            Ok(quote) => {
                let id = self
                    .design
                    .add_member(a, b, Material::Wood, quote.cost);
                debug!(?id, ?a, ?b, cost = quote.cost, "member added");
                true
            }
            Err(rejection) => {
                debug!(?a, ?b, %rejection, "member rejected");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point;

    /// Level with two anchors 100 apart and a generous budget.
    fn editor_with_two_anchors(budget: u32) -> Editor {
        let mut level = Level::new("test", budget);
        level.push_anchor("left", 100.0, 300.0);
        level.push_anchor("right", 200.0, 300.0);
        level.push_bank(0.0, 400.0, 300.0, 400.0);
        Editor::new(level)
    }

    fn anchor(editor: &Editor, index: usize) -> PointId {
        PointId::Anchor(editor.level().anchors()[index].id)
    }

    #[test]
    fn clicking_a_point_selects_it() {
        let mut editor = editor_with_two_anchors(500);
        // Within the snap radius, off-centre.
        editor.click(point(110.0, 310.0));
        assert_eq!(editor.selection(), Some(anchor(&editor, 0)));
    }

    #[test]
    fn clicking_empty_space_while_idle_does_nothing() {
        let mut editor = editor_with_two_anchors(500);
        editor.click(point(400.0, 50.0));
        assert_eq!(editor.selection(), None);
        assert_eq!(editor.design().joint_count(), 0);
    }

    #[test]
    fn connecting_two_anchors_adds_a_member_and_chains_selection() {
        let mut editor = editor_with_two_anchors(500);
        editor.click(point(100.0, 300.0));
        editor.click(point(200.0, 300.0));

        assert_eq!(editor.design().member_count(), 1);
        assert_eq!(editor.design().total_cost(), 300);
        assert_eq!(editor.selection(), Some(anchor(&editor, 1)));
    }

    #[test]
    fn rejected_connection_still_moves_the_selection() {
        // Budget too small for any member.
        let mut editor = editor_with_two_anchors(100);
        editor.click(point(100.0, 300.0));
        editor.click(point(200.0, 300.0));

        assert_eq!(editor.design().member_count(), 0);
        assert_eq!(editor.selection(), Some(anchor(&editor, 1)));
    }

    #[test]
    fn clicking_empty_space_with_a_selection_creates_a_connected_joint() {
        let mut editor = editor_with_two_anchors(500);
        editor.click(point(100.0, 300.0));
        editor.click(point(150.0, 250.0));

        assert_eq!(editor.design().joint_count(), 1);
        assert_eq!(editor.design().member_count(), 1);
        let (joint, position) = editor.design().joints().next().unwrap();
        assert_eq!(position, point(150.0, 250.0));
        assert_eq!(editor.selection(), Some(PointId::Joint(joint)));
    }

    #[test]
    fn grid_snapping_places_joints_on_the_grid() {
        let mut editor = editor_with_two_anchors(500);
        editor.set_grid_enabled(true);
        editor.click(point(100.0, 300.0));
        editor.click(point(150.0, 250.0));

        let (_, position) = editor.design().joints().next().unwrap();
        assert_eq!(position, point(160.0, 240.0));
    }

    #[test]
    fn snapped_click_onto_an_existing_point_selects_it_instead() {
        let mut level = Level::new("aligned", 500);
        level.push_anchor("left", 100.0, 280.0);
        level.push_anchor("right", 200.0, 280.0);
        let mut editor = Editor::new(level);
        editor.set_grid_enabled(true);
        editor.click(point(100.0, 280.0));
        // (215, 265) is outside the right anchor's snap radius, but snaps
        // to grid node (200, 280), which is the anchor itself; that must
        // select the anchor rather than spawn a joint on top of it.
        editor.click(point(215.0, 265.0));

        assert_eq!(editor.design().joint_count(), 0);
        assert_eq!(editor.design().member_count(), 1);
        assert_eq!(editor.selection(), Some(anchor(&editor, 1)));
    }

    #[test]
    fn rejected_joint_connection_leaves_the_joint_orphaned() {
        // Budget exhausted by the first member; the next empty-space click
        // creates a joint whose member is then rejected.
        let mut editor = editor_with_two_anchors(300);
        editor.click(point(100.0, 300.0));
        editor.click(point(200.0, 300.0));
        assert_eq!(editor.design().total_cost(), 300);

        editor.click(point(250.0, 250.0));
        assert_eq!(editor.design().member_count(), 1);
        assert_eq!(editor.design().joint_count(), 1, "orphan joint persists");
        assert_eq!(editor.selection(), None);
    }

    #[test]
    fn grid_spacing_clamps_to_range() {
        let mut editor = editor_with_two_anchors(500);
        editor.adjust_grid_spacing(100);
        assert_eq!(editor.grid().spacing, 100.0);
        editor.adjust_grid_spacing(-100);
        assert_eq!(editor.grid().spacing, 10.0);
        editor.adjust_grid_spacing(3);
        assert_eq!(editor.grid().spacing, 40.0);
    }

    #[test]
    fn cancel_clears_the_selection() {
        let mut editor = editor_with_two_anchors(500);
        editor.click(point(100.0, 300.0));
        editor.cancel();
        assert_eq!(editor.selection(), None);
    }

    #[test]
    fn cancel_exits_simulate_mode_and_keeps_the_design() {
        let mut editor = editor_with_two_anchors(500);
        editor.click(point(100.0, 300.0));
        editor.click(point(200.0, 300.0));
        let before = editor.design().clone();

        editor.toggle_simulation();
        assert!(editor.is_simulating());
        editor.cancel();

        assert!(!editor.is_simulating());
        assert_eq!(editor.selection(), None);
        assert_eq!(*editor.design(), before);
    }

    #[test]
    fn deleting_a_joint_cascades_and_spares_the_rest() {
        let mut editor = editor_with_two_anchors(1_000);
        editor.click(point(100.0, 300.0));
        editor.click(point(150.0, 250.0)); // joint + member from left anchor
        editor.click(point(200.0, 300.0)); // member from joint to right anchor
        editor.cancel();
        editor.click(point(100.0, 300.0));
        editor.click(point(200.0, 300.0)); // direct anchor-to-anchor member
        assert_eq!(editor.design().member_count(), 3);

        editor.delete_at(point(150.0, 250.0));

        assert_eq!(editor.design().joint_count(), 0);
        assert_eq!(editor.design().member_count(), 1);
    }

    #[test]
    fn anchors_are_never_deleted() {
        let mut editor = editor_with_two_anchors(500);
        editor.delete_at(point(100.0, 300.0));
        assert_eq!(editor.level().anchors().len(), 2);

        // With a member attached, deleting at the anchor removes the
        // member under the pointer but still leaves the anchor alone.
        editor.click(point(100.0, 300.0));
        editor.click(point(200.0, 300.0));
        editor.delete_at(point(100.0, 300.0));
        assert_eq!(editor.level().anchors().len(), 2);
        assert_eq!(editor.design().member_count(), 0);
    }

    #[test]
    fn deleting_a_member_by_segment_proximity() {
        let mut editor = editor_with_two_anchors(500);
        editor.click(point(100.0, 300.0));
        editor.click(point(200.0, 300.0));

        // Midspan, 5 units off the member axis and far from both anchors.
        editor.delete_at(point(150.0, 305.0));
        assert_eq!(editor.design().member_count(), 0);
    }

    #[test]
    fn mutation_is_suspended_while_simulating() {
        let mut editor = editor_with_two_anchors(500);
        editor.click(point(100.0, 300.0));
        editor.click(point(200.0, 300.0));
        editor.toggle_simulation();

        editor.click(point(150.0, 250.0));
        editor.delete_at(point(150.0, 300.0));

        assert!(editor.is_simulating());
        assert_eq!(editor.design().member_count(), 1);
        assert_eq!(editor.design().joint_count(), 0);
    }

    #[test]
    fn simulate_toggle_roundtrip_preserves_the_design() {
        let mut editor = editor_with_two_anchors(1_000);
        editor.click(point(100.0, 300.0));
        editor.click(point(150.0, 250.0));
        editor.click(point(200.0, 300.0));
        let before = editor.design().clone();

        editor.toggle_simulation();
        editor.tick(1.0 / 60.0);
        editor.tick(1.0 / 60.0);
        editor.toggle_simulation();

        assert!(!editor.is_simulating());
        assert_eq!(*editor.design(), before);
    }

    #[test]
    fn frame_at_previews_the_member_being_drawn() {
        let mut editor = editor_with_two_anchors(500);
        editor.click(point(100.0, 300.0));

        // Pointer within the snap radius of the right anchor: the ghost
        // line ends on the anchor itself.
        let frame = editor.frame_at(point(195.0, 305.0));
        let preview = frame.preview.expect("selection produces a preview");
        assert_eq!(preview.start, point(100.0, 300.0));
        assert_eq!(preview.end, point(200.0, 300.0));
        assert!(preview.valid);
        assert_eq!(frame.hovered_member, None);
    }

    #[test]
    fn preview_flags_members_that_would_be_rejected() {
        // The first member spends the whole budget.
        let mut editor = editor_with_two_anchors(300);
        editor.click(point(100.0, 300.0));
        editor.click(point(200.0, 300.0));
        assert_eq!(editor.design().total_cost(), 300);

        // Empty space: any further member is over budget.
        let over_budget = editor.frame_at(point(250.0, 250.0));
        assert!(!over_budget.preview.expect("preview present").valid);

        // Back over the left anchor: a duplicate of the existing member.
        let duplicate = editor.frame_at(point(100.0, 300.0));
        assert!(!duplicate.preview.expect("preview present").valid);
    }

    #[test]
    fn preview_follows_grid_snapping_without_mutating() {
        let mut editor = editor_with_two_anchors(500);
        editor.set_grid_enabled(true);
        editor.click(point(100.0, 300.0));

        let frame = editor.frame_at(point(150.0, 250.0));
        assert_eq!(frame.preview.expect("preview present").end, point(160.0, 240.0));
        assert_eq!(editor.design().joint_count(), 0);
        assert_eq!(editor.design().member_count(), 0);
    }

    #[test]
    fn frame_at_reports_the_member_under_the_pointer() {
        let mut editor = editor_with_two_anchors(500);
        editor.click(point(100.0, 300.0));
        editor.click(point(200.0, 300.0));
        editor.cancel();
        let member = editor.design().members()[0].id;

        // Midspan, slightly off the member axis, far from both anchors.
        let frame = editor.frame_at(point(150.0, 305.0));
        assert_eq!(frame.hovered_member, Some(member));
        assert_eq!(frame.preview, None, "no selection, no ghost line");

        // Directly over an anchor the point takes precedence.
        let frame = editor.frame_at(point(100.0, 300.0));
        assert_eq!(frame.hovered_member, None);
    }

    #[test]
    fn pointer_feedback_is_suppressed_while_simulating() {
        let mut editor = editor_with_two_anchors(500);
        editor.click(point(100.0, 300.0));
        editor.click(point(200.0, 300.0));
        editor.toggle_simulation();

        let frame = editor.frame_at(point(150.0, 305.0));
        assert!(frame.simulating);
        assert_eq!(frame.preview, None);
        assert_eq!(frame.hovered_member, None);
    }

    #[test]
    fn frame_reports_simulated_positions_and_stress() {
        let mut editor = editor_with_two_anchors(1_000);
        editor.click(point(100.0, 300.0));
        editor.click(point(150.0, 250.0));
        editor.click(point(200.0, 300.0));

        let build_frame = editor.frame();
        assert!(!build_frame.simulating);
        assert!(build_frame.members.iter().all(|m| m.stress.is_none()));
        assert_eq!(build_frame.spent, editor.design().total_cost());

        editor.toggle_simulation();
        editor.tick(1.0 / 60.0);
        let simulate_frame = editor.frame();
        assert!(simulate_frame.simulating);
        assert_eq!(simulate_frame.selection, None);
        assert!(simulate_frame.members.iter().all(|m| m.stress.is_some()));
    }
}
