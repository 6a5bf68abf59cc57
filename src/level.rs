//! Immutable level data consumed by the construction core.
//!
//! A level supplies the fixed mounting anchors, the terrain bank segments,
//! the construction budget and a goal descriptor. The core treats the level
//! as read only for the whole session; the JSON loader here is peripheral
//! I/O kept for convenience and mirrors the `{name, budget, anchors, banks,
//! goal}` on-disk format.

use std::path::Path;

use serde::Deserialize;

use crate::design::AnchorId;
use crate::errors::LevelError;
use crate::geometry::Point;

/// A level-defined, fixed mounting point for structural members.
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorPoint {
    /// Identifier assigned in load order.
    pub id: AnchorId,
    /// Human-readable name from the level definition.
    pub name: String,
    /// Position of the anchor.
    pub position: Point,
    /// Whether the anchor is fixed. Level anchors always are in current
    /// usage, but the flag is carried through from the definition.
    pub fixed: bool,
}

/// A static terrain segment forming a river bank.
#[derive(Clone, Debug, PartialEq)]
pub struct BankSegment {
    /// One endpoint of the segment.
    pub start: Point,
    /// The other endpoint of the segment.
    pub end: Point,
}

/// Goal descriptor. Carried through for the embedding application; unused
/// by the construction core itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Goal {
    /// Kind of goal, e.g. `reach_x`.
    pub kind: String,
    /// Target coordinate for `reach_x` goals.
    pub x: f64,
}

impl Default for Goal {
    fn default() -> Self {
        Self {
            kind: "reach_x".to_owned(),
            x: 0.0,
        }
    }
}

/// An immutable level: anchors, terrain, budget and goal.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    /// Display name of the level.
    pub name: String,
    /// Maximum total member cost allowed.
    pub budget: u32,
    /// Ordered anchors.
    anchors: Vec<AnchorPoint>,
    /// Ordered terrain bank segments.
    banks: Vec<BankSegment>,
    /// Goal descriptor.
    pub goal: Goal,
}

impl Level {
    /// Create an empty level with a name and budget.
    #[must_use]
    pub fn new(name: impl Into<String>, budget: u32) -> Self {
        Self {
            name: name.into(),
            budget,
            anchors: Vec::new(),
            banks: Vec::new(),
            goal: Goal::default(),
        }
    }

    /// Append a fixed anchor and return its identifier.
    pub fn push_anchor(&mut self, name: impl Into<String>, x: f64, y: f64) -> AnchorId {
        let id = AnchorId::from_index(self.anchors.len() as u32);
        self.anchors.push(AnchorPoint {
            id,
            name: name.into(),
            position: Point::new(x, y),
            fixed: true,
        });
        id
    }

    /// Append a terrain bank segment.
    pub fn push_bank(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.banks.push(BankSegment {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
        });
    }

    /// Ordered anchors.
    #[must_use]
    pub fn anchors(&self) -> &[AnchorPoint] {
        &self.anchors
    }

    /// Ordered terrain bank segments.
    #[must_use]
    pub fn banks(&self) -> &[BankSegment] {
        &self.banks
    }

    /// Look up an anchor by identifier.
    #[must_use]
    pub fn anchor(&self, id: AnchorId) -> Option<&AnchorPoint> {
        self.anchors.get(id.index())
    }

    /// Parse a level from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::Parse`] when the JSON is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        let raw: RawLevel = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw, "level"))
    }

    /// Load a level from a JSON file. When the definition carries no name,
    /// the file stem is used.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::Io`] when the file cannot be read and
    /// [`LevelError::Parse`] when its contents are malformed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let raw: RawLevel = serde_json::from_str(&json)?;
        let fallback = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("level");
        Ok(Self::from_raw(raw, fallback))
    }

    /// Build a [`Level`] from its raw serde representation.
    fn from_raw(raw: RawLevel, fallback_name: &str) -> Self {
        let mut level = Self::new(
            raw.name.unwrap_or_else(|| fallback_name.to_owned()),
            raw.budget,
        );
        for anchor in raw.anchors {
            let id = level.push_anchor(anchor.id, anchor.x, anchor.y);
            level.anchors[id.index()].fixed = anchor.fixed;
        }
        for bank in raw.banks {
            level.push_bank(bank.x1, bank.y1, bank.x2, bank.y2);
        }
        if let Some(goal) = raw.goal {
            level.goal = Goal {
                kind: goal.kind,
                x: goal.x,
            };
        }
        level
    }
}

/// Raw serde mirror of the on-disk level format.
#[derive(Debug, Deserialize)]
struct RawLevel {
    /// Optional display name.
    #[serde(default)]
    name: Option<String>,
    /// Construction budget.
    #[serde(default)]
    budget: u32,
    /// Anchor definitions.
    #[serde(default)]
    anchors: Vec<RawAnchor>,
    /// Bank segment definitions.
    #[serde(default)]
    banks: Vec<RawBank>,
    /// Optional goal definition.
    #[serde(default)]
    goal: Option<RawGoal>,
}

/// Raw serde mirror of one anchor entry.
#[derive(Debug, Deserialize)]
struct RawAnchor {
    /// Anchor name.
    id: String,
    /// X coordinate.
    x: f64,
    /// Y coordinate.
    y: f64,
    /// Fixed flag, defaulting to true.
    #[serde(default = "default_fixed")]
    fixed: bool,
}

/// Raw serde mirror of one bank entry.
#[derive(Debug, Deserialize)]
struct RawBank {
    /// First endpoint X.
    x1: f64,
    /// First endpoint Y.
    y1: f64,
    /// Second endpoint X.
    x2: f64,
    /// Second endpoint Y.
    y2: f64,
}

/// Raw serde mirror of the goal entry.
#[derive(Debug, Deserialize)]
struct RawGoal {
    /// Goal kind.
    #[serde(rename = "type", default = "default_goal_kind")]
    kind: String,
    /// Target coordinate.
    #[serde(default)]
    x: f64,
}

/// Anchors default to fixed.
fn default_fixed() -> bool {
    true
}

/// Goals default to `reach_x`.
fn default_goal_kind() -> String {
    "reach_x".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point;

    #[test]
    fn parses_the_full_level_format() {
        let json = r#"{
            "name": "crossing",
            "budget": 500,
            "anchors": [
                {"id": "left", "x": 100.0, "y": 300.0, "fixed": true},
                {"id": "right", "x": 200.0, "y": 300.0}
            ],
            "banks": [{"x1": 0.0, "y1": 320.0, "x2": 400.0, "y2": 320.0}],
            "goal": {"type": "reach_x", "x": 380.0}
        }"#;
        let level = Level::from_json_str(json).expect("level parses");

        assert_eq!(level.name, "crossing");
        assert_eq!(level.budget, 500);
        assert_eq!(level.anchors().len(), 2);
        assert_eq!(level.anchors()[0].name, "left");
        assert_eq!(level.anchors()[0].position, point(100.0, 300.0));
        assert!(level.anchors()[1].fixed, "fixed defaults to true");
        assert_eq!(level.banks().len(), 1);
        assert_eq!(level.goal.x, 380.0);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let level = Level::from_json_str(r#"{"budget": 250}"#).expect("level parses");
        assert_eq!(level.budget, 250);
        assert!(level.anchors().is_empty());
        assert!(level.banks().is_empty());
        assert_eq!(level.goal, Goal::default());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let error = Level::from_json_str("{not json").expect_err("parse fails");
        assert!(matches!(error, LevelError::Parse(_)));
    }

    #[test]
    fn anchor_lookup_by_id() {
        let mut level = Level::new("demo", 100);
        let left = level.push_anchor("left", 0.0, 0.0);
        let right = level.push_anchor("right", 50.0, 0.0);
        assert_eq!(level.anchor(left).map(|a| a.name.as_str()), Some("left"));
        assert_eq!(level.anchor(right).map(|a| a.position), Some(point(50.0, 0.0)));
    }
}
