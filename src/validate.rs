//! Pure validation and cost rules gating member creation.
//!
//! The engine never mutates the design. Callers validate first, then apply
//! [`crate::design::BridgeDesign::add_member`] with the quoted cost; the two
//! steps are kept separate so the rules stay composable and testable on
//! their own.

use crate::design::{BridgeDesign, PointId};
use crate::errors::MemberRejection;
use crate::geometry::{self, Point};
use crate::level::Level;

/// Rules a proposed member is checked against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rules {
    /// Maximum Euclidean span of a single member.
    pub max_span: f64,
    /// Cost per unit of member length.
    pub cost_per_unit: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_span: 220.0,
            cost_per_unit: 3.0,
        }
    }
}

/// Deterministic cost of a member of the given length.
///
/// Ties round to even, matching the reference behaviour, so two calls with
/// identical inputs always produce the same integer.
#[must_use]
pub fn member_cost(length: f64, cost_per_unit: f64) -> u32 {
    (length * cost_per_unit).round_ties_even() as u32
}

/// Positive validation result: the span and the locked-in cost the caller
/// must pass to `add_member` unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MemberQuote {
    /// Euclidean distance between the endpoints.
    pub length: f64,
    /// Quoted integer cost.
    pub cost: u32,
}

/// The full point namespace: level anchors united with design joints.
#[derive(Clone, Copy, Debug)]
pub struct Points<'a> {
    /// Level supplying the anchors.
    level: &'a Level,
    /// Design supplying the joints.
    design: &'a BridgeDesign,
}

impl<'a> Points<'a> {
    /// Join a level and a design into one namespace.
    #[must_use]
    pub fn new(level: &'a Level, design: &'a BridgeDesign) -> Self {
        Self { level, design }
    }

    /// Resolve a point identifier to its position, if it exists.
    #[must_use]
    pub fn position(&self, id: PointId) -> Option<Point> {
        match id {
            PointId::Anchor(anchor) => self.level.anchor(anchor).map(|a| a.position),
            PointId::Joint(joint) => self.design.joint_position(joint),
        }
    }
}

/// Decide whether a member between `a` and `b` may be added to `design`.
///
/// Checks run in a fixed order and the first failure wins: unresolved
/// endpoint, self-loop, duplicate, excessive span, budget.
///
/// # Errors
///
/// Returns the [`MemberRejection`] describing the first failed check.
pub fn validate_member(
    points: &Points<'_>,
    design: &BridgeDesign,
    rules: &Rules,
    budget: u32,
    a: PointId,
    b: PointId,
) -> Result<MemberQuote, MemberRejection> {
    let position_a = points.position(a).ok_or(MemberRejection::UnknownEndpoint(a))?;
    let position_b = points.position(b).ok_or(MemberRejection::UnknownEndpoint(b))?;
    if a == b {
        return Err(MemberRejection::SelfLoop);
    }
    if design.member_exists(a, b) {
        return Err(MemberRejection::Duplicate);
    }
    let length = geometry::distance(position_a, position_b);
    if length > rules.max_span {
        return Err(MemberRejection::SpanExceeded {
            span: length,
            max_span: rules.max_span,
        });
    }
    let cost = member_cost(length, rules.cost_per_unit);
    let spent = design.total_cost();
    if spent + cost > budget {
        return Err(MemberRejection::OverBudget {
            cost,
            spent,
            budget,
        });
    }
    Ok(MemberQuote { length, cost })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::design::Material;

    /// Two anchors 100 units apart over a 500 budget.
    fn reference_setup() -> (Level, BridgeDesign, Rules) {
        let mut level = Level::new("reference", 500);
        level.push_anchor("left", 100.0, 300.0);
        level.push_anchor("right", 200.0, 300.0);
        (level, BridgeDesign::new(), Rules::default())
    }

    #[test]
    fn accepts_a_member_within_span_and_budget() {
        let (level, design, rules) = reference_setup();
        let a = PointId::Anchor(level.anchors()[0].id);
        let b = PointId::Anchor(level.anchors()[1].id);
        let points = Points::new(&level, &design);

        let quote = validate_member(&points, &design, &rules, level.budget, a, b)
            .expect("member accepted");
        assert_relative_eq!(quote.length, 100.0);
        assert_eq!(quote.cost, 300);
    }

    #[test]
    fn rejects_unresolved_endpoints_first() {
        let (level, mut design, rules) = reference_setup();
        let a = PointId::Anchor(level.anchors()[0].id);
        let ghost = design.add_joint(crate::geometry::point(150.0, 200.0));
        design.remove_joint(ghost);
        let points = Points::new(&level, &design);

        let rejection = validate_member(
            &points,
            &design,
            &rules,
            level.budget,
            a,
            PointId::Joint(ghost),
        )
        .expect_err("stale joint rejected");
        assert_eq!(rejection, MemberRejection::UnknownEndpoint(PointId::Joint(ghost)));
    }

    #[test]
    fn rejects_self_loops() {
        let (level, design, rules) = reference_setup();
        let a = PointId::Anchor(level.anchors()[0].id);
        let points = Points::new(&level, &design);

        let rejection = validate_member(&points, &design, &rules, level.budget, a, a)
            .expect_err("self loop rejected");
        assert_eq!(rejection, MemberRejection::SelfLoop);
    }

    #[test]
    fn rejects_duplicates_in_either_order() {
        let (level, mut design, rules) = reference_setup();
        let a = PointId::Anchor(level.anchors()[0].id);
        let b = PointId::Anchor(level.anchors()[1].id);
        design.add_member(a, b, Material::Wood, 300);
        let points = Points::new(&level, &design);

        for (first, second) in [(a, b), (b, a)] {
            let rejection = validate_member(&points, &design, &rules, level.budget, first, second)
                .expect_err("duplicate rejected");
            assert_eq!(rejection, MemberRejection::Duplicate);
        }
    }

    #[test]
    fn rejects_excessive_spans_regardless_of_budget() {
        let mut level = Level::new("wide", 1_000_000);
        let a = PointId::Anchor(level.push_anchor("left", 0.0, 0.0));
        let b = PointId::Anchor(level.push_anchor("right", 300.0, 0.0));
        let design = BridgeDesign::new();
        let rules = Rules::default();
        let points = Points::new(&level, &design);

        let rejection = validate_member(&points, &design, &rules, level.budget, a, b)
            .expect_err("overlong member rejected");
        assert!(matches!(rejection, MemberRejection::SpanExceeded { span, .. } if span == 300.0));
    }

    #[test]
    fn rejects_members_over_budget() {
        let mut level = Level::new("cheap", 200);
        let a = PointId::Anchor(level.push_anchor("left", 0.0, 0.0));
        let b = PointId::Anchor(level.push_anchor("right", 100.0, 0.0));
        let design = BridgeDesign::new();
        let rules = Rules::default();
        let points = Points::new(&level, &design);

        let rejection = validate_member(&points, &design, &rules, level.budget, a, b)
            .expect_err("unaffordable member rejected");
        assert_eq!(
            rejection,
            MemberRejection::OverBudget {
                cost: 300,
                spent: 0,
                budget: 200
            }
        );
    }

    #[test]
    fn budget_is_never_exceeded_across_validated_adds() {
        let mut level = Level::new("ladder", 700);
        let mut previous = PointId::Anchor(level.push_anchor("base", 0.0, 0.0));
        let mut design = BridgeDesign::new();
        let rules = Rules::default();

        // Keep chaining 80-unit joints until validation refuses; the total
        // must respect the budget the whole way.
        for step in 1..10 {
            let joint = design.add_joint(crate::geometry::point(f64::from(step) * 80.0, 0.0));
            let verdict = {
                let points = Points::new(&level, &design);
                validate_member(
                    &points,
                    &design,
                    &rules,
                    level.budget,
                    previous,
                    PointId::Joint(joint),
                )
            };
            if let Ok(quote) = verdict {
                design.add_member(previous, PointId::Joint(joint), Material::Wood, quote.cost);
            }
            assert!(design.total_cost() <= level.budget);
            previous = PointId::Joint(joint);
        }
        // 80 units at 3.0 per unit is 240; only two members fit under 700.
        assert_eq!(design.total_cost(), 480);
    }

    #[test]
    fn cost_is_deterministic_and_rounds_ties_to_even() {
        assert_eq!(member_cost(100.0, 3.0), 300);
        assert_eq!(member_cost(100.0, 3.0), member_cost(100.0, 3.0));
        // 0.5 rounds to 0, 1.5 rounds to 2 under ties-to-even.
        assert_eq!(member_cost(0.5, 1.0), 0);
        assert_eq!(member_cost(1.5, 1.0), 2);
    }
}
