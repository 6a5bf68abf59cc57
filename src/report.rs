//! Textual summary of a settled simulation, used by the CLI runner.

use std::fmt::Write;

use crate::design::{BridgeDesign, MemberId};
use crate::level::Level;
use crate::physics::RigidWorld;
use crate::simulation::Simulation;

/// Stress reading for one member.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MemberReading {
    /// Member identifier.
    pub id: MemberId,
    /// Cost locked in at creation.
    pub cost: u32,
    /// Normalized stress in `[0, 1]`.
    pub stress: f64,
}

/// Snapshot of the key numbers after a settling run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationSummary {
    /// Name of the level.
    pub level_name: String,
    /// Level budget.
    pub budget: u32,
    /// Total cost of the design.
    pub spent: u32,
    /// Per-member stress readings in identifier order.
    pub members: Vec<MemberReading>,
}

impl SimulationSummary {
    /// Collect a summary from a simulation of `design` over `level`.
    #[must_use]
    pub fn capture<W: RigidWorld>(
        level: &Level,
        design: &BridgeDesign,
        simulation: &Simulation<W>,
    ) -> Self {
        let members = simulation
            .member_stresses()
            .into_iter()
            .map(|(id, stress)| MemberReading {
                id,
                cost: design.member(id).map_or(0, |member| member.cost),
                stress,
            })
            .collect();
        Self {
            level_name: level.name.clone(),
            budget: level.budget,
            spent: design.total_cost(),
            members,
        }
    }
}

/// Render a human-readable report of the summary.
#[must_use]
pub fn render_summary(summary: &SimulationSummary) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Bridge report for '{}' ({} of {} budget spent)",
        summary.level_name, summary.spent, summary.budget
    )
    .expect("writing to string cannot fail");

    if summary.members.is_empty() {
        output.push_str("No members simulated.\n");
        return output;
    }

    for member in &summary.members {
        writeln!(
            &mut output,
            "  member {:?}: cost {:>4}, stress {:>5.1}%",
            member.id,
            member.cost,
            member.stress * 100.0
        )
        .expect("writing to string cannot fail");
    }

    let peak = summary
        .members
        .iter()
        .map(|member| member.stress)
        .fold(0.0_f64, f64::max);
    writeln!(&mut output, "Peak member stress: {:.1}%", peak * 100.0)
        .expect("writing to string cannot fail");

    output
}
