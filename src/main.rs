use std::error::Error;

use bridgewright::{point, render_summary, Editor, Level, Simulation, SimulationSummary};
use tracing_subscriber::EnvFilter;

/// Build a level in code when no path is given on the command line.
fn demo_level() -> Level {
    let mut level = Level::new("demo crossing", 2_000);
    level.push_anchor("left bank", 100.0, 300.0);
    level.push_anchor("right bank", 300.0, 300.0);
    level.push_bank(0.0, 320.0, 120.0, 320.0);
    level.push_bank(280.0, 320.0, 400.0, 320.0);
    level
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let level = match std::env::args().nth(1) {
        Some(path) => Level::from_json_file(path)?,
        None => demo_level(),
    };

    // Build a braced span: anchor to anchor along the deck, with an apex
    // joint above midspan tied to both ends.
    let mut editor = Editor::new(level);
    editor.click(point(100.0, 300.0));
    editor.click(point(200.0, 300.0));
    editor.click(point(300.0, 300.0));
    editor.cancel();
    editor.click(point(200.0, 300.0));
    editor.click(point(200.0, 240.0));
    editor.click(point(100.0, 300.0));
    editor.cancel();
    editor.click(point(200.0, 240.0));
    editor.click(point(300.0, 300.0));

    // Let the structure settle under gravity for a few seconds.
    let mut simulation = Simulation::new(editor.level(), editor.design());
    for _ in 0..300 {
        simulation.step(1.0 / 60.0);
    }

    let summary = SimulationSummary::capture(editor.level(), editor.design(), &simulation);
    println!("{}", render_summary(&summary));

    Ok(())
}
