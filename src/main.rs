use gravsim::{build_simulation, load_bodies_csv, ScenarioConfig};

use anyhow::Result;
use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "2D gravitational N-body simulator")]
struct Args {
    /// Scenario YAML file (parameters + bodies)
    #[arg(short, long, default_value = "scenarios/two_body.yaml")]
    scenario: PathBuf,

    /// CSV bodies file overriding the scenario's body list
    /// (rows: x,y,vx,vy,mass[,name], '#' comment lines skipped)
    #[arg(short, long)]
    bodies: Option<PathBuf>,

    /// Override the scenario's time step
    #[arg(long)]
    dt: Option<f64>,

    /// Override the scenario's step count
    #[arg(long)]
    steps: Option<u64>,

    /// Override the scenario's gravitational constant
    #[arg(long, value_name = "G")]
    g: Option<f64>,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let file = File::open(&args.scenario)?;
    let reader = BufReader::new(file);
    let mut cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    if let Some(dt) = args.dt {
        cfg.parameters.dt = dt;
    }
    if let Some(steps) = args.steps {
        cfg.parameters.steps = steps;
    }
    if let Some(g) = args.g {
        cfg.parameters.G = g;
    }

    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cfg = load_scenario(&args)?;
    let bodies = match &args.bodies {
        Some(path) => Some(load_bodies_csv(path)?),
        None => None,
    };

    let sim = build_simulation(&cfg, bodies)?;
    let result = sim.run();

    let first = &result.energy_history[0];
    let last = result.energy_history.last().unwrap();
    println!(
        "steps: {}   t: {:.6}",
        result.system.elapsed_steps, result.system.t
    );
    println!(
        "E(0)  = {:+.9}  (K {:+.9}, U {:+.9})",
        first.total, first.kinetic, first.potential
    );
    println!(
        "E(t)  = {:+.9}  (K {:+.9}, U {:+.9})",
        last.total, last.kinetic, last.potential
    );
    println!("relative drift: {:.3e}", result.relative_energy_drift());

    for b in &result.system.bodies {
        let label = b.name.clone().unwrap_or_else(|| format!("body {}", b.id));
        println!(
            "{label}: x = ({:+.6}, {:+.6}), v = ({:+.6}, {:+.6})",
            b.x.x, b.x.y, b.v.x, b.v.y
        );
    }

    Ok(())
}
