//! Projectile simulator command line.

use anyhow::{Context, Result};
use clap::Parser;
use projectile_sim::{LaunchParams, Simulator, MAX_STEPS};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "projectile-sim")]
#[command(about = "Flies a ball through wind and drag and reports how far from the target it lands")]
#[command(version)]
struct Args {
    /// Launch speed (m/s)
    #[arg(long, default_value_t = 30.0)]
    speed: f64,

    /// Launch bearing (degrees)
    #[arg(long, default_value_t = 15.0, allow_hyphen_values = true)]
    bearing: f64,

    /// Launch elevation above the horizontal (degrees)
    #[arg(long, default_value_t = 40.0, allow_hyphen_values = true)]
    elevation: f64,

    #[arg(long, default_value_t = 20.0)]
    wind_speed: f64,

    /// Direction the wind blows toward (degrees)
    #[arg(long, default_value_t = 170.0, allow_hyphen_values = true)]
    wind_bearing: f64,

    #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
    target_x: f64,

    #[arg(long, default_value_t = 20.0, allow_hyphen_values = true)]
    target_y: f64,

    /// Time step (s)
    #[arg(long, default_value_t = 0.01)]
    interval: f64,

    /// Give up after this many steps
    #[arg(long, default_value_t = MAX_STEPS)]
    max_steps: usize,

    /// Print the t, x, y, z, speed table after the run
    #[arg(long)]
    history: bool,
}

impl Args {
    fn launch_params(&self) -> LaunchParams {
        LaunchParams::new(
            self.speed,
            self.bearing,
            self.elevation,
            self.wind_speed,
            self.wind_bearing,
            self.target_x,
            self.target_y,
            self.interval,
        )
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let params = args.launch_params();

    let mut sim = Simulator::new(&params)
        .context("rejected launch parameters")?
        .with_max_steps(args.max_steps);
    let distance = sim.fly().context("flight did not reach the ground")?;

    if args.history {
        println!("{:>10} {:>12} {:>12} {:>12} {:>10}", "t", "x", "y", "z", "speed");
        for obs in sim.history().iter() {
            println!(
                "{:>10.3} {:>12.4} {:>12.4} {:>12.4} {:>10.4}",
                obs.t, obs.pos.x, obs.pos.y, obs.pos.z, obs.speed
            );
        }
    }

    println!("Distance from target: {distance:.2}");
    Ok(())
}
