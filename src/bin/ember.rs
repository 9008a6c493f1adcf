use std::{
    fs::File,
    io::{BufWriter, Read as _, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ember", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a behavior config over one particle lifetime and print each step as JSON.
    Sample(SampleArgs),
    /// Build every behavior in a config and list them in processing order.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input behavior config JSON (an array of `{"type", "config"}` entries).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Particles spawned in the single wave.
    #[arg(long, default_value_t = 1)]
    particles: usize,

    /// Ticks over the lifetime.
    #[arg(long, default_value_t = 10)]
    steps: u32,

    /// Particle lifetime in seconds.
    #[arg(long, default_value_t = 1.0)]
    lifetime: f64,

    /// Random seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input behavior config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn read_config(path: &Path, seed: u64) -> anyhow::Result<ember::BehaviorSet> {
    let mut json = String::new();
    File::open(path)
        .with_context(|| format!("open behavior config '{}'", path.display()))?
        .read_to_string(&mut json)
        .with_context(|| format!("read behavior config '{}'", path.display()))?;
    let set = ember::BehaviorSet::from_json(&json, seed)
        .with_context(|| format!("build behaviors from '{}'", path.display()))?;
    Ok(set)
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    if !(args.lifetime.is_finite() && args.lifetime > 0.0) {
        anyhow::bail!("--lifetime must be a positive number of seconds");
    }
    if args.steps == 0 {
        anyhow::bail!("--steps must be at least 1");
    }

    let mut set = read_config(&args.in_path, args.seed)?;
    let mut pool = ember::ParticlePool::with_capacity(args.particles);
    let wave = pool.acquire_wave(args.particles);
    set.initialize_wave(&mut pool, &wave);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_step(&mut out, 0, 0.0, &pool, &wave)?;

    let delta_sec = args.lifetime / f64::from(args.steps);
    for step in 1..=args.steps {
        let age = ember::clamp_unit(f64::from(step) * delta_sec / args.lifetime);
        for &id in &wave {
            if let Some(p) = pool.get_mut(id) {
                p.age_percent = age;
            }
        }
        set.update(&mut pool, delta_sec);
        write_step(&mut out, step, age, &pool, &wave)?;
    }
    out.flush().context("flush stdout")?;

    for &id in &wave {
        set.retire(&mut pool, id);
    }
    tracing::debug!(
        cached = set.cached_timelines(),
        missed = set.missed_lookups(),
        "sample finished"
    );
    Ok(())
}

fn write_step(
    out: &mut impl std::io::Write,
    step: u32,
    age: f64,
    pool: &ember::ParticlePool,
    wave: &[ember::ParticleId],
) -> anyhow::Result<()> {
    let particles: Vec<serde_json::Value> = wave
        .iter()
        .filter_map(|&id| pool.get(id).map(|p| (id, p)))
        .map(|(id, p)| {
            serde_json::json!({
                "id": id.index,
                "position": [p.position.x, p.position.y],
                "scale": [p.scale.x, p.scale.y],
                "tint": ember::Rgb8::from_tint(p.tint).to_hex(),
            })
        })
        .collect();
    let line = serde_json::json!({ "step": step, "age": age, "particles": particles });
    serde_json::to_writer(&mut *out, &line).context("encode step")?;
    writeln!(out).context("write step")?;
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let set = read_config(&args.in_path, 0)?;
    for behavior in set.behaviors() {
        println!("{:<16} {:?}", behavior.kind(), behavior.order());
    }
    eprintln!("ok: {} behaviors", set.behaviors().len());
    Ok(())
}
