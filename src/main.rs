use std::collections::LinkedList;

use anyhow::{ensure, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use cursorkit::device::{self, BodyColor, Gpu, GpuKind};
use cursorkit::{drive, FilterCursor, IterAdapter};

#[derive(Parser, Debug)]
#[command(name = "cursorkit", about = "Cursor framework demo over a GPU fleet")]
struct Cli {
    /// Number of units to generate per container.
    #[arg(long, default_value_t = 30)]
    count: usize,

    /// Fixed capacity of the bounded fleet.
    #[arg(long, default_value_t = 30)]
    capacity: usize,

    /// RNG seed; omit for a different fleet each run.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    ensure!(
        cli.count <= cli.capacity,
        "count ({}) exceeds bounded fleet capacity ({})",
        cli.count,
        cli.capacity
    );

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let fleet = device::random_fleet(cli.count, cli.capacity, &mut rng);
    println!("Bounded fleet size: {}", fleet.len());

    let foreign: LinkedList<Gpu> = device::random_list(cli.count, &mut rng);
    println!("Foreign list size: {}", foreign.len());

    println!("\nUsing every unit:");
    drive(&mut fleet.cursor(), report);

    println!("\nUsing working units only:");
    let mut working = FilterCursor::new(fleet.cursor(), |g: &Gpu| g.is_working());
    drive(&mut working, report);

    println!("\nUsing GeForce units only:");
    let mut geforce = FilterCursor::new(fleet.cursor(), |g: &Gpu| g.kind() == GpuKind::GeForce);
    drive(&mut geforce, report);

    println!("\nUsing working Quadro units:");
    let quadro = FilterCursor::new(fleet.cursor(), |g: &Gpu| g.kind() == GpuKind::Quadro);
    let mut working_quadro = FilterCursor::new(quadro, |g: &Gpu| g.is_working());
    drive(&mut working_quadro, report);

    println!("\nUsing black-shrouded units:");
    let mut black = FilterCursor::new(fleet.cursor(), |g: &Gpu| g.color() == BodyColor::Black);
    drive(&mut black, report);

    println!("\nUsing working Tesla units through the foreign-list adapter:");
    let adapted = IterAdapter::new(&foreign);
    let tesla = FilterCursor::new(adapted, |g: &Gpu| g.kind() == GpuKind::Tesla);
    let mut working_tesla = FilterCursor::new(tesla, |g: &Gpu| g.is_working());
    drive(&mut working_tesla, report);

    Ok(())
}

fn report(gpu: &Gpu) {
    println!(
        "Body color: {} | {} GB | {}",
        gpu.color(),
        gpu.memory_gb(),
        gpu.activate()
    );
}
