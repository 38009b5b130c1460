use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use meadow::config::HostConfig;
use meadow::world::{World, WorldSnapshot};
use meadow::{InputScript, Session, Walk};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(long)]
    ticks: Option<u64>,

    /// Generation preset: default, small, flowery
    #[arg(long)]
    preset: Option<String>,

    /// World width in tiles
    #[arg(long)]
    width: Option<i32>,

    /// World height in tiles
    #[arg(long)]
    height: Option<i32>,

    /// Load a world snapshot (falls back to generating)
    #[arg(long)]
    load: Option<PathBuf>,

    /// Write a world snapshot after the run
    #[arg(long)]
    save: Option<PathBuf>,

    /// Print an ASCII minimap after the run
    #[arg(long)]
    minimap: bool,

    /// Direction to hold while running
    #[arg(long, value_enum)]
    walk: Option<Walk>,

    /// Press jump every N ticks
    #[arg(long)]
    jump_every: Option<u64>,

    /// Config file stem (default: meadow)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the resolved generation parameters as RON and exit
    #[arg(long)]
    dump_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Command-line flags override the layered configuration
    fn apply(&self, config: &mut HostConfig) {
        if self.seed.is_some() {
            config.world.seed = self.seed;
        }
        if let Some(preset) = &self.preset {
            config.world.preset = preset.clone();
        }
        if self.width.is_some() {
            config.world.width = self.width;
        }
        if self.height.is_some() {
            config.world.height = self.height;
        }
        if let Some(ticks) = self.ticks {
            config.run.ticks = ticks;
        }
        if let Some(walk) = self.walk {
            config.run.walk = walk;
        }
        if let Some(jump_every) = self.jump_every {
            config.run.jump_every = jump_every;
        }
        if self.minimap {
            config.output.minimap = true;
        }
        if let Some(save) = &self.save {
            config.output.save = Some(save.to_string_lossy().into_owned());
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = match &args.config {
        Some(path) => HostConfig::load_from(path)?,
        None => HostConfig::load()?,
    };
    args.apply(&mut config);
    let worldgen = config.worldgen()?;

    if args.dump_config {
        let pretty = ron::ser::PrettyConfig::new().depth_limit(2);
        println!(
            "{}",
            ron::ser::to_string_pretty(&worldgen, pretty).context("Failed to encode config")?
        );
        return Ok(());
    }

    let seed = config.world.seed.unwrap_or_else(rand::random);
    log::info!("Starting Meadow");
    log::info!("  Seed: {}", seed);
    log::info!("  Preset: {}", config.world.preset);
    log::info!("  Size: {}x{} tiles", worldgen.world.width, worldgen.world.height);
    log::info!("  Ticks: {}", config.run.ticks);

    let world = match &args.load {
        Some(path) => World::load_or_generate(path, seed, worldgen),
        None => World::generate(seed, worldgen),
    };

    let script = InputScript {
        walk: config.run.walk,
        jump_every: config.run.jump_every,
    };
    let mut session = Session::new(world, script, config.run.report_every);
    let stats = session.run(config.run.ticks);
    let world = &session.world;

    println!("Seed:            {}", world.seed());
    println!("Ticks:           {}", stats.ticks);
    println!("Creatures:       {}", world.creature_manager.count());
    println!("Hearts dropped:  {}", stats.hearts);
    println!("Fish expired:    {}", stats.fish_removed);
    println!(
        "Trees grown:     {} ({} saplings gone)",
        stats.growth_fired, stats.growth_skipped
    );
    println!(
        "Player:          ({:.1}, {:.1}){}",
        world.player.position.x,
        world.player.position.y,
        if world.player.grounded { " on ground" } else { "" }
    );
    println!(
        "Time of day:     {}",
        if world.celestial().is_night() { "night" } else { "day" }
    );

    if let Some(save) = &config.output.save {
        let path = PathBuf::from(save);
        let snapshot: WorldSnapshot = world.snapshot();
        snapshot
            .save(&path)
            .with_context(|| format!("Failed to save world to {:?}", path))?;
        println!("Saved world to {:?}", path);
    }

    if config.output.minimap {
        for row in world.minimap_rows() {
            println!("{}", row);
        }
    }

    Ok(())
}
