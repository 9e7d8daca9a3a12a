//! Headless Tideline run: scripted input drives the avatar and cameras over
//! procedural terrain at a fixed timestep.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p tideline-demo -- --ticks 600 --log-level debug`.

mod script;

use std::path::PathBuf;

use clap::Parser;
use tideline_config::{CliArgs, Config, ConfigError, default_config_dir};
use tideline_input::{InputSnapshot, KeyBindings, KeyboardState, PointerState, Viewport};
use tideline_player::Simulation;
use tideline_terrain::{HeightmapParams, NoiseTerrain};
use tracing::{error, info};

use script::Script;

/// CLI arguments for the demo binary.
#[derive(Parser, Debug)]
#[command(name = "tideline-demo", about = "Headless Tideline avatar and camera run")]
struct DemoArgs {
    /// Number of ticks to simulate. Defaults to the length of the script.
    #[arg(long)]
    ticks: Option<u64>,

    /// Fixed timestep in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Terrain seed.
    #[arg(long, default_value_t = 7)]
    seed: u32,

    #[command(flatten)]
    config: CliArgs,
}

fn load_config(args: &CliArgs) -> Result<Config, ConfigError> {
    let dir = match &args.config {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };
    let mut config = Config::load_or_create(&dir)?;
    config.apply_cli_overrides(args);
    Ok(config)
}

fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("tideline").join("logs"))
}

fn main() {
    let args = DemoArgs::parse();

    let config = match load_config(&args.config) {
        Ok(config) => config,
        Err(e) => {
            // Logging is not up yet; fall back to defaults so the level still applies.
            let mut config = Config::default();
            config.apply_cli_overrides(&args.config);
            tideline_log::init_logging(None, false, Some(&config));
            error!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    tideline_log::init_logging(
        log_dir().as_deref(),
        cfg!(debug_assertions),
        Some(&config),
    );

    let bindings = match KeyBindings::with_overrides(&config.input.keybindings) {
        Ok(bindings) => bindings,
        Err(e) => {
            error!("Invalid key bindings: {e}");
            std::process::exit(1);
        }
    };

    let viewport = Viewport::new(config.window.width, config.window.height);
    let terrain = NoiseTerrain::new(
        HeightmapParams {
            seed: args.seed,
            ..Default::default()
        },
        -1.0,
    );
    info!(
        "Terrain seed {} with {} octaves, relief up to {:.1}",
        terrain.sampler().params().seed,
        terrain.sampler().params().octaves,
        terrain.sampler().max_amplitude()
    );

    let mut sim = Simulation::new(&config);
    sim.subscribe(|change| {
        info!(from = %change.before, to = %change.current, "avatar action");
    });

    let mut keyboard = KeyboardState::new();
    let mut pointer = PointerState::new();
    pointer.set_captured(true);

    let mut script = Script::tour();
    let ticks = args.ticks.unwrap_or_else(|| script.length() + 60);

    info!(
        "Running {ticks} ticks at dt={:.4}s, viewport {}x{}, camera {:?}",
        args.dt,
        config.window.width,
        config.window.height,
        sim.camera.mode()
    );

    for tick in 0..ticks {
        script.feed(tick, &mut keyboard, &mut pointer);
        let input = InputSnapshot::capture(&keyboard, &pointer, &bindings, &viewport);
        keyboard.clear_transients();
        pointer.clear_transients();

        sim.step(&input, args.dt, &terrain);

        if tick % 60 == 0 {
            let p = sim.player.position;
            let c = sim.camera.position();
            info!(
                tick,
                mode = ?sim.camera.mode(),
                "avatar ({:.2}, {:.2}, {:.2}) speed {:.2} | camera ({:.2}, {:.2}, {:.2})",
                p.x,
                p.y,
                p.z,
                sim.player.real_speed / args.dt,
                c.x,
                c.y,
                c.z
            );
        }
    }

    let p = sim.player.position;
    info!(
        "Finished after {} ticks: avatar at ({:.2}, {:.2}, {:.2}), action {}, water uv ({:.4}, {:.4})",
        sim.ticks(),
        p.x,
        p.y,
        p.z,
        sim.player.action(),
        sim.water.offset_uv.x,
        sim.water.offset_uv.y
    );
}
