use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use fridge_gym::config::FridgeConfig;
use fridge_gym::environment::fridge::assets::Sprites;
use fridge_gym::environment::fridge::frame_drawer::{FridgeDrawer, PixelFrameDrawer};
use fridge_gym::environment::fridge::mechanics::{MODEL_LEN_X, MODEL_LEN_Y};
use fridge_gym::environment::fridge_environment::FridgeEnvironment;
use fridge_gym::environment::policy::{Policy, RandomPolicy, ScriptedPolicy};
use fridge_gym::gym::prelude::{DebugVisualizer, Environment};
use fridge_gym::util::init_logging;

const MAX_STEPS_PER_EPISODE: usize = 1000;

const USAGE: &str = "usage: fridge-headless-run [scripted|random] [seed] [frame-output-dir]";

/// Plays one episode without a window; optionally writes every frame as PNG.
fn main() -> Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let seed: u64 = match args.get(1) {
        Some(s) => s.parse().with_context(|| format!("invalid seed '{s}'\n{USAGE}"))?,
        None => 0,
    };
    let mut policy: Box<dyn Policy> = match args.first().map(String::as_str) {
        None | Some("scripted") => Box::new(ScriptedPolicy),
        Some("random") => Box::new(RandomPolicy::new(seed)),
        Some(other) => bail!("unknown policy '{other}'\n{USAGE}"),
    };
    let frame_dir = args.get(2).map(PathBuf::from);

    let drawer = match &frame_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
            let config = FridgeConfig::from_env();
            Some(PixelFrameDrawer::new(Sprites::load(&config.assets_dir), MODEL_LEN_X as u32, MODEL_LEN_Y as u32))
        }
        None => None,
    };
    let save_frame = |env: &FridgeEnvironment, step: usize| -> Result<()> {
        if let (Some(drawer), Some(dir)) = (&drawer, &frame_dir) {
            let path = dir.join(format!("frame_{step:04}.png"));
            drawer
                .draw(env.mechanics())
                .save(&path)
                .with_context(|| format!("cannot write {}", path.display()))?;
        }
        Ok(())
    };

    let mut env = FridgeEnvironment::new();
    let (mut observation, _) = env.reset(Some(seed));
    save_frame(&env, 0)?;

    let mut episode_reward = 0.0;
    let mut steps = 0;
    while steps < MAX_STEPS_PER_EPISODE {
        let action = policy.act(&observation);
        let (next, reward, done, truncated, info) = env.step(action);
        steps += 1;
        episode_reward += reward;
        log::debug!("#{steps} {action}: reward {reward:.1}, phase {:?}, {}", info.game_phase, next.one_line_info());
        save_frame(&env, steps)?;
        observation = next;
        if done || truncated {
            break;
        }
    }

    let info = env.info();
    log::info!(
        "episode finished after {steps} steps, reward {episode_reward:.1}, task complete: {}",
        info.task_complete
    );
    Ok(())
}
