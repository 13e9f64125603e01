//! Simulation configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

/// Parameters of a headless run.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub frames: u64,
    pub frame_rate: f64,
    pub seed: u64,
    pub agent_config: Option<PathBuf>,
    pub log_every: u64,
    pub pickup_interval: u64,
}

impl SimConfig {
    pub const DEFAULT_FRAMES: u64 = 60 * 60;
    pub const DEFAULT_FRAME_RATE: f64 = 60.0;
    pub const DEFAULT_SEED: u64 = 0x5EED;
    pub const DEFAULT_LOG_EVERY: u64 = 60;
    pub const DEFAULT_PICKUP_INTERVAL: u64 = 600;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SIM_FRAMES` - Number of frames to run (default: 3600)
    /// - `SIM_FRAME_RATE` - Frames per second, sets the elapsed time per frame (default: 60)
    /// - `SIM_SEED` - Seed for the agent's random wandering (default: 0x5EED)
    /// - `SIM_AGENT_CONFIG` - Path to a RON agent config (default: built-in values)
    /// - `SIM_LOG_EVERY` - Frames between status lines (default: 60)
    /// - `SIM_PICKUP_INTERVAL` - Frames between collectible pickups (default: 600)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(frames) = read_env::<u64>("SIM_FRAMES") {
            config.frames = frames;
        }
        if let Some(rate) = read_env::<f64>("SIM_FRAME_RATE")
            && rate.is_finite()
            && rate > 0.0
        {
            config.frame_rate = rate;
        }
        if let Some(seed) = read_env::<u64>("SIM_SEED") {
            config.seed = seed;
        }
        config.agent_config = env::var("SIM_AGENT_CONFIG").ok().map(PathBuf::from);
        if let Some(every) = read_env::<u64>("SIM_LOG_EVERY") {
            config.log_every = every.max(1);
        }
        if let Some(interval) = read_env::<u64>("SIM_PICKUP_INTERVAL") {
            config.pickup_interval = interval.max(1);
        }

        config
    }

    /// Seconds per frame.
    pub fn frame_time(&self) -> f64 {
        1.0 / self.frame_rate
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frames: Self::DEFAULT_FRAMES,
            frame_rate: Self::DEFAULT_FRAME_RATE,
            seed: Self::DEFAULT_SEED,
            agent_config: None,
            log_every: Self::DEFAULT_LOG_EVERY,
            pickup_interval: Self::DEFAULT_PICKUP_INTERVAL,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
