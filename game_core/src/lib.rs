pub mod components;
pub mod config;
pub mod error;
pub mod map;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::GameError;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use state::*;

pub use systems::input::DragTracker;

use error::Result;
use systems::*;

/// Advance one match by `dt` seconds.
///
/// The order below is part of the contract; reordering changes outcomes
/// for large steps.
pub fn step(
    state: &mut MatchState,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
    dt: f32,
) -> Result<RenderSnapshot> {
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("rejected time step {dt}");
        return Err(GameError::invalid_argument(format!(
            "dt must be finite and non-negative, got {dt}"
        )));
    }

    // Clear events at start of frame
    events.clear();

    // 1. Move ball
    move_ball(&mut state.ball, dt);

    // 2. Reflect off the walls along the paddle axis
    bounds_check_ball(state, events);

    // 3. Check scoring (ball reached either end)
    check_scoring(state, config, rng, events);

    // 4. Reflect off paddles
    check_paddle_collisions(state, events);

    Ok(state.snapshot())
}

/// Owns one match and drives it one frame at a time
#[derive(Debug, Clone)]
pub struct MatchSimulator {
    state: MatchState,
    config: Config,
    rng: GameRng,
    events: Events,
}

impl MatchSimulator {
    /// Start a match with the reference configuration
    pub fn new(output_width: f32, output_height: f32) -> Result<Self> {
        Self::with_config(output_width, output_height, Config::default(), Params::DEFAULT_SEED)
    }

    pub fn with_config(
        output_width: f32,
        output_height: f32,
        config: Config,
        seed: u64,
    ) -> Result<Self> {
        config.validate()?;
        let state = MatchState::new(output_width, output_height, &config)?;
        log::info!(
            "match created on {output_width}x{output_height} surface, playable y {}..{}",
            state.area.min().y,
            state.area.max().y
        );
        Ok(Self {
            state,
            config,
            rng: GameRng::new(seed),
            events: Events::new(),
        })
    }

    /// Point a paddle at `axis_position`; returns the clamped position
    pub fn set_paddle_target(&mut self, player: u8, axis_position: f32) -> Result<f32> {
        let player = Player::try_from(player).inspect_err(|err| log::warn!("{err}"))?;
        self.state.set_paddle_target(player, axis_position)
    }

    pub fn advance(&mut self, dt: f32) -> Result<RenderSnapshot> {
        step(
            &mut self.state,
            &self.config,
            &mut self.rng,
            &mut self.events,
            dt,
        )
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Events raised by the most recent `advance`
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn playable_area(&self) -> PlayableArea {
        self.state.area
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        self.state.snapshot()
    }
}
