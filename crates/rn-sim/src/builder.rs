//! Fluent builder for constructing a [`Sim`].

use tracing::info;

use rn_core::{RandomSource, SimConfig, SimRng, Tick};
use rn_movement::{place_explicit, place_random, MovementEngine, Placement};
use rn_topology::RailNetwork;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// Trains are placed at build time: one per explicit [`Placement`] if
/// `.placements(v)` was called, otherwise `config.train_count` trains at
/// random positions drawn from the builder's random source.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, network, SimRng::new(42))
///     .placements(vec![Placement::new("A", "blue", Direction::South)])
///     .build()?;
/// ```
pub struct SimBuilder<S: RandomSource> {
    config:     SimConfig,
    network:    RailNetwork,
    rng:        S,
    placements: Option<Vec<Placement>>,
}

impl SimBuilder<SimRng> {
    /// Builder with a [`SimRng`] seeded from `config.seed`, or from OS
    /// entropy when no seed is set.
    pub fn from_config(config: SimConfig, network: RailNetwork) -> Self {
        let rng = config.seed.map_or_else(SimRng::from_entropy, SimRng::new);
        Self::new(config, network, rng)
    }
}

impl<S: RandomSource> SimBuilder<S> {
    /// Create a builder with all required inputs.  `network` should not
    /// have trains yet.
    pub fn new(config: SimConfig, network: RailNetwork, rng: S) -> Self {
        Self { config, network, rng, placements: None }
    }

    /// Place one train per entry instead of `config.train_count` random ones.
    pub fn placements(mut self, placements: Vec<Placement>) -> Self {
        self.placements = Some(placements);
        self
    }

    /// Validate the inputs, place the trains, and return a ready-to-run
    /// [`Sim`].  `config.train_count` is updated to the number of trains
    /// actually placed.
    pub fn build(self) -> SimResult<Sim<S>> {
        let Self { mut config, mut network, mut rng, placements } = self;

        let trains = match placements {
            Some(p) => {
                if p.is_empty() {
                    return Err(SimError::Config("at least one train placement is required".into()));
                }
                place_explicit(&mut network, &p)?
            }
            None => {
                if config.train_count == 0 {
                    return Err(SimError::Config("train count must be at least 1".into()));
                }
                place_random(&mut network, config.train_count, &mut rng)?
            }
        };
        config.train_count = trains.len();

        info!(
            trains      = trains.len(),
            stations    = network.station_count(),
            lines       = network.line_count(),
            total_ticks = config.total_ticks,
            seed        = ?config.seed,
            "simulation ready"
        );

        Ok(Sim {
            config,
            current_tick: Tick::ZERO,
            network,
            engine: MovementEngine::new(rng),
        })
    }
}
