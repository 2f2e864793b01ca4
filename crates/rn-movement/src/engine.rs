//! The movement engine: one transition per train per tick.

use tracing::{debug, trace};

use rn_core::{Direction, RandomSource, StationId, TrainId};
use rn_topology::{RailNetwork, Train};

use crate::{TickReport, TrainEvent};

/// Outcome of the plan phase for one train.  Built from read-only network
/// state so plans can be computed in any order.
struct Plan {
    train:     TrainId,
    direction: Direction,
    from:      StationId,
    /// `None` when the train is held this tick.
    to:        Option<StationId>,
}

/// Advances all trains of a [`RailNetwork`] by one tick.
///
/// `S` supplies the delay draws: [`SimRng`](rn_core::SimRng) for real runs,
/// [`SequenceRng`](rn_core::SequenceRng) for scripted tests.
pub struct MovementEngine<S: RandomSource> {
    rng: S,
}

impl<S: RandomSource> MovementEngine<S> {
    pub fn new(rng: S) -> Self {
        Self { rng }
    }

    /// The random source, e.g. to reuse it for placement.
    #[inline]
    pub fn rng_mut(&mut self) -> &mut S {
        &mut self.rng
    }

    pub fn into_rng(self) -> S {
        self.rng
    }

    /// Apply one tick to every train in `network`.
    ///
    /// Makes exactly one [`RandomSource::unit`] draw per train, in ascending
    /// `TrainId` order, whether or not the train ends up moving.
    ///
    /// # Panics
    /// Panics if a train sits at a station that is not on its line.
    pub fn advance_tick(&mut self, network: &mut RailNetwork) -> TickReport {
        // ── Phase 1: draws (sequential, TrainId order) ────────────────────
        let draws: Vec<f64> = (0..network.train_count()).map(|_| self.rng.unit()).collect();

        // ── Phase 2: plans (read-only, optionally parallel) ───────────────
        let plans = compute_plans(network, &draws);

        // ── Phase 3: apply (sequential, TrainId order) ────────────────────
        let mut report = TickReport { events: Vec::with_capacity(plans.len()) };
        for plan in plans {
            network.set_train_state(plan.train, plan.direction, plan.to.is_none());

            let event = match plan.to {
                None => {
                    trace!(train = %plan.train, station = %plan.from, "delayed");
                    TrainEvent::Delayed { train: plan.train, station: plan.from }
                }
                Some(to) => {
                    network.move_train(plan.train, to);
                    trace!(train = %plan.train, from = %plan.from, to = %to, "arrived");
                    TrainEvent::Arrived { train: plan.train, from: plan.from, to }
                }
            };
            report.events.push(event);
        }

        debug!(
            trains  = network.train_count(),
            moved   = report.moved_trains(),
            delayed = report.delayed_trains(),
            "tick advanced"
        );
        report
    }
}

fn compute_plans(network: &RailNetwork, draws: &[f64]) -> Vec<Plan> {
    #[cfg(not(feature = "parallel"))]
    {
        network
            .trains()
            .iter()
            .zip(draws)
            .map(|(train, &draw)| plan_train(network, train, draw))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        network
            .trains()
            .par_iter()
            .zip(draws.par_iter())
            .map(|(train, &draw)| plan_train(network, train, draw))
            .collect()
    }
}

/// Terminus snap, delay decision, and next station for one train.
fn plan_train(network: &RailNetwork, train: &Train, draw: f64) -> Plan {
    let line = network.line(train.line());
    let from = train.station();
    let Some(index) = line.position_of(from) else {
        panic!(
            "{} is at station {} which is not on the {} line",
            train.id(),
            network.station(from).name,
            line.name
        );
    };

    // Both checks fire on a single-station line; the later one wins.
    let last = line.last_index();
    let mut direction = train.direction();
    if index == 0 {
        direction = Direction::South;
    }
    if index == last {
        direction = Direction::North;
    }

    if draw < network.station(from).delay_probability {
        return Plan { train: train.id(), direction, from, to: None };
    }

    let next = match direction {
        // Only reachable at index 0 on a single-station line.
        Direction::North => index.checked_sub(1).unwrap_or(last),
        Direction::South => index + 1,
    };
    Plan { train: train.id(), direction, from, to: Some(line.stations()[next]) }
}
