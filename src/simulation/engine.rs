// src/simulation/engine.rs

use crate::error::{OrderKind, SimulationError};
use crate::model::loaders::LoaderBank;
use crate::model::queues::ClaimantQueue;
use crate::model::roundabout::Roundabout;
use crate::model::ticket::Ticket;
use crate::simulation::clock::SimClock;
use crate::simulation::config::SimulationConfig;
use crate::simulation::traits::{Renderer, TickGate, TickSnapshot};
use log::{debug, info, warn};
use serde::Serialize;
use std::io;

// We make this Serialize so we can write it to CSV later
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickRecord {
    pub tick: usize,
    pub minute: usize,
    pub second: usize,
    pub arrived: Option<u32>,
    pub filled: Option<u32>,
    pub claimed: Option<u32>,
    // carousel, queue_length and loader_remaining all describe the moment the
    // tick was shown: after arrival and fill, before any claim.
    /// Retrieval point first, 0 = empty.
    pub carousel: String,
    pub queue_length: usize,
    pub loader_remaining: usize,
}

/// Everything that happened during one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    pub snapshot: TickSnapshot,
    /// Passenger who joined the line.
    pub arrived: Option<Ticket>,
    /// Bag placed at the retrieval point.
    pub filled: Option<Ticket>,
    /// Bag picked up by the front passenger.
    pub claimed: Option<Ticket>,
}

/// How things stood when the carousel shut down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub ticks_elapsed: usize,
    pub claimed: usize,
    /// Bags still going round, retrieval point first.
    pub unclaimed_baggage: Vec<Ticket>,
    /// Passengers still in line, front first.
    pub waiting_claimants: Vec<Ticket>,
    pub left_on_loaders: usize,
    pub not_disembarked: usize,
}

impl RunReport {
    pub fn has_unclaimed_baggage(&self) -> bool {
        !self.unclaimed_baggage.is_empty()
    }

    pub fn has_waiting_claimants(&self) -> bool {
        !self.waiting_claimants.is_empty()
    }
}

pub struct CarouselSimulation {
    config: SimulationConfig,

    // Baggage path: loaders -> carousel -> passenger
    loaders: LoaderBank,
    carousel: Roundabout<Option<Ticket>>,
    claimants: ClaimantQueue,

    // Passengers still on the plane, in the order they will get off
    disembark_order: Vec<Ticket>,
    next_passenger: usize,

    clock: SimClock,
    claimed: Vec<Ticket>,
    history: Vec<TickRecord>,
}

impl CarouselSimulation {
    /// Stacks the baggage onto the loaders in `unload_order` and sets up an
    /// empty carousel. Both orders must be permutations of `1..=passengers`.
    pub fn new(
        config: SimulationConfig,
        unload_order: Vec<Ticket>,
        disembark_order: Vec<Ticket>,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        check_permutation(&unload_order, config.passengers, OrderKind::Unload)?;
        check_permutation(&disembark_order, config.passengers, OrderKind::Disembark)?;

        let mut loaders = LoaderBank::new(config.loader_count, config.loader_capacity);
        loaders.fill(unload_order)?;

        // Every position starts out empty.
        let mut carousel = Roundabout::with_capacity(config.carousel_size);
        for _ in 0..config.carousel_size {
            carousel.insert(None);
        }

        Ok(Self {
            config,
            loaders,
            carousel,
            claimants: ClaimantQueue::new(),
            disembark_order,
            next_passenger: 0,
            clock: SimClock::default(),
            claimed: Vec::new(),
            history: Vec::new(),
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn carousel(&self) -> &Roundabout<Option<Ticket>> {
        &self.carousel
    }

    pub fn claimants(&self) -> &ClaimantQueue {
        &self.claimants
    }

    pub fn loaders(&self) -> &LoaderBank {
        &self.loaders
    }

    pub fn clock(&self) -> SimClock {
        self.clock
    }

    /// One record per completed tick.
    pub fn history(&self) -> &[TickRecord] {
        &self.history
    }

    /// Tickets picked up so far, in pickup order.
    pub fn claimed(&self) -> &[Ticket] {
        &self.claimed
    }

    pub fn is_finished(&self) -> bool {
        self.clock.tick() >= self.config.total_ticks()
    }

    pub fn run(&mut self) -> RunReport {
        while self.step().is_some() {}
        self.finish()
    }

    /// Runs every remaining tick, showing each one to `renderer` and waiting
    /// on `gate` between ticks.
    pub fn run_with<R, G>(&mut self, renderer: &mut R, gate: &mut G) -> io::Result<RunReport>
    where
        R: Renderer + ?Sized,
        G: TickGate + ?Sized,
    {
        while self.step_with(renderer)?.is_some() {
            gate.advance()?;
        }
        let report = self.finish();
        renderer.render_report(&report)?;
        Ok(report)
    }

    /// Advances one tick. Returns `None` once the configured time is up.
    pub fn step(&mut self) -> Option<TickOutcome> {
        if self.is_finished() {
            return None;
        }
        let tick = self.clock.tick();

        // =================================================================
        // 1. Next passenger off the plane joins the line
        // =================================================================
        let arrived = self.disembark_next();

        // =================================================================
        // 2. Baggage comes up the ramp if the retrieval point is free
        // =================================================================
        let filled = self.fill_retrieval_point();

        // =================================================================
        // 3. Snapshot for display
        // =================================================================
        let snapshot = self.snapshot();

        // =================================================================
        // 4. Front passenger takes their bag if it is at the retrieval point
        // =================================================================
        let claimed = self.try_claim();

        // =================================================================
        // 5. Belt moves, time advances
        // =================================================================
        self.carousel.rotate(self.config.rotation);
        debug!(
            "Tick {}: arrived {:?}, filled {:?}, claimed {:?}, carousel now [{}]",
            tick,
            arrived.map(Ticket::number),
            filled.map(Ticket::number),
            claimed.map(Ticket::number),
            self.carousel_labels(),
        );

        let outcome = TickOutcome {
            snapshot,
            arrived,
            filled,
            claimed,
        };
        self.record_history(&outcome);
        self.clock.advance();
        Some(outcome)
    }

    /// Same as [`step`](Self::step), reporting the tick to `renderer`.
    pub fn step_with<R>(&mut self, renderer: &mut R) -> io::Result<Option<TickOutcome>>
    where
        R: Renderer + ?Sized,
    {
        let outcome = match self.step() {
            Some(outcome) => outcome,
            None => return Ok(None),
        };
        renderer.render_tick(&outcome.snapshot)?;
        if let Some(ticket) = outcome.claimed {
            renderer.render_claim(ticket)?;
        }
        Ok(Some(outcome))
    }

    /// Summarises the current state. Can be called at any point.
    pub fn report(&self) -> RunReport {
        RunReport {
            ticks_elapsed: self.clock.tick(),
            claimed: self.claimed.len(),
            unclaimed_baggage: self.carousel.iter().flatten().copied().collect(),
            waiting_claimants: self.claimants.iter().collect(),
            left_on_loaders: self.loaders.len(),
            not_disembarked: self.disembark_order.len() - self.next_passenger,
        }
    }

    fn finish(&self) -> RunReport {
        let report = self.report();
        info!(
            "Carousel stopped after {} ({} ticks): {} bags claimed",
            self.clock, report.ticks_elapsed, report.claimed
        );
        if report.has_unclaimed_baggage() {
            warn!("There is unclaimed luggage: {} bags", report.unclaimed_baggage.len());
        }
        if report.has_waiting_claimants() {
            warn!(
                "Some customers are still waiting in line: {}",
                report.waiting_claimants.len()
            );
        }
        report
    }

    fn disembark_next(&mut self) -> Option<Ticket> {
        let ticket = *self.disembark_order.get(self.next_passenger)?;
        self.next_passenger += 1;
        self.claimants.enqueue(ticket);
        Some(ticket)
    }

    /// Swaps an empty slot at the retrieval point for the next bag off the
    /// loaders. Once the loaders run dry the slot is put back empty.
    fn fill_retrieval_point(&mut self) -> Option<Ticket> {
        if self.carousel.current() != Some(&None) {
            return None;
        }
        self.carousel.remove();
        let bag = self.loaders.drain_next();
        self.carousel.insert(bag);
        bag
    }

    /// Only an exact match with the front passenger's ticket is handed over.
    fn try_claim(&mut self) -> Option<Ticket> {
        let bag = (*self.carousel.current()?)?;
        if self.claimants.front()? != bag {
            return None;
        }
        self.carousel.remove();
        self.carousel.insert(None);
        self.claimants.dequeue();
        self.claimed.push(bag);
        Some(bag)
    }

    fn snapshot(&self) -> TickSnapshot {
        TickSnapshot {
            clock: self.clock,
            carousel: self.carousel.iter().copied().collect(),
            claimants: self.claimants.iter().collect(),
            loader_remaining: self.loaders.len(),
        }
    }

    fn carousel_labels(&self) -> String {
        join_labels(self.carousel.iter().copied())
    }

    fn record_history(&mut self, outcome: &TickOutcome) {
        self.history.push(TickRecord {
            tick: self.clock.tick(),
            minute: self.clock.minutes(),
            second: self.clock.seconds(),
            arrived: outcome.arrived.map(Ticket::number),
            filled: outcome.filled.map(Ticket::number),
            claimed: outcome.claimed.map(Ticket::number),
            carousel: join_labels(outcome.snapshot.carousel.iter().copied()),
            queue_length: outcome.snapshot.claimants.len(),
            loader_remaining: outcome.snapshot.loader_remaining,
        });
    }
}

fn join_labels<I>(slots: I) -> String
where
    I: IntoIterator<Item = Option<Ticket>>,
{
    slots
        .into_iter()
        .map(|slot| Ticket::label(slot).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn check_permutation(order: &[Ticket], n: usize, which: OrderKind) -> Result<(), SimulationError> {
    if order.len() != n {
        return Err(SimulationError::InvalidOrder {
            which,
            reason: format!("expected {} tickets, got {}", n, order.len()),
        });
    }
    let mut seen = vec![false; n];
    for ticket in order {
        let idx = ticket.number() as usize - 1;
        match seen.get_mut(idx) {
            None => {
                return Err(SimulationError::InvalidOrder {
                    which,
                    reason: format!("ticket {} is outside 1..={}", ticket, n),
                })
            }
            Some(true) => {
                return Err(SimulationError::InvalidOrder {
                    which,
                    reason: format!("ticket {} appears twice", ticket),
                })
            }
            Some(slot) => *slot = true,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::roundabout::Direction;

    fn tickets(numbers: &[u32]) -> Vec<Ticket> {
        numbers.iter().filter_map(|&n| Ticket::new(n)).collect()
    }

    fn config(passengers: usize, carousel_size: usize, total_minutes: usize) -> SimulationConfig {
        SimulationConfig {
            passengers,
            carousel_size,
            total_minutes,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_new_starts_with_empty_carousel() {
        let sim = CarouselSimulation::new(config(3, 4, 1), tickets(&[3, 1, 2]), tickets(&[1, 2, 3])).unwrap();
        assert_eq!(sim.carousel().len(), 4);
        assert!(sim.carousel().iter().all(Option::is_none));
        assert!(sim.claimants().is_empty());
        assert_eq!(sim.loaders().len(), 3);
        assert_eq!(sim.clock().tick(), 0);
    }

    #[test]
    fn test_new_rejects_bad_orders() {
        let err = CarouselSimulation::new(config(3, 3, 1), tickets(&[1, 2]), tickets(&[1, 2, 3]))
            .err()
            .unwrap();
        assert!(matches!(err, SimulationError::InvalidOrder { which: OrderKind::Unload, .. }));

        let err = CarouselSimulation::new(config(3, 3, 1), tickets(&[1, 2, 3]), tickets(&[1, 1, 3]))
            .err()
            .unwrap();
        assert!(matches!(err, SimulationError::InvalidOrder { which: OrderKind::Disembark, .. }));

        let err = CarouselSimulation::new(config(3, 3, 1), tickets(&[1, 2, 4]), tickets(&[1, 2, 3]))
            .err()
            .unwrap();
        assert!(matches!(err, SimulationError::InvalidOrder { .. }));
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let err = CarouselSimulation::new(config(3, 2, 1), tickets(&[1, 2, 3]), tickets(&[1, 2, 3]))
            .err()
            .unwrap();
        assert_eq!(
            err,
            SimulationError::Config(crate::error::ConfigError::CarouselTooSmall { actual: 2, passengers: 3 })
        );
    }

    #[test]
    fn test_mismatched_front_passenger_does_not_claim() {
        // Loader holds [1, 2] with 2 on top, so bag 2 comes up first while
        // passenger 1 is at the front of the line.
        let mut sim = CarouselSimulation::new(config(2, 2, 1), tickets(&[1, 2]), tickets(&[1, 2])).unwrap();

        let first = sim.step().unwrap();
        assert_eq!(first.arrived, Ticket::new(1));
        assert_eq!(first.filled, Ticket::new(2));
        assert_eq!(first.claimed, None);
        assert_eq!(first.snapshot.carousel, vec![Ticket::new(2), None]);
        assert_eq!(first.snapshot.claimants, tickets(&[1]));

        let second = sim.step().unwrap();
        assert_eq!(second.filled, Ticket::new(1));
        assert_eq!(second.claimed, Ticket::new(1));

        let third = sim.step().unwrap();
        assert_eq!(third.filled, None);
        assert_eq!(third.claimed, Ticket::new(2));
        assert_eq!(sim.claimed(), &tickets(&[1, 2])[..]);
    }

    #[test]
    fn test_claim_leaves_an_empty_slot() {
        let mut sim = CarouselSimulation::new(config(1, 3, 1), tickets(&[1]), tickets(&[1])).unwrap();
        let outcome = sim.step().unwrap();
        assert_eq!(outcome.claimed, Ticket::new(1));
        assert_eq!(sim.carousel().len(), 3);
        assert!(sim.carousel().iter().all(Option::is_none));
        assert!(sim.claimants().is_empty());
    }

    #[test]
    fn test_forward_rotation_policy() {
        let mut cfg = config(2, 3, 1);
        cfg.rotation = Direction::Forward;
        let mut sim = CarouselSimulation::new(cfg, tickets(&[2, 1]), tickets(&[2, 1])).unwrap();

        // Bag 1 comes up first while passenger 2 waits at the front.
        let first = sim.step().unwrap();
        assert_eq!(first.filled, Ticket::new(1));
        assert_eq!(first.claimed, None);
        // Forward rotation moves bag 1 to the back of the display order.
        assert_eq!(sim.carousel().iter().last(), Some(&Ticket::new(1)));
    }

    #[test]
    fn test_history_has_one_record_per_tick() {
        let mut sim = CarouselSimulation::new(config(2, 2, 1), tickets(&[1, 2]), tickets(&[1, 2])).unwrap();
        sim.run();
        assert_eq!(sim.history().len(), 60);
        assert_eq!(sim.history()[0].tick, 0);
        assert_eq!(sim.history()[0].arrived, Some(1));
        assert_eq!(sim.history()[0].filled, Some(2));
        assert_eq!(sim.history()[0].carousel, "2 0");
        assert_eq!(sim.history()[0].queue_length, 1);
        assert_eq!(sim.history()[0].loader_remaining, 1);
        assert_eq!(sim.history()[59].minute, 0);
        assert_eq!(sim.history()[59].second, 59);
    }

    #[test]
    fn test_record_columns_describe_the_shown_moment() {
        let mut sim = CarouselSimulation::new(config(2, 2, 1), tickets(&[1, 2]), tickets(&[1, 2])).unwrap();
        sim.step();
        let outcome = sim.step().unwrap();
        // Passenger 1 takes bag 1 this tick, after the line and carousel were shown.
        assert_eq!(outcome.claimed, Ticket::new(1));
        let record = &sim.history()[1];
        assert_eq!(record.claimed, Some(1));
        assert_eq!(record.carousel, "1 2");
        assert_eq!(record.queue_length, 2);
        assert_eq!(record.loader_remaining, 0);
        assert_eq!(outcome.snapshot.claimants.len(), record.queue_length);
        assert_eq!(sim.claimants().len(), 1);
    }

    #[test]
    fn test_step_after_finish_is_none() {
        let mut sim = CarouselSimulation::new(config(1, 1, 1), tickets(&[1]), tickets(&[1])).unwrap();
        let report = sim.run();
        assert!(sim.is_finished());
        assert_eq!(report.ticks_elapsed, 60);
        assert_eq!(sim.step(), None);
        assert_eq!(sim.clock().tick(), 60);
    }
}
