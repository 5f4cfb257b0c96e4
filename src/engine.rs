use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::SimError;
use crate::population::{Population, Sex};
use crate::rng::SimRng;
use crate::systems::{
    BreedingEngine, FitnessEvaluator, MutationEngine, PopulationInitializer, SelectionEngine,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunState {
    Running,
    Converged,
    GenerationLimitReached,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RunState::Running)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub generation: u32,
    pub mean_weight: u64,
    pub largest_weight: u64,
    pub males: usize,
    pub females: usize,
    pub mutations: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub state: RunState,
    pub generations: u32,
    pub largest_weight: u64,
    pub mean_history: Vec<u64>,
}

impl RunSummary {
    pub fn converged(&self) -> bool {
        self.state == RunState::Converged
    }

    pub fn years(&self, generations_per_year: u32) -> f64 {
        self.generations as f64 / generations_per_year.max(1) as f64
    }
}

/// Drives the breed, mutate, select, evaluate cycle until the cohort hits
/// the goal weight or the generation limit runs out.
pub struct Engine<R: Rng = SimRng> {
    config: Config,
    rng: R,
    breeding: BreedingEngine,
    mutation: MutationEngine,
    selection: SelectionEngine,
    fitness: FitnessEvaluator,
    cohort: Population,
    state: RunState,
    generation: u32,
    largest_weight: u64,
    founder_mean: u64,
    mean_history: Vec<u64>,
}

impl<R: Rng> Engine<R> {
    /// Validates `config`, breeds the founders and scores them.
    ///
    /// Founders that already meet the goal end the run as converged at
    /// generation zero; otherwise a zero generation limit ends it as
    /// limit-reached before any breeding happens.
    pub fn new(config: Config, mut rng: R) -> Result<Self, SimError> {
        config.validate()?;
        let cohort = PopulationInitializer::from_config(&config).create(&mut rng)?;
        let fitness = FitnessEvaluator::from_config(&config);
        let founders = fitness.evaluate(&cohort);

        let state = if founders.converged {
            RunState::Converged
        } else if config.generation_limit == 0 {
            RunState::GenerationLimitReached
        } else {
            RunState::Running
        };
        info!(
            founder_mean = founders.mean_weight,
            goal = config.goal_weight,
            ?state,
            "founder population ready"
        );

        Ok(Self {
            breeding: BreedingEngine::from_config(&config),
            mutation: MutationEngine::from_config(&config),
            selection: SelectionEngine::from_config(&config),
            fitness,
            rng,
            cohort,
            state,
            generation: 0,
            largest_weight: 0,
            founder_mean: founders.mean_weight,
            mean_history: Vec::new(),
            config,
        })
    }

    /// Runs one generation. Returns `None` once the run is terminal.
    ///
    /// A breeding failure leaves the current cohort in place and the state
    /// unchanged.
    pub fn step(&mut self) -> Result<Option<GenerationReport>, SimError> {
        if self.state.is_terminal() {
            return Ok(None);
        }

        let mut litter = self.breeding.breed(&mut self.rng, &mut self.cohort)?;
        let mutations = self.mutation.mutate(&mut self.rng, &mut litter);
        litter.append(std::mem::take(&mut self.cohort));

        let selected = self.selection.select(litter, self.largest_weight);
        self.cohort = selected.cohort;
        self.largest_weight = selected.largest_weight;

        let fitness = self.fitness.evaluate(&self.cohort);
        self.mean_history.push(fitness.mean_weight);
        self.generation += 1;

        if fitness.converged {
            self.state = RunState::Converged;
        } else if self.generation >= self.config.generation_limit {
            self.state = RunState::GenerationLimitReached;
        }

        let report = GenerationReport {
            generation: self.generation,
            mean_weight: fitness.mean_weight,
            largest_weight: self.largest_weight,
            males: self.cohort.count(Sex::Male),
            females: self.cohort.count(Sex::Female),
            mutations,
        };
        debug!(
            generation = report.generation,
            mean = report.mean_weight,
            largest = report.largest_weight,
            mutations = report.mutations,
            "generation complete"
        );
        Ok(Some(report))
    }

    pub fn run(&mut self) -> Result<RunSummary, SimError> {
        self.run_with_hook(|_| {})
    }

    /// Runs to a terminal state, handing every generation to `hook`.
    pub fn run_with_hook<F>(&mut self, mut hook: F) -> Result<RunSummary, SimError>
    where
        F: FnMut(&GenerationReport),
    {
        while let Some(report) = self.step()? {
            hook(&report);
        }
        let summary = self.summary();
        info!(
            state = ?summary.state,
            generations = summary.generations,
            largest = summary.largest_weight,
            "breeding programme finished"
        );
        Ok(summary)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            state: self.state,
            generations: self.generation,
            largest_weight: self.largest_weight,
            mean_history: self.mean_history.clone(),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn cohort(&self) -> &Population {
        &self.cohort
    }

    pub fn largest_weight(&self) -> u64 {
        self.largest_weight
    }

    pub fn founder_mean(&self) -> u64 {
        self.founder_mean
    }

    pub fn mean_history(&self) -> &[u64] {
        &self.mean_history
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
