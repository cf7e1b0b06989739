//! Interactive session state: the Idle <-> Running machine around the engine.
//!
//! The engine is a pure transition function over grids; everything mutable
//! that an interactive frontend needs lives here instead. A [`Session`]
//! owns the live [`Grid`] exclusively, tracks the generation counter and
//! run flag, paces nothing itself (the embedding UI reads the speed hint),
//! and hands renderers [`GridSnapshot`] copies only.
//!
//! # Design Principles
//!
//! - The grid is mutated by exactly one owner: this session. Concurrent
//!   readers get snapshots taken between steps, never the live grid.
//! - Cell editing is only honored while paused, matching the interactive
//!   contract (clicks during a run would race the stepper visually).
//! - Every step hashes the new state into a short history ring; revisiting
//!   a recent state pauses the session automatically, since a still life
//!   or small oscillator will never change again.

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;

use petri_engine::{CellState, Grid, GridSnapshot, step};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::seeds;

/// Result of a single [`Session::update`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The session is paused; nothing happened.
    Idle,
    /// One generation was computed.
    Stepped,
    /// One generation was computed, matched a recently seen state, and the
    /// session paused itself.
    CycleDetected,
}

/// A headless interactive simulation session.
///
/// Drive it from any frontend loop: call [`Session::update`] once per
/// frame, render from [`Session::snapshot`], and forward user input to the
/// editing and load methods.
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    running: bool,
    generation: u64,
    steps_per_second: u32,
    loaded_pattern: Option<String>,
    history: VecDeque<u64>,
    history_depth: usize,
    rng: StdRng,
}

impl Session {
    /// Create a paused session with an all-dead grid at the configured
    /// size, generation 0, and the RNG seeded from the configuration.
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            grid: Grid::new(config.rows, config.cols),
            running: false,
            generation: 0,
            steps_per_second: config.steps_per_second,
            loaded_pattern: None,
            history: VecDeque::with_capacity(config.history_depth),
            history_depth: config.history_depth,
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// Start or resume stepping.
    pub fn start(&mut self) {
        if !self.running {
            info!(generation = self.generation, "simulation started");
        }
        self.running = true;
    }

    /// Pause stepping. Cell editing is only honored while paused.
    pub fn pause(&mut self) {
        if self.running {
            info!(generation = self.generation, "simulation paused");
        }
        self.running = false;
    }

    /// Whether the session is currently running.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Number of generations computed since the last reset.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Target generations per second (a pacing hint for the frontend).
    pub const fn steps_per_second(&self) -> u32 {
        self.steps_per_second
    }

    /// Name of the most recently loaded pattern, if any.
    pub fn loaded_pattern(&self) -> Option<&str> {
        self.loaded_pattern.as_deref()
    }

    /// Grid dimensions as `(rows, cols)`.
    pub const fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// State of one cell (dead for out-of-bounds coordinates).
    pub fn cell(&self, row: usize, col: usize) -> CellState {
        self.grid.get(row, col)
    }

    /// Take an immutable copy of the current grid for rendering.
    pub fn snapshot(&self) -> GridSnapshot {
        self.grid.snapshot()
    }

    /// Advance one generation if running.
    ///
    /// The new state is hashed into the cycle-history ring; when the hash
    /// was already seen recently the simulation has settled into a still
    /// life or short oscillator, and the session pauses itself.
    pub fn update(&mut self) -> StepOutcome {
        if !self.running {
            return StepOutcome::Idle;
        }

        self.grid = step::advance(&self.grid);
        self.generation = self.generation.saturating_add(1);

        let digest = self.hash_grid();
        if self.history.contains(&digest) {
            info!(generation = self.generation, "cycle detected, pausing");
            self.running = false;
            return StepOutcome::CycleDetected;
        }
        self.remember(digest);
        StepOutcome::Stepped
    }

    /// Toggle one cell while paused. Returns whether anything changed.
    ///
    /// Running sessions and out-of-bounds coordinates are no-ops.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> bool {
        if self.running {
            return false;
        }
        let (rows, cols) = self.grid.dimensions();
        if row >= rows || col >= cols {
            return false;
        }
        let next = self.grid.get(row, col).toggled();
        self.grid.set(row, col, next);
        // Manual edits invalidate the cycle history.
        self.history.clear();
        true
    }

    /// Clear the grid, reset the generation counter, and pause.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.reset_progress();
        self.loaded_pattern = None;
        self.running = false;
        info!("grid cleared");
    }

    /// Load a pattern file from disk, replacing the grid atomically.
    ///
    /// Pauses first, then reads and parses. On any failure the grid keeps
    /// its previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] when the file cannot be read (distinct
    /// from syntax problems), or [`SessionError::Pattern`] with the located
    /// parse failure.
    pub fn load_pattern_from_path(&mut self, path: &Path) -> Result<(), SessionError> {
        self.running = false;
        let content = std::fs::read_to_string(path).map_err(|source| {
            warn!(path = %path.display(), "pattern file unreadable");
            SessionError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        self.load_text(&content, file_display_name(path))
    }

    /// Load a pattern from already-read text (same semantics as
    /// [`Session::load_pattern_from_path`] minus the disk read).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Pattern`] with the located parse failure.
    pub fn load_pattern_from_text(&mut self, content: &str) -> Result<(), SessionError> {
        self.running = false;
        self.load_text(content, None)
    }

    /// Stamp a seed from the built-in library onto a cleared grid.
    ///
    /// Returns `false` when `index` is outside [`seeds::SEEDS`].
    pub fn apply_seed(&mut self, index: usize) -> bool {
        let Some(seed) = seeds::SEEDS.get(index) else {
            return false;
        };
        seeds::apply(&mut self.grid, *seed);
        self.reset_progress();
        self.loaded_pattern = Some(seed.name.to_owned());
        self.running = false;
        info!(seed = seed.name, "seed applied");
        true
    }

    /// Fill the whole grid at random.
    ///
    /// `density` is the per-cell probability of life, clamped to `[0, 1]`.
    /// Fills are reproducible: the RNG is seeded from the configuration,
    /// so a fresh session with the same seed produces the same sequence.
    pub fn randomize(&mut self, density: f64) {
        let density = density.clamp(0.0, 1.0);
        let (rows, cols) = self.grid.dimensions();
        for row in 0..rows {
            for col in 0..cols {
                let state = CellState::from(self.rng.random_bool(density));
                self.grid.set(row, col, state);
            }
        }
        self.reset_progress();
        self.loaded_pattern = None;
        info!(density, "grid randomized");
    }

    /// Update the pacing hint. Zero is ignored; the hint stays positive.
    pub fn set_speed(&mut self, steps_per_second: u32) {
        if steps_per_second == 0 {
            warn!("ignoring zero steps_per_second");
            return;
        }
        self.steps_per_second = steps_per_second;
    }

    fn load_text(&mut self, content: &str, name: Option<String>) -> Result<(), SessionError> {
        match self.grid.load_from_text(content) {
            Ok(()) => {
                self.reset_progress();
                self.loaded_pattern = name;
                let (rows, cols) = self.grid.dimensions();
                info!(rows, cols, "pattern loaded");
                Ok(())
            }
            Err(error) => {
                warn!(%error, "pattern rejected");
                Err(SessionError::Pattern(error))
            }
        }
    }

    fn reset_progress(&mut self) {
        self.generation = 0;
        self.history.clear();
    }

    fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.grid.dimensions().hash(&mut hasher);
        self.grid.cells().hash(&mut hasher);
        hasher.finish()
    }

    fn remember(&mut self, digest: u64) {
        if self.history.len() >= self.history_depth {
            self.history.pop_front();
        }
        self.history.push_back(digest);
    }
}

/// File name used for display after a successful load.
fn file_display_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
