//! Fixed-length plant runs and result recording.

use tracing::info;

use crate::error::{SimError, SimResult};
use crate::events::FatalFailure;
use crate::plant::Plant;
use crate::snapshot::PlantSnapshot;

/// Options for simulation runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Number of steps to run.
    pub steps: u64,
    /// Record every N-th step (decimation).
    pub record_every: u64,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            steps: 100,
            record_every: 10,
        }
    }
}

/// Progress reported after every step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimProgress {
    pub step: u64,
    pub power: i64,
    pub score: i64,
}

/// Record of a run.
#[derive(Clone, Debug)]
pub struct SimRecord {
    /// Initial state, every `record_every`-th step, and the final state.
    pub snapshots: Vec<PlantSnapshot>,
    /// Set when the run ended on a fatal vessel failure.
    pub failure: Option<FatalFailure>,
    pub steps_run: u64,
}

/// Run `opts.steps` steps, stopping early on a fatal failure.
pub fn run_sim(plant: &mut Plant, opts: &SimOptions) -> SimResult<SimRecord> {
    run_sim_scripted(plant, opts, |_, _| Ok(()), |_| {})
}

/// Like [`run_sim`], calling `progress` after each completed step.
pub fn run_sim_with_progress<F>(
    plant: &mut Plant,
    opts: &SimOptions,
    progress: F,
) -> SimResult<SimRecord>
where
    F: FnMut(SimProgress),
{
    run_sim_scripted(plant, opts, |_, _| Ok(()), progress)
}

/// Run with a hook that may change setpoints before every step.
///
/// `before_step` receives the plant and the number of steps completed so far.
/// An error from the hook aborts the run.
pub fn run_sim_scripted<B, F>(
    plant: &mut Plant,
    opts: &SimOptions,
    mut before_step: B,
    mut progress: F,
) -> SimResult<SimRecord>
where
    B: FnMut(&mut Plant, u64) -> SimResult<()>,
    F: FnMut(SimProgress),
{
    if opts.record_every == 0 {
        return Err(SimError::InvalidArg {
            what: "record_every must be positive",
        });
    }

    let mut snapshots = vec![plant.snapshot()];
    let mut failure = None;
    let mut steps_run = 0;

    while steps_run < opts.steps {
        before_step(plant, steps_run)?;
        steps_run += 1;
        match plant.step() {
            Ok(()) => {}
            Err(SimError::PlantFailure(f)) => {
                failure = Some(f);
                break;
            }
            Err(e) => return Err(e),
        }
        progress(SimProgress {
            step: plant.step_count(),
            power: plant.power_output(),
            score: plant.score(),
        });

        if steps_run % opts.record_every == 0 {
            snapshots.push(plant.snapshot());
        }
    }

    // Always record final state
    if steps_run % opts.record_every != 0 || failure.is_some() {
        snapshots.push(plant.snapshot());
    }

    info!(steps_run, score = plant.score(), failed = failure.is_some(), "run finished");
    Ok(SimRecord {
        snapshots,
        failure,
        steps_run,
    })
}
