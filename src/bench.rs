use rand::Rng;

use crate::errors::BenchError;
use crate::parse::parse_elapsed_ms;
use crate::solver::Solve;
use crate::types::{Aggregate, Summary};
use crate::weights::{WeightTable, generate_board};

pub const DEFAULT_NUM_TRIALS: usize = 100;
pub const DEFAULT_BOARD_SIZE: usize = 16;

/// A fixed number of sequential trials over boards drawn from one table.
#[derive(Debug, Clone)]
pub struct Benchmark {
    table: WeightTable,
    board_size: usize,
    num_trials: usize,
}

impl Benchmark {
    pub fn new(
        table: WeightTable,
        board_size: usize,
        num_trials: usize,
    ) -> Result<Self, BenchError> {
        if num_trials == 0 {
            return Err(BenchError::NoTrials);
        }
        if board_size == 0 {
            return Err(BenchError::EmptyBoard);
        }
        Ok(Self {
            table,
            board_size,
            num_trials,
        })
    }

    /// Generate a board, hand it to the solver and return the reported time.
    ///
    /// `trial` is 1-based and only used for diagnostics.
    pub fn run_trial<R, S>(
        &self,
        trial: usize,
        rng: &mut R,
        solver: &mut S,
    ) -> Result<u64, BenchError>
    where
        R: Rng + ?Sized,
        S: Solve + ?Sized,
    {
        let board = generate_board(&self.table, self.board_size, rng);
        let input = board.to_solver_input();
        log::debug!(
            "trial {}: board {}",
            trial,
            board.letters().iter().collect::<String>()
        );

        let output = solver.solve(&input)?;

        let elapsed = match parse_elapsed_ms(&output) {
            Ok(ms) => ms,
            Err(reason) => {
                return Err(BenchError::MalformedOutput {
                    trial,
                    reason,
                    output,
                });
            }
        };
        log::debug!("trial {}: {} ms", trial, elapsed);

        Ok(elapsed)
    }

    /// Run every trial in order and average the results.
    ///
    /// The first failing trial aborts the run; no partial mean is produced.
    pub fn run<R, S>(&self, rng: &mut R, solver: &mut S) -> Result<Summary, BenchError>
    where
        R: Rng + ?Sized,
        S: Solve + ?Sized,
    {
        let mut aggregate = Aggregate::default();
        for trial in 1..=self.num_trials {
            let elapsed = self.run_trial(trial, rng, solver)?;
            aggregate.record(elapsed);
        }

        let average_ms = aggregate.mean().ok_or(BenchError::NoTrials)?;
        Ok(Summary {
            num_trials: aggregate.trials,
            average_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TimingError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Replays canned transcripts and records every input it was given.
    struct ScriptedSolver {
        outputs: Vec<String>,
        inputs: Vec<String>,
    }

    impl ScriptedSolver {
        fn new(outputs: &[&str]) -> Self {
            Self {
                outputs: outputs.iter().rev().map(|s| s.to_string()).collect(),
                inputs: Vec::new(),
            }
        }
    }

    impl Solve for ScriptedSolver {
        fn solve(&mut self, input: &str) -> Result<String, BenchError> {
            self.inputs.push(input.to_string());
            Ok(self.outputs.pop().expect("solver called more times than scripted"))
        }
    }

    fn english(num_trials: usize) -> Benchmark {
        Benchmark::new(WeightTable::english(), DEFAULT_BOARD_SIZE, num_trials).unwrap()
    }

    #[test]
    fn zero_trials_rejected() {
        assert!(matches!(
            Benchmark::new(WeightTable::english(), 16, 0),
            Err(BenchError::NoTrials)
        ));
    }

    #[test]
    fn zero_board_size_rejected() {
        assert!(matches!(
            Benchmark::new(WeightTable::english(), 0, 10),
            Err(BenchError::EmptyBoard)
        ));
    }

    #[test]
    fn trial_returns_reported_time() {
        let mut solver = ScriptedSolver::new(&["Words found: 3\nExecuted in 42 milliseconds\n"]);
        let mut rng = StdRng::seed_from_u64(42);
        let elapsed = english(1).run_trial(1, &mut rng, &mut solver).unwrap();
        assert_eq!(elapsed, 42);
    }

    #[test]
    fn trial_sends_sixteen_letters() {
        let mut solver = ScriptedSolver::new(&["Executed in 1 milliseconds"]);
        let mut rng = StdRng::seed_from_u64(42);
        english(1).run_trial(1, &mut rng, &mut solver).unwrap();

        let lines: Vec<&str> = solver.inputs[0].split('\n').collect();
        assert_eq!(lines.len(), 16);
        for line in lines {
            assert_eq!(line.len(), 1);
            assert!(line.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn malformed_output_names_trial_and_output() {
        let mut solver = ScriptedSolver::new(&["segfault, sorry"]);
        let mut rng = StdRng::seed_from_u64(42);
        let err = english(5).run_trial(4, &mut rng, &mut solver).unwrap_err();
        match &err {
            BenchError::MalformedOutput {
                trial,
                reason,
                output,
            } => {
                assert_eq!(*trial, 4);
                assert!(matches!(reason, TimingError::MissingMarker { .. }));
                assert_eq!(output, "segfault, sorry");
            }
            other => panic!("unexpected error: {other}"),
        }
        let msg = err.to_string();
        assert!(msg.contains("trial 4"));
        assert!(msg.contains("segfault, sorry"));
    }

    #[test]
    fn averages_successive_trials() {
        let mut solver = ScriptedSolver::new(&[
            "Executed in 10 milliseconds",
            "Executed in 20 milliseconds",
            "Executed in 30 milliseconds",
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        let summary = english(3).run(&mut rng, &mut solver).unwrap();
        assert_eq!(summary.num_trials, 3);
        assert_eq!(summary.average_ms, 20.0);
        assert_eq!(solver.inputs.len(), 3);
    }

    #[test]
    fn average_keeps_fraction() {
        let mut solver = ScriptedSolver::new(&[
            "Executed in 1 milliseconds",
            "Executed in 2 milliseconds",
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        let summary = english(2).run(&mut rng, &mut solver).unwrap();
        assert_eq!(summary.average_ms, 1.5);
    }

    #[test]
    fn failing_trial_aborts_run() {
        let mut solver = ScriptedSolver::new(&[
            "Executed in 10 milliseconds",
            "Executed in ten milliseconds",
            "Executed in 30 milliseconds",
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        let err = english(3).run(&mut rng, &mut solver).unwrap_err();
        assert!(matches!(
            err,
            BenchError::MalformedOutput {
                trial: 2,
                reason: TimingError::InvalidNumber { .. },
                ..
            }
        ));
        // The third trial never ran.
        assert_eq!(solver.inputs.len(), 2);
    }

    #[test]
    fn same_seed_feeds_same_boards() {
        let outputs = ["Executed in 1 milliseconds"; 3];
        let mut first = ScriptedSolver::new(&outputs);
        let mut second = ScriptedSolver::new(&outputs);
        english(3).run(&mut StdRng::seed_from_u64(42), &mut first).unwrap();
        english(3).run(&mut StdRng::seed_from_u64(42), &mut second).unwrap();
        assert_eq!(first.inputs, second.inputs);
    }

    #[test]
    fn launch_failure_propagates() {
        struct Unlaunchable;
        impl Solve for Unlaunchable {
            fn solve(&mut self, _input: &str) -> Result<String, BenchError> {
                Err(BenchError::SolverLaunch {
                    program: "./solver".into(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
            }
        }
        let mut rng = StdRng::seed_from_u64(42);
        let err = english(3).run(&mut rng, &mut Unlaunchable).unwrap_err();
        assert!(matches!(err, BenchError::SolverLaunch { .. }));
    }
}
