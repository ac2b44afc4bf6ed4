use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use crate::errors::BenchError;

/// Something that takes a serialized board and returns the solver's transcript.
pub trait Solve {
    fn solve(&mut self, input: &str) -> Result<String, BenchError>;
}

/// Runs an external solver executable once per call.
///
/// The child gets no arguments and piped stdio. Blocks until it exits; there
/// is no timeout, so a hung solver hangs the run.
#[derive(Debug, Clone)]
pub struct ProcessSolver {
    program: PathBuf,
}

impl ProcessSolver {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn io_error(&self, source: std::io::Error) -> BenchError {
        BenchError::SolverIo {
            program: self.program.clone(),
            source,
        }
    }
}

impl Solve for ProcessSolver {
    fn solve(&mut self, input: &str) -> Result<String, BenchError> {
        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| BenchError::SolverLaunch {
                program: self.program.clone(),
                source,
            })?;

        // The board is written from its own thread while stdout and stderr
        // drain, so a solver that answers before reading everything can't
        // wedge both sides on a full pipe. Dropping the handle closes stdin.
        let stdin = child.stdin.take();
        let (written, output) = thread::scope(|s| {
            let writer = s.spawn(move || -> std::io::Result<()> {
                if let Some(mut stdin) = stdin {
                    stdin.write_all(input.as_bytes())?;
                }
                Ok(())
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
            (written, output)
        });

        let output = output.map_err(|e| self.io_error(e))?;
        match written {
            Ok(()) => {}
            // The solver may exit without reading its input; its output still counts.
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                log::debug!("solver closed stdin early");
            }
            Err(e) => return Err(self.io_error(e)),
        }

        if !output.status.success() {
            log::warn!(
                "solver {} exited with {}",
                self.program.display(),
                output.status
            );
        }
        if !output.stderr.is_empty() {
            log::debug!(
                "solver stderr: {}",
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
