/// One generated board, cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    letters: Vec<char>,
}

impl Board {
    pub fn new(letters: Vec<char>) -> Self {
        Self { letters }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// One letter per line, no trailing newline.
    pub fn to_solver_input(&self) -> String {
        let mut out = String::with_capacity(self.letters.len() * 2);
        for (i, c) in self.letters.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push(*c);
        }
        out
    }
}

/// Running total of reported solve times.
///
/// The total is 128-bit: `usize::MAX` reports of `u64::MAX` each still fit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub total_ms: u128,
    pub trials: usize,
}

impl Aggregate {
    pub fn record(&mut self, elapsed_ms: u64) {
        self.total_ms += u128::from(elapsed_ms);
        self.trials += 1;
    }

    /// Mean solve time, or `None` before the first trial.
    pub fn mean(&self) -> Option<f64> {
        if self.trials == 0 {
            return None;
        }
        Some(self.total_ms as f64 / self.trials as f64)
    }
}

/// Final result of a benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub num_trials: usize,
    pub average_ms: f64,
}
