/// Terminal values of one run, in the order the paths were generated.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub initial_value: f64,
    pub terminal_values: Vec<f64>,
    pub seed: Option<u64>,
}

impl SimulationResult {
    pub fn from_values(initial_value: f64, terminal_values: Vec<f64>) -> Self {
        Self {
            initial_value,
            terminal_values,
            seed: None,
        }
    }

    pub fn empty(initial_value: f64) -> Self {
        Self::from_values(initial_value, Vec::new())
    }

    pub fn with_seed(self, seed: Option<u64>) -> Self {
        Self { seed, ..self }
    }

    pub fn path_count(&self) -> usize {
        self.terminal_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terminal_values.is_empty()
    }

    pub fn terminal_values(&self) -> &[f64] {
        &self.terminal_values
    }

    /// Ascending copy of the terminal values. NaN sorts last.
    pub fn sorted_values(&self) -> Vec<f64> {
        let mut sorted = self.terminal_values.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        sorted
    }

    pub fn count_below(&self, threshold: f64) -> usize {
        self.terminal_values.iter().filter(|&&v| v < threshold).count()
    }
}
