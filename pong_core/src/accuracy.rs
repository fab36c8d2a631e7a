//! Running accuracy of the AI's predictions.

/// One logged prediction and the ball height it was compared against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionRecord {
    pub predicted: f32,
    pub actual: f32,
}

impl PredictionRecord {
    /// Per-record score in `[0, 1]`: 1 for a perfect call, 0 once the error
    /// reaches a full arena height.
    pub fn score(&self, arena_height: f32) -> f32 {
        let diff = (self.predicted - self.actual).abs();
        1.0 - (diff / arena_height).min(1.0)
    }
}

/// Every prediction made since the last match reset
#[derive(Debug, Clone, Default)]
pub struct PredictionLog {
    records: Vec<PredictionRecord>,
}

impl PredictionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, predicted: f32, actual: f32) {
        self.records.push(PredictionRecord { predicted, actual });
    }

    pub fn records(&self) -> &[PredictionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Mean record score scaled to a percentage in `[0, 100]`.
    /// An empty log reads as 0.
    pub fn accuracy(&self, arena_height: f32) -> f32 {
        if self.records.is_empty() {
            return 0.0;
        }
        let total: f64 = self
            .records
            .iter()
            .map(|record| f64::from(record.score(arena_height)))
            .sum();
        (total / self.records.len() as f64 * 100.0).clamp(0.0, 100.0) as f32
    }

    /// Accuracy rounded for display
    pub fn accuracy_percent(&self, arena_height: f32) -> u8 {
        self.accuracy(arena_height).round() as u8
    }
}
