/// Incremental weighted estimator for the average item width.
///
/// [`crate::SizeCache`] feeds every measured base width into this estimator
/// and uses the result as the width of items that have not been measured yet.
///
/// Each added width carries unit weight. Prior mass is weighted by the
/// configured default width, not by the previous average, so the estimate
/// drifts from the default toward the measured widths rather than tracking a
/// true running mean of them.
#[derive(Clone, Debug)]
pub struct ItemWidthAverager {
    default_width: f64,
    average: f64,
    total_weight: f64,
}

impl ItemWidthAverager {
    /// The default width estimate used when none is configured.
    pub const DEFAULT_WIDTH: f64 = 50.0;

    pub fn new(default_width: f64) -> Self {
        Self {
            default_width,
            average: default_width,
            total_weight: 0.0,
        }
    }

    pub fn average_item_width(&self) -> f64 {
        self.average
    }

    pub fn default_width(&self) -> f64 {
        self.default_width
    }

    /// Updates the default used to weight prior mass.
    ///
    /// Takes effect for subsequent [`Self::add_width`] calls and for
    /// [`Self::reset`]; while no widths have been added it also replaces the
    /// current estimate.
    pub fn set_default_width(&mut self, default_width: f64) {
        self.default_width = default_width;
        if self.total_weight == 0.0 {
            self.average = default_width;
        }
    }

    /// Folds one measured base width into the estimate with unit weight.
    ///
    /// A zero or NaN result is discarded without committing the weight.
    pub fn add_width(&mut self, width: f64) {
        let new_weight = self.total_weight + 1.0;
        let next = (width + self.default_width * self.total_weight) / new_weight;
        if !next.is_nan() && next != 0.0 {
            self.average = next;
            self.total_weight = new_weight;
        }
    }

    /// Restores the initial state: the default width with zero weight.
    pub fn reset(&mut self) {
        self.average = self.default_width;
        self.total_weight = 0.0;
    }
}

impl Default for ItemWidthAverager {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH)
    }
}
