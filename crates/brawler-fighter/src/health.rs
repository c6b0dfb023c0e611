//! Clamped hit points.

/// Health pool kept within `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Health {
    current: f64,
    max: f64,
}

impl Health {
    pub fn new(max: f64) -> Self {
        let max = if max.is_finite() { max.max(0.0) } else { 0.0 };
        Self { current: max, max }
    }

    /// Returns the damage actually applied. Negative or non-finite amounts are ignored.
    pub fn take_damage(&mut self, amount: f64) -> f64 {
        if !amount.is_finite() || amount <= 0.0 {
            return 0.0;
        }
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    /// Returns the amount actually restored. Negative or non-finite amounts are ignored.
    pub fn heal(&mut self, amount: f64) -> f64 {
        if !amount.is_finite() || amount <= 0.0 {
            return 0.0;
        }
        let actual = amount.min(self.max - self.current);
        self.current += actual;
        actual
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    pub fn fraction(&self) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.current / self.max).clamp(0.0, 1.0)
    }
}
