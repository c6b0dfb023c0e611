//! Owned one-shot task queue for deferred state transitions.
//!
//! Each task records the fighter's clock deadline and the state epoch it was
//! scheduled in. A task only fires once the clock has reached its deadline,
//! and it is dropped instead of fired when the epoch has moved on.

/// A task waiting for its deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct Scheduled<T> {
    pub due_ms: f64,
    pub epoch: u64,
    pub task: T,
}

#[derive(Debug, Clone)]
pub struct TaskQueue<T> {
    pending: Vec<Scheduled<T>>,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: f64, epoch: u64, task: T) {
        self.pending.push(Scheduled { due_ms, epoch, task });
    }

    /// Remove and return the earliest task due at `now_ms` that belongs to `epoch`.
    ///
    /// Due tasks from other epochs are discarded along the way. Ties on the
    /// deadline resolve in scheduling order.
    pub fn pop_due(&mut self, now_ms: f64, epoch: u64) -> Option<Scheduled<T>> {
        loop {
            let index = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, s)| s.due_ms <= now_ms)
                .min_by(|(ia, a), (ib, b)| a.due_ms.total_cmp(&b.due_ms).then(ia.cmp(ib)))
                .map(|(i, _)| i)?;
            let scheduled = self.pending.remove(index);
            if scheduled.epoch == epoch {
                return Some(scheduled);
            }
            tracing::trace!(due_ms = scheduled.due_ms, "discarding stale task");
        }
    }

    /// Drop everything.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
