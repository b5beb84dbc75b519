/// Millisecond timers on the session's own simulated clock.
///
/// The host feeds elapsed wall-clock time into the session, which fires
/// whatever is due in chronological order.  Nothing here runs on its own.

/// Repeating task firing every `period_ms` until cancelled.
#[derive(Clone, Debug)]
pub struct Interval {
    period_ms: u64,
    next_due_ms: Option<u64>,
}

impl Interval {
    /// First firing is one full period after `now_ms`.
    pub fn start(period_ms: u64, now_ms: u64) -> Self {
        Interval {
            period_ms,
            next_due_ms: Some(now_ms + period_ms),
        }
    }

    pub fn due_ms(&self) -> Option<u64> {
        self.next_due_ms
    }

    pub fn is_active(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// Record one firing and schedule the next.  No-op once cancelled.
    pub fn fire(&mut self) {
        if let Some(due) = self.next_due_ms {
            self.next_due_ms = Some(due + self.period_ms);
        }
    }

    /// Returns whether this call did the cancelling; repeated calls are safe.
    pub fn cancel(&mut self) -> bool {
        self.next_due_ms.take().is_some()
    }
}

/// One-shot delayed task.  Re-armed explicitly by its owner.
#[derive(Clone, Debug, Default)]
pub struct Timeout {
    due_ms: Option<u64>,
}

impl Timeout {
    pub fn armed_at(due_ms: u64) -> Self {
        Timeout { due_ms: Some(due_ms) }
    }

    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        self.due_ms = Some(now_ms + delay_ms);
    }

    pub fn due_ms(&self) -> Option<u64> {
        self.due_ms
    }

    /// Disarm and report whether the timeout was pending.
    pub fn take(&mut self) -> bool {
        self.due_ms.take().is_some()
    }
}
