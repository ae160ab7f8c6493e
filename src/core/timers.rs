//! Deadline queue for the scene's one-shot timers.
//!
//! The host drives time: every entry point receives `now` in milliseconds and
//! `pop_due` hands back expired timers in deadline order. Owners keep the
//! `TimerId` they scheduled and compare it when a timer fires, so a timer that
//! was superseded or cancelled can never act on newer state.

/// Handle to a scheduled timer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u32);

/// What a timer is for (routes a fired timer to its owner)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    AutoThrow,
    RestConfirm,
    AutoClose,
    FadeOut,
    Prompt,
    PromptAccept,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FiredTimer {
    pub id: TimerId,
    pub kind: TimerKind,
    pub deadline: f64,
}

#[derive(Clone, Copy)]
struct Pending {
    id: TimerId,
    kind: TimerKind,
    deadline: f64,
}

pub struct Timers {
    pending: Vec<Pending>,
    next_id: u32,
}

impl Timers {
    pub fn new() -> Self {
        Self {
            pending: Vec::with_capacity(8),
            next_id: 1,
        }
    }

    /// Schedule `kind` to fire at `deadline` (ms)
    pub fn schedule(&mut self, kind: TimerKind, deadline: f64) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1).max(1);
        self.pending.push(Pending { id, kind, deadline });
        id
    }

    /// Cancel a timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        if let Some(idx) = self.pending.iter().position(|p| p.id == id) {
            self.pending.swap_remove(idx);
            return true;
        }
        false
    }

    /// Cancel whatever timer `slot` holds and empty the slot.
    pub fn cancel_slot(&mut self, slot: &mut Option<TimerId>) -> bool {
        match slot.take() {
            Some(id) => self.cancel(id),
            None => false,
        }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn pending_of(&self, kind: TimerKind) -> usize {
        self.pending.iter().filter(|p| p.kind == kind).count()
    }

    pub fn next_deadline(&self) -> Option<f64> {
        self.pending
            .iter()
            .map(|p| p.deadline)
            .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |a| a.min(d))))
    }

    /// Remove and return the earliest timer whose deadline is `<= now`.
    /// Equal deadlines fire in scheduling order.
    pub fn pop_due(&mut self, now: f64) -> Option<FiredTimer> {
        let mut best: Option<usize> = None;
        for (idx, p) in self.pending.iter().enumerate() {
            if p.deadline > now {
                continue;
            }
            best = match best {
                None => Some(idx),
                Some(b) => {
                    let cur = &self.pending[b];
                    if p.deadline < cur.deadline || (p.deadline == cur.deadline && p.id.0 < cur.id.0) {
                        Some(idx)
                    } else {
                        Some(b)
                    }
                }
            };
        }

        let idx = best?;
        let p = self.pending.swap_remove(idx);
        Some(FiredTimer {
            id: p.id,
            kind: p.kind,
            deadline: p.deadline,
        })
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}
