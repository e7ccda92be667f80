//! Cancellable continuations on a logical timeline.
//!
//! Every "wait, then do" step of the experience is a [`Task`] value parked in
//! the registry with a due time and the session token that was current when it
//! was scheduled. `cancel_all` moves to a fresh session; entries from an older
//! session stay parked until they come due and are then discarded by
//! `pop_due`, so nothing queued before a reset can fire after it.

/// Continuations the controller knows how to resume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    FillLoader,
    FinishIntro,
    ShowLetter,
    BeginReveal,
    RevealNext,
    ShowOutro,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SessionToken(u64);

#[derive(Clone, Debug)]
struct Pending {
    id: TimerId,
    due_ms: f64,
    session: SessionToken,
    task: Task,
}

/// A task that came due, with the logical time it was due at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DueTask {
    pub id: TimerId,
    pub due_ms: f64,
    pub task: Task,
}

#[derive(Debug, Default)]
pub struct TimerRegistry {
    pending: Vec<Pending>,
    session: SessionToken,
    next_id: u64,
    stale_discarded: usize,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> SessionToken {
        self.session
    }

    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, task: Task) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due_ms = now_ms + delay_ms.max(0.0);
        log::trace!("[timers] schedule {:?} at {:.1}ms ({:?})", task, due_ms, id);
        self.pending.push(Pending {
            id,
            due_ms,
            session: self.session,
            task,
        });
        id
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        before != self.pending.len()
    }

    /// Drop every pending task of a kind; returns how many live ones went.
    pub fn cancel_task(&mut self, task: Task) -> usize {
        let removed = self.live().filter(|p| p.task == task).count();
        self.pending.retain(|p| p.task != task);
        removed
    }

    /// Invalidate the whole session; returns how many live tasks it held.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.live().count();
        self.session = SessionToken(self.session.0 + 1);
        if dropped > 0 {
            log::debug!("[timers] cancelled {} pending task(s)", dropped);
        }
        dropped
    }

    /// Remove and return the earliest task due at or before `now_ms`.
    /// Ties resolve in scheduling order.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<DueTask> {
        loop {
            let idx = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, p)| p.due_ms <= now_ms)
                .min_by(|(_, a), (_, b)| {
                    a.due_ms
                        .total_cmp(&b.due_ms)
                        .then_with(|| a.id.cmp(&b.id))
                })
                .map(|(i, _)| i)?;
            let p = self.pending.swap_remove(idx);
            if p.session != self.session {
                self.stale_discarded += 1;
                log::debug!("[timers] discarded stale {:?} from {:?}", p.task, p.session);
                continue;
            }
            return Some(DueTask {
                id: p.id,
                due_ms: p.due_ms,
                task: p.task,
            });
        }
    }

    /// Whether a live task of this kind is waiting.
    pub fn contains(&self, task: Task) -> bool {
        self.live().any(|p| p.task == task)
    }

    /// Live tasks only; superseded entries awaiting discard are not counted.
    pub fn pending(&self) -> usize {
        self.live().count()
    }

    pub fn is_empty(&self) -> bool {
        self.live().next().is_none()
    }

    /// Entries from superseded sessions that have not come due yet.
    pub fn stale_parked(&self) -> usize {
        self.pending.len() - self.pending()
    }

    fn live(&self) -> impl Iterator<Item = &Pending> {
        let session = self.session;
        self.pending.iter().filter(move |p| p.session == session)
    }

    pub fn stale_discarded(&self) -> usize {
        self.stale_discarded
    }
}
