use std::mem::take;

use crate::{ChangeSignal, Cleanup};


/// Effect callback handed to a scheduler.
pub type EffectFn = Box<dyn FnOnce() -> Cleanup>;

/// Host primitive that runs an effect when its dependency list changes.
///
/// Implementations compare `signal` with the signal of the previous run and own when the
/// callback runs and when the cleanup of the previous run is dropped.
pub trait EffectScheduler {
    fn schedule(&mut self, callback: EffectFn, signal: ChangeSignal);
}

impl<S: EffectScheduler + ?Sized> EffectScheduler for &mut S {
    fn schedule(&mut self, callback: EffectFn, signal: ChangeSignal) {
        (**self).schedule(callback, signal)
    }
}

#[derive(Default)]
struct EffectSlot {
    signal: Option<ChangeSignal>,
    cleanup: Cleanup,
    runs: usize,
}
impl EffectSlot {
    fn is_changed(&self, signal: ChangeSignal) -> bool {
        self.signal != Some(signal)
    }
    fn run(&mut self, callback: EffectFn, signal: ChangeSignal) {
        drop(take(&mut self.cleanup));
        self.signal = Some(signal);
        self.runs += 1;
        tracing::trace!(runs = self.runs, "run effect");
        self.cleanup = callback();
    }
    fn unmount(&mut self) {
        self.signal = None;
        drop(take(&mut self.cleanup));
    }
}

/// Scheduler that runs the effect inside [`schedule`](EffectScheduler::schedule).
///
/// Dropping the scheduler drops the cleanup of the last run.
#[derive(Default)]
pub struct ImmediateScheduler {
    slot: EffectSlot,
}
impl ImmediateScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the effect has run.
    pub fn runs(&self) -> usize {
        self.slot.runs
    }

    /// Drop the cleanup of the last run. The next schedule runs the effect again.
    pub fn unmount(&mut self) {
        self.slot.unmount();
    }
}
impl EffectScheduler for ImmediateScheduler {
    fn schedule(&mut self, callback: EffectFn, signal: ChangeSignal) {
        if self.slot.is_changed(signal) {
            self.slot.run(callback, signal);
        } else {
            tracing::trace!("skip effect");
        }
    }
}

/// Scheduler that defers effects until [`commit`](Self::commit).
///
/// Scheduling models the render phase and `commit` the commit phase of a UI host.
/// Only the most recently scheduled callback is kept, and its signal is compared with
/// the signal of the last committed run.
#[derive(Default)]
pub struct DeferredScheduler {
    slot: EffectSlot,
    pending: Option<(EffectFn, ChangeSignal)>,
}
impl DeferredScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn runs(&self) -> usize {
        self.slot.runs
    }
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Run the pending effect if its signal changed. Returns true if it ran.
    pub fn commit(&mut self) -> bool {
        let Some((callback, signal)) = self.pending.take() else {
            return false;
        };
        if self.slot.is_changed(signal) {
            self.slot.run(callback, signal);
            true
        } else {
            tracing::trace!("skip effect");
            false
        }
    }

    /// Discard the pending effect and drop the cleanup of the last run.
    pub fn unmount(&mut self) {
        self.pending = None;
        self.slot.unmount();
    }
}
impl EffectScheduler for DeferredScheduler {
    fn schedule(&mut self, callback: EffectFn, signal: ChangeSignal) {
        self.pending = Some((callback, signal));
    }
}
