use std::mem::take;

use crate::Deps;


/// Dependency list seen by the host scheduler in place of the user's dependencies.
///
/// Its only element flips each time the comparator reports a change.
pub type ChangeSignal = [bool; 1];

/// Remembers the last changed dependency list of one effect instance.
#[derive(Debug, Default)]
pub struct CompareMemo {
    previous: Option<Deps>,
    flag: bool,
}

impl CompareMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare `value` with the stored dependencies and return the resulting signal.
    ///
    /// `comparator` receives `(current, previous)` and returns true when they are to be
    /// treated as equal. `previous` is `None` until the first change is stored; no special
    /// case is made for it here.
    pub fn update(
        &mut self,
        value: Deps,
        mut comparator: impl FnMut(&Deps, Option<&Deps>) -> bool,
    ) -> ChangeSignal {
        if !comparator(&value, self.previous.as_ref()) {
            self.previous = Some(value);
            self.flag = !self.flag;
            tracing::trace!(flag = self.flag, "dependencies changed");
        }
        [self.flag]
    }

    pub fn flag(&self) -> bool {
        self.flag
    }
    pub fn signal(&self) -> ChangeSignal {
        [self.flag]
    }
    pub fn previous(&self) -> Option<&Deps> {
        self.previous.as_ref()
    }

    /// Forget the stored dependencies and clear the flag.
    pub fn reset(&mut self) -> Option<Deps> {
        self.flag = false;
        take(&mut self.previous)
    }
}
