use crate::{
    check_deps, deep_equal, Cleanup, CompareMemo, ConfigurationError, Deps, EffectConfig,
    EffectScheduler,
};


/// One mounted instance of an effect whose dependencies are compared by a custom comparator.
///
/// The instance keeps the last changed dependency list and a toggle flag. The scheduler only
/// ever sees `[flag]`, so it re-runs the effect exactly when the comparator reports a change.
#[derive(Debug, Default)]
pub struct CompareEffect {
    memo: CompareMemo,
    config: EffectConfig,
}

impl CompareEffect {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_config(config: EffectConfig) -> Self {
        Self {
            memo: CompareMemo::new(),
            config,
        }
    }

    pub fn config(&self) -> EffectConfig {
        self.config
    }
    pub fn memo(&self) -> &CompareMemo {
        &self.memo
    }

    /// Schedule `callback` with `scheduler`, treating `deps` as changed only when `comparator`
    /// returns false.
    ///
    /// Outside [`BuildMode::Production`](crate::BuildMode::Production), `deps` is checked first
    /// with [`check_deps`] and nothing is scheduled if the check fails.
    /// In production an absent list is memoized as an empty list.
    pub fn run<R: Into<Cleanup> + 'static>(
        &mut self,
        scheduler: &mut (impl EffectScheduler + ?Sized),
        callback: impl FnOnce() -> R + 'static,
        deps: impl Into<Option<Deps>>,
        comparator: impl FnMut(&Deps, Option<&Deps>) -> bool,
    ) -> Result<(), ConfigurationError> {
        let deps = deps.into();
        if self.config.checks_deps() {
            check_deps(deps.as_ref())?;
        }
        let signal = self.memo.update(deps.unwrap_or_default(), comparator);
        scheduler.schedule(Box::new(move || -> Cleanup { callback().into() }), signal);
        Ok(())
    }

    /// [`run`](Self::run) with [`deep_equal`] as the comparator.
    pub fn run_deep<R: Into<Cleanup> + 'static>(
        &mut self,
        scheduler: &mut (impl EffectScheduler + ?Sized),
        callback: impl FnOnce() -> R + 'static,
        deps: impl Into<Option<Deps>>,
    ) -> Result<(), ConfigurationError> {
        self.run(scheduler, callback, deps, deep_equal)
    }

    /// Forget the memoized dependencies, as when the instance is mounted again.
    pub fn reset(&mut self) {
        self.memo.reset();
    }
}

/// Run an effect whose dependencies are compared by `comparator` instead of by identity.
///
/// `comparator` receives `(current, previous)` and returns true when the dependencies are to
/// be treated as unchanged. `previous` is `None` on the first call.
///
/// ```
/// use compare_effect::{use_effect_with_compare, CompareEffect, Deps, ImmediateScheduler};
/// use serde_json::json;
///
/// let mut effect = CompareEffect::new();
/// let mut scheduler = ImmediateScheduler::new();
/// let by_id = |current: &Deps, previous: Option<&Deps>| {
///     previous.is_some_and(|previous| current[0]["id"] == previous[0]["id"])
/// };
///
/// for name in ["a", "b"] {
///     let deps = Deps::from([json!({ "id": 1, "name": name })]);
///     use_effect_with_compare(&mut effect, &mut scheduler, || {}, deps, by_id).unwrap();
/// }
/// assert_eq!(scheduler.runs(), 1);
/// ```
pub fn use_effect_with_compare<R: Into<Cleanup> + 'static>(
    effect: &mut CompareEffect,
    scheduler: &mut (impl EffectScheduler + ?Sized),
    callback: impl FnOnce() -> R + 'static,
    deps: impl Into<Option<Deps>>,
    comparator: impl FnMut(&Deps, Option<&Deps>) -> bool,
) -> Result<(), ConfigurationError> {
    effect.run(scheduler, callback, deps, comparator)
}

/// [`use_effect_with_compare`] with [`deep_equal`] as the comparator.
pub fn use_deep_compare_effect<R: Into<Cleanup> + 'static>(
    effect: &mut CompareEffect,
    scheduler: &mut (impl EffectScheduler + ?Sized),
    callback: impl FnOnce() -> R + 'static,
    deps: impl Into<Option<Deps>>,
) -> Result<(), ConfigurationError> {
    effect.run_deep(scheduler, callback, deps)
}
