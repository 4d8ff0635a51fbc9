use std::{any::Any, mem::take};


/// Teardown returned by an effect callback.
///
/// The teardown runs when the `Cleanup` is dropped, which the scheduler does before
/// the next run of the effect and when the effect is unmounted.
#[derive(Default)]
#[must_use]
pub struct Cleanup(RawCleanup);

impl Cleanup {
    pub fn empty() -> Self {
        Cleanup(RawCleanup::Empty)
    }
    pub fn from_fn(f: impl FnOnce() + 'static) -> Self {
        Cleanup(RawCleanup::Fn(Box::new(f)))
    }

    /// Keep `value` alive until the cleanup runs, then drop it.
    pub fn from_value(value: impl Any) -> Self {
        Cleanup(RawCleanup::Value(Box::new(value)))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.0, RawCleanup::Empty)
    }
}
impl Drop for Cleanup {
    fn drop(&mut self) {
        match take(&mut self.0) {
            RawCleanup::Empty => {}
            RawCleanup::Fn(f) => f(),
            RawCleanup::Value(_) => {}
        }
    }
}
impl From<()> for Cleanup {
    fn from(_: ()) -> Self {
        Cleanup::empty()
    }
}
impl<T: Into<Cleanup>> From<Option<T>> for Cleanup {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Cleanup::empty, Into::into)
    }
}
impl std::fmt::Debug for Cleanup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.0 {
            RawCleanup::Empty => "empty",
            RawCleanup::Fn(_) => "fn",
            RawCleanup::Value(_) => "value",
        };
        f.debug_tuple("Cleanup").field(&kind).finish()
    }
}

#[derive(Default)]
enum RawCleanup {
    #[default]
    Empty,
    Fn(Box<dyn FnOnce() + 'static>),
    Value(#[allow(unused)] Box<dyn Any>),
}
