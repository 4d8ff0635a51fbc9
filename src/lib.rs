//! Effects whose dependencies are compared by a custom comparator instead of by identity.
//!
//! A [`CompareEffect`] hands its scheduler a single-element dependency list whose value
//! flips each time the comparator reports a change, so a scheduler that only compares
//! dependencies by value re-runs the effect exactly when the comparator says so.
//!
//! ```
//! use compare_effect::{CompareEffect, Deps, ImmediateScheduler};
//! use serde_json::json;
//!
//! let mut effect = CompareEffect::new();
//! let mut scheduler = ImmediateScheduler::new();
//!
//! for _ in 0..3 {
//!     let deps = Deps::from([json!({ "id": 1 })]);
//!     effect.run_deep(&mut scheduler, || println!("changed"), deps).unwrap();
//! }
//! assert_eq!(scheduler.runs(), 1);
//! ```

mod cleanup;
mod compare;
mod deps;
mod effect;
mod error;
mod guard;
mod memo;
mod mode;
mod scheduler;

#[cfg(test)]
mod test_helpers;

pub use cleanup::*;
pub use compare::*;
pub use deps::*;
pub use effect::*;
pub use error::*;
pub use guard::*;
pub use memo::*;
pub use mode::*;
pub use scheduler::*;
