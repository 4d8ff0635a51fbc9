use derive_ex::derive_ex;
use parse_display::Display;
use serde::Serialize;
use serde_json::Value;

#[cfg(test)]
mod tests;

/// A single dependency value.
///
/// Dependencies are JSON-shaped so that composite values (arrays and objects) can be
/// compared structurally by a comparator.
pub type Dep = Value;

/// The shape of a [`Dep`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display)]
#[display(style = "snake_case")]
pub enum DepKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}
impl DepKind {
    pub fn of(dep: &Dep) -> Self {
        match dep {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Returns true for the kinds whose identity and value coincide.
    pub fn is_primitive(self) -> bool {
        matches!(self, Self::Null | Self::Bool | Self::Number | Self::String)
    }
}

/// Ordered list of dependency values supplied on each invocation of an effect.
#[derive(Clone, Debug, Default, PartialEq)]
#[derive_ex(Deref)]
pub struct Deps(Vec<Dep>);

impl Deps {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, dep: impl Into<Dep>) {
        self.0.push(dep.into());
    }

    /// Append the JSON form of `value`.
    pub fn push_serialize<T: Serialize + ?Sized>(
        &mut self,
        value: &T,
    ) -> Result<(), serde_json::Error> {
        self.0.push(serde_json::to_value(value)?);
        Ok(())
    }

    /// Builder form of [`push_serialize`](Self::push_serialize).
    pub fn with<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, serde_json::Error> {
        self.push_serialize(value)?;
        Ok(self)
    }

    pub fn kinds(&self) -> impl Iterator<Item = DepKind> + '_ {
        self.0.iter().map(DepKind::of)
    }

    /// Returns true if no element is an array or an object.
    ///
    /// An empty list is vacuously all-primitive.
    pub fn is_all_primitive(&self) -> bool {
        self.kinds().all(DepKind::is_primitive)
    }

    pub fn into_vec(self) -> Vec<Dep> {
        self.0
    }
}

impl From<Vec<Dep>> for Deps {
    fn from(deps: Vec<Dep>) -> Self {
        Self(deps)
    }
}
impl<const N: usize> From<[Dep; N]> for Deps {
    fn from(deps: [Dep; N]) -> Self {
        Self(deps.into())
    }
}
impl FromIterator<Dep> for Deps {
    fn from_iter<I: IntoIterator<Item = Dep>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
impl<'a> IntoIterator for &'a Deps {
    type Item = &'a Dep;
    type IntoIter = std::slice::Iter<'a, Dep>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
impl IntoIterator for Deps {
    type Item = Dep;
    type IntoIter = std::vec::IntoIter<Dep>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
