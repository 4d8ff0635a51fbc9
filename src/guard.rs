use crate::{ConfigurationError, Deps};


/// Check that a dependency list is worth comparing with a custom comparator.
///
/// Fails if the list is absent or empty, or if every element is a primitive value
/// (null, bool, number or string), since a plain effect handles those cases.
pub fn check_deps(deps: Option<&Deps>) -> Result<(), ConfigurationError> {
    let result = match deps {
        None => Err(ConfigurationError::NoDependencies),
        Some(deps) if deps.is_empty() => Err(ConfigurationError::NoDependencies),
        Some(deps) if deps.is_all_primitive() => {
            Err(ConfigurationError::AllPrimitiveDependencies)
        }
        Some(_) => Ok(()),
    };
    if let Err(e) = &result {
        tracing::debug!(error = %e, "rejected dependency list");
    }
    result
}
