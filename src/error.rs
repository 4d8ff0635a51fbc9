use parse_display::Display;

/// Misuse of a compare effect detected while checking its dependencies.
///
/// Only reported in [`BuildMode::Development`](crate::BuildMode::Development).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display)]
pub enum ConfigurationError {
    #[display(
        "compare effect should not be used with no dependencies. Use a plain effect instead."
    )]
    NoDependencies,
    #[display(
        "compare effect should not be used with dependencies that are all primitive values. Use a plain effect instead."
    )]
    AllPrimitiveDependencies,
}

impl std::error::Error for ConfigurationError {}
