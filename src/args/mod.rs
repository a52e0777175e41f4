// Command line handling - path fragment merging and flag validation
mod help;
mod normalize;
mod validate;

pub use help::{HELP_TEXT, write_help, write_unsupported};
pub use normalize::normalize_args;
pub use validate::{ArgsOutcome, FlagKey, FlagPathMap, ValidatedArgs, validate_args};

/// Normalize raw arguments and validate them in one step.
pub fn parse_args<I, S>(args: I) -> ValidatedArgs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    validate_args(&normalize_args(args))
}
