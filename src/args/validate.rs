use std::collections::BTreeMap;
use tracing::debug;

/// Flags that take a run of paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FlagKey {
    File,
    Directory,
}

impl FlagKey {
    /// Canonical short spelling used as the map key.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagKey::File => "-f",
            FlagKey::Directory => "-d",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "-f" | "--file" => Some(FlagKey::File),
            "-d" | "--directory" => Some(FlagKey::Directory),
            _ => None,
        }
    }
}

/// Paths collected per flag. Repeated flags append to the same list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagPathMap {
    entries: BTreeMap<FlagKey, Vec<String>>,
}

impl FlagPathMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `paths` to the list for `key`, creating it (even if `paths` is empty).
    pub fn extend(&mut self, key: FlagKey, paths: impl IntoIterator<Item = String>) {
        self.entries.entry(key).or_default().extend(paths);
    }

    pub fn get(&self, key: FlagKey) -> Option<&[String]> {
        self.entries.get(&key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: FlagKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn files(&self) -> &[String] {
        self.get(FlagKey::File).unwrap_or_default()
    }

    pub fn directories(&self) -> &[String] {
        self.get(FlagKey::Directory).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsOutcome {
    /// Every token was understood.
    Proceed,
    /// `-h`/`--help` was seen; scanning stopped there.
    HelpRequested,
    /// Scanning stopped at a token that is neither a known flag nor part of a flag run.
    UnknownArgument(String),
}

#[derive(Debug, Clone)]
pub struct ValidatedArgs {
    pub paths: FlagPathMap,
    pub outcome: ArgsOutcome,
}

impl ValidatedArgs {
    pub fn is_success(&self) -> bool {
        self.outcome == ArgsOutcome::Proceed
    }
}

/// Build the flag to path mapping from normalized arguments.
///
/// Each path flag consumes the following tokens up to the next one starting
/// with `-`. Scanning stops at the first help flag or unrecognized token and the
/// map collected so far is returned alongside the outcome.
pub fn validate_args(args: &[String]) -> ValidatedArgs {
    debug!("Arguments: {}", args.join(" "));

    let mut paths = FlagPathMap::new();
    let mut i = 0;

    while i < args.len() {
        let token = args[i].as_str();

        if let Some(key) = FlagKey::from_token(token) {
            let run: Vec<String> = args[i + 1..]
                .iter()
                .take_while(|arg| !arg.starts_with('-'))
                .cloned()
                .collect();
            i += 1 + run.len();
            debug!("{} collected {} path(s)", key.as_str(), run.len());
            paths.extend(key, run);
            continue;
        }

        let outcome = match token {
            "-h" | "--help" => ArgsOutcome::HelpRequested,
            _ => ArgsOutcome::UnknownArgument(token.to_string()),
        };
        return ValidatedArgs { paths, outcome };
    }

    ValidatedArgs {
        paths,
        outcome: ArgsOutcome::Proceed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_file_flag_collects_run() {
        let result = validate_args(&strings(&["-f", "a.png", "b.jpg"]));
        assert!(result.is_success());
        assert_eq!(result.paths.files(), ["a.png", "b.jpg"]);
        assert!(!result.paths.contains(FlagKey::Directory));
    }

    #[test]
    fn test_long_flags_map_to_short_keys() {
        let result = validate_args(&strings(&["--file", "a.png", "--directory", "pics"]));
        assert!(result.is_success());
        assert_eq!(result.paths.get(FlagKey::File), Some(&["a.png".to_string()][..]));
        assert_eq!(result.paths.directories(), ["pics"]);
    }

    #[test]
    fn test_repeated_flags_merge() {
        let split = validate_args(&strings(&["-f", "a.png", "-f", "b.png"]));
        let joined = validate_args(&strings(&["-f", "a.png", "b.png"]));
        assert!(split.is_success());
        assert_eq!(split.paths, joined.paths);
    }

    #[test]
    fn test_flag_without_paths_creates_empty_entry() {
        let result = validate_args(&strings(&["-f", "-d", "pics"]));
        assert!(result.is_success());
        assert!(result.paths.contains(FlagKey::File));
        assert!(result.paths.files().is_empty());
        assert_eq!(result.paths.directories(), ["pics"]);
    }

    #[test]
    fn test_unknown_flag_aborts_with_partial_map() {
        let result = validate_args(&strings(&["-f", "a.png", "-x", "-d", "pics"]));
        assert!(!result.is_success());
        assert_eq!(
            result.outcome,
            ArgsOutcome::UnknownArgument("-x".to_string())
        );
        assert_eq!(result.paths.files(), ["a.png"]);
        assert!(!result.paths.contains(FlagKey::Directory));
    }

    #[test]
    fn test_leading_plain_token_is_unknown() {
        let result = validate_args(&strings(&["a.png", "-f", "b.png"]));
        assert_eq!(
            result.outcome,
            ArgsOutcome::UnknownArgument("a.png".to_string())
        );
        assert!(result.paths.is_empty());
    }

    #[test]
    fn test_help_stops_scanning() {
        let result = validate_args(&strings(&["-f", "a.png", "--help", "-f", "b.png"]));
        assert_eq!(result.outcome, ArgsOutcome::HelpRequested);
        assert!(!result.is_success());
        assert_eq!(result.paths.files(), ["a.png"]);
    }

    #[test]
    fn test_no_arguments_is_success() {
        let result = validate_args(&[]);
        assert!(result.is_success());
        assert!(result.paths.is_empty());
    }

    #[test]
    fn test_empty_token_is_absorbed_into_run() {
        let result = validate_args(&strings(&["-f", "", "a.png"]));
        assert!(result.is_success());
        assert_eq!(result.paths.files(), ["", "a.png"]);
    }
}
