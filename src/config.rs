//! Compiler configuration.

/// Options that change how a pattern is compiled.
///
/// ```
/// use bytere::Config;
/// let config = Config::new().dot_matches_newline(false).state_limit(Some(512));
/// assert!(!config.get_dot_matches_newline());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    dot_matches_newline: bool,
    state_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dot_matches_newline: true,
            state_limit: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `.` also matches `\n`. Defaults to true.
    #[must_use]
    pub fn dot_matches_newline(mut self, yes: bool) -> Self {
        self.dot_matches_newline = yes;
        self
    }

    /// Maximum number of DFA states subset construction may create.
    /// `None` (the default) means unbounded.
    #[must_use]
    pub fn state_limit(mut self, limit: Option<usize>) -> Self {
        self.state_limit = limit;
        self
    }

    pub fn get_dot_matches_newline(&self) -> bool {
        self.dot_matches_newline
    }

    pub fn get_state_limit(&self) -> Option<usize> {
        self.state_limit
    }
}
