#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CommandMode {
    #[default]
    None,
    /// `-c FLAGS...`: save FLAGS as the default command.
    Set,
    /// `-c` alone: clear the saved command.
    Unset,
    /// `-c get`: print the saved command.
    Get,
}

#[derive(Debug, Default, Clone)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub entropy: bool,
    pub command: CommandMode,
    pub no_lower: bool,
    pub no_upper: bool,
    pub no_digits: bool,
    pub no_special: bool,
    pub only: Option<String>,
    pub keyspace: Option<String>,
    pub range: Option<(i64, i64)>,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub output: Option<String>,
}

impl CliFlags {
    pub fn has_explicit_args(&self) -> bool {
        self.length.is_some()
            || self.number.is_some()
            || self.saved
            || self.clipboard
            || self.entropy
            || self.no_lower
            || self.no_upper
            || self.no_digits
            || self.no_special
            || self.only.is_some()
            || self.keyspace.is_some()
            || self.range.is_some()
            || self.output.is_some()
    }

    pub fn excludes_any_class(&self) -> bool {
        self.no_lower || self.no_upper || self.no_digits || self.no_special
    }
}
