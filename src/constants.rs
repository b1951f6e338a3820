//! Constants used throughout the mrbgen application

/// Placeholder replaced with the project name as given
pub const NAME_PLACEHOLDER: &str = "{{ name }}";

/// Placeholder replaced with the camel-cased project name
pub const IDENTIFIER_PLACEHOLDER: &str = "{{ identifier }}";

/// Characters that delimit segments when deriving an identifier
pub const IDENTIFIER_SEPARATORS: &[char] = &['_', '-', ' '];

/// Separator used for manifest paths and reported paths
pub const PATH_SEPARATOR: char = '/';

/// Verbs printed in the first column of the action report
pub mod verbs {
    pub const CREATE: &str = "create";
    pub const SKIP: &str = "skip";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
