use thiserror::Error;

/// An invalid schema, rejected at registration time (before any parsing).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Every named argument needs a long name.
    #[error("Config error: a long name is required (short name '{0}').")]
    LongNameRequired(String),

    /// A short name must be a single character.
    #[error("Config error: short name '{0}' must be a single character.")]
    ShortNameTooLong(String),

    /// A short name cannot be '-', '=' or whitespace.
    #[error("Config error: '{0}' cannot be a short name.")]
    InvalidShortName(char),

    /// The short name is already used in this command or one of its ancestors.
    #[error("Config error: cannot duplicate the short name '-{0}'.")]
    DuplicateShortName(char),

    /// The long name is already used in this command or one of its ancestors.
    #[error("Config error: cannot duplicate the long name '--{0}'.")]
    DuplicateLongName(String),

    /// Help, flag, counter and list arguments cannot be bound by position.
    #[error("Config error: argument '{name}' of kind {kind} cannot be positional.")]
    InvalidPositionalType {
        /// The argument name.
        name: String,
        /// The offending kind.
        kind: crate::model::ArgumentKind,
    },

    /// A selector needs at least one choice, and its default must be one of them.
    #[error("Config error: selector '{name}' is invalid: {message}.")]
    InvalidSelector {
        /// The argument name.
        name: String,
        /// What is wrong with it.
        message: String,
    },

    /// Every command needs a name.
    #[error("Config error: a sub-command name is required.")]
    CommandNameRequired,

    /// Sibling commands must have distinct names.
    #[error("Config error: cannot duplicate the sub-command '{0}'.")]
    DuplicateCommand(String),
}

/// A failure to parse the input tokens against the schema.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The command has sub-commands, but none was named.
    #[error("Parse error: '{0}' requires a sub-command.")]
    SubCommandRequired(String),

    /// An argument is missing its value.
    #[error("Parse error: not enough tokens provided to '{0}'.")]
    NotEnoughArguments(String),

    /// An argument received more values than it takes.
    #[error("Parse error: too many values provided to '{0}'.")]
    TooManyArguments(String),

    /// A required argument was not given.
    #[error("Parse error: missing required argument '{0}'.")]
    RequiredArgumentMissing(String),

    /// A single-valued argument was given more than once.
    #[error("Parse error: '{0}' may only be given once.")]
    ArgumentMustBeUnique(String),

    /// A value-taking short option was bundled into a cluster.
    #[error("Parse error: a parameter must follow '-{0}'; it cannot be combined with other short flags.")]
    ParameterMustFollow(char),

    /// Tokens remained after every phase.
    #[error("Parse error: unknown arguments '{}'.", .0.join(" "))]
    UnknownArguments(Vec<String>),

    /// An integer argument was given no value.
    #[error("Parse error: '{0}' must be followed by an integer.")]
    MustBeFollowedByInteger(String),

    /// A float argument was given no value.
    #[error("Parse error: '{0}' must be followed by a float.")]
    MustBeFollowedByFloat(String),

    /// A string argument was given no value.
    #[error("Parse error: '{0}' must be followed by a string.")]
    MustBeFollowedByString(String),

    /// A file argument was given no value.
    #[error("Parse error: '{0}' must be followed by a file path.")]
    MustBeFollowedByFilePath(String),

    /// The value is not a base-10 integer.
    #[error("Parse error: '{token}' cannot convert to an integer for '{name}'.")]
    BadIntegerValue {
        /// The argument name.
        name: String,
        /// The offending token.
        token: String,
    },

    /// A counter was pushed past the largest integer.
    #[error("Parse error: counter '{0}' overflowed.")]
    CounterOverflow(String),

    /// The value is not a floating point number.
    #[error("Parse error: '{token}' cannot convert to a float for '{name}'.")]
    BadFloatValue {
        /// The argument name.
        name: String,
        /// The offending token.
        token: String,
    },

    /// The value is not amongst the selector's choices.
    #[error("Parse error: '{token}' is not a valid choice for '{name}' (choose from {}).", .choices.join(", "))]
    InvalidSelectorValue {
        /// The argument name.
        name: String,
        /// The offending token.
        token: String,
        /// The allowed values.
        choices: Vec<String>,
    },

    /// A validator rejected the raw values; its message is kept verbatim.
    #[error("{0}")]
    Validation(String),

    /// Opening a file-kind argument failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
