use crate::model::{ArgumentKind, FileMode};
use crate::prelude::Validator;

/// The configuration of an argument: requirement, validation, help, defaults.
///
/// Every knob is optional; `Config::default()` describes an optional, visible, named argument.
///
/// ### Example
/// ```
/// # use argtree_builder as argtree;
/// use argtree::{Config, Parser};
///
/// let mut parser = Parser::new("Counts words.").exit_on_help(false);
/// let limit = parser
///     .root_mut()
///     .int("l", "limit", Config::default().help("Stop after this many.").default_int(10))
///     .unwrap();
///
/// parser.parse_tokens(&["words"]).unwrap();
/// assert_eq!(limit.get(), Some(10));
/// ```
#[derive(Default)]
pub struct Config {
    pub(crate) required: bool,
    pub(crate) positional: bool,
    pub(crate) hidden: bool,
    pub(crate) help: Option<String>,
    pub(crate) file_mode: FileMode,
    pub(crate) validator: Option<Box<dyn Validator>>,
    pub(crate) defaults: Defaults,
}

// One default per compatible kind; only the one matching the argument's kind is ever applied.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Defaults {
    pub(crate) flag: Option<bool>,
    pub(crate) count: Option<i64>,
    pub(crate) string: Option<String>,
    pub(crate) int: Option<i64>,
    pub(crate) float: Option<f64>,
    pub(crate) path: Option<String>,
    pub(crate) strings: Option<Vec<String>>,
    pub(crate) ints: Option<Vec<i64>>,
    pub(crate) floats: Option<Vec<f64>>,
    pub(crate) paths: Option<Vec<String>>,
}

impl Defaults {
    /// Render the default that applies to `kind`, if any.
    pub(crate) fn render(&self, kind: ArgumentKind) -> Option<String> {
        fn join<T: ToString>(items: &[T]) -> String {
            items
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        }

        match kind {
            ArgumentKind::Help => None,
            ArgumentKind::Flag => self.flag.map(|v| v.to_string()),
            ArgumentKind::Counter => self.count.map(|v| v.to_string()),
            ArgumentKind::String | ArgumentKind::Selector => self.string.clone(),
            ArgumentKind::Int => self.int.map(|v| v.to_string()),
            ArgumentKind::Float => self.float.map(|v| v.to_string()),
            ArgumentKind::File => self.path.clone(),
            ArgumentKind::StringList => self.strings.as_deref().map(join),
            ArgumentKind::IntList => self.ints.as_deref().map(join),
            ArgumentKind::FloatList => self.floats.as_deref().map(join),
            ArgumentKind::FileList => self.paths.as_deref().map(join),
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("required", &self.required)
            .field("positional", &self.positional)
            .field("hidden", &self.hidden)
            .field("help", &self.help)
            .field("file_mode", &self.file_mode)
            .field("validator", &self.validator.is_some())
            .field("defaults", &self.defaults)
            .finish()
    }
}

impl Config {
    /// Require the argument to be given.
    /// A missing required argument fails the parse with `RequiredArgumentMissing`.
    ///
    /// Positional arguments are never required; the flag is dropped for them at registration.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Bind the argument by position rather than by name.
    ///
    /// Positional arguments take their value from the first token left over once the named arguments are matched.
    /// Only single valued kinds (string, int, float, file, selector) may be positional.
    ///
    /// ### Example
    /// ```
    /// # use argtree_builder as argtree;
    /// use argtree::{Config, Parser};
    ///
    /// let mut parser = Parser::new("Greets someone.");
    /// let name = parser.root_mut().string("", "name", Config::default().positional()).unwrap();
    ///
    /// parser.parse_tokens(&["greet", "world"]).unwrap();
    /// assert_eq!(name.get(), Some("world".to_string()));
    /// ```
    pub fn positional(mut self) -> Self {
        self.positional = true;
        self
    }

    /// Leave the argument out of the generated usage text.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Document the help message for this argument.
    /// If repeated, only the final message will apply to the argument.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    /// How file-kind arguments open their path (default: [`FileMode::Read`]).
    pub fn file_mode(mut self, mode: FileMode) -> Self {
        self.file_mode = mode;
        self
    }

    /// Check the raw values of each occurrence before they are converted.
    /// A rejection aborts the parse with [`ParseError::Validation`](crate::ParseError::Validation), carrying the message verbatim.
    ///
    /// ### Example
    /// ```
    /// # use argtree_builder as argtree;
    /// use argtree::{Config, Parser};
    ///
    /// let mut parser = Parser::new("Says hi.");
    /// let name = parser
    ///     .root_mut()
    ///     .string("n", "name", Config::default().validator(|values: &[String]| {
    ///         match values.iter().all(|v| v.chars().all(char::is_alphabetic)) {
    ///             true => Ok(()),
    ///             false => Err("names are alphabetic".to_string()),
    ///         }
    ///     }))
    ///     .unwrap();
    ///
    /// let error = parser.parse_tokens(&["hi", "--name", "r2d2"]).unwrap_err();
    /// assert_eq!(error.to_string(), "names are alphabetic");
    /// ```
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator.replace(Box::new(validator));
        self
    }

    /// Default for a flag argument.
    pub fn default_flag(mut self, value: bool) -> Self {
        self.defaults.flag.replace(value);
        self
    }

    /// Default for a counter argument.
    pub fn default_count(mut self, value: i64) -> Self {
        self.defaults.count.replace(value);
        self
    }

    /// Default for a string or selector argument.
    pub fn default_string(mut self, value: impl Into<String>) -> Self {
        self.defaults.string.replace(value.into());
        self
    }

    /// Default for an integer argument.
    pub fn default_int(mut self, value: i64) -> Self {
        self.defaults.int.replace(value);
        self
    }

    /// Default for a float argument.
    pub fn default_float(mut self, value: f64) -> Self {
        self.defaults.float.replace(value);
        self
    }

    /// Default path for a file argument, opened only when the argument is not given.
    pub fn default_path(mut self, path: impl Into<String>) -> Self {
        self.defaults.path.replace(path.into());
        self
    }

    /// Default for a string list argument.
    pub fn default_strings(mut self, values: Vec<impl Into<String>>) -> Self {
        self.defaults
            .strings
            .replace(values.into_iter().map(Into::into).collect());
        self
    }

    /// Default for an integer list argument.
    pub fn default_ints(mut self, values: Vec<i64>) -> Self {
        self.defaults.ints.replace(values);
        self
    }

    /// Default for a float list argument.
    pub fn default_floats(mut self, values: Vec<f64>) -> Self {
        self.defaults.floats.replace(values);
        self
    }

    /// Default paths for a file list argument.
    /// If any of them fails to open, the ones already opened are closed again.
    pub fn default_paths(mut self, paths: Vec<impl Into<String>>) -> Self {
        self.defaults
            .paths
            .replace(paths.into_iter().map(Into::into).collect());
        self
    }

    pub(crate) fn validate(&self, values: &[String]) -> Result<(), String> {
        match &self.validator {
            Some(validator) => validator.validate(values),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty() {
        let config = Config::default();

        assert!(!config.required);
        assert!(!config.positional);
        assert!(!config.hidden);
        assert_eq!(config.help, None);
        assert_eq!(config.file_mode, FileMode::Read);
        assert!(config.validator.is_none());
        assert_eq!(config.defaults, Defaults::default());
    }

    #[test]
    fn builder() {
        let config = Config::default()
            .required()
            .positional()
            .hidden()
            .help("--this will get discarded--")
            .help("message")
            .file_mode(FileMode::Append);

        assert!(config.required);
        assert!(config.positional);
        assert!(config.hidden);
        assert_eq!(config.help, Some("message".to_string()));
        assert_eq!(config.file_mode, FileMode::Append);
    }

    #[test]
    fn validate() {
        let config = Config::default();
        assert_eq!(config.validate(&["x".to_string()]), Ok(()));

        let config = Config::default().validator(|values: &[String]| match values.len() {
            1 => Ok(()),
            n => Err(format!("expected 1, got {n}")),
        });
        assert_eq!(config.validate(&["x".to_string()]), Ok(()));
        assert_eq!(config.validate(&[]), Err("expected 1, got 0".to_string()));
    }

    #[rstest]
    #[case(ArgumentKind::Help, None)]
    #[case(ArgumentKind::Flag, Some("true"))]
    #[case(ArgumentKind::Counter, Some("2"))]
    #[case(ArgumentKind::String, Some("abc"))]
    #[case(ArgumentKind::Selector, Some("abc"))]
    #[case(ArgumentKind::Int, Some("-4"))]
    #[case(ArgumentKind::Float, Some("0.5"))]
    #[case(ArgumentKind::File, Some("in.txt"))]
    #[case(ArgumentKind::StringList, Some("x, y"))]
    #[case(ArgumentKind::IntList, Some("1, 2"))]
    #[case(ArgumentKind::FloatList, None)]
    #[case(ArgumentKind::FileList, Some("a.txt"))]
    fn render_default(#[case] kind: ArgumentKind, #[case] expected: Option<&str>) {
        let config = Config::default()
            .default_flag(true)
            .default_count(2)
            .default_string("abc")
            .default_int(-4)
            .default_float(0.5)
            .default_path("in.txt")
            .default_strings(vec!["x", "y"])
            .default_ints(vec![1, 2])
            .default_paths(vec!["a.txt"]);

        assert_eq!(
            config.defaults.render(kind),
            expected.map(|s| s.to_string())
        );
    }
}
