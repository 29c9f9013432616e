use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;

use crate::api::{Config, ValueCell};
use crate::matcher::Tokens;
use crate::model::{ArgumentKind, ArgumentValue};
use crate::parser::ParseError;

/// One entry of a command's schema: how it matches, how many tokens it consumes, and where its value goes.
pub(crate) struct Argument {
    short: Option<char>,
    long: String,
    kind: ArgumentKind,
    value: ValueCell,
    width: usize,
    unique: bool,
    parsed: bool,
    choices: Vec<String>,
    equals: bool,
    config: Config,
}

impl std::fmt::Debug for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let short = match &self.short {
            Some(s) => format!(" -{s},"),
            None => "".to_string(),
        };
        let class = if self.is_positional() { "Pos" } else { "Opt" };

        write!(
            f,
            "{class}[{kind}, {width},{short} --{long}]",
            kind = self.kind,
            width = self.width,
            long = self.long,
        )
    }
}

impl Argument {
    pub(crate) fn new(
        short: Option<char>,
        long: impl Into<String>,
        kind: ArgumentKind,
        choices: Vec<String>,
        mut config: Config,
    ) -> Self {
        let (short, width) = if config.positional {
            config.required = false;
            (None, 1)
        } else {
            (short, kind.consumption_width())
        };

        Self {
            short,
            long: long.into(),
            kind,
            value: Rc::new(RefCell::new(ArgumentValue::empty(kind))),
            width,
            unique: kind.is_unique(),
            parsed: false,
            choices,
            equals: false,
            config,
        }
    }

    pub(crate) fn short(&self) -> Option<char> {
        self.short
    }

    pub(crate) fn long(&self) -> &str {
        &self.long
    }

    pub(crate) fn kind(&self) -> ArgumentKind {
        self.kind
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn choices(&self) -> &[String] {
        &self.choices
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn value(&self) -> ValueCell {
        self.value.clone()
    }

    pub(crate) fn is_parsed(&self) -> bool {
        self.parsed
    }

    pub(crate) fn is_positional(&self) -> bool {
        self.config.positional
    }

    pub(crate) fn is_required(&self) -> bool {
        self.config.required
    }

    pub(crate) fn is_hidden(&self) -> bool {
        self.config.hidden
    }

    /// Record whether the current occurrence used the `--name=value` form.
    pub(crate) fn set_equals(&mut self, equals: bool) {
        self.equals = equals;
    }

    /// How many times `token` names this argument (0 when it doesn't).
    ///
    /// A long name matches once, exactly.
    /// A width 1 short name matches once per occurrence in a flag cluster (`-vvv` is 3).
    /// A value taking short name must be the only character of its token.
    pub(crate) fn check(&self, token: &str) -> Result<usize, ParseError> {
        if let Some(name) = token.strip_prefix("--") {
            if !name.is_empty() && !name.starts_with('-') && name == self.long {
                return Ok(1);
            }

            return Ok(0);
        }

        let (cluster, short) = match (token.strip_prefix('-'), self.short) {
            (Some(cluster), Some(short)) if !cluster.is_empty() => (cluster, short),
            _ => return Ok(0),
        };
        let occurrences = cluster.chars().filter(|c| *c == short).count();

        if occurrences == 0 {
            Ok(0)
        } else if self.width == 1 {
            Ok(occurrences)
        } else if cluster.chars().count() == 1 {
            Ok(1)
        } else {
            Err(ParseError::ParameterMustFollow(short))
        }
    }

    /// Consume the tokens of the occurrence matched at `position`.
    pub(crate) fn reduce(&self, position: usize, tokens: &mut Tokens) {
        if self.is_positional() || self.equals {
            tokens.consume(position);
            return;
        }

        let is_long = tokens
            .get(position)
            .map(|t| t.starts_with("--"))
            .unwrap_or(false);

        match self.short {
            Some(short) if !is_long && self.width == 1 => tokens.strip_short(position, short),
            _ => tokens.consume_range(position, self.width),
        }
    }

    /// Convert the raw values of `count` occurrences into this argument's value.
    ///
    /// List kinds append; every other kind replaces.
    pub(crate) fn parse_value(&mut self, raw: &[String], count: usize) -> Result<(), ParseError> {
        if self.unique && (self.parsed || count > 1) {
            return Err(ParseError::ArgumentMustBeUnique(self.long.clone()));
        }

        self.config
            .validate(raw)
            .map_err(ParseError::Validation)?;

        let name = &self.long;
        let mode = self.config.file_mode;
        let mut value = self.value.borrow_mut();

        match &mut *value {
            ArgumentValue::Help => {}
            ArgumentValue::Flag(v) => {
                if !raw.is_empty() {
                    return Err(ParseError::TooManyArguments(name.clone()));
                }

                *v = true;
            }
            ArgumentValue::Counter(v) => match raw {
                [explicit] => *v = parse_int(name, explicit)?,
                _ => {
                    let total = i64::try_from(count)
                        .ok()
                        .and_then(|count| v.checked_add(count))
                        .ok_or_else(|| ParseError::CounterOverflow(name.clone()))?;
                    *v = total;
                }
            },
            ArgumentValue::String(v) => {
                let token = single(name, raw, ParseError::MustBeFollowedByString)?;
                v.replace(token.clone());
            }
            ArgumentValue::Selector(v) => {
                let token = single(name, raw, ParseError::MustBeFollowedByString)?;

                if !self.choices.contains(token) {
                    return Err(ParseError::InvalidSelectorValue {
                        name: name.clone(),
                        token: token.clone(),
                        choices: self.choices.clone(),
                    });
                }

                v.replace(token.clone());
            }
            ArgumentValue::Int(v) => {
                let token = single(name, raw, ParseError::MustBeFollowedByInteger)?;
                v.replace(parse_int(name, token)?);
            }
            ArgumentValue::Float(v) => {
                let token = single(name, raw, ParseError::MustBeFollowedByFloat)?;
                v.replace(parse_float(name, token)?);
            }
            ArgumentValue::File(v) => {
                let path = single(name, raw, ParseError::MustBeFollowedByFilePath)?;
                v.replace(mode.open(path)?);
            }
            ArgumentValue::StringList(v) => v.extend(raw.iter().cloned()),
            ArgumentValue::IntList(v) => {
                let items = raw
                    .iter()
                    .map(|t| parse_int(name, t))
                    .collect::<Result<Vec<i64>, ParseError>>()?;
                v.extend(items);
            }
            ArgumentValue::FloatList(v) => {
                let items = raw
                    .iter()
                    .map(|t| parse_float(name, t))
                    .collect::<Result<Vec<f64>, ParseError>>()?;
                v.extend(items);
            }
            ArgumentValue::FileList(v) => {
                // Collecting drops (closes) the files opened so far when one fails.
                let files = raw
                    .iter()
                    .map(|path| mode.open(path))
                    .collect::<Result<Vec<File>, std::io::Error>>()?;
                v.extend(files);
            }
        };

        drop(value);
        self.parsed = true;
        Ok(())
    }

    /// Apply the configured default, unless the argument was given.
    pub(crate) fn set_default(&mut self) -> Result<(), ParseError> {
        if self.parsed {
            return Ok(());
        }

        let defaults = &self.config.defaults;
        let mode = self.config.file_mode;
        let mut value = self.value.borrow_mut();

        match &mut *value {
            ArgumentValue::Help => {}
            ArgumentValue::Flag(v) => {
                if let Some(default) = defaults.flag {
                    *v = default;
                }
            }
            ArgumentValue::Counter(v) => {
                if let Some(default) = defaults.count {
                    *v = default;
                }
            }
            ArgumentValue::String(v) | ArgumentValue::Selector(v) => {
                if let Some(default) = &defaults.string {
                    v.replace(default.clone());
                }
            }
            ArgumentValue::Int(v) => {
                if let Some(default) = defaults.int {
                    v.replace(default);
                }
            }
            ArgumentValue::Float(v) => {
                if let Some(default) = defaults.float {
                    v.replace(default);
                }
            }
            ArgumentValue::File(v) => {
                if let Some(path) = &defaults.path {
                    v.replace(mode.open(path)?);
                }
            }
            ArgumentValue::StringList(v) => {
                if let Some(default) = &defaults.strings {
                    *v = default.clone();
                }
            }
            ArgumentValue::IntList(v) => {
                if let Some(default) = &defaults.ints {
                    *v = default.clone();
                }
            }
            ArgumentValue::FloatList(v) => {
                if let Some(default) = &defaults.floats {
                    *v = default.clone();
                }
            }
            ArgumentValue::FileList(v) => {
                if let Some(paths) = &defaults.paths {
                    *v = paths
                        .iter()
                        .map(|path| mode.open(path))
                        .collect::<Result<Vec<File>, std::io::Error>>()?;
                }
            }
        };

        Ok(())
    }
}

fn single<'r>(
    name: &str,
    raw: &'r [String],
    missing: fn(String) -> ParseError,
) -> Result<&'r String, ParseError> {
    match raw {
        [] => Err(missing(name.to_string())),
        [token] => Ok(token),
        _ => Err(ParseError::TooManyArguments(name.to_string())),
    }
}

fn parse_int(name: &str, token: &str) -> Result<i64, ParseError> {
    token
        .parse::<i64>()
        .map_err(|_| ParseError::BadIntegerValue {
            name: name.to_string(),
            token: token.to_string(),
        })
}

fn parse_float(name: &str, token: &str) -> Result<f64, ParseError> {
    token
        .parse::<f64>()
        .map_err(|_| ParseError::BadFloatValue {
            name: name.to_string(),
            token: token.to_string(),
        })
}
