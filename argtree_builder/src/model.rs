use std::fs::File;

/// The kind of an argument, which decides how it matches and what value it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    /// Prints the usage of the selected command.
    Help,
    /// `true` when present.
    Flag,
    /// Counts occurrences (`-vvv`), or takes an explicit integer (`--verbose=3`).
    Counter,
    /// A single string value.
    String,
    /// A single base-10 integer value.
    Int,
    /// A single floating point value.
    Float,
    /// A path, opened as a file during parsing.
    File,
    /// Repeatable string values.
    StringList,
    /// Repeatable integer values.
    IntList,
    /// Repeatable floating point values.
    FloatList,
    /// Repeatable paths, each opened as a file during parsing.
    FileList,
    /// A single string restricted to a fixed set of choices.
    Selector,
}

impl ArgumentKind {
    /// The number of tokens an occurrence of this kind consumes: its name plus any value.
    pub(crate) fn consumption_width(&self) -> usize {
        match self {
            ArgumentKind::Help | ArgumentKind::Flag | ArgumentKind::Counter => 1,
            _ => 2,
        }
    }

    pub(crate) fn is_unique(&self) -> bool {
        matches!(
            self,
            ArgumentKind::String
                | ArgumentKind::Int
                | ArgumentKind::Float
                | ArgumentKind::File
                | ArgumentKind::Selector
        )
    }

    pub(crate) fn is_list(&self) -> bool {
        matches!(
            self,
            ArgumentKind::StringList
                | ArgumentKind::IntList
                | ArgumentKind::FloatList
                | ArgumentKind::FileList
        )
    }

    /// Whether an argument of this kind may be bound by position.
    pub(crate) fn is_positionable(&self) -> bool {
        !(self.is_list()
            || matches!(
                self,
                ArgumentKind::Help | ArgumentKind::Flag | ArgumentKind::Counter
            ))
    }
}

impl std::fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The parsed value of one argument, tagged by its [`ArgumentKind`].
#[derive(Debug)]
#[allow(missing_docs)]
pub enum ArgumentValue {
    Help,
    Flag(bool),
    Counter(i64),
    String(Option<String>),
    Int(Option<i64>),
    Float(Option<f64>),
    File(Option<File>),
    StringList(Vec<String>),
    IntList(Vec<i64>),
    FloatList(Vec<f64>),
    FileList(Vec<File>),
    Selector(Option<String>),
}

impl ArgumentValue {
    /// The empty value for a kind, before any parsing or defaulting.
    pub fn empty(kind: ArgumentKind) -> Self {
        match kind {
            ArgumentKind::Help => ArgumentValue::Help,
            ArgumentKind::Flag => ArgumentValue::Flag(false),
            ArgumentKind::Counter => ArgumentValue::Counter(0),
            ArgumentKind::String => ArgumentValue::String(None),
            ArgumentKind::Int => ArgumentValue::Int(None),
            ArgumentKind::Float => ArgumentValue::Float(None),
            ArgumentKind::File => ArgumentValue::File(None),
            ArgumentKind::StringList => ArgumentValue::StringList(Vec::default()),
            ArgumentKind::IntList => ArgumentValue::IntList(Vec::default()),
            ArgumentKind::FloatList => ArgumentValue::FloatList(Vec::default()),
            ArgumentKind::FileList => ArgumentValue::FileList(Vec::default()),
            ArgumentKind::Selector => ArgumentValue::Selector(None),
        }
    }

    /// The kind this value is tagged with.
    pub fn kind(&self) -> ArgumentKind {
        match self {
            ArgumentValue::Help => ArgumentKind::Help,
            ArgumentValue::Flag(_) => ArgumentKind::Flag,
            ArgumentValue::Counter(_) => ArgumentKind::Counter,
            ArgumentValue::String(_) => ArgumentKind::String,
            ArgumentValue::Int(_) => ArgumentKind::Int,
            ArgumentValue::Float(_) => ArgumentKind::Float,
            ArgumentValue::File(_) => ArgumentKind::File,
            ArgumentValue::StringList(_) => ArgumentKind::StringList,
            ArgumentValue::IntList(_) => ArgumentKind::IntList,
            ArgumentValue::FloatList(_) => ArgumentKind::FloatList,
            ArgumentValue::FileList(_) => ArgumentKind::FileList,
            ArgumentValue::Selector(_) => ArgumentKind::Selector,
        }
    }
}

/// How a file-kind argument opens its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileMode {
    /// Open an existing file for reading.
    #[default]
    Read,
    /// Create or truncate the file for writing.
    Write,
    /// Create the file if needed and append to it.
    Append,
    /// Open an existing file for reading and writing.
    ReadWrite,
}

impl FileMode {
    pub(crate) fn open(&self, path: &str) -> std::io::Result<File> {
        let mut options = std::fs::OpenOptions::new();

        match self {
            FileMode::Read => options.read(true),
            FileMode::Write => options.write(true).create(true).truncate(true),
            FileMode::Append => options.append(true).create(true),
            FileMode::ReadWrite => options.read(true).write(true),
        };

        options.open(path)
    }
}
