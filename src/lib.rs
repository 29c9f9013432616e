//! `argtree` is a command line parser for Rust.
//!
//! A program declares its arguments on a tree of commands, then hands the process arguments over for parsing.
//! `argtree` focuses on the following:
//! * *Typed handles*:
//! Every declaration returns a [`Handle`] typed by the argument's kind (ex: `Handle<Option<i64>>` for an int).
//! The program never converts strings itself.
//! * *Familiar syntax*:
//! `-x`, `--long`, `--long=value`, short flag clusters (`-abc`), counters (`-vvv`) and bare positional tokens.
//! * *Nested sub-commands*:
//! Any command may carry sub-commands, to any depth.
//! The arguments of a command apply to all of its sub-commands.
//! * *Early configuration errors*:
//! Each declaration is validated as it is made (ex: a repeated name), via [`ConfigError`].
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/demo_summer.rs")]
//! ```
//!
//! ```console
//! $ summer -h
//! usage: summer [-h] [-n NUMBER ...] [-r]
//!
//! Sums numbers.
//!
//! Arguments:
//!   -h, --help    Show this help message and exit.
//!   -n, --number  A number to sum.
//!   -r, --round   Round the sum.
//!
//! $ summer -n 1 --number 2.5 -n=3
//! Sum: 6.5
//!
//! $ summer -r -n 1 -n 2.5
//! Sum: 4
//!
//! $ summer -n blah
//! Parse error: 'blah' cannot convert to a float for 'number'.
//! ```
//!
//! # Arguments
//! Arguments are declared on a [`CommandBuilder`], obtained via [`Parser::root_mut`] or [`Parser::command_mut`].
//! Each takes a short name (`""` for none), a long name and a [`Config`].
//!
//! | declaration | handle | consumes |
//! |-------------|--------|----------|
//! | [`CommandBuilder::flag`] | `bool` | its name |
//! | [`CommandBuilder::counter`] | `i64` | its name, once per occurrence |
//! | [`CommandBuilder::string`] | `Option<String>` | its name and one value |
//! | [`CommandBuilder::int`] | `Option<i64>` | its name and one value |
//! | [`CommandBuilder::float`] | `Option<f64>` | its name and one value |
//! | [`CommandBuilder::file`] | `Option<File>` | its name and one path |
//! | [`CommandBuilder::selector`] | `Option<String>` | its name and one of its choices |
//! | `*_list` | `Vec<..>` | its name and one value, appending per occurrence |
//!
//! A [`Config`] makes an argument required, positional or hidden, and sets its help text, default, validator or file mode.
//! Only single valued kinds may be positional.
//! Positional arguments take the tokens left over once every named argument has matched, in declaration order, from the selected sub-command up to the root.
//!
//! ### Sub-commands
//! [`CommandBuilder::command`] adds a sub-command and returns its [`CommandId`].
//! A command with sub-commands requires one to be named directly after it.
//! Check which one was selected via [`Parser::happened`].
//!
//! ```no_run
#![doc = include_str!("../demos/demo_sub_command.rs")]
//! ```
//!
//! ```console
//! $ files -h
//! usage: files [-h] [-v] <command>
//!
//! Copies or inspects files.
//!
//! Commands:
//!   copy     Copy one file onto another.
//!   inspect  Describe files.
//!
//! Arguments:
//!   -h, --help     Show this help message and exit.
//!   -v, --verbose  Report what happens.
//!
//! $ printf 'a\nb\nc\n' > abc.txt
//! $ files inspect -u lines -f abc.txt
//! #0: 3 lines
//!
//! $ files move
//! Parse error: 'files' requires a sub-command.
//! ```
//!
//! ### Help
//! Every command carries `-h, --help`.
//! On a match, the usage of the selected command is printed and the process exits with code `0`, unless disabled via [`Parser::exit_on_help`].
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events while parsing.
pub use argtree_builder::*;
