use std::env;
use std::fs::File;

use crate::api::{Config, Handle};
use crate::matcher::Tokens;
use crate::model::ArgumentKind;
use crate::parser::{
    CommandId, CommandTree, ConfigError, ConsoleInterface, HelpOutput, ParseError, Printer,
    UserInterface, ROOT,
};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The command line parser: a root command, its arguments, and any sub-commands.
///
/// Arguments are declared through [`CommandBuilder`]s (see [`Parser::root_mut`]), each declaration returning a [`Handle`] to its eventual value.
/// After [`Parser::parse`] (or [`Parser::parse_tokens`]), the handles hold the parsed values.
///
/// ### Example
/// ```
/// # use argtree_builder as argtree;
/// use argtree::{Config, Parser};
///
/// let mut parser = Parser::new("Counts things.");
/// let verbose = parser.root_mut().counter("v", "verbose", Config::default()).unwrap();
/// let items = parser
///     .root_mut()
///     .int_list("i", "item", Config::default().help("An item to count."))
///     .unwrap();
///
/// parser.parse_tokens(&["count", "-vv", "-i", "1", "--item=2"]).unwrap();
///
/// assert_eq!(verbose.get(), 2);
/// assert_eq!(items.get(), vec![1, 2]);
/// ```
pub struct Parser {
    tree: CommandTree,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("name", &self.tree.get(ROOT).name)
            .field("printer", &self.printer)
            .finish()
    }
}

impl Parser {
    /// Create a parser, describing the program for its usage text.
    ///
    /// The program name is taken from the first token at parse time, unless set via [`Parser::name`].
    pub fn new(description: impl Into<String>) -> Self {
        Self::with_interface(
            description,
            Box::new(ConsoleInterface::default()),
            Printer::terminal(),
        )
    }

    pub(crate) fn with_interface(
        description: impl Into<String>,
        user_interface: Box<dyn UserInterface>,
        printer: Printer,
    ) -> Self {
        Self {
            tree: CommandTree::new(description),
            printer,
            user_interface,
        }
    }

    /// Fix the program name shown in the usage text.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.tree.get_mut(ROOT).name = name.into();
        self
    }

    /// Decide whether a help argument terminates the process (with code `0`) after printing the usage.
    /// Defaults to `true`.
    ///
    /// Sub-commands inherit the setting at the time they are added.
    pub fn exit_on_help(mut self, exit: bool) -> Self {
        self.tree.get_mut(ROOT).exit_on_help = exit;
        self
    }

    /// The id of the root command.
    pub fn root(&self) -> CommandId {
        ROOT
    }

    /// Declare arguments and sub-commands on the root command.
    pub fn root_mut(&mut self) -> CommandBuilder<'_> {
        self.command_mut(ROOT)
    }

    /// Declare arguments and sub-commands on the command `id`.
    ///
    /// `id` must come from this parser.
    pub fn command_mut(&mut self, id: CommandId) -> CommandBuilder<'_> {
        CommandBuilder {
            tree: &mut self.tree,
            id,
        }
    }

    /// Whether the command `id` was selected by the parsed tokens.
    /// The root happens on any (non-empty) input.
    ///
    /// ### Example
    /// ```
    /// # use argtree_builder as argtree;
    /// use argtree::Parser;
    ///
    /// let mut parser = Parser::new("Manages a list.");
    /// let add = parser.root_mut().command("add", "Add to the list.").unwrap();
    /// let remove = parser.root_mut().command("remove", "Remove from the list.").unwrap();
    ///
    /// parser.parse_tokens(&["list", "remove"]).unwrap();
    ///
    /// assert!(!parser.happened(add));
    /// assert!(parser.happened(remove));
    /// ```
    pub fn happened(&self, id: CommandId) -> bool {
        self.tree.get(id).happened
    }

    /// Render the usage text of the deepest selected command (the root before parsing).
    pub fn usage(&self) -> String {
        self.printer.render(&self.tree)
    }

    /// Run the parser against `tokens`, the first of which names the program.
    ///
    /// Parsing happens in phases, each consuming the tokens it matches:
    /// 1. Sub-command selection, by name, from the head of the remaining tokens.
    /// 2. Named arguments of the selected command and its ancestors (`-x`, `--long`, `--long=value`, `-abc`).
    /// Missing optional arguments take their defaults here.
    /// 3. Positional arguments, deepest command first, from the tokens left over.
    ///
    /// Any token surviving all phases is an error.
    /// Parsing an already parsed parser does nothing.
    ///
    /// If a help argument (`-h` or `--help`) matches, the usage text is printed.
    /// Unless disabled via [`Parser::exit_on_help`], the process then exits with code `0`.
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<(), ParseError> {
        if self.tree.get(ROOT).parsed {
            return Ok(());
        }

        let mut tokens = Tokens::new(tokens);
        let help = HelpOutput::new(&self.printer, self.user_interface.as_ref());
        self.tree.parse(ROOT, &mut tokens, &help)?;
        self.tree.parse_positionals(ROOT, &mut tokens)?;

        let leftover = tokens
            .remaining()
            .map(|(_, token)| token.to_string())
            .collect::<Vec<String>>();

        if leftover.is_empty() {
            Ok(())
        } else {
            Err(ParseError::UnknownArguments(leftover))
        }
    }

    /// Run the parser against the process arguments ([`std::env::args`]).
    ///
    /// If an error is encountered, it is printed to stderr and the process exits with code `1` (via [`std::process::exit`]).
    pub fn parse(&mut self) {
        let arguments = env::args().collect::<Vec<String>>();
        let tokens = arguments
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>();

        if let Err(error) = self.parse_tokens(&tokens) {
            self.user_interface.print_error(&error);
            std::process::exit(1);
        }
    }
}

/// Declares the arguments and sub-commands of one command.
///
/// Obtained via [`Parser::root_mut`] or [`Parser::command_mut`].
/// Every declaration is checked immediately; an invalid one is rejected with a [`ConfigError`] and leaves the command unchanged.
///
/// Each argument takes a short name (`""` for none, otherwise one character) and a long name.
/// Names must be unique across the command and its ancestors; each command carries its own `-h, --help`.
pub struct CommandBuilder<'p> {
    tree: &'p mut CommandTree,
    id: CommandId,
}

impl<'p> CommandBuilder<'p> {
    /// The id of this command.
    pub fn id(&self) -> CommandId {
        self.id
    }

    /// Document this command for the usage text.
    /// If repeated, only the final description applies.
    pub fn about(&mut self, description: impl Into<String>) -> &mut Self {
        self.tree.get_mut(self.id).description = description.into();
        self
    }

    /// Leave this command out of its parent's usage text.
    pub fn hidden(&mut self) -> &mut Self {
        self.tree.get_mut(self.id).hidden = true;
        self
    }

    /// See [`Parser::exit_on_help`].
    pub fn exit_on_help(&mut self, exit: bool) -> &mut Self {
        self.tree.get_mut(self.id).exit_on_help = exit;
        self
    }

    /// Add a sub-command, returning its id.
    ///
    /// A command with sub-commands requires one of them to be named, directly after its own name.
    ///
    /// ### Example
    /// ```
    /// # use argtree_builder as argtree;
    /// use argtree::{Config, Parser};
    ///
    /// let mut parser = Parser::new("Does arithmetic.");
    /// let add = parser.root_mut().command("add", "Add two numbers.").unwrap();
    /// let a = parser.command_mut(add).int("", "a", Config::default().positional()).unwrap();
    /// let b = parser.command_mut(add).int("", "b", Config::default().positional()).unwrap();
    ///
    /// parser.parse_tokens(&["calc", "add", "1", "2"]).unwrap();
    ///
    /// assert_eq!(a.get().unwrap() + b.get().unwrap(), 3);
    /// ```
    pub fn command(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<CommandId, ConfigError> {
        self.tree.add_command(self.id, name, description)
    }

    /// A flag: `true` when given, otherwise its default (or `false`).
    pub fn flag(
        &mut self,
        short: &str,
        long: &str,
        config: Config,
    ) -> Result<Handle<bool>, ConfigError> {
        self.add(short, long, ArgumentKind::Flag, Vec::default(), config)
    }

    /// A counter: the number of occurrences (`-vvv` is 3), or an explicit `--name=N`.
    pub fn counter(
        &mut self,
        short: &str,
        long: &str,
        config: Config,
    ) -> Result<Handle<i64>, ConfigError> {
        self.add(short, long, ArgumentKind::Counter, Vec::default(), config)
    }

    /// A single string value.
    pub fn string(
        &mut self,
        short: &str,
        long: &str,
        config: Config,
    ) -> Result<Handle<Option<String>>, ConfigError> {
        self.add(short, long, ArgumentKind::String, Vec::default(), config)
    }

    /// A single base 10 integer value.
    pub fn int(
        &mut self,
        short: &str,
        long: &str,
        config: Config,
    ) -> Result<Handle<Option<i64>>, ConfigError> {
        self.add(short, long, ArgumentKind::Int, Vec::default(), config)
    }

    /// A single floating point value.
    pub fn float(
        &mut self,
        short: &str,
        long: &str,
        config: Config,
    ) -> Result<Handle<Option<f64>>, ConfigError> {
        self.add(short, long, ArgumentKind::Float, Vec::default(), config)
    }

    /// A file, opened during parsing under the configured [`FileMode`](crate::FileMode).
    /// Retrieve it with [`Handle::take`].
    pub fn file(
        &mut self,
        short: &str,
        long: &str,
        config: Config,
    ) -> Result<Handle<Option<File>>, ConfigError> {
        self.add(short, long, ArgumentKind::File, Vec::default(), config)
    }

    /// Strings, one per occurrence (`-s a -s b`).
    pub fn string_list(
        &mut self,
        short: &str,
        long: &str,
        config: Config,
    ) -> Result<Handle<Vec<String>>, ConfigError> {
        self.add(short, long, ArgumentKind::StringList, Vec::default(), config)
    }

    /// Integers, one per occurrence.
    pub fn int_list(
        &mut self,
        short: &str,
        long: &str,
        config: Config,
    ) -> Result<Handle<Vec<i64>>, ConfigError> {
        self.add(short, long, ArgumentKind::IntList, Vec::default(), config)
    }

    /// Floats, one per occurrence.
    pub fn float_list(
        &mut self,
        short: &str,
        long: &str,
        config: Config,
    ) -> Result<Handle<Vec<f64>>, ConfigError> {
        self.add(short, long, ArgumentKind::FloatList, Vec::default(), config)
    }

    /// Files, one per occurrence.
    /// If any one fails to open, those already opened by the same occurrence are closed.
    pub fn file_list(
        &mut self,
        short: &str,
        long: &str,
        config: Config,
    ) -> Result<Handle<Vec<File>>, ConfigError> {
        self.add(short, long, ArgumentKind::FileList, Vec::default(), config)
    }

    /// A string restricted to `choices` (matched exactly, case sensitive).
    ///
    /// ### Example
    /// ```
    /// # use argtree_builder as argtree;
    /// use argtree::{Config, ParseError, Parser};
    ///
    /// let mut parser = Parser::new("Moves.");
    /// let pace = parser
    ///     .root_mut()
    ///     .selector("p", "pace", ["walk", "run"], Config::default().default_string("walk"))
    ///     .unwrap();
    ///
    /// let error = parser.parse_tokens(&["move", "--pace", "fly"]).unwrap_err();
    /// assert!(matches!(error, ParseError::InvalidSelectorValue { .. }));
    /// ```
    pub fn selector<C>(
        &mut self,
        short: &str,
        long: &str,
        choices: impl IntoIterator<Item = C>,
        config: Config,
    ) -> Result<Handle<Option<String>>, ConfigError>
    where
        C: Into<String>,
    {
        let choices = choices.into_iter().map(Into::into).collect();
        self.add(short, long, ArgumentKind::Selector, choices, config)
    }

    fn add<T>(
        &mut self,
        short: &str,
        long: &str,
        kind: ArgumentKind,
        choices: Vec<String>,
        config: Config,
    ) -> Result<Handle<T>, ConfigError> {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Adding {kind} '{long}' to {:?}.", self.id);
        }

        let value = self
            .tree
            .add_argument(self.id, short, long, kind, choices, config)?;
        Ok(Handle::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileMode;
    use crate::parser::util::InMemoryInterface;
    use crate::test::assert_contains;
    use rstest::rstest;
    use std::io::{Read, Write};

    fn parser(description: &str) -> (Parser, InMemoryInterface) {
        let interface = InMemoryInterface::default();
        let parser = Parser::with_interface(
            description,
            Box::new(interface.clone()),
            Printer::new(100),
        )
        .exit_on_help(false);
        (parser, interface)
    }

    #[test]
    fn no_tokens() {
        // Setup
        let (mut parser, interface) = parser("Does nothing.");

        // Execute
        parser.parse_tokens(&[]).unwrap();

        // Verify
        assert!(!parser.happened(parser.root()));
        assert_eq!(interface.consume(), (None, None));
    }

    #[test]
    fn program_only() {
        // Setup
        let (mut parser, _) = parser("Does nothing.");

        // Execute
        parser.parse_tokens(&["program"]).unwrap();

        // Verify
        assert!(parser.happened(parser.root()));
        assert_contains!(parser.usage(), "usage: program [-h]");
    }

    #[test]
    fn named_program() {
        // Setup
        let (parser, _) = parser("Does nothing.");
        let mut parser = parser.name("fixed");

        // Execute
        parser.parse_tokens(&["/usr/bin/program"]).unwrap();

        // Verify
        assert_contains!(parser.usage(), "usage: fixed [-h]");
    }

    #[rstest]
    #[case(vec!["prog", "-h"])]
    #[case(vec!["prog", "--help"])]
    fn help(#[case] tokens: Vec<&str>) {
        // Setup
        let (mut parser, interface) = parser("Greets someone.");
        parser
            .root_mut()
            .string("n", "name", Config::default().help("Who to greet."))
            .unwrap();

        // Execute
        parser.parse_tokens(&tokens).unwrap();

        // Verify
        assert_eq!(
            interface.consume_message(),
            r#"usage: prog [-h] [-n NAME]

Greets someone.

Arguments:
  -h, --help  Show this help message and exit.
  -n, --name  Who to greet."#
        );
    }

    #[test]
    fn duplicate_long_name() {
        // Setup
        let (mut parser, _) = parser("");
        parser.root_mut().flag("a", "all", Config::default()).unwrap();

        // Execute
        let result = parser.root_mut().int("b", "all", Config::default());

        // Verify
        assert_matches!(result, Err(ConfigError::DuplicateLongName(name)) if name == "all");
    }

    #[test]
    fn duplicate_across_commands() {
        // Setup
        let (mut parser, _) = parser("");
        parser.root_mut().flag("a", "all", Config::default()).unwrap();
        let sub = parser.root_mut().command("sub", "").unwrap();

        // Execute
        let short = parser.command_mut(sub).flag("a", "any", Config::default());
        let long = parser.command_mut(sub).flag("", "all", Config::default());
        let fresh = parser.command_mut(sub).flag("", "verbose", Config::default());

        // Verify
        assert_matches!(short, Err(ConfigError::DuplicateShortName('a')));
        assert_matches!(long, Err(ConfigError::DuplicateLongName(_)));
        assert_matches!(fresh, Ok(_));
    }

    #[rstest]
    #[case(ConfigError::ShortNameTooLong("ab".to_string()), "ab", "name")]
    #[case(ConfigError::LongNameRequired("n".to_string()), "n", "")]
    fn invalid_names(
        #[case] expected: ConfigError,
        #[case] short: &str,
        #[case] long: &str,
    ) {
        // Setup
        let (mut parser, _) = parser("");

        // Execute
        let result = parser.root_mut().string(short, long, Config::default());

        // Verify
        assert_eq!(result.unwrap_err(), expected);
    }

    #[test]
    fn invalid_positional() {
        // Setup
        let (mut parser, _) = parser("");

        // Execute
        let flag = parser
            .root_mut()
            .flag("", "all", Config::default().positional());
        let list = parser
            .root_mut()
            .int_list("", "items", Config::default().positional());

        // Verify
        assert_matches!(
            flag,
            Err(ConfigError::InvalidPositionalType { kind: ArgumentKind::Flag, .. })
        );
        assert_matches!(
            list,
            Err(ConfigError::InvalidPositionalType { kind: ArgumentKind::IntList, .. })
        );
    }

    #[test]
    fn invalid_selector() {
        // Setup
        let (mut parser, _) = parser("");

        // Execute
        let empty = parser
            .root_mut()
            .selector("", "a", Vec::<String>::default(), Config::default());
        let bad_default = parser.root_mut().selector(
            "",
            "b",
            ["x", "y"],
            Config::default().default_string("z"),
        );

        // Verify
        assert_matches!(empty, Err(ConfigError::InvalidSelector { .. }));
        assert_matches!(bad_default, Err(ConfigError::InvalidSelector { .. }));
    }

    #[test]
    fn invalid_command() {
        // Setup
        let (mut parser, _) = parser("");
        parser.root_mut().command("sub", "").unwrap();

        // Execute
        let unnamed = parser.root_mut().command("", "");
        let duplicate = parser.root_mut().command("sub", "again");

        // Verify
        assert_eq!(unnamed, Err(ConfigError::CommandNameRequired));
        assert_eq!(duplicate, Err(ConfigError::DuplicateCommand("sub".to_string())));
    }

    #[rstest]
    #[case(vec!["prog", "--name", "X"])]
    #[case(vec!["prog", "--name=X"])]
    fn string_value(#[case] tokens: Vec<&str>) {
        // Setup
        let (mut parser, _) = parser("");
        let name = parser.root_mut().string("", "name", Config::default()).unwrap();

        // Execute
        parser.parse_tokens(&tokens).unwrap();

        // Verify
        assert_eq!(name.get(), Some("X".to_string()));
    }

    #[test]
    fn parse_twice() {
        // Setup
        let (mut parser, _) = parser("");
        let items = parser
            .root_mut()
            .string_list("i", "item", Config::default())
            .unwrap();
        parser.parse_tokens(&["prog", "-i", "a"]).unwrap();

        // Execute
        parser.parse_tokens(&["prog", "-i", "b"]).unwrap();

        // Verify
        assert_eq!(items.get(), vec!["a".to_string()]);
    }

    #[test]
    fn flags_and_counter() {
        // Setup
        let (mut parser, _) = parser("");
        let a = parser.root_mut().flag("a", "alpha", Config::default()).unwrap();
        let b = parser.root_mut().flag("b", "bravo", Config::default()).unwrap();
        let c = parser.root_mut().flag("c", "charlie", Config::default()).unwrap();
        let v = parser.root_mut().counter("v", "verbose", Config::default()).unwrap();

        // Execute
        parser.parse_tokens(&["prog", "-abc", "-vvv"]).unwrap();

        // Verify
        assert!(a.get());
        assert!(b.get());
        assert!(c.get());
        assert_eq!(v.get(), 3);
    }

    #[test]
    fn sub_commands() {
        // Setup
        let (mut parser, _) = parser("");
        let a = parser.root_mut().command("a", "").unwrap();
        let b = parser.root_mut().command("b", "").unwrap();
        let a_x = parser.command_mut(a).int("", "x", Config::default()).unwrap();
        let b_x = parser.command_mut(b).int("", "x", Config::default()).unwrap();

        // Execute
        parser.parse_tokens(&["prog", "b", "--x", "1"]).unwrap();

        // Verify
        assert!(!parser.happened(a));
        assert!(parser.happened(b));
        assert_eq!(a_x.get(), None);
        assert_eq!(b_x.get(), Some(1));
        assert_contains!(parser.usage(), "usage: prog b [-h] [--x X]");
    }

    #[test]
    fn sub_command_required() {
        // Setup
        let (mut parser, _) = parser("");
        parser.root_mut().command("a", "").unwrap();

        // Execute
        let result = parser.parse_tokens(&["prog"]);

        // Verify
        assert_matches!(result, Err(ParseError::SubCommandRequired(name)) if name == "prog");
    }

    #[test]
    fn hidden_command() {
        // Setup
        let (mut parser, _) = parser("");
        let secret = parser.root_mut().command("secret", "Shh.").unwrap();
        parser.command_mut(secret).hidden().about("Still shh.");
        parser.root_mut().command("public", "Hello.").unwrap();

        // Execute
        let usage = parser.usage();

        // Verify
        assert!(!usage.contains("secret"), "{usage}");
        assert_contains!(usage, "public");
    }

    #[test]
    fn required_missing() {
        // Setup
        let (mut parser, _) = parser("");
        let name = parser
            .root_mut()
            .string("", "name", Config::default().required())
            .unwrap();

        // Execute
        let result = parser.parse_tokens(&["prog"]);

        // Verify
        assert_matches!(result, Err(ParseError::RequiredArgumentMissing(n)) if n == "name");
        assert_eq!(name.get(), None);
    }

    #[rstest]
    #[case("fast", Ok(Some("fast".to_string())))]
    #[case("slow", Ok(Some("slow".to_string())))]
    #[case("Fast", Err(()))]
    #[case("medium", Err(()))]
    fn selector(#[case] token: &str, #[case] expected: Result<Option<String>, ()>) {
        // Setup
        let (mut parser, _) = parser("");
        let pace = parser
            .root_mut()
            .selector("p", "pace", ["fast", "slow"], Config::default())
            .unwrap();

        // Execute
        let result = parser.parse_tokens(&["prog", "-p", token]);

        // Verify
        match expected {
            Ok(value) => {
                result.unwrap();
                assert_eq!(pace.get(), value);
            }
            Err(()) => {
                assert_matches!(
                    result,
                    Err(ParseError::InvalidSelectorValue { token: t, .. }) if t == token
                );
                assert_eq!(pace.get(), None);
            }
        }
    }

    #[test]
    fn unknown_arguments() {
        // Setup
        let (mut parser, _) = parser("");
        parser.root_mut().flag("v", "verbose", Config::default()).unwrap();

        // Execute
        let result = parser.parse_tokens(&["prog", "-v", "extra", "--more"]);

        // Verify
        assert_matches!(
            result,
            Err(ParseError::UnknownArguments(tokens)) if tokens == vec!["extra", "--more"]
        );
    }

    #[test]
    fn files() {
        // Setup
        let directory = tempfile::tempdir().unwrap();
        let input = directory.path().join("input.txt");
        std::fs::write(&input, "hello").unwrap();
        let output = directory.path().join("output.txt");
        let input = input.to_str().unwrap();
        let output = output.to_str().unwrap();

        let (mut parser, _) = parser("");
        let source = parser.root_mut().file("i", "input", Config::default()).unwrap();
        let target = parser
            .root_mut()
            .file("o", "output", Config::default().file_mode(FileMode::Write))
            .unwrap();

        // Execute
        parser
            .parse_tokens(&["prog", "-i", input, "--output", output])
            .unwrap();

        // Verify
        let mut content = String::default();
        source.take().unwrap().read_to_string(&mut content).unwrap();
        assert_eq!(content, "hello");
        target.take().unwrap().write_all(b"bye").unwrap();
        assert_eq!(std::fs::read_to_string(output).unwrap(), "bye");
    }

    #[test]
    fn file_missing() {
        // Setup
        let directory = tempfile::tempdir().unwrap();
        let missing = directory.path().join("missing.txt");
        let (mut parser, _) = parser("");
        let source = parser.root_mut().file("", "input", Config::default()).unwrap();

        // Execute
        let result = parser.parse_tokens(&["prog", "--input", missing.to_str().unwrap()]);

        // Verify
        assert_matches!(result, Err(ParseError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound);
        assert!(source.take().is_none());
    }

    #[test]
    fn file_list_default_failure() {
        // Setup
        let directory = tempfile::tempdir().unwrap();
        let present = directory.path().join("present.txt");
        std::fs::write(&present, "").unwrap();
        let missing = directory.path().join("missing.txt");
        let (mut parser, _) = parser("");
        let files = parser
            .root_mut()
            .file_list(
                "",
                "inputs",
                Config::default().default_paths(vec![
                    present.to_str().unwrap(),
                    missing.to_str().unwrap(),
                ]),
            )
            .unwrap();

        // Execute
        let result = parser.parse_tokens(&["prog"]);

        // Verify
        assert_matches!(result, Err(ParseError::Io(_)));
        assert!(files.take().is_empty());
    }
}
