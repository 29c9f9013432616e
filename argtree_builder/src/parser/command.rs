use crate::api::{Config, ValueCell};
use crate::constant::*;
use crate::matcher::Argument;
use crate::model::ArgumentKind;
use crate::parser::ConfigError;

/// Identifies a command (the root or a sub-command) of a [`Parser`](crate::Parser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandId(pub(crate) usize);

pub(crate) const ROOT: CommandId = CommandId(0);

pub(crate) struct Command {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) arguments: Vec<Argument>,
    pub(crate) children: Vec<CommandId>,
    pub(crate) parent: Option<CommandId>,
    pub(crate) parsed: bool,
    pub(crate) happened: bool,
    pub(crate) exit_on_help: bool,
    pub(crate) hidden: bool,
}

impl Command {
    fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parent: Option<CommandId>,
        exit_on_help: bool,
    ) -> Self {
        let mut command = Self {
            name: name.into(),
            description: description.into(),
            arguments: Vec::default(),
            children: Vec::default(),
            parent,
            parsed: false,
            happened: false,
            exit_on_help,
            hidden: false,
        };
        command.arguments.push(Argument::new(
            Some(HELP_SHORT),
            HELP_NAME,
            ArgumentKind::Help,
            Vec::default(),
            Config::default().help(HELP_MESSAGE),
        ));
        command
    }
}

/// The commands of a parser, stored flat and linked by [`CommandId`].
///
/// The root always sits at [`ROOT`].
/// Children refer to their parent by id, so nothing here is reference counted.
pub(crate) struct CommandTree {
    commands: Vec<Command>,
}

impl CommandTree {
    pub(crate) fn new(description: impl Into<String>) -> Self {
        Self {
            commands: vec![Command::new("", description, None, true)],
        }
    }

    pub(crate) fn get(&self, id: CommandId) -> &Command {
        &self.commands[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: CommandId) -> &mut Command {
        &mut self.commands[id.0]
    }

    /// The command ids from the root down to `id` (inclusive).
    pub(crate) fn path(&self, id: CommandId) -> Vec<CommandId> {
        let mut path = vec![id];
        let mut current = id;

        while let Some(parent) = self.get(current).parent {
            path.push(parent);
            current = parent;
        }

        path.reverse();
        path
    }

    /// The deepest command along the chain of happened commands (the root if none happened).
    pub(crate) fn deepest_happened(&self) -> CommandId {
        let mut current = ROOT;

        while let Some(child) = self
            .get(current)
            .children
            .iter()
            .find(|c| self.get(**c).happened)
        {
            current = *child;
        }

        current
    }

    pub(crate) fn add_command(
        &mut self,
        parent: CommandId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<CommandId, ConfigError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ConfigError::CommandNameRequired);
        }

        if self
            .get(parent)
            .children
            .iter()
            .any(|c| self.get(*c).name == name)
        {
            return Err(ConfigError::DuplicateCommand(name));
        }

        let id = CommandId(self.commands.len());
        let exit_on_help = self.get(parent).exit_on_help;
        self.commands
            .push(Command::new(name, description, Some(parent), exit_on_help));
        self.get_mut(parent).children.push(id);
        Ok(id)
    }

    /// Register an argument on the command `id`, returning its value cell.
    ///
    /// Names must be unique across the command and its ancestors (help arguments aside).
    pub(crate) fn add_argument(
        &mut self,
        id: CommandId,
        short: &str,
        long: &str,
        kind: ArgumentKind,
        choices: Vec<String>,
        config: Config,
    ) -> Result<ValueCell, ConfigError> {
        let mut chars = short.chars();
        let short = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(c), None) if c == '-' || c == '=' || c.is_whitespace() => {
                return Err(ConfigError::InvalidShortName(c));
            }
            (Some(c), None) => Some(c),
            (Some(_), Some(_)) => return Err(ConfigError::ShortNameTooLong(short.to_string())),
        };
        let short = if config.positional { None } else { short };

        let long = if !long.is_empty() {
            long.to_string()
        } else if config.positional {
            let ordinal = self
                .get(id)
                .arguments
                .iter()
                .filter(|a| a.is_positional())
                .count();
            format!("positional{}", ordinal + 1)
        } else {
            return Err(ConfigError::LongNameRequired(
                short.map(String::from).unwrap_or_default(),
            ));
        };

        if config.positional && !kind.is_positionable() {
            return Err(ConfigError::InvalidPositionalType { name: long, kind });
        }

        if kind == ArgumentKind::Selector {
            if choices.is_empty() {
                return Err(ConfigError::InvalidSelector {
                    name: long,
                    message: "at least one choice is required".to_string(),
                });
            }

            if let Some(default) = &config.defaults.string {
                if !choices.contains(default) {
                    return Err(ConfigError::InvalidSelector {
                        message: format!("the default '{default}' is not a choice"),
                        name: long,
                    });
                }
            }
        }

        if kind != ArgumentKind::Help {
            for ancestor in self.path(id) {
                for existing in &self.get(ancestor).arguments {
                    if existing.kind() == ArgumentKind::Help {
                        continue;
                    }

                    if existing.long() == long {
                        return Err(ConfigError::DuplicateLongName(long));
                    }

                    if let (Some(a), Some(b)) = (existing.short(), short) {
                        if a == b {
                            return Err(ConfigError::DuplicateShortName(b));
                        }
                    }
                }
            }
        }

        let argument = Argument::new(short, long, kind, choices, config);
        let value = argument.value();
        self.get_mut(id).arguments.push(argument);
        Ok(value)
    }
}
