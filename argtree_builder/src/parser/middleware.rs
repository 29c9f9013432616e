use crate::matcher::Tokens;
use crate::model::ArgumentKind;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;
use crate::parser::{CommandId, CommandTree, ParseError};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Where help output goes when a help argument matches.
pub(crate) struct HelpOutput<'a> {
    printer: &'a Printer,
    user_interface: &'a dyn UserInterface,
}

impl<'a> HelpOutput<'a> {
    pub(crate) fn new(printer: &'a Printer, user_interface: &'a dyn UserInterface) -> Self {
        Self {
            printer,
            user_interface,
        }
    }

    fn show(&self, tree: &CommandTree, owner: CommandId) {
        self.user_interface.print(self.printer.render(tree));

        if tree.get(owner).exit_on_help {
            std::process::exit(0);
        }
    }
}

// How one token lines up against one argument.
enum Occurrence {
    Miss,
    Hit { count: usize, raw: Vec<String> },
}

impl CommandTree {
    /// Select the command chain named by the tokens, then match every named argument of the
    /// deepest command (ancestors included).
    ///
    /// Every matched token is consumed, so the later phases only see what remains.
    /// Repeat calls on a parsed command do nothing.
    pub(crate) fn parse(
        &mut self,
        id: CommandId,
        tokens: &mut Tokens,
        help: &HelpOutput,
    ) -> Result<(), ParseError> {
        if self.get(id).parsed {
            return Ok(());
        }

        let (position, head) = match tokens.head() {
            Some((position, head)) => (position, head.to_string()),
            None => return Ok(()),
        };

        let command = self.get_mut(id);

        if command.parent.is_some() && command.name != head {
            return Ok(());
        }

        if command.name.is_empty() {
            command.name = head;
        }

        command.happened = true;
        command.parsed = true;
        tokens.consume(position);

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Command '{}' happened.", command.name);
        }

        let children = command.children.clone();

        if !children.is_empty() {
            if !tokens.is_exhausted() {
                for child in children {
                    self.parse(child, tokens, help)?;

                    if self.get(child).happened {
                        return Ok(());
                    }
                }

                // `prog -h` still works on a command which needs a sub-command.
                for owner in self.path(id) {
                    self.match_named(owner, 0, tokens, help)?;
                }
            }

            return Err(ParseError::SubCommandRequired(self.get(id).name.clone()));
        }

        for owner in self.path(id) {
            for index in 0..self.get(owner).arguments.len() {
                if self.get(owner).arguments[index].is_positional() {
                    continue;
                }

                self.match_named(owner, index, tokens, help)?;
                let argument = &mut self.get_mut(owner).arguments[index];

                if argument.is_parsed() {
                    continue;
                }

                if argument.is_required() {
                    return Err(ParseError::RequiredArgumentMissing(
                        argument.long().to_string(),
                    ));
                }

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Defaulting {argument:?}.");
                }

                argument.set_default()?;
            }
        }

        Ok(())
    }

    /// Bind the positional arguments of the active path, deepest command first, to the surviving tokens.
    pub(crate) fn parse_positionals(
        &mut self,
        id: CommandId,
        tokens: &mut Tokens,
    ) -> Result<(), ParseError> {
        let happened = self
            .get(id)
            .children
            .iter()
            .copied()
            .find(|child| self.get(*child).happened);

        if let Some(child) = happened {
            self.parse_positionals(child, tokens)?;
        }

        for argument in self.get_mut(id).arguments.iter_mut() {
            if !argument.is_positional() || argument.is_parsed() {
                continue;
            }

            match tokens.head() {
                Some((position, token)) => {
                    let raw = vec![token.to_string()];

                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Binding {argument:?} to '{}'.", raw[0]);
                    }

                    argument.parse_value(&raw, 1)?;
                    argument.reduce(position, tokens);
                }
                None => argument.set_default()?,
            }
        }

        Ok(())
    }

    // Scan the remaining tokens left to right for one named argument.
    fn match_named(
        &mut self,
        owner: CommandId,
        index: usize,
        tokens: &mut Tokens,
        help: &HelpOutput,
    ) -> Result<(), ParseError> {
        let positions = tokens
            .remaining()
            .map(|(position, _)| position)
            .collect::<Vec<usize>>();

        for position in positions {
            let token = match tokens.get(position) {
                Some(token) => token.to_string(),
                // Consumed by an earlier occurrence of this scan.
                None => continue,
            };
            let argument = &mut self.get_mut(owner).arguments[index];

            let occurrence = match token.split_once('=') {
                Some((name, value)) if token.starts_with('-') => {
                    if argument.check(name)? == 0 {
                        Occurrence::Miss
                    } else if value.is_empty() {
                        return Err(ParseError::NotEnoughArguments(
                            argument.long().to_string(),
                        ));
                    } else {
                        argument.set_equals(true);
                        Occurrence::Hit {
                            count: 1,
                            raw: vec![value.to_string()],
                        }
                    }
                }
                _ => match argument.check(&token)? {
                    0 => Occurrence::Miss,
                    count => {
                        argument.set_equals(false);
                        let raw = (1..argument.width())
                            .map(|offset| tokens.get(position + offset).map(String::from))
                            .collect::<Option<Vec<String>>>()
                            .ok_or_else(|| {
                                ParseError::NotEnoughArguments(argument.long().to_string())
                            })?;
                        Occurrence::Hit { count, raw }
                    }
                },
            };

            if let Occurrence::Hit { count, raw } = occurrence {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Matched {argument:?} at {position} ({count}x).");
                }

                argument.parse_value(&raw, count)?;
                argument.reduce(position, tokens);

                if argument.kind() == ArgumentKind::Help {
                    help.show(self, owner);
                }
            }
        }

        Ok(())
    }
}
