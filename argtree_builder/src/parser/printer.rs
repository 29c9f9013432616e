use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::matcher::Argument;
use crate::model::ArgumentKind;
use crate::parser::interface::LineWrapper;
use crate::parser::{CommandId, CommandTree};

const USAGE_PREFIX: &str = "usage:";
const SECTION_INDENT: usize = 2;
// Minimum gap between the name column and its help text.
const COLUMN_GAP: usize = 2;

/// Renders the usage text of a command tree.
#[derive(Debug, Clone)]
pub(crate) struct Printer {
    max_width: usize,
}

impl Printer {
    pub(crate) fn new(max_width: usize) -> Self {
        Self { max_width }
    }

    /// A printer as wide as the terminal, but never wider than `MAX_WIDTH`.
    pub(crate) fn terminal() -> Self {
        let max_width = match terminal_size() {
            Some((Width(columns), _)) => std::cmp::min(columns as usize, MAX_WIDTH),
            None => MAX_WIDTH,
        };

        Self::new(max_width)
    }

    /// Render the usage of the deepest command that happened (the root if none did).
    pub(crate) fn render(&self, tree: &CommandTree) -> String {
        self.render_command(tree, tree.deepest_happened())
    }

    pub(crate) fn render_command(&self, tree: &CommandTree, id: CommandId) -> String {
        let path = tree.path(id);
        let command = tree.get(id);
        let arguments = visible_arguments(tree, &path);
        let mut sections = Vec::default();

        let chain = path
            .iter()
            .map(|c| tree.get(*c).name.as_str())
            .filter(|name| !name.is_empty())
            .collect::<Vec<&str>>()
            .join(" ");
        let start = if chain.is_empty() {
            USAGE_PREFIX.to_string()
        } else {
            format!("{USAGE_PREFIX} {chain}")
        };
        let mut usage = LineWrapper::new(self.max_width, start.clone(), start.len() + 1);

        for argument in arguments.iter().filter(|a| !a.is_positional()) {
            usage.push(&summary(argument));
        }

        for argument in arguments.iter().filter(|a| a.is_positional()) {
            usage.push(&summary(argument));
        }

        if !command.children.is_empty() {
            usage.push(COMMAND_PLACEHOLDER);
        }

        sections.push(usage.finish().join("\n"));

        if !command.description.trim().is_empty() {
            let mut description = LineWrapper::new(self.max_width, "", 0);
            description.push(&command.description);
            sections.push(description.finish().join("\n"));
        }

        let children = command
            .children
            .iter()
            .map(|c| tree.get(*c))
            .filter(|c| !c.hidden)
            .map(|c| (c.name.clone(), c.description.clone()))
            .collect::<Vec<(String, String)>>();

        if !children.is_empty() {
            sections.push(self.columns("Commands:", children));
        }

        if !arguments.is_empty() {
            let rows = arguments
                .iter()
                .map(|a| (column_name(a), column_help(a)))
                .collect();
            sections.push(self.columns("Arguments:", rows));
        }

        sections.join("\n\n")
    }

    fn columns(&self, title: &str, rows: Vec<(String, String)>) -> String {
        let width = rows
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or_default();
        let mut lines = vec![title.to_string()];

        for (name, help) in rows {
            let start = format!(
                "{indent}{name:<width$}{gap}",
                indent = " ".repeat(SECTION_INDENT),
                gap = " ".repeat(COLUMN_GAP - 1),
            );
            let indent = SECTION_INDENT + width + COLUMN_GAP;
            let mut wrapper = LineWrapper::new(self.max_width, start, indent);
            wrapper.push(&help);
            lines.extend(
                wrapper
                    .finish()
                    .into_iter()
                    .map(|line| line.trim_end().to_string()),
            );
        }

        lines.join("\n")
    }
}

// Every visible argument along the path, root first; only the first help argument is kept.
fn visible_arguments<'a>(tree: &'a CommandTree, path: &[CommandId]) -> Vec<&'a Argument> {
    let mut seen_help = false;
    let mut arguments = Vec::default();

    for id in path {
        for argument in &tree.get(*id).arguments {
            if argument.is_hidden() {
                continue;
            }

            if argument.kind() == ArgumentKind::Help {
                if seen_help {
                    continue;
                }

                seen_help = true;
            }

            arguments.push(argument);
        }
    }

    arguments
}

fn placeholder(argument: &Argument) -> String {
    if argument.kind() == ArgumentKind::Selector {
        format!("{{{}}}", argument.choices().join(","))
    } else {
        argument.long().to_ascii_uppercase().replace('-', "_")
    }
}

fn flag_name(argument: &Argument) -> String {
    match argument.short() {
        Some(short) => format!("-{short}"),
        None => format!("--{}", argument.long()),
    }
}

// The fragment of an argument in the usage line.
fn summary(argument: &Argument) -> String {
    if argument.is_positional() {
        return format!("[{}]", placeholder(argument));
    }

    let inner = match argument.width() {
        1 => flag_name(argument),
        _ if argument.kind().is_list() => {
            format!("{} {} ...", flag_name(argument), placeholder(argument))
        }
        _ => format!("{} {}", flag_name(argument), placeholder(argument)),
    };

    if argument.is_required() {
        inner
    } else {
        format!("[{inner}]")
    }
}

fn column_name(argument: &Argument) -> String {
    if argument.is_positional() {
        return placeholder(argument);
    }

    match argument.short() {
        Some(short) => format!("-{short}, --{}", argument.long()),
        None => format!("    --{}", argument.long()),
    }
}

fn column_help(argument: &Argument) -> String {
    let config = argument.config();
    let help = config.help.clone().unwrap_or_default();

    match config.defaults.render(argument.kind()) {
        Some(default) if !argument.is_required() => {
            format!("{help} (default: {default})").trim().to_string()
        }
        _ => help,
    }
}
