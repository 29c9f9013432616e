pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_MESSAGE: &str = "Show this help message and exit.";
pub(crate) const COMMAND_PLACEHOLDER: &str = "<command>";
// Usage text never grows wider than this, even on a wide terminal.
pub(crate) const MAX_WIDTH: usize = 100;
