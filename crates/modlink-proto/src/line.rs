//! Zero-copy parsing of chat command lines.
//!
//! The wire shape is `<prefix><name> <arg1> <arg2> ...`. The name must
//! immediately follow the prefix with no separating space, and tokens are
//! split on single spaces: consecutive spaces yield empty argument tokens,
//! exactly as the host's chat box delivers them. There is no quoting.

use smallvec::SmallVec;

/// A parsed chat command line, borrowing from the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine<'a> {
    /// The command name (the leading token with the prefix stripped).
    pub name: &'a str,
    /// The remaining space-separated tokens, in order.
    ///
    /// Empty tokens from consecutive spaces are preserved; rejoining with
    /// single spaces reconstructs the argument portion of the line exactly.
    pub args: SmallVec<[&'a str; 4]>,
}

impl<'a> CommandLine<'a> {
    /// Parse `input` as a command line under the given prefix.
    ///
    /// Returns `None` when the line is not a command invocation: the prefix
    /// is empty, the line does not start with the prefix, or the prefix is
    /// immediately followed by a space or end of line (`"/ give 10"` is not
    /// a command — the name must hug the prefix).
    pub fn parse(input: &'a str, prefix: &str) -> Option<CommandLine<'a>> {
        if prefix.is_empty() {
            return None;
        }
        let rest = input.strip_prefix(prefix)?;

        let mut tokens = rest.split(' ');
        let name = tokens.next().unwrap_or("");
        if name.is_empty() {
            return None;
        }

        Some(CommandLine {
            name,
            args: tokens.collect(),
        })
    }

    /// Rejoin the argument tokens into a single string.
    ///
    /// Convenience for handlers whose final argument is free text (item
    /// names with spaces, messages).
    pub fn join_args(&self) -> String {
        self.args.join(" ")
    }
}
