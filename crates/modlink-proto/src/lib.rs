//! # modlink-proto
//!
//! Parsing for the modlink chat-command text protocol.
//!
//! A chat line is a command invocation when it begins with a configurable
//! prefix: `<prefix><name> <arg1> <arg2> ...`. Tokenization is plain
//! single-space splitting with no quoting or escaping; handlers that want a
//! multi-word argument rejoin the remaining tokens themselves.
//!
//! ## Quick Start
//!
//! ```rust
//! use modlink_proto::CommandLine;
//!
//! let line = CommandLine::parse("/give 10 apples", "/").expect("command line");
//! assert_eq!(line.name, "give");
//! assert_eq!(line.args.as_slice(), &["10", "apples"]);
//!
//! // Ordinary chat is not a command.
//! assert!(CommandLine::parse("hello there", "/").is_none());
//! ```
//!
//! Parsing is zero-copy: the command name and every argument borrow from the
//! input line.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
pub mod line;
pub mod name;

pub use self::error::PrefixError;
pub use self::line::CommandLine;
pub use self::name::CommandNameExt;
