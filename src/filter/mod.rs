//! Event flag parsing
//!
//! This module turns the text of repeated `--events` flags into structured
//! [`FilterDescriptor`]s for a downstream policy engine. Evaluation of the
//! resulting filters against events happens elsewhere.
//!
//! # Syntax
//!
//! ```text
//! eventSpec := eventName
//!            | "-" eventName                     exclude
//!            | eventName "." category ["." field] [operator values]
//! category  := "scope" | "data" | "retval"
//! operator  := "=" | "!=" | "<" | ">" | "<=" | ">="
//! ```
//!
//! Plain names may be joined with commas (`execve,open`). Tokens must not
//! carry surrounding whitespace; values after the operator are kept as
//! opaque text.
//!
//! # Examples
//!
//! ```text
//! execve,open                              # two events
//! fs -open,-openat                         # a set minus two events
//! openat.scope.processName=ls              # scope filter
//! security_file_open.scope.container       # scope filter without value
//! openat.data.pathname!=/tmp/1,/bin/ls     # data filter with value list
//! open.retval>=0                           # return value filter
//! ```

pub mod descriptor;
pub mod error;
pub mod expression;
pub mod help;
pub mod operator;
pub mod parser;
pub mod validate;

pub use descriptor::{FilterDescriptor, OptionCategory};
pub use error::FlagParseError;
pub use expression::{FilterParts, split_filter_expression};
pub use help::events_help;
pub use operator::{Operator, OperatorParts, extract_operator_and_values, find_operator};
pub use parser::parse_event_flag;
