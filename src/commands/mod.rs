//! Command parsing, validation and dispatch.
//!
//! Raw lines go through the tokenizer, are routed by trigger or alias, and
//! reach handlers together with per-flag validation verdicts.

pub mod command;
pub mod defaults;
pub mod flag;
pub mod help;
pub mod response;
pub mod router;
pub mod suggest;
pub mod tokenizer;
pub mod validator;

pub use command::{Command, InputCommand};
pub use flag::{Flag, Flags, InputFlag, InputFlags, PossibleValues, Prefix, ValidationStatus};
pub use response::{DataBridge, Response, ResponseStatus};
pub use router::{Handler, Router};
pub use suggest::suggest;
pub use tokenizer::parse;
pub use validator::validate_routers;
