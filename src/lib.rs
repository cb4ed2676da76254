//! Number base conversion between bases 2, 8, 10 and 16, with a short
//! history of recent conversions.
//!
//! The core is [`validate`], [`encode`]/[`decode`], [`convert`] and
//! [`History`]. The [`cli`], [`commands`] and [`repl`] modules put a command
//! line in front of it.

pub mod base;
pub mod cli;
pub mod codec;
pub mod commands;
pub mod completion;
pub mod converter;
pub mod error;
pub mod history;
pub mod parser;
pub mod repl;
pub mod util;
pub mod validator;

pub use base::{Base, DIGITS, SUPPORTED_BASES};
pub use codec::{decode, encode};
pub use converter::{convert, Conversion};
pub use error::{CommandError, ConvertError};
pub use history::{ConversionRecord, History, Recorder, HISTORY_CAPACITY};
pub use validator::{validate, MAX_LENGTH};
