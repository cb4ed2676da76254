// converter.rs

use std::fmt;

use tracing::debug;

use crate::base::Base;
use crate::codec::{decode, encode};
use crate::error::ConvertError;
use crate::history::{ConversionRecord, Recorder};
use crate::validator::validate;

/// Result of a successful [`convert`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Conversion {
    pub input: String,
    pub from: Base,
    pub result: String,
    pub to: Base,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) = {} ({})", self.input, self.from, self.result, self.to)
    }
}

/// Convert `text` from one base to another and log the result to `history`.
///
/// Surrounding whitespace is dropped and the digits are upper-cased before
/// validation. Validator errors are passed through unchanged; on any error
/// `history` is left alone.
pub fn convert<R: Recorder + ?Sized>(
    text: &str,
    from: Option<u32>,
    to: Option<u32>,
    history: &mut R,
) -> Result<Conversion, ConvertError> {
    let (Some(from), Some(to)) = (from, to) else {
        return Err(ConvertError::BasesNotSelected);
    };
    let input = text.trim().to_uppercase();
    let from = validate(&input, from)?;
    let to = Base::try_from(to)?;

    let magnitude = decode(&input, from).ok_or(ConvertError::DecodeFailure)?;
    let result = encode(magnitude, to);
    debug!(%input, %from, %to, %result, "converted");

    history.record(ConversionRecord::new(input.clone(), from, result.clone(), to));
    Ok(Conversion { input, from, result, to })
}
