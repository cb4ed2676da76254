// validator.rs

use crate::base::Base;
use crate::error::ConvertError;

/// Longest digit string accepted, in characters.
pub const MAX_LENGTH: usize = 20;

/// Classify `text` as a number in `base`. The first failing rule wins:
/// empty, too long, unsupported base, illegal digit.
pub fn validate(text: &str, base: u32) -> Result<Base, ConvertError> {
    if text.is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    let len = text.chars().count();
    if len > MAX_LENGTH {
        return Err(ConvertError::InputTooLong { len, max: MAX_LENGTH });
    }
    let base = Base::try_from(base)?;
    if let Some(ch) = text.chars().find(|&c| base.digit_value(c).is_none()) {
        return Err(ConvertError::IllegalDigit { ch: ch.to_ascii_uppercase(), base });
    }
    Ok(base)
}
