// completion.rs

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

use crate::base::SUPPORTED_BASES;
use crate::parser::KEYWORDS;

/// Completes command keywords in the first word and base values after it.
#[derive(Default)]
pub struct ConverterHelper;

impl ConverterHelper {
    pub fn new() -> Self {
        Self
    }

    /// Candidates for the word ending at `pos`, and where that word starts.
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let before = &line[..pos];
        let start = before
            .rfind(char::is_whitespace)
            .map(|i| i + before[i..].chars().next().map_or(1, char::len_utf8))
            .unwrap_or(0);
        let word = &before[start..];
        let first_word = before[..start].trim().is_empty();

        let mut names: Vec<String> = if first_word {
            let lower = word.to_ascii_lowercase();
            KEYWORDS
                .iter()
                .filter(|k| k.starts_with(&lower))
                .map(|k| k.to_string())
                .collect()
        } else {
            SUPPORTED_BASES
                .iter()
                .map(u32::to_string)
                .filter(|b| b.starts_with(word))
                .collect()
        };
        names.sort();
        names.dedup();
        (start, names)
    }
}

impl Completer for ConverterHelper {
    type Candidate = Pair;
    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let (start, names) = self.candidates(line, pos);
        let completions = names
            .into_iter()
            .map(|n| Pair { replacement: format!("{} ", n), display: n })
            .collect();
        Ok((start, completions))
    }
}

impl Hinter for ConverterHelper {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for ConverterHelper {}

impl Validator for ConverterHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for ConverterHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_keywords_in_first_word() {
        let h = ConverterHelper::new();
        assert_eq!(h.candidates("h", 1), (0, vec!["help".to_string(), "history".to_string()]));
        assert_eq!(h.candidates("SW", 2), (0, vec!["swap".to_string()]));
        assert_eq!(h.candidates("zz", 2), (0, vec![]));
    }

    #[test]
    fn completes_bases_after_first_word() {
        let h = ConverterHelper::new();
        let line = "FF 1";
        assert_eq!(h.candidates(line, line.len()), (3, vec!["10".to_string(), "16".to_string()]));
        let line = "from ";
        assert_eq!(h.candidates(line, line.len()).1.len(), 4);
    }
}
