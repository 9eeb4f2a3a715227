use crate::error::EngineError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The five rename rules, as entered by the user.
///
/// Every field is independently optional: an empty string means "no rule".
/// Whitespace is significant, so a field holding `" "` is a real rule.
/// Application order is fixed and not part of the configuration (see
/// [`crate::name_builder::build_file_name`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRules {
    /// Text prepended to the stem.
    #[serde(default)]
    pub prefix: String,

    /// Text appended to the stem, before the extension.
    #[serde(default)]
    pub postfix: String,

    /// Substring whose occurrences are all replaced by `replace_to`.
    #[serde(default)]
    pub replace_from: String,

    /// Replacement text; empty deletes `replace_from`.
    #[serde(default)]
    pub replace_to: String,

    /// Regular expression; the first match becomes the new stem.
    #[serde(default)]
    pub keep_pattern: String,
}

impl RenameRules {
    /// True when no rule is set, i.e. the run would be a no-op.
    ///
    /// `replace_to` on its own does nothing, so it does not count.
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
            && self.postfix.is_empty()
            && self.replace_from.is_empty()
            && self.keep_pattern.is_empty()
    }

    /// Validate and compile the rule set. An unparsable keep pattern is
    /// reported here, before any file is processed.
    pub fn compile(&self) -> Result<CompiledRules, EngineError> {
        let keep = if self.keep_pattern.is_empty() {
            None
        } else {
            Some(Regex::new(&self.keep_pattern).map_err(|source| {
                EngineError::InvalidPattern {
                    pattern: self.keep_pattern.clone(),
                    source,
                }
            })?)
        };

        Ok(CompiledRules {
            prefix: self.prefix.clone(),
            postfix: self.postfix.clone(),
            replace_from: self.replace_from.clone(),
            replace_to: self.replace_to.clone(),
            keep,
        })
    }
}

/// A validated rule set, ready to be applied to any number of stems.
#[derive(Debug, Clone)]
pub struct CompiledRules {
    pub prefix: String,
    pub postfix: String,
    pub replace_from: String,
    pub replace_to: String,
    pub keep: Option<Regex>,
}
