use crate::error::EngineError;
use crate::rules::CompiledRules;

/// Derive a new file name from a stem and the rule set.
///
/// Pure and deterministic: the same inputs always produce the same name, and
/// nothing is read from or written to disk. Rules apply in a fixed order:
///
/// 1. keep pattern: the working value becomes the whole first match,
/// 2. prefix,
/// 3. replace all occurrences of `replace_from` with `replace_to`,
/// 4. postfix,
/// 5. the original extension is appended unchanged.
///
/// A keep pattern that matches nothing is an error, never a silent fallback
/// to the original stem.
pub fn build_file_name(
    stem: &str,
    extension: &str,
    rules: &CompiledRules,
) -> Result<String, EngineError> {
    let mut name = stem.to_string();

    if let Some(keep) = &rules.keep {
        match keep.find(&name) {
            Some(m) => name = m.as_str().to_string(),
            None => {
                return Err(EngineError::PatternNoMatch {
                    pattern: keep.as_str().to_string(),
                    stem: stem.to_string(),
                });
            },
        }
    }

    if !rules.prefix.is_empty() {
        name.insert_str(0, &rules.prefix);
    }

    if !rules.replace_from.is_empty() {
        name = name.replace(&rules.replace_from, &rules.replace_to);
    }

    if !rules.postfix.is_empty() {
        name.push_str(&rules.postfix);
    }

    name.push_str(extension);

    Ok(name)
}
