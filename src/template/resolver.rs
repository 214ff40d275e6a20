//! Placeholder discovery and substitution

use std::io;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::prompt::ValueSource;

use super::vars::{TemplateError, VariableMap};

/// Lexical form of a placeholder: `${name}` with `name` in `[a-zA-Z0-9_-]+`
fn placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER
        .get_or_init(|| Regex::new(r"\$\{([a-zA-Z0-9_-]+)\}").expect("placeholder pattern is valid"))
}

/// Scan template text for placeholders.
///
/// Every distinct `${name}` token becomes an unset entry in the returned
/// mapping, in first-appearance order. Malformed placeholder syntax
/// (`${}`, `${a b}`, an unterminated `${`) is simply not matched.
pub fn discover(text: &str) -> VariableMap {
    let mut vars = VariableMap::new();
    for caps in placeholder().captures_iter(text) {
        vars.insert_unset(&caps[1]);
    }
    vars
}

/// Overlay explicitly supplied `(name, value)` pairs onto the mapping.
///
/// Pairs naming a variable that was never discovered are skipped; the
/// returned list carries those names so the caller can warn about them.
/// When the same name appears more than once, the last value wins.
pub fn apply_explicit(vars: &mut VariableMap, pairs: &[(String, String)]) -> Vec<String> {
    let mut unknown = Vec::new();
    for (name, value) in pairs {
        if !vars.set(name, value.clone()) {
            unknown.push(name.clone());
        }
    }
    unknown
}

/// Ask the value source for every still-unset variable, in
/// first-appearance order.
///
/// The provided string is bound verbatim, including the empty string.
pub fn apply_interactive(vars: &mut VariableMap, source: &mut dyn ValueSource) -> io::Result<()> {
    for name in vars.unset_names() {
        let value = source.value_for(&name)?;
        vars.set(&name, value);
    }
    Ok(())
}

/// Reject the mapping if any variable remains unset.
pub fn validate(vars: &VariableMap) -> Result<(), TemplateError> {
    let names = vars.unset_names();
    if names.is_empty() {
        Ok(())
    } else {
        Err(TemplateError::UnsetVariables { names })
    }
}

/// Replace every placeholder in `text` with its resolved value.
///
/// All variables are substituted in a single pass over the original text,
/// using one alternation pattern over the escaped names. Substituted values
/// are never re-scanned, so a value containing `${other}`-shaped text stays
/// literal in the output.
///
/// Precondition: [`validate`] passed, i.e. every variable has a value.
pub fn substitute(text: &str, vars: &VariableMap) -> String {
    if vars.is_empty() {
        return text.to_string();
    }

    let names = vars
        .names()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    let pattern = Regex::new(&format!(r"\$\{{({})\}}", names))
        .expect("escaped variable names form a valid pattern");

    pattern
        .replace_all(text, |caps: &Captures| {
            vars.value(&caps[1])
                .expect("matched names come from the validated mapping")
                .to_string()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_discover_first_appearance_order() {
        let vars = discover("${a}-${b}-${a}");
        assert_eq!(vars.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_discover_accepts_full_character_class() {
        let vars = discover("${snake_case} ${kebab-case} ${Mixed03}");
        assert_eq!(
            vars.names().collect::<Vec<_>>(),
            vec!["snake_case", "kebab-case", "Mixed03"]
        );
    }

    #[test]
    fn test_discover_skips_malformed_placeholders() {
        let vars = discover("${} ${a b} ${unterminated $missing {braces}");
        assert!(vars.is_empty());
    }

    #[test]
    fn test_discover_is_case_sensitive() {
        let vars = discover("${Name} ${name}");
        assert_eq!(vars.len(), 2);
    }

    #[test]
    fn test_apply_explicit_reports_unknown_names() {
        let mut vars = discover("${known}");
        let unknown = apply_explicit(&mut vars, &pairs(&[("known", "v"), ("other", "w")]));

        assert_eq!(unknown, vec!["other"]);
        assert!(!vars.contains("other"));
        assert_eq!(vars.value("known"), Some("v"));
    }

    #[test]
    fn test_apply_explicit_last_value_wins() {
        let mut vars = discover("${x}");
        apply_explicit(&mut vars, &pairs(&[("x", "first"), ("x", "second")]));
        assert_eq!(vars.value("x"), Some("second"));
    }

    #[test]
    fn test_validate_lists_unset_names_in_order() {
        let mut vars = discover("${a} ${b} ${c}");
        vars.set("b", "bound".to_string());

        let err = validate(&vars).unwrap_err();
        let TemplateError::UnsetVariables { names } = err;
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_substitute_replaces_every_occurrence() {
        let mut vars = discover("${x} and ${x} again");
        vars.set("x", "y".to_string());
        assert_eq!(substitute("${x} and ${x} again", &vars), "y and y again");
    }

    #[test]
    fn test_substitute_does_not_reexpand_values() {
        let mut vars = discover("${a}${b}");
        vars.set("a", "${b}".to_string());
        vars.set("b", "c".to_string());
        assert_eq!(substitute("${a}${b}", &vars), "${b}c");
    }

    #[test]
    fn test_substitute_escapes_hyphenated_names() {
        let mut vars = discover("${api-key}");
        vars.set("api-key", "secret".to_string());
        assert_eq!(substitute("${api-key}", &vars), "secret");
    }

    #[test]
    fn test_substitute_without_variables_is_identity() {
        let vars = VariableMap::new();
        assert_eq!(
            substitute("no placeholders, not even ${}", &vars),
            "no placeholders, not even ${}"
        );
    }

    #[test]
    fn test_interactive_binds_in_first_appearance_order() {
        struct Scripted(Vec<String>);

        impl ValueSource for Scripted {
            fn value_for(&mut self, _name: &str) -> io::Result<String> {
                Ok(self.0.remove(0))
            }
        }

        let mut vars = discover("${first} ${second}");
        let mut source = Scripted(vec!["1".to_string(), "2".to_string()]);
        apply_interactive(&mut vars, &mut source).unwrap();

        assert_eq!(vars.value("first"), Some("1"));
        assert_eq!(vars.value("second"), Some("2"));
    }

    #[test]
    fn test_interactive_skips_already_set_variables() {
        struct FailOnAsk;

        impl ValueSource for FailOnAsk {
            fn value_for(&mut self, name: &str) -> io::Result<String> {
                panic!("should not prompt for {}", name);
            }
        }

        let mut vars = discover("${done}");
        vars.set("done", "already".to_string());
        apply_interactive(&mut vars, &mut FailOnAsk).unwrap();

        assert_eq!(vars.value("done"), Some("already"));
    }
}
