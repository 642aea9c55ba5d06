use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)").expect("placeholder pattern is valid")
});

/// Expands `${VAR}` and `$VAR` placeholders the way a build environment does.
/// Unknown variables expand to the empty string.
pub struct EnvExpander;

impl EnvExpander {
    pub fn expand_with<F>(input: &str, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        PLACEHOLDER
            .replace_all(input, |caps: &Captures| {
                let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
                lookup(name).unwrap_or_default()
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "HUB_HOST" => Some("hub.internal".to_string()),
            "JOB_NAME" => Some("firmware".to_string()),
            _ => None,
        }
    }

    #[test]
    fn expands_both_placeholder_forms() {
        assert_eq!(EnvExpander::expand_with("${HUB_HOST}", lookup), "hub.internal");
        assert_eq!(EnvExpander::expand_with("proj-$JOB_NAME-main", lookup), "proj-firmware-main");
    }

    #[test]
    fn unknown_variables_expand_to_empty() {
        assert_eq!(EnvExpander::expand_with("x${MISSING}y", lookup), "xy");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(EnvExpander::expand_with("7340", lookup), "7340");
    }
}
