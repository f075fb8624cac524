/// Expand `~`, `$VAR` and `${VAR}` in a path-like string.
///
/// Unknown variables leave the input untouched.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_tilde_when_expanded_then_starts_with_home() {
        let home = std::env::var("HOME").expect("HOME should be set");
        assert!(expand_env_vars("~/org.toml").starts_with(&home));
    }

    #[test]
    fn given_unset_variable_when_expanded_then_returns_input() {
        let input = "$PATTERNBOOK_SURELY_UNSET_VAR/org.toml";
        assert_eq!(expand_env_vars(input), input);
    }
}
