//! Source of the `FER_*` override variables.
//!
//! The binary reads the process environment through [`Env::process()`].
//! Tests pass a fixed set of variables with [`Env::fixed()`] or none at all
//! with [`Env::empty()`], so a developer's own `FER_*` exports never leak
//! into a test run.

use std::collections::HashMap;

/// Where override variables are looked up.
#[derive(Clone, Debug)]
pub enum Env {
    Process,
    Fixed(HashMap<String, String>),
}

impl Env {
    pub fn process() -> Self {
        Env::Process
    }

    /// Only the given variables are set.
    pub fn fixed(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Env::Fixed(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn empty() -> Self {
        Env::Fixed(HashMap::new())
    }

    /// Value of `name`, or `None` when it is unset, empty, or not UTF-8.
    /// An empty export never clears a value from the config file.
    pub fn get(&self, name: &str) -> Option<String> {
        let value = match self {
            Env::Process => std::env::var(name).ok(),
            Env::Fixed(vars) => vars.get(name).cloned(),
        };
        value.filter(|v| !v.is_empty())
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::process()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_env_sees_cargo_variables() {
        assert!(Env::process().get("CARGO_MANIFEST_DIR").is_some());
    }

    #[test]
    fn fixed_env_only_knows_its_own_variables() {
        let env = Env::fixed([("FER_VERSION", "2.1")]);
        assert_eq!(env.get("FER_VERSION").as_deref(), Some("2.1"));
        assert_eq!(env.get("CARGO_MANIFEST_DIR"), None);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let env = Env::fixed([("FER_CHAIN_ID", "")]);
        assert_eq!(env.get("FER_CHAIN_ID"), None);
        assert_eq!(Env::empty().get("PATH"), None);
    }
}
