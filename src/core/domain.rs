use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult, MatchPolicy};

pub const DEFAULT_RESULT_CAP: usize = 10;

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}


// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub result_cap: usize,
    pub match_policy: MatchPolicy,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            result_cap: DEFAULT_RESULT_CAP,
            match_policy: MatchPolicy::CaseSensitive,
        }
    }

    /// Loads configuration from `CATALOG_BRANCH`, `CATALOG_RESULT_CAP` and
    /// `CATALOG_MATCH_POLICY`. Unset variables keep their defaults.
    pub fn from_env() -> LibraryResult<Self> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> LibraryResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = Configuration::new("default");
        for (key, value) in vars {
            match key.as_str() {
                "CATALOG_BRANCH" => config.branch_id = value,
                "CATALOG_RESULT_CAP" => {
                    let cap = value.trim().parse::<usize>().map_err(|err| LibraryError::validation(
                        format!("invalid result cap {:?}: {}", value, err).as_str(), Some(key.clone())))?;
                    if cap == 0 {
                        return Err(LibraryError::validation("result cap must be positive", Some(key.clone())));
                    }
                    config.result_cap = cap;
                }
                "CATALOG_MATCH_POLICY" => config.match_policy = MatchPolicy::try_from(value)?,
                _ => {}
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::library::{LibraryError, MatchPolicy};

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(10, config.result_cap);
        assert_eq!(MatchPolicy::CaseSensitive, config.match_policy);
    }

    #[test]
    fn test_should_load_config_from_vars() {
        let config = Configuration::from_vars(vars(&[
            ("CATALOG_BRANCH", "north"),
            ("CATALOG_RESULT_CAP", "25"),
            ("CATALOG_MATCH_POLICY", "CaseInsensitive"),
            ("PATH", "/usr/bin"),
        ])).expect("should load config");
        assert_eq!("north", config.branch_id.as_str());
        assert_eq!(25, config.result_cap);
        assert_eq!(MatchPolicy::CaseInsensitive, config.match_policy);
    }

    #[test]
    fn test_should_default_missing_vars() {
        let config = Configuration::from_vars(vec![]).expect("should load config");
        assert_eq!(Configuration::new("default"), config);
    }

    #[test]
    fn test_should_reject_invalid_vars() {
        assert!(matches!(Configuration::from_vars(vars(&[("CATALOG_RESULT_CAP", "ten")])),
            Err(LibraryError::Validation{ .. })));
        assert!(matches!(Configuration::from_vars(vars(&[("CATALOG_RESULT_CAP", "0")])),
            Err(LibraryError::Validation{ .. })));
        assert!(matches!(Configuration::from_vars(vars(&[("CATALOG_MATCH_POLICY", "Fuzzy")])),
            Err(LibraryError::Validation{ .. })));
    }
}
