pub mod duration_unit {
    use crate::time::DurationUnit;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DurationUnit>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(v) => match v.parse::<DurationUnit>() {
                Ok(value) => Ok(Some(value)),
                Err(err) => Err(D::Error::custom(err.to_string())),
            },
            None => Ok(None),
        }
    }
}

pub mod path {
    use serde::{Deserialize, Deserializer};
    use std::path::PathBuf;

    /// Empty strings, as produced by an unset environment variable, mean "none".
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<PathBuf>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer).map(|v| {
            v.filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
    }
}
