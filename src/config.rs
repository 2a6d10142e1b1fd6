use crate::model::Incompatibilities;
use eyre::{Error, WrapErr};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Pairs of names which never share a mentor unless the configuration
/// file sets its own `incompatible` list.
const INCOMPATIBLE: [(&str, &str); 6] = [
    ("tutor15", "tutor23"),
    ("tutor17", "tutor22"),
    ("tutor12", "Mentor1 Lastname"),
    ("tutor6", "tutor8"),
    ("tutor7", "tutor19"),
    ("tutor10", "tutor12"),
];

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub tables: Tables,
    pub limits: Limits,
    /// Pairs of names which must not share a mentor.
    pub incompatible: Vec<(String, String)>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tables: Tables::default(),
            limits: Limits::default(),
            incompatible: INCOMPATIBLE
                .iter()
                .map(|&(a, b)| (a.to_owned(), b.to_owned()))
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tables {
    pub mentees: String,
    pub mentors: String,
    pub primary: String,
    pub alternate: String,
}

impl Default for Tables {
    fn default() -> Self {
        Tables {
            mentees: "Mentee Schedules".into(),
            mentors: "Mentor Schedules".into(),
            primary: "Final Assignments".into(),
            alternate: "Final Assignments Option 2".into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    pub max_mentees: usize,
    pub max_si_leaders: usize,
    pub si_leader_position: String,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_mentees: 6,
            max_si_leaders: 2,
            si_leader_position: "SI Leader".into(),
        }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config, Error> {
        let content = fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))?;
        Self::parse(&content)
            .wrap_err_with(|| format!("cannot parse configuration file {}", file_name.display()))
    }

    pub fn parse(content: &str) -> Result<Config, Error> {
        Ok(toml::from_str(content)?)
    }

    pub fn incompatibilities(&self) -> Incompatibilities {
        Incompatibilities::new(self.incompatible.iter().map(|(a, b)| (a, b)))
    }
}
