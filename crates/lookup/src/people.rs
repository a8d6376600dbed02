use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use typed_option::{O, some};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub middle_name: O<String>,
}

/// People known to the lookup, in file order.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    people: Vec<Person>,
}

/// Outcome of a single lookup, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolved {
    pub name: String,
    pub middle_name: O<String>,
}

impl Directory {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            Person { name: "NoMiddleName".to_string(), middle_name: O::None },
            Person {
                name: "HasMiddleName".to_string(),
                middle_name: some("MyMiddleName".to_string()),
            },
        ])
    }

    /// Reads a JSON array of people from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read people file {}", path.display()))?;
        let people: Vec<Person> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse people file {}", path.display()))?;
        debug!(count = people.len(), path = %path.display(), "loaded people");
        Ok(Self::new(people))
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn find_person(&self, name: &str) -> O<&Person> {
        O::from_nullable(self.people.iter().find(|p| p.name == name))
    }

    /// Looks up `name` and chains into the middle name, falling back to
    /// `default` when either step comes up empty.
    pub fn resolve(&self, name: &str, default: O<&str>) -> Resolved {
        let found = self.find_person(name);
        debug!(name, found = found.is_some(), "find person");

        let middle_name = found
            .flat_map(middle_name)
            .map(str::to_string)
            .or_else_with(|| {
                info!(name, has_default = default.is_some(), "no middle name, falling back");
                default.map(str::to_string)
            });

        Resolved { name: name.to_string(), middle_name }
    }
}

pub fn middle_name(person: &Person) -> O<&str> {
    person.middle_name.as_ref().map(String::as_str)
}
