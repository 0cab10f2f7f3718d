use serde::{Deserialize, Deserializer, Serialize};

/// A single character record from the people listing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub birth_year: String,
    #[serde(default)]
    pub hair_color: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub mass: String,
    #[serde(default)]
    pub skin_color: String,
    /// URL of the homeworld record; empty strings are treated as absent
    #[serde(default, deserialize_with = "non_empty_url")]
    pub homeworld: Option<String>,
    /// Film URLs, in the order the API lists them
    #[serde(default)]
    pub films: Vec<String>,
}

impl Entry {
    pub fn new(name: impl Into<String>) -> Self {
        Entry {
            name: name.into(),
            gender: String::new(),
            birth_year: String::new(),
            hair_color: String::new(),
            height: String::new(),
            mass: String::new(),
            skin_color: String::new(),
            homeworld: None,
            films: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn with_homeworld(mut self, url: impl Into<String>) -> Self {
        self.homeworld = Some(url.into());
        self
    }

    #[cfg(test)]
    pub fn with_films<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.films = urls.into_iter().map(Into::into).collect();
        self
    }
}

fn non_empty_url<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|url| !url.trim().is_empty()))
}

/// Resolved homeworld of an entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
}

/// Resolved film referenced by an entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
}

/// One page of the people listing
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingPage {
    /// Total number of entries across all pages
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<Entry>,
}

impl ListingPage {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}
