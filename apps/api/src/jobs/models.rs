use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

/// A single job listing as returned by the job source.
/// Absent or `null` fields deserialize to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Posting {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company_logo: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

/// A posting combined with the keywords extracted from its text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub item_id: String,
    pub name: String,
    pub address: String,
    pub url: String,
    pub image_url: String,
    pub keywords: BTreeSet<String>,
}

impl Record {
    pub fn from_posting(posting: Posting, keywords: Vec<String>) -> Self {
        Self {
            item_id: posting.id,
            name: posting.title,
            address: posting.location,
            url: posting.url,
            image_url: posting.company_logo,
            keywords: keywords.into_iter().collect(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
