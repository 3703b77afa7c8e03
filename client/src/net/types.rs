//! Wire types returned by the portfolio REST API.
//!
//! DESIGN
//! ======
//! Records pass straight from the API into views. Every field is defaulted so
//! a missing or null value from the backend renders as blank instead of
//! failing the whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Treat `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A project tag used for filtering.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct Tag {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
}

/// A portfolio project.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Project {
    #[serde(default)]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Comma-separated technology list.
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: String,
    #[serde(default)]
    pub repository_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
}

impl Project {
    #[must_use]
    pub fn has_tag(&self, slug: &str) -> bool {
        self.tags.iter().any(|tag| tag.slug == slug)
    }

    /// Individual technologies, trimmed, blanks dropped.
    #[must_use]
    pub fn technology_list(&self) -> Vec<&str> {
        self.technologies.split(',').map(str::trim).filter(|t| !t.is_empty()).collect()
    }
}

/// A professional certification.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Certification {
    #[serde(default)]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub issuing_organization: String,
    #[serde(default)]
    pub credential_url: Option<String>,
    /// ISO date (`YYYY-MM-DD`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_issued: String,
}

/// A published blog post.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Post {
    #[serde(default)]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    /// Markdown body.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_date: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Aggregate GitHub account numbers.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct GithubStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub public_repos: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub followers: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_stars: u64,
}

/// One year of GitHub contributions, week by week.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    #[serde(default)]
    pub total_contributions: u64,
    #[serde(default)]
    pub weeks: Vec<ContributionWeek>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    #[serde(default)]
    pub contribution_days: Vec<ContributionDay>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    #[serde(default)]
    pub contribution_count: u64,
    #[serde(default)]
    pub date: String,
}

impl ContributionCalendar {
    /// All days in calendar order, flattened across weeks.
    pub fn days(&self) -> impl Iterator<Item = &ContributionDay> {
        self.weeks.iter().flat_map(|week| week.contribution_days.iter())
    }
}

/// Nostr kind-0 profile metadata.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct NostrProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub nip05: Option<String>,
}

impl NostrProfile {
    /// Preferred display label: `display_name`, then `name`.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.name.as_deref().filter(|s| !s.is_empty()))
    }

    /// Local part of the NIP-05 identifier, used for the external profile link.
    #[must_use]
    pub fn nip05_handle(&self) -> Option<&str> {
        let nip05 = self.nip05.as_deref()?;
        let handle = nip05.split('@').next().unwrap_or_default();
        (!handle.is_empty()).then_some(handle)
    }
}

/// The most recent text note from the site owner.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct NostrNote {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub content: String,
    /// Unix seconds.
    #[serde(default)]
    pub created_at: u64,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct BitcoinAddress {
    pub address: String,
}

/// Fee estimates in sat/vB.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedFees {
    #[serde(default)]
    pub fastest_fee: u64,
    #[serde(default)]
    pub half_hour_fee: u64,
    #[serde(default)]
    pub economy_fee: u64,
}

/// Bitcoin network snapshot served by `mempool-stats/`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct NetworkStats {
    #[serde(default)]
    pub recommended_fees: RecommendedFees,
    #[serde(default)]
    pub block_height: u64,
    /// Hashes per second.
    #[serde(default)]
    pub hashrate: Option<f64>,
    /// USD price.
    #[serde(default)]
    pub price: Option<f64>,
}

/// Full-text search hits.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct SearchResults {
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub posts: Vec<Post>,
}

impl SearchResults {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.posts.is_empty()
    }
}

/// A marketplace product listed over Nostr.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Product {
    #[serde(default)]
    pub event_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub merchant_pubkey: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl Product {
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Contact form payload.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// All four fields are required.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}
