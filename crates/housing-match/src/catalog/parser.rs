use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::matching::{Candidate, GenderPolicy};

pub(crate) fn parse_candidates<R: Read>(reader: R) -> Result<Vec<Candidate>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut candidates = Vec::new();

    for record in csv_reader.deserialize::<CatalogRow>() {
        candidates.push(record?.into_candidate());
    }

    Ok(candidates)
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    #[serde(default)]
    name: String,
    quietness: f64,
    social: f64,
    distance_to_campus: f64,
    room_type: String,
    gender_type: String,
    #[serde(default, deserialize_with = "flag")]
    is_accessible: bool,
    #[serde(default, deserialize_with = "flag")]
    has_kitchen: bool,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    community_type: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    image_url: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    tags: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    amenities: Option<String>,
}

impl CatalogRow {
    fn into_candidate(self) -> Candidate {
        Candidate {
            id: self.id,
            name: self.name,
            quietness: self.quietness,
            social: self.social,
            distance_to_campus: self.distance_to_campus,
            room_type: self.room_type,
            gender_type: GenderPolicy::from(self.gender_type),
            is_accessible: self.is_accessible,
            has_kitchen: self.has_kitchen,
            community_type: self
                .community_type
                .unwrap_or_else(crate::matching::general_community),
            description: self.description,
            image_url: self.image_url,
            tags: split_list(self.tags.as_deref()),
            amenities: split_list(self.amenities.as_deref()),
        }
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(';')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(
        opt.as_deref().map(|value| value.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "yes" | "y" | "1")
    ))
}
