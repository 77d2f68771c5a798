use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

/// Which half of the recently-added hub to query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MediaType {
    Movie,
    #[default]
    Show,
}

impl MediaType {
    /// Value of the `type` query parameter understood by the server.
    pub fn code(self) -> u8 {
        match self {
            MediaType::Movie => 1,
            MediaType::Show => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Movie,
    Show,
    Season,
    Episode,
    Other,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Movie => "movie",
            ItemKind::Show => "show",
            ItemKind::Season => "season",
            ItemKind::Episode => "episode",
            ItemKind::Other => "other",
        }
    }
}

/// A raw record of the recently-added feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub rating_key: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub parent_rating_key: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub grandparent_rating_key: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub parent_title: Option<String>,
    #[serde(default)]
    pub grandparent_title: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub index: Option<u32>,
    #[serde(default)]
    pub parent_index: Option<u32>,
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self.item_type.as_str() {
            "movie" => ItemKind::Movie,
            "show" => ItemKind::Show,
            "season" => ItemKind::Season,
            "episode" => ItemKind::Episode,
            _ => ItemKind::Other,
        }
    }
}

/// A deduplicated entity selected to receive a metadata refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTarget {
    pub id: String,
    pub label: String,
}

impl RefreshTarget {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A top-level library on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(deserialize_with = "string_or_number")]
    pub key: String,
    #[serde(rename = "type")]
    pub section_type: String,
    pub title: String,
}

/// A single section resolved by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDetail {
    pub id: String,
    pub title: String,
}

#[derive(Tabled)]
pub struct SectionTableRow {
    #[tabled(rename = "library id")]
    pub id: String,
    #[tabled(rename = "type")]
    pub section_type: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionsResponse {
    #[serde(rename = "MediaContainer")]
    pub media_container: SectionsContainer,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionsContainer {
    #[serde(rename = "Directory", default)]
    pub directory: Vec<Section>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionResponse {
    #[serde(rename = "MediaContainer")]
    pub media_container: SectionContainer,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionContainer {
    #[serde(default)]
    pub title1: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentlyAddedResponse {
    #[serde(rename = "MediaContainer")]
    pub media_container: MetadataContainer,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataContainer {
    #[serde(rename = "Metadata", default)]
    pub metadata: Vec<Item>,
}

// The server sends rating keys as strings, older versions and hand-written
// fixtures use plain numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(u64),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(String::from))
}
