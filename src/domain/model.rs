use serde::{Deserialize, Serialize};

/// Column labels of the inventory table and of the CSV header row, in the
/// fixed display order. Row cells follow the same order everywhere.
pub const COLUMNS: [&str; 8] = [
    "Inventory Number",
    "Title",
    "Artist",
    "Year/Period",
    "Technique",
    "Dimensions",
    "Place of Production",
    "Provenance/History",
];

/// Fixed filename of the CSV download artifact.
pub const EXPORT_FILENAME: &str = "artwork_inventory.csv";

/// MIME type of the CSV download artifact.
pub const EXPORT_MIME: &str = "text/csv";

/// One catalogued artwork. Fields are stored verbatim as submitted; only
/// year/period, dimensions and place of production ever went through
/// validation, the rest are free-form text including the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    #[serde(rename = "Inventory Number")]
    pub inventory_number: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Artist")]
    pub artist: String,
    #[serde(rename = "Year/Period")]
    pub year_or_period: String,
    #[serde(rename = "Technique")]
    pub technique: String,
    #[serde(rename = "Dimensions")]
    pub dimensions: String,
    #[serde(rename = "Place of Production")]
    pub place_of_production: String,
    #[serde(rename = "Provenance/History")]
    pub provenance: String,
}

/// The eight raw field values of one submit event, delivered atomically by
/// the form surface. No trimming or other normalization happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub inventory_number: String,
    pub title: String,
    pub artist: String,
    pub year_or_period: String,
    pub technique: String,
    pub dimensions: String,
    pub place_of_production: String,
    pub provenance: String,
}

impl Submission {
    /// Builds the record verbatim from the raw inputs.
    pub fn into_record(self) -> ArtworkRecord {
        ArtworkRecord {
            inventory_number: self.inventory_number,
            title: self.title,
            artist: self.artist,
            year_or_period: self.year_or_period,
            technique: self.technique,
            dimensions: self.dimensions,
            place_of_production: self.place_of_production,
            provenance: self.provenance,
        }
    }
}

/// Verdict of one submit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All checked fields passed; the record was appended.
    Accepted,
    /// At least one check failed; the record was discarded. Carries the
    /// ordered warning messages, one per failed rule.
    Rejected(Vec<String>),
}

/// Owned tabular projection of the record store at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    pub columns: [&'static str; 8],
    pub rows: Vec<[String; 8]>,
}
