use crate::domain::model::{ArtworkRecord, TableSnapshot, COLUMNS};
use crate::utils::error::Result;

/// Session-scoped, append-only sequence of validated records. Insertion
/// order is display order is CSV row order; records are never mutated or
/// removed once appended. Created empty, discarded with the session.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<ArtworkRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record verbatim. Infallible; the caller guarantees the
    /// three checked fields already passed validation.
    pub fn append(&mut self, record: ArtworkRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ArtworkRecord] {
        &self.records
    }

    /// Projects the current contents as labelled columns plus one row per
    /// record in append order. Side-effect free.
    pub fn snapshot_table(&self) -> TableSnapshot {
        let rows = self
            .records
            .iter()
            .map(|r| {
                [
                    r.inventory_number.clone(),
                    r.title.clone(),
                    r.artist.clone(),
                    r.year_or_period.clone(),
                    r.technique.clone(),
                    r.dimensions.clone(),
                    r.place_of_production.clone(),
                    r.provenance.clone(),
                ]
            })
            .collect();
        TableSnapshot {
            columns: COLUMNS,
            rows,
        }
    }

    /// Serializes the current contents as UTF-8 CSV bytes: the eight column
    /// labels as the header row, then one row per record in append order.
    /// Quoting follows RFC 4180; an empty store yields a header-only export.
    pub fn export_csv(&self) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(COLUMNS)?;
        for record in &self.records {
            writer.serialize(record)?;
        }
        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: u32) -> ArtworkRecord {
        ArtworkRecord {
            inventory_number: format!("INV{:03}", n),
            title: format!("Untitled {}", n),
            artist: "A. Painter".to_string(),
            year_or_period: "1990".to_string(),
            technique: "Oil".to_string(),
            dimensions: "30x40 cm".to_string(),
            place_of_production: "Paris".to_string(),
            provenance: "Private collection".to_string(),
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = RecordStore::new();
        for n in 1..=3 {
            store.append(sample(n));
        }
        assert_eq!(store.len(), 3);
        let table = store.snapshot_table();
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0][0], "INV001");
        assert_eq!(table.rows[2][0], "INV003");
    }

    #[test]
    fn test_snapshot_is_stable() {
        let mut store = RecordStore::new();
        store.append(sample(1));
        let first = store.snapshot_table();
        let second = store.snapshot_table();
        assert_eq!(first, second);
    }

    #[test]
    fn test_export_csv_header_and_rows() {
        let mut store = RecordStore::new();
        store.append(sample(1));
        let csv_bytes = store.export_csv().unwrap();
        let text = String::from_utf8(csv_bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Inventory Number,Title,Artist,Year/Period,Technique,Dimensions,Place of Production,Provenance/History"
        );
        assert_eq!(
            lines.next().unwrap(),
            "INV001,Untitled 1,A. Painter,1990,Oil,30x40 cm,Paris,Private collection"
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_export_csv_empty_store_is_header_only() {
        let store = RecordStore::new();
        let text = String::from_utf8(store.export_csv().unwrap()).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_export_csv_round_trip_with_quoting() {
        let mut store = RecordStore::new();
        let mut record = sample(1);
        record.title = "Still Life, with \"Lemons\"".to_string();
        record.provenance = "Line one\nLine two".to_string();
        store.append(record.clone());

        let csv_bytes = store.export_csv().unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_bytes.as_slice());
        let parsed: Vec<ArtworkRecord> =
            reader.deserialize().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(parsed, vec![record]);
    }
}
