use super::{RegionalArtColumns, RegionalArtRow, SourceAdapter};
use crate::common::constants::{PAINTINGS_QUERY, PAINTINGS_SOURCE};
use crate::store::TableRow;

const COLUMNS: RegionalArtColumns = RegionalArtColumns {
    name: "PAINTING_NAME_SF",
    region: "PAINTING_REGION_STATE",
    description: "PAINTING_DESC",
    image_url: "PAINTING_IMAGE_URL_SF",
    latitude: "PAINTING_LATITUDE",
    longitude: "PAINTING_LONGITUDE",
};

/// Painting styles from the `PAINTING` table
pub struct PaintingsAdapter;

impl SourceAdapter for PaintingsAdapter {
    type Row = RegionalArtRow;

    fn source_id(&self) -> &'static str {
        PAINTINGS_SOURCE
    }

    fn query(&self) -> &'static str {
        PAINTINGS_QUERY
    }

    fn parse_row(&self, row: &TableRow<'_>) -> RegionalArtRow {
        COLUMNS.parse(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Table;

    #[test]
    fn test_query_targets_painting_table() {
        assert!(PaintingsAdapter.query().contains(r#"FROM "PAINTING""#));
        assert_eq!(PaintingsAdapter.source_id(), "paintings");
    }

    #[test]
    fn test_parse_row_reads_optional_columns() {
        let mut table = Table::new(
            [
                "PAINTING_NAME_SF",
                "PAINTING_REGION_STATE",
                "PAINTING_DESC",
                "PAINTING_IMAGE_URL_SF",
                "PAINTING_LATITUDE",
                "PAINTING_LONGITUDE",
            ]
            .map(String::from)
            .to_vec(),
        );
        table.push_row(
            [
                "Pattachitra",
                "Odisha",
                "Cloth-based scroll painting.",
                "https://example.org/pattachitra.jpg",
                "19.8",
                "85.8",
            ]
            .map(|v| Some(v.to_string()))
            .to_vec(),
        );

        let row = PaintingsAdapter.parse_row(&table.iter().next().unwrap());
        assert_eq!(row.name.as_deref(), Some("Pattachitra"));
        assert_eq!(row.region.as_deref(), Some("Odisha"));
        assert_eq!(row.image_url.as_deref(), Some("https://example.org/pattachitra.jpg"));
        assert_eq!((row.latitude, row.longitude), (Some(19.8), Some(85.8)));
    }
}
