#[cfg(test)]
mod tests {
    use art_catalog::apis::{CollectingReporter, CraftsAdapter, DancesAdapter, PaintingsAdapter, SourceAdapter};
    use art_catalog::domain::{Category, RecordKey};
    use art_catalog::geo;
    use art_catalog::pipeline::{CatalogFilter, ImageOverrides, Normalizer, Pipeline};
    use art_catalog::store::{CachedStore, InMemoryStore, Table};
    use art_catalog::view::{self, DetailOutcome, MapOutcome};
    use std::io::Write;
    use std::time::Duration;

    fn table(columns: &[&str], rows: &[&[Option<&str>]]) -> Table {
        let mut table = Table::new(columns.iter().map(|c| c.to_string()).collect());
        for row in rows {
            table.push_row(row.iter().map(|cell| cell.map(str::to_string)).collect());
        }
        table
    }

    fn paintings() -> Table {
        table(
            &["PAINTING_NAME_SF", "PAINTING_REGION_STATE", "PAINTING_DESC"],
            &[
                &[Some("Madhubani"), Some("Bihar"), Some("Folk painting of the Mithila region.")],
                &[Some("Warli"), Some("Maharashtra"), None],
                &[Some("Dhokra"), Some("Chhattisgarh"), Some("X")],
            ],
        )
    }

    fn dances() -> Table {
        table(
            &["DANCE_NAME_SF", "DANCE_REGION_STATE", "DANCE_DESC"],
            &[
                &[Some("Bihu"), Some("Assam"), Some("Harvest festival dance.")],
                &[Some("Kathakali"), Some("Kerala"), None],
            ],
        )
    }

    fn crafts() -> Table {
        table(
            &["CRAFT_STATE_UT", "CRAFT_DISTRICT", "CRAFT_NAME_SF", "CRAFT_VILLAGE"],
            &[&[Some("Odisha"), Some("Puri"), Some("Pattachitra"), Some("Raghurajpur")]],
        )
    }

    fn primed_store() -> InMemoryStore {
        let store = InMemoryStore::new();
        store.insert(PaintingsAdapter.query(), paintings());
        store.insert(DancesAdapter.query(), dances());
        store.insert(CraftsAdapter.query(), crafts());
        store
    }

    #[tokio::test]
    async fn test_full_build() {
        let store = primed_store();
        let reporter = CollectingReporter::new();

        let result = Pipeline::new(&store, &reporter, Normalizer::default())
            .build_catalogue()
            .await;

        // 7 seed + 3 paintings + 2 dances + 1 craft, minus the Dhokra duplicate
        assert_eq!(result.catalogue.len(), 12);
        assert_eq!(result.stats.duplicates, 1);
        assert_eq!(result.sourced_rows, 6);
        assert!(reporter.failures().is_empty());

        let craft = result
            .catalogue
            .get(&RecordKey::new("Pattachitra", Some("Odisha".to_string())))
            .unwrap();
        assert_eq!(craft.category, Category::Craft);
        assert_eq!(
            craft.description,
            "A traditional Pattachitra from Puri, Odisha. Practiced in Raghurajpur."
        );
    }

    #[tokio::test]
    async fn test_failed_source_does_not_block_catalogue() {
        let store = InMemoryStore::new();
        store.insert(PaintingsAdapter.query(), paintings());
        store.insert(DancesAdapter.query(), dances());
        store.insert_failure(CraftsAdapter.query(), "SQL compilation error: Object 'CRAFTS' does not exist");
        let reporter = CollectingReporter::new();

        let result = Pipeline::new(&store, &reporter, Normalizer::default())
            .build_catalogue()
            .await;

        assert_eq!(result.catalogue.len(), 11);
        assert!(result.catalogue.find_by_name("Bihu").is_some());
        assert!(result.catalogue.find_by_name("Pattachitra").is_none());

        let failures = reporter.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].source_id, "crafts");
    }

    #[tokio::test]
    async fn test_seed_dhokra_wins_over_painting_row() {
        let store = primed_store();
        let reporter = CollectingReporter::new();

        let catalogue = Pipeline::new(&store, &reporter, Normalizer::default())
            .build_catalogue()
            .await
            .catalogue;

        let dhokra: Vec<_> = catalogue.iter().filter(|r| r.name == "Dhokra").collect();
        assert_eq!(dhokra.len(), 1);
        assert_eq!(dhokra[0].category, Category::Craft);
        assert_eq!(dhokra[0].description, "Ancient bell metal craft practiced by the Dhokra Damar tribes...");
        assert_eq!(dhokra[0].cooperative_name, "Bastar Dhokra Shilp Cooperative");
    }

    #[tokio::test]
    async fn test_every_field_filled_for_sparse_rows() {
        let store = InMemoryStore::new();
        store.insert(
            PaintingsAdapter.query(),
            table(&["PAINTING_NAME_SF", "PAINTING_REGION_STATE", "PAINTING_DESC"], &[&[None, None, None]]),
        );
        store.insert(
            DancesAdapter.query(),
            table(&["DANCE_NAME_SF", "DANCE_REGION_STATE", "DANCE_DESC"], &[&[None, Some("  "), None]]),
        );
        store.insert(
            CraftsAdapter.query(),
            table(&["CRAFT_STATE_UT", "CRAFT_DISTRICT", "CRAFT_NAME_SF", "CRAFT_VILLAGE"], &[&[None, None, None, None]]),
        );
        let reporter = CollectingReporter::new();

        let catalogue = Pipeline::new(&store, &reporter, Normalizer::default())
            .build_catalogue()
            .await
            .catalogue;

        assert_eq!(catalogue.len(), 10);
        for record in catalogue.iter() {
            assert!(!record.name.is_empty());
            assert!(!record.description.is_empty());
            assert!(!record.image_url.is_empty());
            assert!(!record.scheme_name.is_empty());
            assert!(!record.scheme_allocation.is_empty());
            assert!(!record.cooperative_name.is_empty());
            assert_eq!(record.latitude().is_some(), record.longitude().is_some());
        }

        let painting = catalogue.find_by_name("Unknown Painting").unwrap();
        assert_eq!(painting.region, None);
        assert_eq!(painting.location, None);
        assert_eq!(painting.description, "Traditional Painting from India.");
        assert_eq!(painting.scheme_name, "To be updated");
        assert_eq!(painting.scheme_allocation, "N/A");
        assert_eq!(
            painting.image_url,
            "https://via.placeholder.com/300x200.png?text=Painting"
        );
        assert!(catalogue.find_by_name("Unknown Dance").is_some());
        assert!(catalogue.find_by_name("Unknown Craft").is_some());
    }

    #[tokio::test]
    async fn test_half_coordinate_pair_falls_back_to_region() {
        let store = InMemoryStore::new();
        store.insert(
            DancesAdapter.query(),
            table(
                &["DANCE_NAME_SF", "DANCE_REGION_STATE", "DANCE_LATITUDE"],
                &[&[Some("Kathakali"), Some("Kerala"), Some("9.9")]],
            ),
        );
        let reporter = CollectingReporter::new();

        let catalogue = Pipeline::new(&store, &reporter, Normalizer::default())
            .build_catalogue()
            .await
            .catalogue;

        let kathakali = catalogue.find_by_name("Kathakali").unwrap();
        assert_eq!(kathakali.location, geo::lookup(Some("Kerala")));
        // paintings and crafts were never registered
        assert_eq!(reporter.failures().len(), 2);
    }

    #[tokio::test]
    async fn test_image_overrides_are_injected() {
        let store = primed_store();
        let reporter = CollectingReporter::new();
        let mut overrides = ImageOverrides::new();
        overrides.insert("Warli", "https://example.org/warli.jpg");

        let catalogue = Pipeline::new(&store, &reporter, Normalizer::new(overrides))
            .build_catalogue()
            .await
            .catalogue;

        assert_eq!(
            catalogue.find_by_name("Warli").unwrap().image_url,
            "https://example.org/warli.jpg"
        );
        assert_eq!(
            catalogue.find_by_name("Bihu").unwrap().image_url,
            "https://via.placeholder.com/300x200.png?text=Bihu"
        );
    }

    #[tokio::test]
    async fn test_cached_store_skips_repeat_queries_but_retries_failures() {
        let store = InMemoryStore::new();
        store.insert(PaintingsAdapter.query(), paintings());
        store.insert(DancesAdapter.query(), dances());
        store.insert_failure(CraftsAdapter.query(), "warehouse suspended");
        let cached = CachedStore::new(store.clone(), Duration::from_secs(3600));
        let reporter = CollectingReporter::new();
        let pipeline = Pipeline::new(&cached, &reporter, Normalizer::default());

        let first = pipeline.build_catalogue().await;
        assert_eq!(store.query_count(), 3);

        store.insert(CraftsAdapter.query(), crafts());
        let second = pipeline.build_catalogue().await;

        assert_eq!(store.query_count(), 4);
        assert_eq!(first.catalogue.len() + 1, second.catalogue.len());
    }

    #[tokio::test]
    async fn test_filter_and_detail_on_built_catalogue() {
        let store = primed_store();
        let reporter = CollectingReporter::new();
        let catalogue = Pipeline::new(&store, &reporter, Normalizer::default())
            .build_catalogue()
            .await
            .catalogue;

        let dances = CatalogFilter::new(Some("All States"), Some("Dance"), None).apply(&catalogue);
        assert_eq!(dances.len(), 2);

        let textiles_in_up = CatalogFilter::new(Some("Uttar Pradesh"), Some("Textile"), Some("LUCKNOW"))
            .apply(&catalogue);
        let names: Vec<_> = textiles_in_up.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Chikankari"]);

        let key = RecordKey::new("Warli", Some("Maharashtra".to_string()));
        let DetailOutcome::Found(detail) = view::detail(&catalogue, Some(&key)) else {
            panic!("Warli should be found");
        };
        assert_eq!(detail.description, "Traditional Painting from Maharashtra.");
        assert!(matches!(detail.map, MapOutcome::Pin(_)));
    }

    #[test]
    fn test_fixture_file_loads_tables_by_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "paintings": {{
                    "columns": ["PAINTING_NAME_SF", "PAINTING_REGION_STATE", "PAINTING_DESC"],
                    "rows": [["Gond", "Madhya Pradesh", null]]
                }},
                "dances": {{ "columns": ["DANCE_NAME_SF"], "rows": [] }}
            }}"#
        )
        .unwrap();

        let fixture = InMemoryStore::load_fixture(file.path()).unwrap();
        assert_eq!(fixture.tables.len(), 2);
        let paintings = &fixture.tables["paintings"];
        assert_eq!(paintings.len(), 1);
        assert_eq!(paintings.iter().next().unwrap().get("painting_desc"), None);
        assert!(fixture.tables["dances"].is_empty());
    }
}
