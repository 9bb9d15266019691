// Integration tests for settings persistence and the sample week layout

mod fixtures;

use cadence_calendar::models::item::ItemFilter;
use cadence_calendar::models::settings::{ColumnWidthMode, Settings, ViewMode};
use cadence_calendar::services::grid_snap::GridSnapCalculator;
use cadence_calendar::services::layout::layouts_for_day;
use cadence_calendar::services::sample::sample_week;
use cadence_calendar::services::settings::SettingsService;
use cadence_calendar::utils::time::week_dates;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_settings_persistence() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let service = SettingsService::new(dir.path().join("nested").join("settings.toml"));

    // Missing file gives defaults
    let mut settings = service.load().expect("Failed to load defaults");
    assert_eq!(settings, Settings::default());

    // Update settings to simulate UI changes
    settings.view = ViewMode::Day;
    settings.show_completed = true;
    settings.column_width = ColumnWidthMode::Cluster;
    settings.time_format = "24h".to_string();
    settings.set_calendar_visible("personal", false);
    settings.grid.snap_increment_hours = 0.5;

    service.save(&settings).expect("Failed to save settings");

    // Verify persistence by reading again
    let loaded = service.load().expect("Failed to reload settings");
    assert_eq!(loaded, settings);
}

#[test]
fn test_invalid_settings_are_not_saved() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let service = SettingsService::new(dir.path().join("settings.toml"));

    let mut settings = Settings::default();
    settings.grid.hour_height_px = -1.0;

    assert!(service.save(&settings).is_err());
    assert!(!service.path().exists());
}

#[test]
fn test_sample_week_lays_out_without_collisions() {
    let anchor = fixtures::monday();
    let items = sample_week(anchor);
    let calc = GridSnapCalculator::default();

    for date in week_dates(anchor, 0) {
        for mode in [ColumnWidthMode::Local, ColumnWidthMode::Cluster] {
            let layouts = layouts_for_day(&items, date, &ItemFilter::all(), mode);

            for (i, a) in layouts.iter().enumerate() {
                assert!(!a.item.all_day);
                for b in &layouts[i + 1..] {
                    if a.item.overlaps(b.item) {
                        assert_ne!(a.column, b.column, "{} and {}", a.item.id, b.item.id);
                    }
                }

                let bottom = calc.offset_for_hour(a.item.end_hour());
                assert!(bottom <= calc.grid_height_px());
            }
        }
    }
}

#[test]
fn test_hiding_completed_items_frees_columns() {
    let anchor = fixtures::monday();
    let items = sample_week(anchor);
    let monday = week_dates(anchor, 0)[1];

    let with_completed = layouts_for_day(&items, monday, &ItemFilter::all(), ColumnWidthMode::Local);
    let without = layouts_for_day(&items, monday, &ItemFilter::default(), ColumnWidthMode::Local);

    assert!(without.len() < with_completed.len());
    assert!(without.iter().all(|layout| !layout.item.completed));
}

#[test]
fn test_hidden_calendar_leaves_the_grid() {
    let anchor = fixtures::monday();
    let items = sample_week(anchor);
    let mut settings = Settings {
        show_completed: true,
        ..Settings::default()
    };
    settings.set_calendar_visible("personal", false);
    let filter = settings.item_filter();

    for date in week_dates(anchor, 0) {
        let layouts = layouts_for_day(&items, date, &filter, ColumnWidthMode::Local);
        assert!(layouts.iter().all(|layout| layout.item.calendar != "personal"));
    }
    assert!(items.iter().any(|item| item.calendar == "personal"));
}
