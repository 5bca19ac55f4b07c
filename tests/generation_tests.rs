// End-to-end generation runs against scratch directories
use std::fs;
use std::path::Path;
use irize::config::GeneratorConfig;
use irize::error::EntryError;
use irize::generate::{generate_all, EntryStatus, Generator, Summary};
use irize::icon_spec::{app_icon_specs, find_spec, Idiom, IconSpec};
use irize::manifest::AppIconManifest;
use irize::render::RenderOptions;
use irize::writer::IconWriter;
use tempfile::TempDir;

fn two_icon_table() -> Vec<IconSpec> {
    vec![*find_spec("Icon-60@3x").unwrap(), *find_spec("Icon-1024").unwrap()]
}

fn generator(primary: &Path, fallback: &Path) -> Generator {
    Generator::new(IconWriter::new(primary, fallback), RenderOptions::default())
}

fn png_dimensions(path: &Path) -> (u32, u32) {
    let img = image::open(path).unwrap();
    (img.width(), img.height())
}

#[test]
fn test_writes_into_primary_directory() {
    let primary = TempDir::new().unwrap();
    let fallback = TempDir::new().unwrap();

    let report = generator(primary.path(), fallback.path()).generate_all(&two_icon_table());

    assert_eq!(report.summary(), Summary { success: 2, fallback: 0, failure: 0 });
    assert_eq!(png_dimensions(&primary.path().join("Icon-60@3x.png")), (180, 180));
    assert_eq!(png_dimensions(&primary.path().join("Icon-1024.png")), (1024, 1024));
    assert!(fs::read_dir(fallback.path()).unwrap().next().is_none());
}

#[test]
fn test_missing_primary_falls_back() {
    let root = TempDir::new().unwrap();
    let primary = root.path().join("Assets.xcassets/AppIcon.appiconset");
    let fallback = root.path().join("Documents/IRizeIcons");

    let report = generator(&primary, &fallback).generate_all(&two_icon_table());

    assert_eq!(report.summary(), Summary { success: 0, fallback: 2, failure: 0 });
    assert_eq!(png_dimensions(&fallback.join("Icon-60@3x.png")), (180, 180));
    assert_eq!(png_dimensions(&fallback.join("Icon-1024.png")), (1024, 1024));
    assert!(!primary.exists());
}

#[test]
fn test_one_failing_entry_does_not_stop_the_batch() {
    let primary = TempDir::new().unwrap();
    let fallback = TempDir::new().unwrap();
    // A directory squatting on the middle entry's filename makes only that write fail
    fs::create_dir(primary.path().join("Icon-29@2x.png")).unwrap();

    let specs = vec![
        *find_spec("Icon-20@2x").unwrap(),
        *find_spec("Icon-29@2x").unwrap(),
        *find_spec("Icon-40@2x").unwrap(),
    ];
    let report = generator(primary.path(), fallback.path()).generate_all(&specs);

    assert_eq!(report.summary(), Summary { success: 2, fallback: 1, failure: 0 });
    assert!(report.entries[0].status.is_success());
    assert!(report.entries[1].status.is_fallback());
    assert!(report.entries[2].status.is_success());
    assert_eq!(png_dimensions(&fallback.path().join("Icon-29@2x.png")), (58, 58));
}

#[test]
fn test_total_failure_is_reported_not_raised() {
    let root = TempDir::new().unwrap();
    let blocker = root.path().join("not-a-directory");
    fs::write(&blocker, b"").unwrap();

    let report = generator(&root.path().join("missing"), &blocker).generate_all(&two_icon_table());

    assert_eq!(report.summary(), Summary { success: 0, fallback: 0, failure: 2 });
    assert!(report.all_failed());
    assert!(matches!(report.entries[0].status, EntryStatus::Failed(EntryError::Write(_))));
}

#[test]
fn test_render_failure_writes_nothing() {
    let primary = TempDir::new().unwrap();
    let fallback = TempDir::new().unwrap();
    let broken = IconSpec {
        identifier: "Icon-broken",
        pixel_size: 0,
        description: "zero-sized",
        idiom: Idiom::IPhone,
        point_size: 0.0,
        scale: 1,
    };
    let specs = vec![broken, *find_spec("Icon-20@3x").unwrap()];

    let report = generator(primary.path(), fallback.path()).generate_all(&specs);

    assert_eq!(report.summary(), Summary { success: 1, fallback: 0, failure: 1 });
    assert!(matches!(report.entries[0].status, EntryStatus::Failed(EntryError::Render(_))));
    assert!(!primary.path().join("Icon-broken.png").exists());
    assert!(!fallback.path().join("Icon-broken.png").exists());
}

#[test]
fn test_rerun_overwrites_with_identical_output() {
    let primary = TempDir::new().unwrap();
    let fallback = TempDir::new().unwrap();
    let generator = generator(primary.path(), fallback.path());
    let path = primary.path().join("Icon-60@3x.png");

    generator.generate_all(&two_icon_table());
    let first = fs::read(&path).unwrap();
    fs::write(&path, b"stale").unwrap();

    let report = generator.generate_all(&two_icon_table());
    let second = fs::read(&path).unwrap();

    assert_eq!(report.success_count(), 2);
    assert_eq!(first, second);
}

#[test]
fn test_manifest_written_alongside_icons() {
    let primary = TempDir::new().unwrap();
    let fallback = TempDir::new().unwrap();
    let config = GeneratorConfig {
        primary_dir: primary.path().to_path_buf(),
        fallback_dir: fallback.path().to_path_buf(),
        write_manifest: true,
        ..GeneratorConfig::default()
    };

    let report = generate_all(&two_icon_table(), &config).unwrap();

    assert!(report.manifest.as_ref().unwrap().is_success());
    assert_eq!(report.entries.len(), 2);
    let manifest = read_manifest(primary.path());
    assert_eq!(manifest.images.len(), app_icon_specs().len());
    assert!(manifest.images.iter().any(|i| i.filename == "Icon-60@3x.png"));
}

fn read_manifest(dir: &Path) -> AppIconManifest {
    let json = fs::read_to_string(dir.join("Contents.json")).unwrap();
    serde_json::from_str(&json).unwrap()
}

fn manifest_config(primary: &Path, fallback: &Path) -> GeneratorConfig {
    GeneratorConfig {
        primary_dir: primary.to_path_buf(),
        fallback_dir: fallback.to_path_buf(),
        write_manifest: true,
        ..GeneratorConfig::default()
    }
}

#[test]
fn test_subset_run_keeps_full_manifest() {
    let primary = TempDir::new().unwrap();
    let fallback = TempDir::new().unwrap();
    let config = manifest_config(primary.path(), fallback.path());

    generate_all(app_icon_specs(), &config).unwrap();
    assert_eq!(read_manifest(primary.path()).images.len(), 18);

    let report = generate_all(&[*find_spec("Icon-60@3x").unwrap()], &config).unwrap();

    assert_eq!(report.entries.len(), 1);
    assert!(report.manifest.as_ref().unwrap().is_success());
    let manifest = read_manifest(primary.path());
    assert_eq!(manifest.images.len(), 18);
    assert_eq!(manifest, AppIconManifest::from_specs(app_icon_specs()));
}

#[test]
fn test_manifest_mismatches_name_entries_missing_from_catalog() {
    let primary = TempDir::new().unwrap();
    let fallback = TempDir::new().unwrap();
    fs::create_dir(primary.path().join("Icon-1024.png")).unwrap();
    let config = manifest_config(primary.path(), fallback.path());

    let report = generate_all(&two_icon_table(), &config).unwrap();

    assert_eq!(report.manifest_mismatches(), vec!["Icon-1024"]);
    assert!(report.manifest.as_ref().unwrap().is_success());
}

#[test]
fn test_invalid_config_is_rejected_before_any_write() {
    let dir = TempDir::new().unwrap();
    let config = GeneratorConfig {
        primary_dir: dir.path().to_path_buf(),
        fallback_dir: dir.path().to_path_buf(),
        ..GeneratorConfig::default()
    };

    assert!(generate_all(&two_icon_table(), &config).is_err());
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn test_config_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.yaml");
    let config = GeneratorConfig {
        primary_dir: dir.path().join("catalog"),
        fallback_dir: dir.path().join("fallback"),
        apply_corner_mask: true,
        accent_color: "#FF8800".to_string(),
        write_manifest: false,
    };

    config.save(&path).unwrap();
    let loaded = GeneratorConfig::load(&path).unwrap();

    assert_eq!(loaded, config);
}
