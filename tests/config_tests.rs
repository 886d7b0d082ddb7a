//! Configuration and snapshot integration tests.

use match_cascade::core::{ConfigError, Edge, Gravity, Grid, GridRng, MatchMode, ResolverConfig};
use match_cascade::refill::{NoRefill, RandomRefill};
use match_cascade::resolve::{Cascade, MatchResolver};

// =============================================================================
// Config File Tests
// =============================================================================

/// Test loading a variant from a TOML file on disk.
#[test]
fn test_load_toml_file() {
    let path = std::env::temp_dir().join(format!("match-cascade-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r#"
        min_group_size = 3
        adjacency = "Diagonal"
        match_mode = "Lines"
        max_passes = 50
        "#,
    )
    .unwrap();

    let config = ResolverConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config, ResolverConfig::columns().with_max_passes(50));
    assert_eq!(config.gravity, Gravity::Down);
    assert!(MatchResolver::new(config).is_ok());
}

/// Test that every inconsistent combination is reported as a validation error.
#[test]
fn test_invalid_toml_combinations() {
    let cases = [
        "min_group_size = 0",
        "max_passes = 0",
        "adjacency = \"Hex\"\nmatch_mode = \"Lines\"",
        "anchor = \"Top\"",
        "gravity = \"Up\"\ncollapse_empty_columns = true",
    ];
    for text in cases {
        let err = ResolverConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)), "{text}: {err}");
    }
}

/// Test that unknown enum values are parse errors.
#[test]
fn test_unknown_variant_is_parse_error() {
    let err = ResolverConfig::from_toml_str("gravity = \"Sideways\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse TOML"));
}

/// Test that an empty document yields the default configuration.
#[test]
fn test_empty_toml_is_default() {
    let config = ResolverConfig::from_toml_str("").unwrap();
    assert_eq!(config, ResolverConfig::default());
    assert_eq!(config.match_mode, MatchMode::Connected);
    assert_eq!(config.anchor, None::<Edge>);
}

// =============================================================================
// Snapshot Tests
// =============================================================================

/// Test that a cascade survives a JSON round trip.
#[test]
fn test_cascade_json_roundtrip() {
    let grid = Grid::random(6, 6, 3, &mut GridRng::new(5));
    let resolver = MatchResolver::new(ResolverConfig::new(3)).unwrap();
    let cascade = resolver.resolve_until_stable_with_snapshots(&grid, &mut NoRefill);

    let json = serde_json::to_string(&cascade).unwrap();
    let back: Cascade = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cascade);
}

/// Test that a refill resumed from saved RNG state continues the same stream.
#[test]
fn test_refill_resumes_from_state() {
    let mut refill = RandomRefill::new(77, 5);
    for _ in 0..13 {
        refill.next_tile();
    }
    let saved = serde_json::to_string(&refill.state()).unwrap();
    let mut resumed = RandomRefill::from_rng(GridRng::from_state(&serde_json::from_str(&saved).unwrap()), 5);

    for _ in 0..20 {
        assert_eq!(refill.next_tile(), resumed.next_tile());
    }
}

/// Test that a grid with an out-of-range kind is rejected on load.
#[test]
fn test_grid_json_validates_kinds() {
    let grid = Grid::from_ascii(2, "01\n10");
    let mut value = serde_json::to_value(&grid).unwrap();
    value["kind_count"] = serde_json::json!(1);
    assert!(serde_json::from_value::<Grid>(value).is_err());
}
