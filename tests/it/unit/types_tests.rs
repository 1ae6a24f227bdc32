//! Unit tests for core types.

use crate::helpers::{horizontal, imperial_config, metric_config};
use shelfwright::types::{Geometry, InteriorPoint};
use shelfwright::{ConfigError, DividerId, InteractionSettings, Orientation, ShelfConfig, Units};

#[test]
fn test_shelf_config_from_camel_case_json() {
    let json = r#"{"width": 36, "height": 72, "depth": 12, "materialThickness": 0.75, "units": "imperial"}"#;
    let config: ShelfConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config, imperial_config());
}

#[test]
fn test_units_default_to_metric() {
    assert_eq!(Units::default(), Units::Metric);
    assert_eq!(ShelfConfig::default().units, Units::Metric);
    assert!(ShelfConfig::default().validate().is_ok());
}

#[test]
fn test_validate_rejects_nan() {
    let config = ShelfConfig::new(36.0, f64::NAN, 12.0, 0.75, Units::Imperial);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidDimension { name: "height", .. })
    ));
}

#[test]
fn test_thickness_limit_uses_smaller_dimension() {
    // Limit is min(20, 100) / 2 = 10
    let ok = ShelfConfig::new(20.0, 100.0, 30.0, 9.9, Units::Metric);
    let too_thick = ShelfConfig::new(20.0, 100.0, 30.0, 10.0, Units::Metric);
    assert!(ok.validate().is_ok());
    assert_eq!(
        too_thick.validate(),
        Err(ConfigError::ThicknessTooLarge {
            thickness: 10.0,
            limit: 10.0
        })
    );
}

#[test]
fn test_divider_id_display_and_serde() {
    assert_eq!(DividerId(4).to_string(), "divider-4");
    assert_eq!(serde_json::to_string(&DividerId(4)).unwrap(), "4");

    let divider: shelfwright::Divider =
        serde_json::from_str(r#"{"id": 3, "position": 12.5, "orientation": "vertical"}"#).unwrap();
    assert_eq!(divider.id, DividerId(3));
    assert_eq!(divider.orientation, Orientation::Vertical);
}

#[test]
fn test_orientation_other() {
    assert_eq!(Orientation::Horizontal.other(), Orientation::Vertical);
    assert_eq!(Orientation::Vertical.other(), Orientation::Horizontal);
    assert_eq!(Orientation::Vertical.to_string(), "vertical");
}

#[test]
fn test_point_along_axis() {
    let point = InteriorPoint::new(-3.0, 40.0);
    assert_eq!(point.along(Orientation::Horizontal), 40.0);
    assert_eq!(point.along(Orientation::Vertical), -3.0);
}

#[test]
fn test_metric_bounds() {
    let bounds = metric_config().interior();
    assert_eq!(bounds.legal_range(Orientation::Horizontal), (1.0, 95.0));
    assert_eq!(bounds.legal_range(Orientation::Vertical), (-37.0, 37.0));
    assert_eq!(bounds.clamp(Orientation::Vertical, 50.0), 37.0);
}

#[test]
fn test_geometry_gap_check_excludes_self() {
    let geometry = Geometry::new(&metric_config(), &InteractionSettings::default());
    let peers = [horizontal(0, 30.0), horizontal(1, 33.0)];

    assert!(geometry.respects_gap(30.0, &peers[1..], None));
    assert!(geometry.respects_gap(31.0, &peers, Some(DividerId(0))));
    assert!(!geometry.respects_gap(31.5, &peers, Some(DividerId(0))));
    assert_eq!(geometry.min_gap(), 2.0);
}
