use tusk_core::EngagementFactors;

// ── Serde defaults ───────────────────────────────────────────────────────

#[test]
fn empty_json_deserializes_to_all_zero_false() {
    let factors: EngagementFactors = serde_json::from_str("{}").unwrap();
    assert_eq!(factors, EngagementFactors::default());
    assert_eq!(factors.view_duration_secs, 0);
    assert!(!factors.nda_accepted);
    assert!(!factors.rapid_bounce);
}

#[test]
fn partial_json_fills_the_rest_with_defaults() {
    let factors: EngagementFactors =
        serde_json::from_str(r#"{"view_duration_secs": 120, "nda_accepted": true}"#).unwrap();
    assert_eq!(factors.view_duration_secs, 120);
    assert!(factors.nda_accepted);
    assert_eq!(factors.downloads, 0);
    assert_eq!(factors.completion_rate, 0.0);
}

// ── Clamping at point of use ─────────────────────────────────────────────

#[test]
fn percentage_ratios_clamp_to_unit_interval() {
    let factors = EngagementFactors {
        completion_rate: 150.0,
        avg_scroll_depth: -20.0,
        ..EngagementFactors::default()
    };
    assert_eq!(factors.completion_ratio(), 1.0);
    assert_eq!(factors.scroll_ratio(), 0.0);
}

#[test]
fn non_finite_percentages_map_to_zero() {
    let factors = EngagementFactors {
        completion_rate: f64::NAN,
        avg_scroll_depth: f64::INFINITY,
        ..EngagementFactors::default()
    };
    assert_eq!(factors.completion_ratio(), 0.0);
    assert_eq!(factors.scroll_ratio(), 0.0);
}

#[test]
fn pages_ratio_caps_at_one_when_viewed_exceeds_total() {
    let factors = EngagementFactors {
        pages_viewed: 15,
        total_pages: 10,
        ..EngagementFactors::default()
    };
    assert_eq!(factors.pages_ratio(), 1.0);
}

#[test]
fn pages_ratio_is_zero_when_total_unknown() {
    let factors = EngagementFactors {
        pages_viewed: 5,
        total_pages: 0,
        ..EngagementFactors::default()
    };
    assert_eq!(factors.pages_ratio(), 0.0);
}

// ── Derived completion ───────────────────────────────────────────────────

#[test]
fn derived_completion_rate_from_page_counts() {
    let factors = EngagementFactors {
        pages_viewed: 5,
        total_pages: 10,
        ..EngagementFactors::default()
    };
    assert_eq!(factors.derived_completion_rate(), 50.0);
}

#[test]
fn derived_completion_rate_degrades_to_zero_without_page_total() {
    let factors = EngagementFactors {
        pages_viewed: 5,
        total_pages: 0,
        ..EngagementFactors::default()
    };
    assert_eq!(factors.derived_completion_rate(), 0.0);
}
