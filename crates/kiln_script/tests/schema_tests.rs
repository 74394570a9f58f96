//! Integration tests for kiln_script schema extraction

use kiln_script::{PropertyKind, PropertySchema};

#[test]
fn test_realistic_script() {
    let source = r#"
// Patrol behaviour for guard units.
property("speed", 12)
property("alert_radius", 7.5)
property("faction", hash("guards"))
property("waypoint", url())
property("banner", url("/props/banner"))
property("greeting", "halt")

fn on_update(dt) {
    let step = speed * dt
    move_towards(waypoint, step)
}
"#;

    let schema = PropertySchema::parse("/guard/patrol.kiln", source);

    assert_eq!(schema.script(), "/guard/patrol.kiln");
    assert_eq!(schema.len(), 6);

    let names: Vec<&str> = schema
        .declarations()
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(
        names,
        ["speed", "alert_radius", "faction", "waypoint", "banner", "greeting"]
    );

    assert_eq!(schema.get("speed").unwrap().kind, PropertyKind::Number);
    assert_eq!(schema.get("alert_radius").unwrap().default_text, "7.5");
    assert_eq!(schema.get("faction").unwrap().default_text, "guards");
    assert_eq!(schema.get("waypoint").unwrap().default_text, "");
    assert_eq!(schema.get("banner").unwrap().kind, PropertyKind::Url);
    assert_eq!(schema.get("greeting").unwrap().kind, PropertyKind::Text);
}

#[test]
fn test_extraction_never_fails() {
    // Source that is not even close to well-formed KilnScript still
    // produces a schema; recognizable declarations are honored, the rest
    // is ignored.
    let schema = PropertySchema::parse(
        "/broken.kiln",
        "@@ ??? property(\"health\", 100) {{{ \"unterminated",
    );
    assert_eq!(schema.len(), 1);
    assert_eq!(schema.get("health").unwrap().default_text, "100");
}
