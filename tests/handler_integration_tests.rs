use design_token_validator::{handle_raw, Engine, Response, SystemConstraintSpec};
use serde_json::json;

fn engine() -> Engine {
    Engine::new(SystemConstraintSpec::builtin())
}

fn request(target: &str, primary: &str) -> String {
    json!({
        "tokens": {
            "colors": {
                "background": "#FFFFFF",
                "surface": "#fafafa",
                "primary": "#004411",
                "onPrimary": "#fff",
                "textPrimary": "#111",
                "textSecondary": "#3a3a3a",
                "border": "#d0d0d0"
            },
            "typography": {
                "fontFamily": "Source Serif",
                "baseFontSize": 16,
                "scaleRatio": 1.25,
                "sizes": {"xs": 10.24, "sm": 12.8, "md": 16, "lg": 20, "xl": 25, "h3": 31.25, "h2": 39.06, "h1": 48.83}
            },
            "spacing": {"baseUnit": 4, "scale": {"xs": 4, "sm": 8, "md": 12, "lg": 16, "xl": 24}},
            "meta": {"generatedBy": "generator", "method": "rules", "timestamp": "2024-05-01", "seed": 7}
        },
        "userConstraints": {
            "themeMode": "light",
            "accessibilityTarget": target,
            "brand": {"primary": primary, "secondary": "#abc"},
            "typography": {"baseFontSize": 16, "scalePreset": "balanced"},
            "spacing": {"density": "condensed"},
            "styleTags": ["calm"]
        }
    })
    .to_string()
}

#[test]
fn test_successful_request_envelope() {
    let response = handle_raw(&request("AA", "#004411"), &engine());
    assert_eq!(response.status(), 200);
    assert_eq!(response.exit_code(), 0);

    let body = response.to_json();
    assert_eq!(body["ok"], true);
    assert_eq!(body["report"]["summary"]["systemPass"], true);
    assert_eq!(body["analysis"]["derived"]["scaleRatio"], 1.25);
    assert_eq!(body["analysis"]["derived"]["baseUnit"], 4.0);
    assert!(body["analysis"]["warnings"].as_array().unwrap().is_empty());
}

#[test]
fn test_aaa_request_carries_info_warning() {
    let response = handle_raw(&request("AAA", "#004411"), &engine());
    let body = response.to_json();
    assert_eq!(body["analysis"]["warnings"][0]["code"], "AAA_STRICT");
    assert_eq!(body["analysis"]["warnings"][0]["severity"], "info");
}

#[test]
fn test_invalid_brand_color_rejected_before_engine() {
    let response = handle_raw(&request("AA", "green"), &engine());
    assert_eq!(response.status(), 400);

    let Response::InvalidConstraints { issues } = &response else {
        panic!("expected invalid constraints");
    };
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].path, "brand.primary");

    let body = response.to_json();
    assert!(body.get("report").is_none());
}

#[test]
fn test_unknown_accessibility_target_rejected() {
    let response = handle_raw(&request("A", "#004411"), &engine());
    let Response::InvalidConstraints { issues } = response else {
        panic!("expected invalid constraints");
    };
    assert_eq!(issues[0].path, "accessibilityTarget");
}

#[test]
fn test_non_object_body_is_client_error() {
    let response = handle_raw("[1, 2, 3]", &engine());
    assert_eq!(response.status(), 400);
}

#[test]
fn test_truncated_body_is_server_error() {
    let raw = request("AA", "#004411");
    let response = handle_raw(&raw[..raw.len() / 2], &engine());
    assert_eq!(response.status(), 500);
    assert_eq!(response.to_json()["ok"], false);
}
