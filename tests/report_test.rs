use docstyle_cli::api::UploadResponse;
use docstyle_cli::report::render;

fn decode(json: &str) -> UploadResponse {
    serde_json::from_str(json).unwrap()
}

#[test]
fn full_response_prints_every_field() {
    let resp = decode(
        r##"{
            "sessionId": "abc",
            "styleExtraction": {
                "success": true,
                "confidence": 0.9,
                "rawDocxStyles": {
                    "fonts": ["Arial"],
                    "defaultFont": "Arial",
                    "fontSizes": [12],
                    "colors": ["#000000"]
                },
                "simplifiedStyles": {
                    "font": "Arial",
                    "fontSize": 12,
                    "colors": {"primary": "#000000"}
                }
            }
        }"##,
    );

    let expected = "\
Session ID: abc

Style Extraction:
  Success: True
  Confidence: 0.9

Raw DOCX Styles:
  Fonts: ['Arial']
  Default Font: Arial
  Font Sizes: [12]
  Colors: ['#000000']

Simplified Styles:
  Font: Arial
  Font Size: 12
  Colors: {'primary': '#000000'}
";
    assert_eq!(render(&resp), expected);
}

#[test]
fn missing_style_extraction_prints_placeholders() {
    let resp = decode(r#"{"sessionId": "abc"}"#);
    let out = render(&resp);

    assert!(out.contains("Session ID: abc\n"));
    assert!(out.contains("  Success: None\n"));
    assert!(out.contains("  Confidence: None\n"));
    assert!(out.contains("  No raw styles found\n"));
    assert!(out.contains("  No simplified styles found\n"));
}

#[test]
fn missing_session_id_prints_na() {
    let resp = decode("{}");
    assert!(render(&resp).starts_with("Session ID: N/A\n"));
}

#[test]
fn empty_style_sections_use_the_fallback_lines() {
    // Present-but-empty objects collapse to the fallback, same as absent keys.
    let resp = decode(
        r#"{
            "styleExtraction": {
                "success": false,
                "rawDocxStyles": {},
                "simplifiedStyles": {}
            }
        }"#,
    );
    let out = render(&resp);

    assert!(out.contains("  Success: False\n"));
    assert!(out.contains("  No raw styles found\n"));
    assert!(out.contains("  No simplified styles found\n"));
}

#[test]
fn non_empty_section_prints_per_key_defaults() {
    // One known key is enough to keep the section; the other lines fall
    // back key by key instead of collapsing.
    let resp = decode(
        r#"{"styleExtraction": {"rawDocxStyles": {"fonts": []}}}"#,
    );
    let out = render(&resp);

    assert!(out.contains("  Fonts: []\n"));
    assert!(out.contains("  Default Font: None\n"));
    assert!(out.contains("  Font Sizes: []\n"));
    assert!(out.contains("  Colors: []\n"));
    assert!(!out.contains("No raw styles found"));
}

#[test]
fn list_and_map_values_render_as_literals() {
    let resp = decode(
        r##"{
            "styleExtraction": {
                "rawDocxStyles": {
                    "fonts": ["Arial", "Calibri"],
                    "fontSizes": [10, 12.5]
                },
                "simplifiedStyles": {
                    "colors": {"accent": "#ff0000"}
                }
            }
        }"##,
    );
    let out = render(&resp);

    assert!(out.contains("  Fonts: ['Arial', 'Calibri']\n"));
    assert!(out.contains("  Font Sizes: [10, 12.5]\n"));
    assert!(out.contains("  Colors: {'accent': '#ff0000'}\n"));
}
