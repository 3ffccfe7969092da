//! End-to-end tests for the generation boundary.
//!
//! These exercise the public API the way a rendering or persistence layer
//! would: raw JSON in, envelope JSON out.

use page_forge::cli::{run_with_cli, Cli};
use page_forge::{handle_json, GenerateRequest, Synthesizer};

use clap::Parser;

#[test]
fn json_round_trip_produces_complete_document() {
    let body = r#"{"prompt": "A SaaS tool for project management with a modern design"}"#;
    let raw = handle_json(body);
    let value: serde_json::Value = serde_json::from_str(&raw).expect("response is valid JSON");

    assert_eq!(value["success"], true);
    let data = &value["data"];
    assert_eq!(data["industry"], "saas");
    assert_eq!(data["businessType"], "general");

    // The document carries every section of the page.
    for field in [
        "companyName",
        "tagline",
        "description",
        "features",
        "benefits",
        "howItWorks",
        "faqs",
        "pricing",
        "onboardingQuestions",
        "targetAudience",
        "valueProposition",
        "callToAction",
        "socialProof",
        "testimonials",
        "style",
        "images",
        "components",
        "sections",
    ] {
        assert!(!data[field].is_null(), "missing field {field}");
    }

    // Nine sections, orders 1..=9.
    let sections = data["sections"].as_object().expect("sections object");
    assert_eq!(sections.len(), 9);
    let mut orders: Vec<u64> = sections
        .values()
        .map(|s| s["order"].as_u64().expect("order"))
        .collect();
    orders.sort_unstable();
    assert_eq!(orders, (1..=9).collect::<Vec<u64>>());

    // Five palette slots, all hex.
    let palette = data["style"]["customColors"]
        .as_object()
        .expect("customColors object");
    assert_eq!(palette.len(), 5);
    for (slot, value) in palette {
        assert!(
            value.as_str().expect("hex string").starts_with('#'),
            "slot {slot}"
        );
    }
}

#[test]
fn malformed_body_yields_uniform_failure() {
    let raw = handle_json("{\"industry\": \"saas\"}");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("response is valid JSON");
    assert_eq!(value["success"], false);
    assert!(value.get("data").is_none());
    assert!(value["error"].is_string());
}

#[test]
fn seeded_synthesizers_agree_through_the_public_api() {
    let request = GenerateRequest::new("brown and white dog sitting app");

    let first = page_forge::api::handle_with(&mut Synthesizer::seeded(99), &request);
    let second = page_forge::api::handle_with(&mut Synthesizer::seeded(99), &request);

    let first = serde_json::to_value(&first).expect("serialize");
    let second = serde_json::to_value(&second).expect("serialize");
    assert_eq!(first, second);
    assert_eq!(first["data"]["style"]["customColors"]["text"], "#ffffff");
    assert_eq!(first["data"]["style"]["customColors"]["background"], "#ffffff");
}

#[test]
fn cli_generate_writes_response_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let out_path = dir.path().join("page.json");

    let cli = Cli::try_parse_from([
        "page-forge",
        "generate",
        "--prompt",
        "an online store for handmade ceramics",
        "--seed",
        "11",
        "--output",
        out_path.to_str().expect("utf-8 path"),
    ])
    .expect("valid invocation");
    run_with_cli(cli).expect("generation succeeds");

    let written = std::fs::read_to_string(&out_path).expect("file written");
    let value: serde_json::Value = serde_json::from_str(&written).expect("valid JSON file");
    assert_eq!(value["success"], true);
    assert_eq!(value["data"]["industry"], "ecommerce");
}

#[test]
fn cli_generate_fails_on_blank_prompt() {
    let cli = Cli::try_parse_from(["page-forge", "generate", "--prompt", "   "])
        .expect("valid invocation");
    let result = run_with_cli(cli);
    assert!(result.is_err());
}
