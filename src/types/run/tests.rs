use super::*;
use crate::types::{
    AssistantTool, FunctionTool, NucleusSamplingTemperature, SamplingTemperature,
    TemperatureParam, TruncationStrategy,
};
use serde_json::json;
use std::collections::BTreeMap;
use tracing_test::traced_test;

fn full_builder() -> RunRequestBuilder {
    RunRequest::builder()
        .assistant_id("asst_abc123")
        .model("gpt-4o")
        .instructions("You are a terse assistant.")
        .additional_instructions("Address the user as Captain.")
        .add_tool(AssistantTool::code_interpreter())
        .add_tool(AssistantTool::function(
            FunctionTool::new("lookup")
                .with_description("Look something up")
                .with_parameters(json!({"type": "object", "properties": {"q": {"type": "string"}}})),
        ))
        .add_metadata("team", "support")
        .add_metadata("ticket", "42")
        .stream(true)
        .temperature(SamplingTemperature::new(0.9).unwrap())
        .truncation_strategy(TruncationStrategy::last_messages(10))
}

#[test]
fn build_with_only_assistant_id_uses_defaults() {
    let request = RunRequest::builder().assistant_id("asst_1").build().unwrap();
    assert_eq!(request.assistant_id.as_str(), "asst_1");
    assert!(!request.stream);
    assert!(request.model.is_none());
    assert!(request.instructions.is_none());
    assert!(request.additional_instructions.is_none());
    assert!(request.tools.is_none());
    assert!(request.metadata.is_none());
    assert!(request.sampling_temperature.is_none());
    assert!(request.nucleus_temperature.is_none());
    assert!(request.truncation_strategy.is_none());
    assert_eq!(request, RunRequest::new("asst_1"));
}

#[test]
fn build_without_assistant_id_fails() {
    let err = RunRequest::builder().model("gpt-4o").build().unwrap_err();
    assert_eq!(err, crate::error::RunError::MissingRequiredField("assistant_id"));
    assert_eq!(err.to_string(), "assistant_id is required");
}

#[test]
fn nucleus_percent_becomes_top_p_fraction() {
    let request = RunRequest::builder()
        .assistant_id("asst_1")
        .temperature(NucleusSamplingTemperature::new(25).unwrap())
        .build()
        .unwrap();
    assert_eq!(request.nucleus_temperature, Some(0.25));
    assert!(request.sampling_temperature.is_none());
}

#[test]
fn sampling_temperature_is_copied_verbatim() {
    let request = RunRequest::builder()
        .assistant_id("asst_1")
        .temperature(TemperatureParam::sampling(0.9).unwrap())
        .build()
        .unwrap();
    assert_eq!(request.sampling_temperature.map(|t| t.value()), Some(0.9));
    assert!(request.nucleus_temperature.is_none());
}

#[test]
fn later_temperature_choice_replaces_earlier_one() {
    let request = RunRequest::builder()
        .assistant_id("asst_1")
        .temperature(TemperatureParam::sampling(1.0).unwrap())
        .temperature(TemperatureParam::nucleus(50).unwrap())
        .build()
        .unwrap();
    assert!(request.sampling_temperature.is_none());
    assert_eq!(request.nucleus_temperature, Some(0.5));
}

#[test]
fn minimal_request_serializes_only_required_fields() {
    let json = RunRequest::new("asst_1").to_json_string().unwrap();
    assert_eq!(json, r#"{"assistant_id":"asst_1","stream":false}"#);
}

#[test]
fn full_request_wire_shape() {
    let v = full_builder().build().unwrap().to_json_value().unwrap();
    assert_eq!(v["assistant_id"], "asst_abc123");
    assert_eq!(v["model"], "gpt-4o");
    assert_eq!(v["additional_instructions"], "Address the user as Captain.");
    assert_eq!(v["tools"][0], json!({"type": "code_interpreter"}));
    assert_eq!(v["tools"][1]["function"]["name"], "lookup");
    assert_eq!(v["metadata"], json!({"team": "support", "ticket": "42"}));
    assert_eq!(v["stream"], true);
    assert_eq!(v["temperature"], 0.9);
    assert!(v.get("top_p").is_none());
    assert_eq!(
        v["truncation_strategy"],
        json!({"type": "last_messages", "last_messages": 10})
    );
}

#[test]
fn serialized_request_round_trips_byte_for_byte() {
    let first = full_builder().build().unwrap().to_json_string().unwrap();
    let parsed = RunRequest::from_json_str(&first).unwrap();
    let second = parsed.to_json_string().unwrap();
    assert_eq!(first, second);

    let nucleus = RunRequest::builder()
        .assistant_id("asst_2")
        .temperature(TemperatureParam::nucleus(10).unwrap())
        .build()
        .unwrap()
        .to_json_string()
        .unwrap();
    let reparsed = RunRequest::from_json_str(&nucleus).unwrap();
    assert_eq!(reparsed.to_json_string().unwrap(), nucleus);
}

#[test]
fn deserialization_defaults_stream_and_validates_temperature() {
    let request = RunRequest::from_json_str(r#"{"assistant_id":"asst_1"}"#).unwrap();
    assert!(!request.stream);

    let err = RunRequest::from_json_str(r#"{"assistant_id":"asst_1","temperature":3.0}"#)
        .unwrap_err();
    assert!(matches!(err, crate::error::RunError::JsonError(_)));
}

#[test]
fn builder_can_be_reused_after_build() {
    let builder = full_builder();
    let first = builder.build().unwrap();
    let second = builder.build().unwrap();
    assert_eq!(first, second);

    let mut builder = builder;
    builder.instructions = None;
    let third = builder.build().unwrap();
    assert!(third.instructions.is_none());
    assert_eq!(third.model, first.model);
}

#[test]
fn run_request_configures_slots_in_place() {
    let request = run_request(|b| {
        b.assistant_id = Some("asst_1".into());
        b.temperature = TemperatureParam::nucleus(100).ok();
        b.truncation_strategy = Some(TruncationStrategy::last_messages(3));
    })
    .unwrap();
    assert_eq!(request.nucleus_temperature, Some(1.0));
    assert_eq!(
        request.truncation_strategy.and_then(|t| t.last_messages_count()),
        Some(3)
    );

    assert!(run_request(|_| {}).unwrap_err().is_missing_field());
}

#[test]
fn metadata_limits() {
    let mut request = RunRequest::new("asst_1");
    assert!(request.validate_metadata().is_ok());

    let sixteen: BTreeMap<String, String> =
        (0..16).map(|i| (format!("k{i}"), "v".to_string())).collect();
    request.metadata = Some(sixteen);
    assert!(request.validate_metadata().is_ok());

    let seventeen: BTreeMap<String, String> =
        (0..17).map(|i| (format!("k{i}"), "v".to_string())).collect();
    request.metadata = Some(seventeen);
    assert!(matches!(
        request.validate_metadata(),
        Err(crate::error::RunError::InvalidMetadata(_))
    ));

    request.metadata = Some(BTreeMap::from([("k".repeat(65), "v".to_string())]));
    assert!(request.validate_metadata().is_err());

    request.metadata = Some(BTreeMap::from([("k".repeat(64), "v".repeat(512))]));
    assert!(request.validate_metadata().is_ok());

    request.metadata = Some(BTreeMap::from([("key".to_string(), "v".repeat(513))]));
    let err = request.validate_metadata().unwrap_err();
    assert!(err.to_string().starts_with("Invalid metadata"));
}

#[cfg(not(feature = "strict-metadata"))]
#[test]
fn build_does_not_enforce_metadata_limits_by_default() {
    let builder = (0..20).fold(RunRequest::builder().assistant_id("asst_1"), |b, i| {
        b.add_metadata(format!("k{i}"), "v")
    });
    assert!(builder.build().is_ok());
}

#[cfg(feature = "strict-metadata")]
#[test]
fn build_enforces_metadata_limits_when_strict() {
    let builder = (0..20).fold(RunRequest::builder().assistant_id("asst_1"), |b, i| {
        b.add_metadata(format!("k{i}"), "v")
    });
    assert!(matches!(
        builder.build(),
        Err(crate::error::RunError::InvalidMetadata(_))
    ));
}

#[test]
#[traced_test]
fn build_logs_resolved_temperature_control() {
    RunRequest::builder()
        .assistant_id("asst_1")
        .temperature(TemperatureParam::nucleus(25).unwrap())
        .build()
        .unwrap();
    assert!(logs_contain("nucleus sampling: 25% -> top_p 0.25"));
}
