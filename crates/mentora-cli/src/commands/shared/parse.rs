use anyhow::Context;
use mentora_config::MentoraConfig;
use mentora_core::Semester;
use mentora_core::enums::AssignmentStrategy;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

pub fn parse_semester(raw: u8) -> anyhow::Result<Semester> {
    Semester::new(raw).context("invalid --semester")
}

/// `--strategy` if given, otherwise `assignment.default_strategy`.
pub fn resolve_strategy(
    raw: Option<&str>,
    config: &MentoraConfig,
) -> anyhow::Result<AssignmentStrategy> {
    raw.map_or(Ok(config.assignment.default_strategy), |value| {
        parse_enum(value, "strategy")
    })
}
