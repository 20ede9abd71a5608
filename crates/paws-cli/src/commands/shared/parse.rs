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

/// Split an `ID=VALUE` assignment. The value is returned untrimmed for the
/// caller to validate.
pub fn parse_assignment(raw: &str) -> anyhow::Result<(u32, &str)> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("invalid assignment '{raw}': expected ID=VALUE"))?;
    let id = id
        .trim()
        .parse::<u32>()
        .map_err(|error| anyhow::anyhow!("invalid id in '{raw}': {error}"))?;
    Ok((id, value))
}
