use serde::{Deserialize, Deserializer};

// query parameters arrive as text; anything that does not parse as a page
// number silently falls back to the first page
pub fn deserialize_page_or_first<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.parse().ok()).unwrap_or(1))
}
