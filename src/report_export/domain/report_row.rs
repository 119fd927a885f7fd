use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Response body of `bom.json` and `security.json`
///
/// The server wraps its rows in a DataTables-style envelope. A missing or
/// null `aaData` is treated as an empty list. An object-valued `aaData`
/// contributes its values as rows, in document order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportPayload {
    #[serde(rename = "aaData", default, deserialize_with = "lenient_rows")]
    aa_data: Option<Vec<ReportRow>>,
}

impl ReportPayload {
    pub fn new(rows: Vec<ReportRow>) -> Self {
        Self {
            aa_data: Some(rows),
        }
    }

    pub fn rows(&self) -> &[ReportRow] {
        self.aa_data.as_deref().unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}

/// One row of a report.
///
/// Every field is read as text regardless of its JSON type, since the
/// server is not consistent about strings versus numbers and lists. Only
/// the top-level keys of an object row are read; a row that is not an
/// object still counts as a row, with every field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRow {
    /// Combined `name:version` string
    pub name: String,
    /// CVE identifier, empty when the row has no known vulnerability
    pub reference: String,
    /// CVSS score
    pub score: String,
    /// Vulnerability source, e.g. `cve`
    pub source: String,
    pub url: String,
    /// Files the component was found in
    pub pathnames: String,
}

impl ReportRow {
    /// Creates a row carrying only a component name
    pub fn component(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builds a row from any JSON value found in `aaData`
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(fields) => Self::from_fields(fields),
            _ => Self::default(),
        }
    }

    fn from_fields(fields: &Map<String, Value>) -> Self {
        let text = |key: &str| fields.get(key).map(render_text).unwrap_or_default();
        Self {
            name: text("name"),
            reference: text("reference"),
            score: text("score"),
            source: text("source"),
            url: text("url"),
            pathnames: text("pathnames"),
        }
    }
}

impl<'de> Deserialize<'de> for ReportRow {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Array elements or object values become rows; a scalar `aaData` holds none
fn lenient_rows<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<ReportRow>>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(items.iter().map(ReportRow::from_value).collect()),
        Some(Value::Object(entries)) => Some(entries.values().map(ReportRow::from_value).collect()),
        Some(_) => Some(Vec::new()),
    };
    Ok(rows)
}

/// Renders a JSON value the way the report consumers expect to see it:
/// lists flattened and joined with `,`, whole floats without a fraction.
pub fn render_text(value: &Value) -> String {
    match value {
        Value::Null | Value::Object(_) => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(render_text)
            .collect::<Vec<_>>()
            .join(","),
    }
}
