//! Rendering of query records for the terminal or an output file.

use phenomizer_core::QueryRecord;

/// Header line written at the top of file output.
pub const FILE_HEADER: &str = "p-value\tdisease-id\tdisease-name\tgene-symbols";

/// A record passes unless its p-value parsed and exceeds the ceiling.
///
/// Records without a parseable p-value pass through: the service emitted
/// them and their significance is simply unknown.
pub fn passes_limit(record: &QueryRecord, limit: f64) -> bool {
    record.p_value.map_or(true, |p| p <= limit)
}

/// Fixed-column tab layout: p-value, `source:id`, description, comma-joined
/// gene symbols. Absent fields render as empty strings.
pub fn tab_line(record: &QueryRecord) -> String {
    let p_value = record.p_value.map(|p| p.to_string()).unwrap_or_default();
    let disease = match (record.disease_source.as_deref(), record.disease_id) {
        (Some(source), Some(id)) => format!("{source}:{id}"),
        (Some(source), None) => source.to_string(),
        (None, Some(id)) => id.to_string(),
        (None, None) => String::new(),
    };
    let description = record.description.as_deref().unwrap_or_default();
    let genes = record.gene_symbols.join(",");
    format!("{p_value}\t{disease}\t{description}\t{genes}")
}

/// One JSON object per record, on a single line.
pub fn json_line(record: &QueryRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string(record)
}
