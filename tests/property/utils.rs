use sourcemap_engine::vlq;

/// Encode one segment's delta fields as a VLQ character run.
pub fn encode_segment(fields: &[i32]) -> String {
    fields.iter().map(|&field| vlq::encode(field)).collect()
}

/// Build the `mappings` payload of an invertible map: generated line `i`
/// maps to original line `i`, with one segment at generated column 0
/// pointing at `columns[i]` and a trailing segment four columns later.
pub fn invertible_mappings(columns: &[u32]) -> String {
    let mut previous_column: i64 = 0;
    let mut groups = Vec::with_capacity(columns.len());
    for (line, &column) in columns.iter().enumerate() {
        let column_delta = i64::from(column) - previous_column;
        let lead = encode_segment(&[0, 0, if line == 0 { 0 } else { 1 }, column_delta as i32]);
        let trail = encode_segment(&[4, 0, 0, 4]);
        groups.push(format!("{lead},{trail}"));
        previous_column = i64::from(column) + 4;
    }
    groups.join(";")
}

/// Wrap a mappings payload in a complete version 3 document.
pub fn document_with_mappings(mappings: &str) -> String {
    serde_json::json!({
        "version": 3,
        "file": "out.js",
        "sources": ["input.ts"],
        "names": [],
        "mappings": mappings,
    })
    .to_string()
}
