use proptest::prelude::*;
use sourcemap_engine::{SourceMap, SourceMapError};

use crate::utils::{document_with_mappings, invertible_mappings};

proptest! {
    #[test]
    fn test_non_v3_documents_always_fail(
        version in any::<i64>().prop_filter("not version 3", |v| *v != 3),
        file in "[a-z]{1,12}\\.js",
        mappings in prop::sample::select(vec!["", "AAAA", "AAAA;CAAC", "!!!"]),
    ) {
        let text = serde_json::json!({
            "version": version,
            "file": file,
            "sources": ["input.ts"],
            "mappings": mappings,
        })
        .to_string();
        prop_assert!(matches!(
            SourceMap::parse(&text),
            Err(SourceMapError::UnsupportedVersion(v)) if v == version
        ));
    }

    #[test]
    fn test_line_query_agrees_with_point_query(
        columns in prop::collection::vec(0..500u32, 1..20),
        query_column in 0..100u32,
    ) {
        let map = SourceMap::parse(&document_with_mappings(&invertible_mappings(&columns))).unwrap();
        for line in 0..columns.len() as u32 {
            // Every line's first segment sits at generated column 0, so any
            // query column is at or after it.
            let by_line = map.map_line(line).unwrap();
            let by_point = map.map_point(line, query_column).unwrap();
            prop_assert_eq!(by_line.line, by_point.line);
            prop_assert_eq!(by_line.column, 0);
        }
    }

    #[test]
    fn test_backward_then_forward_round_trips(
        columns in prop::collection::vec(0..500u32, 1..20),
    ) {
        let map = SourceMap::parse(&document_with_mappings(&invertible_mappings(&columns))).unwrap();
        for (line, &column) in columns.iter().enumerate() {
            let back = map.map_point_back(line as u32, column).unwrap();
            prop_assert_eq!(back.line, line as u32);
            let forward = map.map_point(back.line, back.column).unwrap();
            prop_assert_eq!(forward.line, line as u32);
            prop_assert_eq!(forward.column, column);
        }
    }
}
