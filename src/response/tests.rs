//! Tests for the response envelope

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_parse_full_envelope() {
    let body = json!({
        "responseHeader": {
            "zkConnected": true,
            "status": 0,
            "QTime": 12,
            "params": {
                "q": "title:rust",
                "fl": "id,title",
                "cursorMark": "*",
                "sort": "id asc",
                "rows": "50",
                "start": "0"
            }
        },
        "response": {
            "numFound": 1024,
            "start": 0,
            "docs": [
                {"id": "1", "title": "The Book"},
                {"id": "2", "title": "Another Book"}
            ]
        },
        "nextCursorMark": "AoE1"
    });

    let envelope: SolrResponse = serde_json::from_value(body).unwrap();

    assert!(envelope.response_header.zk_connected);
    assert_eq!(envelope.response_header.status, 0);
    assert_eq!(envelope.response_header.q_time, 12);
    assert_eq!(envelope.response_header.params.q, "title:rust");
    assert_eq!(envelope.response_header.params.cursor_mark, "*");
    assert_eq!(envelope.response_header.params.rows, "50");

    assert_eq!(envelope.num_found(), 1024);
    assert_eq!(envelope.response.start, 0);
    assert_eq!(envelope.docs().len(), 2);
    assert_eq!(envelope.docs()[0]["title"], "The Book");

    assert_eq!(envelope.next_cursor_mark, "AoE1");
    assert!(envelope.error.is_none());
    assert!(envelope.highlighting.is_none());
}

#[test]
fn test_parse_error_envelope() {
    let body = json!({
        "responseHeader": {"status": 500, "QTime": 1},
        "error": {
            "msg": "undefined field: nosuchfield",
            "trace": "org.apache.solr.common.SolrException: ..."
        }
    });

    let envelope: SolrResponse = serde_json::from_value(body).unwrap();

    assert_eq!(envelope.response_header.status, 500);
    assert_eq!(
        envelope.error_message(),
        Some("undefined field: nosuchfield")
    );
    assert!(envelope.error.as_ref().unwrap().trace.starts_with("org.apache"));
    assert!(envelope.docs().is_empty());
}

#[test]
fn test_missing_blocks_decode_to_defaults() {
    let envelope: SolrResponse = serde_json::from_value(json!({})).unwrap();

    assert!(!envelope.response_header.zk_connected);
    assert_eq!(envelope.response_header.status, 0);
    assert_eq!(envelope.num_found(), 0);
    assert!(envelope.docs().is_empty());
    assert_eq!(envelope.next_cursor_mark, "");
    assert!(envelope.error.is_none());
    assert!(envelope.error_message().is_none());
}

#[test]
fn test_empty_error_message_is_none() {
    let body = json!({"error": {"msg": "", "trace": ""}});
    let envelope: SolrResponse = serde_json::from_value(body).unwrap();

    // The error block exists but carries no message
    assert!(envelope.error.is_some());
    assert!(envelope.error_message().is_none());
}

#[test]
fn test_docs_stay_opaque() {
    let body = json!({
        "response": {
            "numFound": 1,
            "start": 0,
            "docs": [{"nested": {"deeply": [1, 2, 3]}, "flag": true}]
        }
    });

    let envelope: SolrResponse = serde_json::from_value(body).unwrap();
    let doc = &envelope.docs()[0];

    assert_eq!(doc["nested"]["deeply"][1], 2);
    assert_eq!(doc["flag"], true);
}

#[test]
fn test_highlighting_is_opaque() {
    let body = json!({
        "highlighting": {
            "1": {"title": ["The <em>Book</em>"]}
        }
    });

    let envelope: SolrResponse = serde_json::from_value(body).unwrap();
    let highlighting = envelope.highlighting.unwrap();
    assert_eq!(highlighting["1"]["title"][0], "The <em>Book</em>");
}

#[test]
fn test_echoed_params_are_strings() {
    let body = json!({
        "responseHeader": {
            "params": {"rows": "100", "start": "200"}
        }
    });

    let envelope: SolrResponse = serde_json::from_value(body).unwrap();
    assert_eq!(envelope.response_header.params.rows, "100");
    assert_eq!(envelope.response_header.params.start, "200");
    assert_eq!(envelope.response_header.params.q, "");
}

#[test]
fn test_invalid_body_is_parse_error() {
    let result = serde_json::from_str::<SolrResponse>("<html>not json</html>");
    assert!(result.is_err());
}
