use bindzone_domain::{
    BindParseResult, RecordData, SupportedType, SvcParams, NO_RECORDS_ERROR,
};
use serde_json::json;

mod helpers;
use helpers::ParsedDnsRecordBuilder;

#[test]
fn test_empty_input_result() {
    let result = BindParseResult::empty_input();
    assert!(result.records.is_empty());
    assert_eq!(result.errors, vec![NO_RECORDS_ERROR.to_string()]);
    assert!(result.warnings.is_empty());
    assert!(!result.is_success());
}

#[test]
fn test_record_serializes_type_key_and_omits_missing_ttl() {
    let record = ParsedDnsRecordBuilder::new().name("www").build();
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(
        value,
        json!({
            "name": "www",
            "type": "A",
            "value": "192.0.2.1",
            "data": { "content": "192.0.2.1" }
        })
    );
}

#[test]
fn test_record_serializes_ttl_when_present() {
    let record = ParsedDnsRecordBuilder::new().ttl(300).build();
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["ttl"], json!(300));
}

#[test]
fn test_mx_data_shape() {
    let data = RecordData::Mx {
        preference: 10,
        exchange: "mail.example.com".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&data).unwrap(),
        json!({ "preference": 10, "exchange": "mail.example.com" })
    );
}

#[test]
fn test_soa_data_uses_ttl_key() {
    let data = RecordData::Soa {
        mname: "ns1.example.com.".to_string(),
        rname: "admin.example.com.".to_string(),
        serial: 1,
        refresh: 2,
        retry: 3,
        expire: 4,
        ttl: 5,
    };
    let value = serde_json::to_value(&data).unwrap();
    assert_eq!(value["ttl"], json!(5));
    assert!(value.get("minimum").is_none());
}

#[test]
fn test_tlsa_data_uses_camel_case_keys() {
    let data = RecordData::Tlsa {
        usage: 3,
        selector: 1,
        matching_type: 1,
        cert_data: "abcdef".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&data).unwrap(),
        json!({ "usage": 3, "selector": 1, "matchingType": 1, "certData": "abcdef" })
    );
}

#[test]
fn test_svc_params_keep_insertion_order() {
    let mut params = SvcParams::new();
    params.insert("port", "443");
    params.insert("alpn", "h2");
    params.insert("port", "8443");

    let pairs: Vec<_> = params.iter().collect();
    assert_eq!(pairs, vec![("port", "8443"), ("alpn", "h2")]);
    assert_eq!(params.get("alpn"), Some("h2"));
    assert_eq!(params.len(), 2);

    let json = serde_json::to_string(&params).unwrap();
    assert_eq!(json, r#"{"port":"8443","alpn":"h2"}"#);
}

#[test]
fn test_count_by_type() {
    let result = BindParseResult {
        records: vec![
            ParsedDnsRecordBuilder::new().build(),
            ParsedDnsRecordBuilder::new()
                .record_type(SupportedType::MX)
                .build(),
            ParsedDnsRecordBuilder::new().name("www").build(),
        ],
        errors: Vec::new(),
        warnings: Vec::new(),
    };

    assert_eq!(
        result.count_by_type(),
        vec![(SupportedType::A, 2), (SupportedType::MX, 1)]
    );
    assert!(result.is_success());
}

#[test]
fn test_apex_detection() {
    assert!(ParsedDnsRecordBuilder::new().build().is_apex());
    assert!(!ParsedDnsRecordBuilder::new().name("www").build().is_apex());
}
