use bindzone_application::services::zone_file::rdata::{
    decode_address, decode_caa, decode_https, decode_mx, decode_rdata, decode_soa, decode_srv,
    decode_svcb, decode_target, decode_tlsa, decode_txt,
};
use bindzone_domain::RecordData;
use serde_json::json;

#[test]
fn test_address_is_trimmed_not_validated() {
    assert_eq!(decode_address("  192.0.2.1 "), RecordData::content("192.0.2.1"));
    assert_eq!(decode_address("not-an-ip"), RecordData::content("not-an-ip"));
    assert_eq!(decode_address("2001:db8::1"), RecordData::content("2001:db8::1"));
}

#[test]
fn test_target_strips_trailing_dot() {
    assert_eq!(
        decode_target("alias.example.com."),
        RecordData::content("alias.example.com")
    );
    assert_eq!(decode_target("relative"), RecordData::content("relative"));
}

#[test]
fn test_alias_uses_cname_decoder() {
    assert_eq!(
        decode_rdata("ALIAS", "lb.example.net.").unwrap(),
        decode_rdata("CNAME", "lb.example.net.").unwrap()
    );
}

#[test]
fn test_mx() {
    assert_eq!(
        decode_mx("10 mail.example.com."),
        RecordData::Mx {
            preference: 10,
            exchange: "mail.example.com".to_string(),
        }
    );
    assert_eq!(
        decode_mx(""),
        RecordData::Mx {
            preference: 0,
            exchange: String::new(),
        }
    );
}

#[test]
fn test_txt_concatenates_segments() {
    assert_eq!(decode_txt(r#""ab" "cd""#).unwrap(), RecordData::content("abcd"));
    assert_eq!(
        decode_txt("hello world").unwrap(),
        RecordData::content("hello world")
    );
    assert_eq!(
        decode_txt(r#""quote \"inside\"""#).unwrap(),
        RecordData::content(r#"quote "inside""#)
    );
}

#[test]
fn test_soa_forces_fqdn_names() {
    assert_eq!(
        decode_soa("ns1.example.com admin.example.com. 1 2 3 4 5"),
        RecordData::Soa {
            mname: "ns1.example.com.".to_string(),
            rname: "admin.example.com.".to_string(),
            serial: 1,
            refresh: 2,
            retry: 3,
            expire: 4,
            ttl: 5,
        }
    );
}

#[test]
fn test_soa_shape() {
    let value = serde_json::to_value(decode_soa("a. b. 1 2 3 4 5")).unwrap();
    assert_eq!(
        value,
        json!({
            "mname": "a.",
            "rname": "b.",
            "serial": 1,
            "refresh": 2,
            "retry": 3,
            "expire": 4,
            "ttl": 5
        })
    );
}

#[test]
fn test_srv() {
    assert_eq!(
        decode_srv("10 60 5060 sip.example.com."),
        RecordData::Srv {
            priority: 10,
            weight: 60,
            port: 5060,
            target: "sip.example.com".to_string(),
        }
    );
}

#[test]
fn test_caa_quoted_value() {
    assert_eq!(
        decode_caa(r#"0 issue "letsencrypt.org""#).unwrap(),
        RecordData::Caa {
            flag: 0,
            tag: "issue".to_string(),
            value: "letsencrypt.org".to_string(),
        }
    );
}

#[test]
fn test_caa_unquoted_value() {
    assert_eq!(
        decode_caa("128 issuewild ;").unwrap(),
        RecordData::Caa {
            flag: 128,
            tag: "issuewild".to_string(),
            value: ";".to_string(),
        }
    );
}

#[test]
fn test_caa_fallback_joins_remainder() {
    assert_eq!(
        decode_caa(r#"0 iodef "mailto:security@example.com" extra"#).unwrap(),
        RecordData::Caa {
            flag: 0,
            tag: "iodef".to_string(),
            value: r#"mailto:security@example.com" extra"#.to_string(),
        }
    );
}

#[test]
fn test_tlsa_joins_cert_data_without_separator() {
    assert_eq!(
        decode_tlsa("3 1 1 0C72AC70B745AC19 998811B131D662C9"),
        RecordData::Tlsa {
            usage: 3,
            selector: 1,
            matching_type: 1,
            cert_data: "0C72AC70B745AC19998811B131D662C9".to_string(),
        }
    );
}

#[test]
fn test_https_root_target_and_params() {
    let data = decode_https(r#"1 . alpn="h2,h3" port=443 no-default-alpn"#);
    assert_eq!(
        serde_json::to_value(&data).unwrap(),
        json!({
            "priority": 1,
            "target": "",
            "params": { "alpn": "h2,h3", "port": "443", "no-default-alpn": "" }
        })
    );
}

#[test]
fn test_svcb_matches_https() {
    let rdata = "16 svc.example.com. alpn=h2";
    assert_eq!(decode_svcb(rdata), decode_https(rdata));
    match decode_svcb(rdata) {
        RecordData::Svcb { target, .. } => assert_eq!(target, "svc.example.com"),
        other => panic!("unexpected data {:?}", other),
    }
}

#[test]
fn test_unknown_type_keeps_raw_content() {
    assert_eq!(
        decode_rdata("NAPTR", "  100 10 \"u\" \"E2U+sip\" \"\" . ").unwrap(),
        RecordData::content("100 10 \"u\" \"E2U+sip\" \"\" .")
    );
}
