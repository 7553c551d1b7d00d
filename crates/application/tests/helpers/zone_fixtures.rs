#![allow(dead_code)]
use bindzone_domain::{BindParseResult, ParsedDnsRecord, SupportedType};

pub const EXAMPLE_ZONE: &str = r#"$ORIGIN example.com.
$TTL 3600
; SOA spread over several lines
@   IN  SOA ns1.example.com. hostmaster.example.com. (
            2024010101 ; serial
            7200       ; refresh
            3600       ; retry
            1209600    ; expire
            300 )      ; minimum

@       IN  NS      ns1.example.com.
        IN  NS      ns2.example.com.
@       IN  A       192.0.2.1
www 300 IN  A       192.0.2.2
        IN  AAAA    2001:db8::2
mail    IN  MX      10 mail.example.com.
@       IN  TXT     "v=spf1 include:_spf.example.com ~all"
_sip._tcp IN SRV    10 60 5060 sip.example.com.
@       IN  CAA     0 issue "letsencrypt.org"
"#;

pub const CLOUDFLARE_EXPORT: &str = "\
;; Domain:     example.org.
;; Exported:   2024-01-01 00:00:00
example.org.\t3600\tIN\tSOA\tns.cloudflare.com. dns.cloudflare.com. 2045 10000 2400 604800 3600\r
example.org.\t1\tIN\tA\t203.0.113.10\r
www.example.org.\t1\tIN\tCNAME\texample.org.\r
example.org.\t1\tIN\tHTTPS\t1 . alpn=\"h3,h2\" ipv4hint=203.0.113.10\r
_443._tcp.example.org.\t300\tIN\tTLSA\t3 1 1 0C72AC70B745AC19998811B131D662C9AC69DBDBE7CB23E5B514B56664C5D3D6\r
";

pub fn records_of(result: &BindParseResult, record_type: SupportedType) -> Vec<&ParsedDnsRecord> {
    result
        .records
        .iter()
        .filter(|r| r.record_type == record_type)
        .collect()
}

pub fn single(result: &BindParseResult) -> &ParsedDnsRecord {
    assert_eq!(
        result.records.len(),
        1,
        "expected exactly one record, got {:?}",
        result.records
    );
    &result.records[0]
}
