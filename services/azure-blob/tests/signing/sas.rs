use azsas_azure_blob::{
    build_signed_url, compute_signature, string_to_sign, ResourceType, SignRequest,
    StorageIdentity, SAS_VERSION,
};
use azsas_core::ErrorKind;
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use pretty_assertions::assert_eq;
use sha2::Sha256;

const ACCOUNT: &str = "acct";
const CONTAINER: &str = "docs";
const DOMAIN: &str = "https://acct.blob.core.windows.net";
const KEY: &str =
    "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";

fn identity() -> StorageIdentity {
    let _ = env_logger::builder().is_test(true).try_init();
    StorageIdentity::with_shared_key(ACCOUNT, CONTAINER, KEY)
}

fn reference_signature(string_to_sign: &str) -> String {
    let key = BASE64_STANDARD.decode(KEY).unwrap();
    let mut mac = Hmac::<Sha256>::new_from_slice(&key).unwrap();
    mac.update(string_to_sign.as_bytes());
    BASE64_STANDARD.encode(mac.finalize().into_bytes())
}

fn query_pairs(url: &str) -> Vec<(String, String)> {
    let (_, query) = url.split_once('?').expect("signed url must carry a query");
    query
        .split('&')
        .map(|kv| {
            let (k, v) = kv.split_once('=').expect("query pair must have a value");
            (k.to_string(), v.to_string())
        })
        .collect()
}

#[test]
fn test_signature_matches_reference_hmac() {
    let req = SignRequest::new("reports/q1.pdf").with_expiry(Some("2024-01-01T00:00:00Z"));

    let expected_string_to_sign =
        "r\n\n2024-01-01T00:00:00Z\n/blob/acct/docs/reports/q1.pdf\n\n\n\n\n2015-04-05\n\n\n\n";
    assert_eq!(string_to_sign(&identity(), &req), expected_string_to_sign);

    assert_eq!(
        compute_signature(&identity(), &req).unwrap(),
        reference_signature(expected_string_to_sign)
    );
}

#[test]
fn test_signature_is_deterministic() {
    let req = SignRequest::new("reports/q1.pdf")
        .with_permissions("rw")
        .with_expiry(Some("2031-06-30T12:00:00Z"))
        .with_signed_ip(Some("203.0.113.9"));

    let first = compute_signature(&identity(), &req).unwrap();
    let second = compute_signature(&identity(), &req).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_signed_url_query() {
    let req = SignRequest::new("reports/q1.pdf")
        .with_permissions("rw")
        .with_expiry(Some("2031-06-30T12:00:00Z"))
        .with_signed_ip(Some("203.0.113.9"));

    let url = build_signed_url(&identity(), DOMAIN, CONTAINER, &req).unwrap();
    assert!(url.starts_with("https://acct.blob.core.windows.net/docs/reports/q1.pdf?"));

    let pairs = query_pairs(&url);
    let keys = pairs.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["se", "sr", "sp", "sip", "sig", "sv"]);

    assert_eq!(pairs[0].1, "2031-06-30T12%3A00%3A00Z");
    assert_eq!(pairs[1].1, "b");
    assert_eq!(pairs[2].1, "rw");
    assert_eq!(pairs[3].1, "203.0.113.9");
    assert!(!pairs[4].1.is_empty());
    assert_eq!(pairs[5].1, SAS_VERSION);

    let sig = compute_signature(&identity(), &req).unwrap();
    let encoded: String = form_urlencoded_signature(&sig);
    assert_eq!(pairs[4].1, encoded);
}

fn form_urlencoded_signature(sig: &str) -> String {
    sig.replace('+', "%2B").replace('/', "%2F").replace('=', "%3D")
}

#[test]
fn test_private_ip_is_not_emitted() {
    for ip in ["10.1.2.3", "127.0.0.1", "172.20.1.1", "192.168.10.10"] {
        let req = SignRequest::new("reports/q1.pdf")
            .with_expiry(Some("2031-06-30T12:00:00Z"))
            .with_signed_ip(Some(ip));

        let url = build_signed_url(&identity(), DOMAIN, CONTAINER, &req).unwrap();
        assert!(!url.contains("sip"), "{ip} must not restrict the url: {url}");

        let unrestricted = req.with_signed_ip(None);
        assert_eq!(
            compute_signature(&identity(), &req).unwrap(),
            compute_signature(&identity(), &unrestricted).unwrap()
        );
    }
}

#[test]
fn test_container_signature() {
    let req = SignRequest::new("")
        .with_resource_type(ResourceType::Container)
        .with_permissions("rl")
        .with_expiry(Some("2031-06-30T12:00:00Z"));

    let url = build_signed_url(&identity(), DOMAIN, CONTAINER, &req).unwrap();
    let pairs = query_pairs(&url);
    assert!(pairs.contains(&("sr".to_string(), "c".to_string())));
    assert!(pairs.contains(&("sv".to_string(), "2015-04-05".to_string())));
}

#[test]
fn test_unsigned_url_needs_no_key() {
    let identity = StorageIdentity {
        account_name: ACCOUNT.to_string(),
        container_name: CONTAINER.to_string(),
        shared_key: None,
    };
    let req = SignRequest::new("reports/q1.pdf");

    assert_eq!(
        build_signed_url(&identity, DOMAIN, CONTAINER, &req).unwrap(),
        "https://acct.blob.core.windows.net/docs/reports/q1.pdf"
    );

    let err = build_signed_url(
        &identity,
        DOMAIN,
        CONTAINER,
        &req.with_expiry(Some("2031-06-30T12:00:00Z")),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}
