use harlog_core::har::HarReader;
use harlog_replay::{MaterializeOptions, ParamJoin, RequestMaterializer, materialize};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Every captured request in the sample can be rebuilt with the default options
#[test]
fn test_materialize_every_entry() {
    let har = HarReader::from_file(&fixture("sample.har")).unwrap();

    let requests: Vec<_> = har
        .log
        .entries
        .iter()
        .map(|entry| materialize(&entry.request).unwrap())
        .collect();

    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].uri(), "https://shop.example.com/?ref=mail");
    assert_eq!(requests[1].method(), http::Method::POST);
}

/// Pseudo-headers are dropped, repeated headers survive in order
#[test]
fn test_headers_from_capture() {
    let har = HarReader::from_file(&fixture("sample.har")).unwrap();
    let out = materialize(&har.log.entries[0].request).unwrap();

    assert!(out.headers().get(":authority").is_none());
    assert_eq!(out.headers().len(), 3);

    let accept: Vec<_> = out.headers().get_all("accept").iter().collect();
    assert_eq!(accept, vec!["*/*", "text/html"]);
    assert_eq!(out.headers()["user-agent"], "Mozilla/5.0");
    assert!(out.body().is_empty());
}

/// The form post has empty text, so the body comes from its params
#[test]
fn test_body_from_params() {
    let har = HarReader::from_file(&fixture("sample.har")).unwrap();
    let request = &har.log.entries[1].request;

    let out = materialize(request).unwrap();
    assert_eq!(out.body(), b"sku=42gift");

    let materializer =
        RequestMaterializer::new(MaterializeOptions::new().with_param_join(ParamJoin::Ampersand));
    let out = materializer.materialize(request).unwrap();
    assert_eq!(out.body(), b"sku=42&gift");
    assert_eq!(
        out.headers()["content-type"],
        "application/x-www-form-urlencoded"
    );
}
