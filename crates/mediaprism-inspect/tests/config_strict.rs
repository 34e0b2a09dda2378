#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use mediaprism_inspect::config::{self, OutputFormat};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
decoder:
  max_envelope_byte: 1024 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.decoder.max_envelope_bytes, 16 * 1024 * 1024);
    assert_eq!(cfg.decoder.max_inflated_bytes, 32 * 1024 * 1024);
    assert_eq!(cfg.output.format, OutputFormat::Json);
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
decoder:
  max_envelope_bytes: 4096
  max_inflated_bytes: 65536
output:
  format: summary
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    let limits = cfg.decoder.limits();
    assert_eq!(limits.max_envelope_bytes, 4096);
    assert_eq!(limits.max_inflated_bytes, 65536);
    assert_eq!(cfg.output.format, OutputFormat::Summary);
}

#[test]
fn rejects_bad_version_and_ranges() {
    for bad in [
        "version: 2\n",
        "version: 1\ndecoder:\n  max_envelope_bytes: 0\n",
        "version: 1\ndecoder:\n  max_envelope_bytes: 4096\n  max_inflated_bytes: 1024\n",
        "version: 1\noutput:\n  format: xml\n",
    ] {
        let err = config::load_from_str(bad).expect_err("must fail");
        assert_eq!(err.code().as_str(), "BAD_CONFIG", "config={bad:?}");
    }
}

#[test]
fn missing_file_is_io_error() {
    let err = config::load_from_file("does/not/exist.yaml").expect_err("must fail");
    assert_eq!(err.code().as_str(), "IO");
}
