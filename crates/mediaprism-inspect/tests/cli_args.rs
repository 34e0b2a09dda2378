#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use clap::Parser;

use mediaprism_inspect::cli::Cli;

#[test]
fn config_and_files() {
    let cli = Cli::try_parse_from(["mediaprism-inspect", "--config", "m.yaml", "a.bin", "b.bin"])
        .expect("must parse");
    assert_eq!(cli.config.as_deref(), Some("m.yaml"));
    assert_eq!(cli.files, vec!["a.bin".to_string(), "b.bin".to_string()]);
}

#[test]
fn files_without_config() {
    let cli = Cli::try_parse_from(["mediaprism-inspect", "a.bin"]).expect("must parse");
    assert!(cli.config.is_none());
    assert_eq!(cli.files.len(), 1);
}

#[test]
fn usage_errors_exit_with_two() {
    for args in [
        vec!["mediaprism-inspect"],
        vec!["mediaprism-inspect", "--config"],
        vec!["mediaprism-inspect", "--bogus", "a.bin"],
    ] {
        let err = Cli::try_parse_from(args.iter().copied()).expect_err("must fail");
        assert_eq!(err.exit_code(), 2, "args={args:?}");
    }
}
