use clap::Parser;
use refdocs::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("refdocs")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_no_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert!(parsed.config.is_none());
    assert!(parsed.source_dir.is_none());
    assert!(parsed.output_dir.is_none());
    assert!(parsed.branch.is_none());
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--config",
        "docs.yml",
        "--source-dir",
        "lib",
        "--output-dir",
        "site/api",
        "--branch",
        "develop",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.config, Some(PathBuf::from("docs.yml")));
    assert_eq!(parsed.source_dir, Some(PathBuf::from("lib")));
    assert_eq!(parsed.output_dir, Some(PathBuf::from("site/api")));
    assert_eq!(parsed.branch.as_deref(), Some("develop"));
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let parsed = Args::try_parse_from(make_args(&["-c", "refdocs.json", "-v"])).unwrap();

    assert_eq!(parsed.config, Some(PathBuf::from("refdocs.json")));
    assert!(parsed.verbose);
}

#[test]
fn test_positional_args_rejected() {
    assert!(Args::try_parse_from(make_args(&["src"])).is_err());
}
