use std::path::PathBuf;

use clap::Parser;
use gogen::cli::Args;

#[test]
fn test_defaults() {
    let args = Args::try_parse_from(["gogen"]).unwrap();

    assert!(args.module.is_none());
    assert!(!args.monolith);
    assert!(args.entities.is_empty());
    assert!(!args.gin);
    assert!(!args.auth);
    assert_eq!(args.output_dir, PathBuf::from("."));
    assert!(args.config.is_none());
    assert!(!args.skip_go_mod);
    assert!(!args.verbose);
}

#[test]
fn test_repeated_entity_flag() {
    let args = Args::try_parse_from([
        "gogen",
        "--module",
        "github.com/acme/shop",
        "--monolith",
        "--entity",
        "user",
        "--entity",
        "product",
        "--gin",
        "--auth",
    ])
    .unwrap();

    assert_eq!(args.module.as_deref(), Some("github.com/acme/shop"));
    assert!(args.monolith);
    assert_eq!(args.entities, vec!["user", "product"]);
    assert!(args.gin);
    assert!(args.auth);
}

#[test]
fn test_short_flags() {
    let args =
        Args::try_parse_from(["gogen", "-o", "out", "-c", "gogen.yaml", "-v", "--skip-go-mod"]).unwrap();

    assert_eq!(args.output_dir, PathBuf::from("out"));
    assert_eq!(args.config, Some(PathBuf::from("gogen.yaml")));
    assert!(args.verbose);
    assert!(args.skip_go_mod);
}

#[test]
fn test_unknown_flag_is_rejected() {
    assert!(Args::try_parse_from(["gogen", "--microservice"]).is_err());
    assert!(Args::try_parse_from(["gogen", "--entity"]).is_err());
}
