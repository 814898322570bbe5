use super::*;

use clap::CommandFactory;

#[test]
fn test_verify() {
    Opt::command().debug_assert();
}

#[test]
fn test_patterns() {
    let opt = Opt::try_parse_from(["joker", "a*b", "[ab", "--", "-x?"]).unwrap();
    assert_eq!(opt.patterns, ["a*b", "[ab", "-x?"]);
    assert!(!opt.quiet);
    assert!(opt.config.is_empty());
}

#[test]
fn test_options() {
    let opt = Opt::try_parse_from([
        "joker",
        "--output-format",
        "json",
        "--config",
        "a.yaml",
        "--config=b.yaml",
        "-q",
        "*",
    ])
    .unwrap();
    assert_eq!(opt.output_format, Some(OutputFormat::Json));
    assert_eq!(opt.config, [PathBuf::from("a.yaml"), PathBuf::from("b.yaml")]);
    assert!(opt.quiet);
    assert_eq!(opt.patterns, ["*"]);
}

#[test]
fn test_output_format_conversion() {
    assert_eq!(settings::OutputFormat::from(OutputFormat::Debug), settings::OutputFormat::Debug);
    assert_eq!(settings::OutputFormat::from(OutputFormat::Pattern), settings::OutputFormat::Pattern);
    assert_eq!(settings::OutputFormat::from(OutputFormat::Json), settings::OutputFormat::Json);
}

#[test]
fn test_invalid_output_format() {
    assert!(Opt::try_parse_from(["joker", "-f", "xml"]).is_err());
}
