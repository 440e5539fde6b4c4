//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without actually executing the commands (which would require replays and a Songs folder).

use std::path::PathBuf;

use clap::Parser;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "sensfix")]
struct Args {
    #[arg(short, long, default_value = "sensfix.toml")]
    config: PathBuf,
    #[arg(long)]
    songs: Option<PathBuf>,
    #[arg(long)]
    replays: Option<PathBuf>,
    #[arg(long)]
    dpi: Option<f64>,
    #[arg(long)]
    window_ms: Option<f64>,
    #[arg(long, value_enum)]
    match_mode: Option<MatchModeArg>,
    #[arg(long)]
    sens: Option<f64>,
    #[arg(long)]
    sens_from_name: bool,
    #[arg(long)]
    no_prompt: bool,
    #[arg(long)]
    min_hits: Option<usize>,
    #[arg(long, short, value_enum, default_value = "table")]
    format: OutputFormat,
    #[arg(long, short)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    Inspect { replay: PathBuf },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Tsv,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
enum MatchModeArg {
    Held,
    Press,
}

#[test]
fn test_parse_no_args() {
    let args = Args::try_parse_from(["sensfix"]).unwrap();
    assert!(args.command.is_none());
    assert_eq!(args.config, PathBuf::from("sensfix.toml"));
    assert!(args.songs.is_none());
    assert!(args.dpi.is_none());
    assert!(!args.sens_from_name);
    assert!(!args.no_prompt);
    assert_eq!(args.format, OutputFormat::Table);
}

#[test]
fn test_parse_folders_and_dpi() {
    let args = Args::try_parse_from([
        "sensfix",
        "--songs",
        "/osu/Songs",
        "--replays",
        "my-replays",
        "--dpi",
        "800",
    ])
    .unwrap();
    assert_eq!(args.songs, Some(PathBuf::from("/osu/Songs")));
    assert_eq!(args.replays, Some(PathBuf::from("my-replays")));
    assert_eq!(args.dpi, Some(800.0));
}

#[test]
fn test_parse_matching_options() {
    let args = Args::try_parse_from([
        "sensfix",
        "--window-ms",
        "60",
        "--match-mode",
        "press",
        "--min-hits",
        "100",
    ])
    .unwrap();
    assert_eq!(args.window_ms, Some(60.0));
    assert_eq!(args.match_mode, Some(MatchModeArg::Press));
    assert_eq!(args.min_hits, Some(100));
}

#[test]
fn test_parse_sensitivity_sources() {
    let args =
        Args::try_parse_from(["sensfix", "--sens-from-name", "--no-prompt", "--sens", "0.9"])
            .unwrap();
    assert!(args.sens_from_name);
    assert!(args.no_prompt);
    assert_eq!(args.sens, Some(0.9));
}

#[test]
fn test_parse_output_format() {
    let args = Args::try_parse_from(["sensfix", "-f", "json", "-o", "report.json"]).unwrap();
    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.output, Some(PathBuf::from("report.json")));
}

#[test]
fn test_parse_inspect() {
    let args = Args::try_parse_from(["sensfix", "--dpi", "400", "inspect", "play.osr"]).unwrap();
    match args.command {
        Some(Command::Inspect { replay }) => {
            assert_eq!(replay, PathBuf::from("play.osr"));
        }
        _ => panic!("Expected Inspect command"),
    }
    assert_eq!(args.dpi, Some(400.0));
}

#[test]
fn test_invalid_format_rejected() {
    assert!(Args::try_parse_from(["sensfix", "--format", "xml"]).is_err());
    assert!(Args::try_parse_from(["sensfix", "--match-mode", "tap"]).is_err());
    assert!(Args::try_parse_from(["sensfix", "inspect"]).is_err());
}
