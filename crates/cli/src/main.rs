mod commands;
mod logging;

use std::path::PathBuf;

use {
    anyhow::Context,
    chrono::NaiveDate,
    clap::{Parser, Subcommand},
    mediascope_analytics::FilterParams,
    mediascope_config::{DashboardConfig, LogFormat, discover_and_load, load_config},
    tracing::debug,
};

#[derive(Debug, Parser)]
#[command(
    name = "mediascope",
    version,
    about = "Interactive analytics dashboard over a news article corpus"
)]
struct Cli {
    /// Config file (TOML, YAML or JSON). Searched in `.` and the user config
    /// directory when omitted.
    #[arg(short, long, global = true, env = "MEDIASCOPE_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `info,mediascope_web=trace`.
    #[arg(long, global = true, env = "MEDIASCOPE_LOG")]
    log_level: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true, env = "MEDIASCOPE_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the dashboard
    Serve {
        #[arg(long, env = "MEDIASCOPE_BIND")]
        bind: Option<String>,

        #[arg(short, long, env = "MEDIASCOPE_PORT")]
        port: Option<u16>,

        /// Clean CSV to load
        #[arg(long, env = "MEDIASCOPE_DATA")]
        data: Option<PathBuf>,
    },

    /// Build the clean CSV from a directory of raw JSON exports
    Preprocess {
        #[arg(long, env = "MEDIASCOPE_RAW_DIR")]
        raw_dir: Option<PathBuf>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a synthetic corpus for demos
    Generate {
        #[arg(short = 'n', long, default_value_t = 1000)]
        count: usize,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print KPIs and rankings for a filter
    Summary {
        /// First day, inclusive (YYYY-MM-DD). Needs --end.
        #[arg(long, requires = "end")]
        start: Option<NaiveDate>,

        /// Last day, inclusive (YYYY-MM-DD). Needs --start.
        #[arg(long, requires = "start")]
        end: Option<NaiveDate>,

        /// Keyword to match; repeat for several (any may match)
        #[arg(long = "kw")]
        keywords: Vec<String>,

        /// Location to match; repeat for several (any may match)
        #[arg(long = "loc")]
        locations: Vec<String>,

        #[arg(long, env = "MEDIASCOPE_DATA")]
        data: Option<PathBuf>,

        /// Entries per ranking
        #[arg(long, default_value_t = 10)]
        top: usize,

        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// File values first, then flags and environment on top.
    fn resolve_config(&self) -> anyhow::Result<DashboardConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => tracing::subscriber::with_default(logging::bootstrap(), discover_and_load),
        };

        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.log_json {
            config.logging.format = LogFormat::Json;
        }

        match &self.command {
            Command::Serve { bind, port, data } => {
                if let Some(bind) = bind {
                    config.server.bind = bind.clone();
                }
                if let Some(port) = port {
                    config.server.port = *port;
                }
                if let Some(data) = data {
                    config.data.csv_path = data.clone();
                }
            },
            Command::Preprocess { raw_dir, output } => {
                if let Some(raw_dir) = raw_dir {
                    config.data.raw_dir = raw_dir.clone();
                }
                if let Some(output) = output {
                    config.data.csv_path = output.clone();
                }
            },
            Command::Generate { output, .. } => {
                if let Some(output) = output {
                    config.data.csv_path = output.clone();
                }
            },
            Command::Summary { data, .. } => {
                if let Some(data) = data {
                    config.data.csv_path = data.clone();
                }
            },
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    logging::init(&config.logging.level, config.logging.format)?;
    debug!(?config, "resolved configuration");

    match cli.command {
        Command::Serve { .. } => commands::serve(config).await,
        Command::Preprocess { .. } => {
            commands::preprocess(&config.data.raw_dir, &config.data.csv_path)
        },
        Command::Generate { count, seed, .. } => {
            commands::generate(count, seed, &config.data.csv_path)
        },
        Command::Summary {
            start,
            end,
            keywords,
            locations,
            top,
            json,
            ..
        } => {
            let params = FilterParams {
                start,
                end,
                keywords,
                locations,
            };
            commands::summary(&config.data.csv_path, params, top, json)
        },
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest, tempfile::TempDir};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mediascope").chain(args.iter().copied())).unwrap()
    }

    fn with_file(args: &[&str]) -> (TempDir, Cli) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("mediascope.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9100\n\n[data]\ncsv_path = \"from-file.csv\"\n",
        )
        .unwrap();
        let mut full = vec!["--config", path.to_str().unwrap()];
        full.extend_from_slice(args);
        let cli = parse(&full);
        (tmp, cli)
    }

    #[test]
    fn flags_override_file() {
        let (_tmp, cli) = with_file(&["serve", "--port", "9200", "--data", "flag.csv"]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.server.port, 9200);
        assert_eq!(config.data.csv_path, PathBuf::from("flag.csv"));
        assert_eq!(config.server.bind, "127.0.0.1");
    }

    #[test]
    fn file_values_survive_without_flags() {
        let (_tmp, cli) = with_file(&["serve"]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.data.csv_path, PathBuf::from("from-file.csv"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let cli = parse(&["--config", "nope/mediascope.toml", "serve"]);
        assert!(cli.resolve_config().is_err());
    }

    #[rstest]
    #[case(&["generate"], 1000, 42)]
    #[case(&["generate", "-n", "50", "--seed", "7"], 50, 7)]
    fn generate_defaults(#[case] args: &[&str], #[case] count: usize, #[case] seed: u64) {
        match parse(args).command {
            Command::Generate { count: c, seed: s, .. } => {
                assert_eq!(c, count);
                assert_eq!(s, seed);
            },
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn summary_collects_repeated_filters() {
        let cli = parse(&[
            "summary", "--start", "2023-01-01", "--end", "2023-06-30", "--kw", "Santé", "--kw",
            "Sport", "--loc", "Paris",
        ]);
        match cli.command {
            Command::Summary {
                start,
                keywords,
                locations,
                top,
                ..
            } => {
                assert_eq!(start, NaiveDate::from_ymd_opt(2023, 1, 1));
                assert_eq!(keywords, ["Santé", "Sport"]);
                assert_eq!(locations, ["Paris"]);
                assert_eq!(top, 10);
            },
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn summary_rejects_bad_dates() {
        let parsed = Cli::try_parse_from([
            "mediascope", "summary", "--start", "31/12/2023", "--end", "2023-12-31",
        ]);
        assert!(parsed.is_err());
    }

    #[rstest]
    #[case(&["summary", "--start", "2023-01-01"])]
    #[case(&["summary", "--end", "2023-12-31"])]
    fn summary_date_bounds_come_in_pairs(#[case] args: &[&str]) {
        let err = Cli::try_parse_from(std::iter::once("mediascope").chain(args.iter().copied()))
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn log_json_switches_format() {
        let (_tmp, cli) = with_file(&["--log-json", "--log-level", "debug", "generate"]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "debug");
    }
}
