use crate::prelude::*;
use clap::Parser;

mod dex;
mod error;
mod prelude;
mod status;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Fetch Pokémon from PokeAPI and report aggregate statistics"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// PokeAPI base URL
    #[clap(
        long,
        env = "POKEAPI_BASE_URL",
        global = true,
        default_value = dex::POKEAPI_BASE
    )]
    base_url: String,

    /// Maximum number of detail requests in flight
    #[clap(long, env = "POKESTATS_CONCURRENCY", global = true, default_value = "16")]
    concurrency: usize,

    /// Whether to display additional information.
    #[clap(long, env = "POKESTATS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,

    /// Hide the status spinner on stderr.
    #[clap(long, env = "POKESTATS_QUIET", global = true, default_value = "false")]
    quiet: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Fetch a batch of Pokémon and print the aggregate report
    Report(crate::dex::report::ReportOptions),

    /// List Pokémon names and detail URLs
    List(crate::dex::list::ListOptions),

    /// Show a single Pokémon
    Show(crate::dex::show::ShowOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Report(options) => crate::dex::report::run(options, app.global).await,
        SubCommands::List(options) => crate::dex::list::run(options, app.global).await,
        SubCommands::Show(options) => crate::dex::show::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_defaults() {
        let app = App::try_parse_from(["pokestats", "report"]).unwrap();

        assert_eq!(app.global.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(app.global.concurrency, 16);
        match app.command {
            SubCommands::Report(options) => {
                assert!(!options.json);
                assert!(options.config.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_report_accepts_invalid_counts_as_raw_strings() {
        let app = App::try_parse_from([
            "pokestats", "report", "--limit", "lots", "--details", "3", "--type", "water",
        ])
        .unwrap();

        match app.command {
            SubCommands::Report(options) => {
                assert_eq!(options.limit.as_deref(), Some("lots"));
                assert_eq!(options.details.as_deref(), Some("3"));
                assert_eq!(options.type_filter.as_deref(), Some("water"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let app = App::try_parse_from([
            "pokestats",
            "show",
            "pikachu",
            "--base-url",
            "http://localhost:9000",
            "--concurrency",
            "2",
        ])
        .unwrap();

        assert_eq!(app.global.base_url, "http://localhost:9000");
        assert_eq!(app.global.concurrency, 2);
    }

    #[test]
    fn test_verbose_and_quiet_are_independent() {
        let app = App::try_parse_from(["pokestats", "report", "--verbose"]).unwrap();
        assert!(app.global.verbose);
        assert!(!app.global.quiet);

        let app = App::try_parse_from(["pokestats", "report", "--quiet"]).unwrap();
        assert!(!app.global.verbose);
        assert!(app.global.quiet);
    }
}
