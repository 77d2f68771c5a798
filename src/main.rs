use clap::{
    Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use plexcli::{
    cli,
    config::{self, PlexConfig},
    error,
    plex::PlexClient,
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(flatten)]
    plex: PlexOptions,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone)]
struct PlexOptions {
    /// Plex server API token
    #[clap(long, env = "PLEX_TOKEN", global = true, hide_env_values = true)]
    plex_token: Option<String>,

    /// Plex server hostname or ip (default: localhost)
    #[clap(long, env = "PLEX_HOST", global = true)]
    plex_host: Option<String>,

    /// Plex server port (default: 32400)
    #[clap(long, env = "PLEX_PORT", global = true)]
    plex_port: Option<u16>,

    /// Plex server scheme (default: http)
    #[clap(long, env = "PLEX_SCHEME", global = true)]
    plex_scheme: Option<String>,
}

impl PlexOptions {
    fn resolve(self) -> Result<PlexConfig, config::ConfigError> {
        config::resolve(
            self.plex_token,
            self.plex_host,
            self.plex_port,
            self.plex_scheme,
        )
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List of the existing libraries in the server
    ListLibraries,

    /// Scan a library for new items (movies or tv)
    ScanLibrary(ScanLibraryOptions),

    /// Refresh the metadata of the tvshows owning recently added items
    RefreshRecentTvshows,

    /// Refresh the metadata of recently added tvshow seasons and episodes
    RefreshTvshows,

    /// Refresh the metadata of recently added movies
    RefreshMovies,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ScanLibraryOptions {
    /// Id of the library, as shown by list-libraries
    library_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let plex_config = match cli.plex.resolve() {
        Ok(c) => c,
        Err(e) => {
            if let Err(help_err) = Cli::command().print_help() {
                warning!("Cannot print help. Err: {}", help_err);
            }
            println!();
            error!("{}", e);
        }
    };
    let client = PlexClient::new(&plex_config);

    match cli.command {
        Command::ListLibraries => cli::list_libraries(&client).await,
        Command::ScanLibrary(opt) => cli::scan_library(&client, &opt.library_id).await,
        Command::RefreshRecentTvshows => cli::refresh_recent_tvshows(&client).await,
        Command::RefreshTvshows => cli::refresh_tvshows(&client).await,
        Command::RefreshMovies => cli::refresh_movies(&client).await,
        Command::Completions(_) => {}
    }
}
