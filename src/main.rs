use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use subway_connect::{
    app,
    commands::Command,
    network::Extremum,
    services::transit_service::transit_service::{TransitServiceConfig, DEFAULT_MBTA_HOST},
    types::{app_config::AppConfig, output_format::OutputFormat},
};

/// Answers questions about the MBTA subway network.
#[derive(Parser)]
#[command(name = "subway-connect")]
#[command(version, about)]
struct Cli {
    /// Display the names of all the subway lines
    #[arg(long)]
    routes: bool,

    /// List every stop of every subway line
    #[arg(long)]
    stops: bool,

    /// Display the subway route with the most stops and a count of its stops
    #[arg(long)]
    longest_route: bool,

    /// Display the subway route with the fewest stops and a count of its stops
    #[arg(long)]
    shortest_route: bool,

    /// Display all stops that are on multiple routes
    #[arg(long)]
    transfers: bool,

    /// Starting stop for a connection search
    #[arg(long, value_name = "STOP", requires = "to", value_parser = clap::builder::NonEmptyStringValueParser::new())]
    from: Option<String>,

    /// Final stop for a connection search
    #[arg(long, value_name = "STOP", requires = "from", value_parser = clap::builder::NonEmptyStringValueParser::new())]
    to: Option<String>,

    /// Transit API base URL
    #[arg(long, env = "MBTA_HOST", default_value = DEFAULT_MBTA_HOST)]
    host: String,

    /// Transit API key (optional, raises rate limits)
    #[arg(long, env = "MBTA_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress logging except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Selected queries, in the order they run.
    fn commands(&self) -> Vec<Command> {
        let mut commands = Vec::new();
        if self.stops {
            commands.push(Command::ListStops);
        }
        if self.routes {
            commands.push(Command::ListRoutes);
        }
        if self.longest_route {
            commands.push(Command::RouteByStopCount(Extremum::Most));
        }
        if self.shortest_route {
            commands.push(Command::RouteByStopCount(Extremum::Fewest));
        }
        if self.transfers {
            commands.push(Command::Transfers);
        }
        if let (Some(from), Some(to)) = (&self.from, &self.to) {
            commands.push(Command::Connection {
                from: from.clone(),
                to: to.clone(),
            });
        }
        commands
    }

    fn config(&self) -> AppConfig {
        AppConfig {
            transit: TransitServiceConfig {
                host: self.host.clone(),
                api_key: self.api_key.clone(),
            },
            format: self.format,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    let commands = cli.commands();
    if commands.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let app = app::gen_app(cli.config());
    for command in &commands {
        debug!(?command, "Running command");
        let report = app.execute(command).await?;
        println!("{}", app.render(&report)?);
    }

    Ok(())
}
