use clap::{Parser, Subcommand};

use clan_stats::actions::{self, PlayerForm};
use clan_stats::api::client::StatsApiClient;
use clan_stats::chart::{ChartPanel, ReportType};
use clan_stats::config::Config;
use clan_stats::dashboard;
use clan_stats::display::output::display_error;
use clan_stats::error::AppError;

#[derive(Parser, Debug)]
#[command(name = "Clan Stats")]
#[command(about = "Terminal dashboard for the clan/player statistics API", long_about = None)]
struct Args {
    /// Base URL of the statistics API (overrides STATS_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load every table and draw the win/loss chart
    Dashboard {
        /// Report shown in the chart
        #[arg(short, long, value_enum, default_value_t = ReportType::PlayerStats)]
        report: ReportType,
    },
    /// Add a player, then refresh the players and ranking tables
    AddPlayer {
        #[arg(long)]
        name: String,
        /// Entry date, YYYY-MM-DD
        #[arg(long)]
        entry_date: String,
        #[arg(long)]
        score: String,
        /// Clan id the player joins (see the dashboard's clan list)
        #[arg(long)]
        clan: String,
    },
    /// Delete a player by id, then refresh the players and ranking tables
    DeletePlayer { id: u32 },
    /// Redraw the win/loss chart for the selected report
    Chart {
        #[arg(short, long, value_enum, default_value_t = ReportType::PlayerStats)]
        report: ReportType,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = Config::from_env();
    if let Some(url) = args.api_url {
        config.base_url = url;
    }

    let client = StatsApiClient::new(config);

    match args.command {
        Command::Dashboard { report } => {
            dashboard::run(&client, report);
            Ok(())
        }
        Command::AddPlayer {
            name,
            entry_date,
            score,
            clan,
        } => actions::add_player(
            &client,
            &PlayerForm {
                name,
                entry_date,
                score,
                clan_id: clan,
            },
        ),
        Command::DeletePlayer { id } => actions::delete_player(&client, id),
        Command::Chart { report } => {
            let mut panel = ChartPanel::new();
            dashboard::render_chart(&client, &mut panel, report);
            Ok(())
        }
    }
}
