use std::thread;

use indicatif::ProgressBar;

use crate::api::client::StatsApiClient;
use crate::chart::{self, ChartPanel, ReportType};
use crate::display::output::{display_clan_options, display_info, display_section};
use crate::display::tables;

/// The page-load flow: all eight loads run concurrently with no ordering
/// guarantee among them; a failed load degrades to an empty table and never
/// blocks its siblings. The chart is drawn only after every load has settled.
pub fn run(client: &StatsApiClient, report: ReportType) {
    display_info("Loading dashboard data...");
    let pb = ProgressBar::new(8);
    pb.set_message("Fetching tables");

    let (players, clan_options, clans, events, attacks, player_ranking, clan_ranking, leagues) =
        thread::scope(|s| {
            let players = s.spawn(|| settle(client.list_players(), &pb));
            // The add-player form keeps its own clan fetch, independent of
            // the clans table.
            let clan_options = s.spawn(|| settle(client.list_clans(), &pb));
            let clans = s.spawn(|| settle(client.list_clans(), &pb));
            let events = s.spawn(|| settle(client.list_events(), &pb));
            let attacks = s.spawn(|| settle(client.list_attacks(), &pb));
            let player_ranking = s.spawn(|| settle(client.player_ranking(), &pb));
            let clan_ranking = s.spawn(|| settle(client.clan_ranking(), &pb));
            let leagues = s.spawn(|| settle(client.list_leagues(), &pb));

            (
                players.join().unwrap_or_default(),
                clan_options.join().unwrap_or_default(),
                clans.join().unwrap_or_default(),
                events.join().unwrap_or_default(),
                attacks.join().unwrap_or_default(),
                player_ranking.join().unwrap_or_default(),
                clan_ranking.join().unwrap_or_default(),
                leagues.join().unwrap_or_default(),
            )
        });

    pb.finish_with_message("✓ Data loaded");

    tables::display_players(&players);
    tables::display_clans(&clans);
    tables::display_events(&events);
    tables::display_attacks(&attacks);
    tables::display_player_ranking(&player_ranking);
    tables::display_clan_ranking(&clan_ranking);
    tables::display_leagues(&leagues);
    display_clan_options(&clan_options);

    let mut panel = ChartPanel::new();
    render_chart(client, &mut panel, report);
}

/// Fetches the dataset for the selected report and redraws the chart,
/// replacing whatever the panel held before.
pub fn render_chart(client: &StatsApiClient, panel: &mut ChartPanel, report: ReportType) {
    let data = match report {
        ReportType::PlayerStats => chart::aggregate_player_stats(&client.list_attacks()),
        ReportType::ClanStats => chart::aggregate_clan_stats(&client.list_clans()),
    };

    display_section("📊 VITÓRIAS × DERROTAS");
    println!("{}", panel.redraw(data));
}

fn settle<T>(records: Vec<T>, pb: &ProgressBar) -> Vec<T> {
    pb.inc(1);
    records
}
