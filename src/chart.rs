use clap::ValueEnum;
use colored::*;

use crate::api::models::{AttackRecord, Clan};

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportType {
    /// Win/loss bars per player, from the attack records
    #[value(name = "playerStats")]
    PlayerStats,
    /// Win/loss bars per clan, from the clan records
    #[value(name = "clanStats")]
    ClanStats,
}

/// Parallel series driving one chart: labels[i] pairs with wins[i]/losses[i].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub wins: Vec<i64>,
    pub losses: Vec<i64>,
}

// The two report branches aggregate different endpoints into the same chart
// shape; they are kept as separate functions on purpose.

pub fn aggregate_player_stats(attacks: &[AttackRecord]) -> ChartData {
    let mut labels = Vec::with_capacity(attacks.len());
    let mut wins = Vec::with_capacity(attacks.len());
    let mut losses = Vec::with_capacity(attacks.len());

    for record in attacks {
        labels.push(record.player_name.clone());
        wins.push(record.wins);
        losses.push(record.losses);
    }

    ChartData { labels, wins, losses }
}

pub fn aggregate_clan_stats(clans: &[Clan]) -> ChartData {
    let mut labels = Vec::with_capacity(clans.len());
    let mut wins = Vec::with_capacity(clans.len());
    let mut losses = Vec::with_capacity(clans.len());

    for clan in clans {
        labels.push(clan.name.clone());
        wins.push(clan.wins);
        losses.push(clan.losses);
    }

    ChartData { labels, wins, losses }
}

/// Owns the single chart bound to the terminal. `redraw` replaces whatever
/// was drawn before; there is never more than one current dataset.
pub struct ChartPanel {
    current: Option<ChartData>,
}

impl ChartPanel {
    pub fn new() -> Self {
        ChartPanel { current: None }
    }

    pub fn redraw(&mut self, data: ChartData) -> String {
        let rendered = draw(&data);
        self.current = Some(data);
        rendered
    }

    pub fn current(&self) -> Option<&ChartData> {
        self.current.as_ref()
    }
}

impl Default for ChartPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn draw(data: &ChartData) -> String {
    if data.labels.is_empty() {
        return "No data to chart".yellow().to_string();
    }

    let max = data
        .wins
        .iter()
        .chain(data.losses.iter())
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);
    let label_width = data
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (idx, label) in data.labels.iter().enumerate() {
        let wins = data.wins[idx];
        let losses = data.losses[idx];
        out.push_str(&format!(
            "{:>width$} │{} {}\n",
            label,
            bar(wins, max).blue(),
            wins,
            width = label_width
        ));
        out.push_str(&format!(
            "{:>width$} │{} {}\n",
            "",
            bar(losses, max).red(),
            losses,
            width = label_width
        ));
    }
    out.push_str(&format!(
        "\n{:>width$}  {} Vitórias  {} Derrotas\n",
        "",
        "■".blue(),
        "■".red(),
        width = label_width
    ));
    out
}

fn bar(value: i64, max: i64) -> String {
    let len = ((value.max(0) as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len)
}
