use tabled::{settings::Style, Table, Tabled};

use super::output::display_section;
use crate::api::models::*;

// One row struct per table shape; column order follows field order.

#[derive(Tabled)]
pub struct PlayerRow {
    #[tabled(rename = "ID")]
    pub id: u32,
    #[tabled(rename = "Nome")]
    pub name: String,
    #[tabled(rename = "Pontuação Total")]
    pub total_score: i64,
    #[tabled(rename = "Clã")]
    pub clan_id: u32,
    #[tabled(rename = "Ações")]
    pub action: String,
}

#[derive(Tabled)]
pub struct ClanRow {
    #[tabled(rename = "ID")]
    pub id: u32,
    #[tabled(rename = "Nome")]
    pub name: String,
    #[tabled(rename = "Data Criação")]
    pub created_at: String,
    #[tabled(rename = "Liga")]
    pub league_id: u32,
}

#[derive(Tabled)]
pub struct EventRow {
    #[tabled(rename = "Tipo")]
    pub kind: String,
    #[tabled(rename = "Quantidades realizadas")]
    pub count: i64,
}

#[derive(Tabled)]
pub struct AttackRow {
    #[tabled(rename = "ID")]
    pub id: u32,
    #[tabled(rename = "Nome Jogador")]
    pub player_name: String,
    #[tabled(rename = "Número de Ataques")]
    pub attack_count: i64,
    #[tabled(rename = "Vitórias")]
    pub wins: i64,
    #[tabled(rename = "Derrotas")]
    pub losses: i64,
}

#[derive(Tabled)]
pub struct RankingRow {
    #[tabled(rename = "Posição")]
    pub position: usize,
    #[tabled(rename = "Nome")]
    pub name: String,
    #[tabled(rename = "Pontuação")]
    pub score: i64,
}

#[derive(Tabled)]
pub struct LeagueRow {
    #[tabled(rename = "ID")]
    pub id: u32,
    #[tabled(rename = "Nome")]
    pub name: String,
    #[tabled(rename = "Pontuação Mínima")]
    pub min_score: i64,
    #[tabled(rename = "Pontuação Máxima")]
    pub max_score: i64,
}

/// Each player row carries its delete command in the action cell, keyed by
/// the record's identifier.
pub fn player_rows(players: &[Player]) -> Vec<PlayerRow> {
    players
        .iter()
        .map(|p| PlayerRow {
            id: p.id,
            name: p.name.clone(),
            total_score: p.total_score,
            clan_id: p.clan_id,
            action: format!("delete-player {}", p.id),
        })
        .collect()
}

pub fn clan_rows(clans: &[Clan]) -> Vec<ClanRow> {
    clans
        .iter()
        .map(|c| ClanRow {
            id: c.id,
            name: c.name.clone(),
            created_at: c.created_at.clone(),
            league_id: c.league_id,
        })
        .collect()
}

pub fn event_rows(events: &[GameEvent]) -> Vec<EventRow> {
    events
        .iter()
        .map(|e| EventRow {
            kind: e.kind.clone(),
            count: e.count,
        })
        .collect()
}

pub fn attack_rows(attacks: &[AttackRecord]) -> Vec<AttackRow> {
    attacks
        .iter()
        .map(|a| AttackRow {
            id: a.id,
            player_name: a.player_name.clone(),
            attack_count: a.attack_count,
            wins: a.wins,
            losses: a.losses,
        })
        .collect()
}

/// Ranking input arrives pre-sorted; position is the 1-based input index.
pub fn player_ranking_rows(entries: &[PlayerRankingEntry]) -> Vec<RankingRow> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, e)| RankingRow {
            position: idx + 1,
            name: e.name.clone(),
            score: e.score,
        })
        .collect()
}

pub fn clan_ranking_rows(entries: &[ClanRankingEntry]) -> Vec<RankingRow> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, e)| RankingRow {
            position: idx + 1,
            name: e.name.clone(),
            score: e.score,
        })
        .collect()
}

pub fn league_rows(leagues: &[League]) -> Vec<LeagueRow> {
    leagues
        .iter()
        .map(|l| LeagueRow {
            id: l.id,
            name: l.name.clone(),
            min_score: l.min_score,
            max_score: l.max_score,
        })
        .collect()
}

fn render<R: Tabled>(rows: Vec<R>) -> Table {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table
}

// Every display call is a full replace: the table is rebuilt from scratch
// from the records given, so stale rows or stale action cells cannot survive
// a refresh.

pub fn display_players(players: &[Player]) {
    display_section("🛡 JOGADORES");
    println!("{}", render(player_rows(players)));
}

pub fn display_clans(clans: &[Clan]) {
    display_section("🏰 CLÃS");
    println!("{}", render(clan_rows(clans)));
}

pub fn display_events(events: &[GameEvent]) {
    display_section("🎯 EVENTOS");
    println!("{}", render(event_rows(events)));
}

pub fn display_attacks(attacks: &[AttackRecord]) {
    display_section("⚔ ATAQUES");
    println!("{}", render(attack_rows(attacks)));
}

pub fn display_player_ranking(entries: &[PlayerRankingEntry]) {
    display_section("🏆 RANKING DE JOGADORES");
    println!("{}", render(player_ranking_rows(entries)));
}

pub fn display_clan_ranking(entries: &[ClanRankingEntry]) {
    display_section("🏆 RANKING DE CLÃS");
    println!("{}", render(clan_ranking_rows(entries)));
}

pub fn display_leagues(leagues: &[League]) {
    display_section("🥇 LIGAS");
    println!("{}", render(league_rows(leagues)));
}
