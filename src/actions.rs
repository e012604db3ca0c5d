use chrono::NaiveDate;

use crate::api::client::StatsApiClient;
use crate::api::models::NewPlayer;
use crate::display::output::display_success;
use crate::display::tables;
use crate::error::AppError;

/// Raw add-player input, validated before anything touches the network.
#[derive(Debug, Clone)]
pub struct PlayerForm {
    pub name: String,
    pub entry_date: String,
    pub score: String,
    pub clan_id: String,
}

impl PlayerForm {
    pub fn validate(&self) -> Result<NewPlayer, AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::MissingField("name"));
        }
        if self.entry_date.trim().is_empty() {
            return Err(AppError::MissingField("entry-date"));
        }
        if self.score.trim().is_empty() {
            return Err(AppError::MissingField("score"));
        }
        if self.clan_id.trim().is_empty() {
            return Err(AppError::MissingField("clan"));
        }

        let entry_date = NaiveDate::parse_from_str(self.entry_date.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::InvalidField {
                field: "entry-date",
                value: self.entry_date.clone(),
            })?;
        let total_score: i64 =
            self.score.trim().parse().map_err(|_| AppError::InvalidField {
                field: "score",
                value: self.score.clone(),
            })?;
        let clan_id: u32 =
            self.clan_id.trim().parse().map_err(|_| AppError::InvalidField {
                field: "clan",
                value: self.clan_id.clone(),
            })?;

        Ok(NewPlayer {
            name: self.name.trim().to_string(),
            entry_date: entry_date.format("%Y-%m-%d").to_string(),
            total_score,
            clan_id,
        })
    }
}

/// Add flow: validate locally, POST, then refresh the two affected views.
/// An invalid form aborts before any network call; a rejected POST returns
/// the failure without reloading anything.
pub fn add_player(client: &StatsApiClient, form: &PlayerForm) -> Result<(), AppError> {
    let new_player = form.validate()?;
    client.create_player(&new_player)?;

    display_success(&format!("Player {} added", new_player.name));
    refresh_player_views(client);
    Ok(())
}

/// Delete flow, keyed by the identifier carried in the players table's
/// action column.
pub fn delete_player(client: &StatsApiClient, id: u32) -> Result<(), AppError> {
    client.delete_player(id)?;

    display_success(&format!("Player {} deleted", id));
    refresh_player_views(client);
    Ok(())
}

// Adding or removing a player changes exactly these two views.
fn refresh_player_views(client: &StatsApiClient) {
    tables::display_players(&client.list_players());
    tables::display_player_ranking(&client.player_ranking());
}
