use crate::config::Config;
use crate::display::output::display_warning;
use crate::error::AppError;
use serde::de::DeserializeOwned;

use super::endpoints;
use super::models::*;

const USER_AGENT: &str = "clan-stats/0.1.0";

pub struct StatsApiClient {
    config: Config,
}

impl StatsApiClient {
    pub fn new(config: Config) -> Self {
        StatsApiClient { config }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        let response = ureq::get(url).set("User-Agent", USER_AGENT).call();

        match response {
            Ok(resp) => resp
                .into_string()
                .map_err(|e| AppError::HttpError(e.to_string())),
            Err(ureq::Error::Status(code, _)) => {
                Err(AppError::ApiError(format!("status {} from {}", code, url)))
            }
            Err(e) => Err(AppError::HttpError(e.to_string())),
        }
    }

    /// GET a list endpoint. Transport failures, non-2xx statuses and decode
    /// failures all collapse into an empty list; read callers never see an
    /// error, only absent data.
    fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Vec<T> {
        let url = endpoints::url(&self.config.base_url, path);

        let body = match self.execute_request(&url) {
            Ok(body) => body,
            Err(e) => {
                display_warning(&format!("load {} failed: {}", path, e));
                return Vec::new();
            }
        };

        match serde_json::from_str(&body) {
            Ok(records) => records,
            Err(e) => {
                display_warning(&format!("decode {} failed: {}", path, e));
                Vec::new()
            }
        }
    }

    pub fn list_players(&self) -> Vec<Player> {
        self.fetch_list(endpoints::PLAYERS)
    }

    pub fn list_clans(&self) -> Vec<Clan> {
        self.fetch_list(endpoints::CLANS)
    }

    pub fn list_events(&self) -> Vec<GameEvent> {
        self.fetch_list(endpoints::EVENTS)
    }

    pub fn list_attacks(&self) -> Vec<AttackRecord> {
        self.fetch_list(endpoints::ATTACKS)
    }

    pub fn player_ranking(&self) -> Vec<PlayerRankingEntry> {
        self.fetch_list(endpoints::PLAYER_RANKING)
    }

    pub fn clan_ranking(&self) -> Vec<ClanRankingEntry> {
        self.fetch_list(endpoints::CLAN_RANKING)
    }

    pub fn list_leagues(&self) -> Vec<League> {
        self.fetch_list(endpoints::LEAGUES)
    }

    /// POST a new player. Success and failure are distinguished only at
    /// HTTP-status granularity.
    pub fn create_player(&self, player: &NewPlayer) -> Result<(), AppError> {
        let url = endpoints::url(&self.config.base_url, endpoints::PLAYERS);
        let payload =
            serde_json::to_value(player).map_err(|e| AppError::JsonError(e.to_string()))?;

        match ureq::post(&url).set("User-Agent", USER_AGENT).send_json(payload) {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(code, _)) => Err(AppError::ApiError(format!(
                "create player failed with status {}",
                code
            ))),
            Err(e) => Err(AppError::HttpError(e.to_string())),
        }
    }

    pub fn delete_player(&self, id: u32) -> Result<(), AppError> {
        let url = endpoints::player_url(&self.config.base_url, id);

        match ureq::delete(&url).set("User-Agent", USER_AGENT).call() {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(code, _)) => Err(AppError::ApiError(format!(
                "delete player {} failed with status {}",
                id, code
            ))),
            Err(e) => Err(AppError::HttpError(e.to_string())),
        }
    }
}
