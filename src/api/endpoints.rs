// Fixed API paths, joined against the configured base URL.

pub const PLAYERS: &str = "/api/jogadores";
pub const CLANS: &str = "/api/clans";
pub const EVENTS: &str = "/api/eventos";
pub const ATTACKS: &str = "/api/ataques";
pub const PLAYER_RANKING: &str = "/api/ranking";
pub const CLAN_RANKING: &str = "/api/ranking/cla";
pub const LEAGUES: &str = "/api/liga";

pub fn url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

pub fn player_url(base: &str, id: u32) -> String {
    format!("{}/{}", url(base, PLAYERS), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_and_path() {
        assert_eq!(
            url("http://localhost:3001", PLAYERS),
            "http://localhost:3001/api/jogadores"
        );
        assert_eq!(
            url("http://localhost:3001/", CLAN_RANKING),
            "http://localhost:3001/api/ranking/cla"
        );
    }

    #[test]
    fn player_url_carries_id() {
        assert_eq!(
            player_url("http://localhost:3001", 7),
            "http://localhost:3001/api/jogadores/7"
        );
    }
}
