use serde::{Deserialize, Serialize};

// Wire format keeps the API's Portuguese field names; Rust side stays snake_case.

// GET /api/jogadores
#[derive(Debug, Deserialize, Clone)]
pub struct Player {
    #[serde(rename = "ID_Jogador")]
    pub id: u32,
    #[serde(rename = "Nome_Jogador")]
    pub name: String,
    #[serde(rename = "Pontuacao_Total")]
    pub total_score: i64,
    #[serde(rename = "idCla")]
    pub clan_id: u32,
}

// POST /api/jogadores body
#[derive(Debug, Serialize, Clone)]
pub struct NewPlayer {
    #[serde(rename = "Nome_Jogador")]
    pub name: String,
    #[serde(rename = "Data_Entrada")]
    pub entry_date: String,
    #[serde(rename = "Pontuacao_Total")]
    pub total_score: i64,
    #[serde(rename = "idCla")]
    pub clan_id: u32,
}

// GET /api/clans
// The attack counters are only present on clans that fought this season,
// so they default to zero for chart aggregation.
#[derive(Debug, Deserialize, Clone)]
pub struct Clan {
    #[serde(rename = "ID_Cla")]
    pub id: u32,
    #[serde(rename = "Nome")]
    pub name: String,
    #[serde(rename = "Data_Criacao", default)]
    pub created_at: String,
    #[serde(rename = "ID_Liga", default)]
    pub league_id: u32,
    #[serde(rename = "Numero_Ataques", default)]
    pub attack_count: i64,
    #[serde(rename = "Vitorias", default)]
    pub wins: i64,
    #[serde(rename = "Derrotas", default)]
    pub losses: i64,
}

// GET /api/eventos
#[derive(Debug, Deserialize, Clone)]
pub struct GameEvent {
    #[serde(rename = "Tipo_Evento")]
    pub kind: String,
    #[serde(rename = "Quantidade")]
    pub count: i64,
}

// GET /api/ataques
#[derive(Debug, Deserialize, Clone)]
pub struct AttackRecord {
    #[serde(rename = "ID_Ataque")]
    pub id: u32,
    #[serde(rename = "Nome_Jogador")]
    pub player_name: String,
    #[serde(rename = "Numero_Ataques", default)]
    pub attack_count: i64,
    #[serde(rename = "Vitorias", default)]
    pub wins: i64,
    #[serde(rename = "Derrotas", default)]
    pub losses: i64,
}

// GET /api/ranking (pre-sorted by the API)
#[derive(Debug, Deserialize, Clone)]
pub struct PlayerRankingEntry {
    #[serde(rename = "Nome_Jogador")]
    pub name: String,
    #[serde(rename = "Pontuacao")]
    pub score: i64,
}

// GET /api/ranking/cla (pre-sorted by the API)
#[derive(Debug, Deserialize, Clone)]
pub struct ClanRankingEntry {
    #[serde(rename = "Nome")]
    pub name: String,
    #[serde(rename = "Pontuacao")]
    pub score: i64,
}

// GET /api/liga
#[derive(Debug, Deserialize, Clone)]
pub struct League {
    #[serde(rename = "ID_Liga")]
    pub id: u32,
    #[serde(rename = "Nome_Liga")]
    pub name: String,
    #[serde(rename = "Pontuacao_Minima")]
    pub min_score: i64,
    #[serde(rename = "Pontuacao_Maxima")]
    pub max_score: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_player_wire_format() {
        let body = r#"[{"ID_Jogador":1,"Nome_Jogador":"Ana","Pontuacao_Total":50,"idCla":2}]"#;
        let players: Vec<Player> = serde_json::from_str(body).unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].id, 1);
        assert_eq!(players[0].name, "Ana");
        assert_eq!(players[0].total_score, 50);
        assert_eq!(players[0].clan_id, 2);
    }

    #[test]
    fn attack_counters_default_to_zero() {
        let body = r#"[{"ID_Ataque":3,"Nome_Jogador":"Bo"}]"#;
        let attacks: Vec<AttackRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(attacks[0].attack_count, 0);
        assert_eq!(attacks[0].wins, 0);
        assert_eq!(attacks[0].losses, 0);
    }

    #[test]
    fn clan_without_counters_still_decodes() {
        let body = r#"[{"ID_Cla":2,"Nome":"Norte","Data_Criacao":"2023-05-01","ID_Liga":1}]"#;
        let clans: Vec<Clan> = serde_json::from_str(body).unwrap();
        assert_eq!(clans[0].name, "Norte");
        assert_eq!(clans[0].wins, 0);
        assert_eq!(clans[0].losses, 0);
    }

    #[test]
    fn new_player_serializes_wire_names() {
        let body = serde_json::to_value(NewPlayer {
            name: "Ana".to_string(),
            entry_date: "2024-01-15".to_string(),
            total_score: 50,
            clan_id: 2,
        })
        .unwrap();
        assert_eq!(body["Nome_Jogador"], "Ana");
        assert_eq!(body["Data_Entrada"], "2024-01-15");
        assert_eq!(body["Pontuacao_Total"], 50);
        assert_eq!(body["idCla"], 2);
    }
}
