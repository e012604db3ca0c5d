use httpmock::prelude::*;
use serde_json::json;

use clan_stats::api::client::StatsApiClient;
use clan_stats::config::Config;

fn client_for(server: &MockServer) -> StatsApiClient {
    StatsApiClient::new(Config {
        base_url: server.base_url(),
    })
}

#[test]
fn players_list_parses_wire_records() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/jogadores");
        then.status(200).json_body(json!([
            { "ID_Jogador": 1, "Nome_Jogador": "Ana", "Pontuacao_Total": 50, "idCla": 2 }
        ]));
    });

    let players = client_for(&server).list_players();

    mock.assert();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].id, 1);
    assert_eq!(players[0].name, "Ana");
}

#[test]
fn ranking_arrives_pre_sorted_and_in_order() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/ranking");
        then.status(200).json_body(json!([
            { "Nome_Jogador": "Ana", "Pontuacao": 50 },
            { "Nome_Jogador": "Bo", "Pontuacao": 40 }
        ]));
    });

    let ranking = client_for(&server).player_ranking();

    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0].name, "Ana");
    assert_eq!(ranking[1].name, "Bo");
}

#[test]
fn non_success_status_degrades_to_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/clans");
        then.status(500);
    });

    assert!(client_for(&server).list_clans().is_empty());
}

#[test]
fn malformed_body_degrades_to_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/eventos");
        then.status(200).body("not json at all");
    });

    assert!(client_for(&server).list_events().is_empty());
}

#[test]
fn unreachable_server_degrades_to_empty() {
    let client = StatsApiClient::new(Config {
        base_url: "http://127.0.0.1:1".to_string(),
    });

    assert!(client.list_attacks().is_empty());
    assert!(client.list_leagues().is_empty());
}

#[test]
fn create_player_posts_wire_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/jogadores")
            .header("content-type", "application/json")
            .json_body(json!({
                "Nome_Jogador": "Ana",
                "Data_Entrada": "2024-01-15",
                "Pontuacao_Total": 50,
                "idCla": 2
            }));
        then.status(201);
    });

    let result = client_for(&server).create_player(&clan_stats::api::models::NewPlayer {
        name: "Ana".to_string(),
        entry_date: "2024-01-15".to_string(),
        total_score: 50,
        clan_id: 2,
    });

    mock.assert();
    assert!(result.is_ok());
}

#[test]
fn create_player_surfaces_rejection() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/jogadores");
        then.status(400);
    });

    let result = client_for(&server).create_player(&clan_stats::api::models::NewPlayer {
        name: "Ana".to_string(),
        entry_date: "2024-01-15".to_string(),
        total_score: 50,
        clan_id: 2,
    });

    assert!(result.is_err());
}

#[test]
fn delete_targets_the_player_path() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/jogadores/7");
        then.status(200);
    });

    assert!(client_for(&server).delete_player(7).is_ok());
    mock.assert();
}

#[test]
fn delete_surfaces_rejection() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/api/jogadores/7");
        then.status(404);
    });

    assert!(client_for(&server).delete_player(7).is_err());
}
