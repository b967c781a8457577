use chrono::{DateTime, TimeZone, Utc};
use mlb_roster::config::Config;
use mlb_roster::data_fetcher::api::{create_http_client_with_timeout, execute};
use reqwest::Client;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The 2023-09 San Francisco Giants active roster, in API order:
/// (jersey, full name, position abbreviation).
const GIANTS_ROSTER: [(&str, &str, &str); 26] = [
    ("38", "Alex Cobb", "P"),
    ("57", "Alex Wood", "P"),
    ("13", "Austin Slater", "LF"),
    ("2", "Blake Sabol", "C"),
    ("75", "Camilo Doval", "P"),
    ("6", "Casey Schmitt", "SS"),
    ("7", "J.D. Davis", "3B"),
    ("34", "Jakob Junis", "P"),
    ("23", "Joc Pederson", "DH"),
    ("45", "Kyle Harrison", "P"),
    ("31", "LaMonte Wade Jr.", "1B"),
    ("62", "Logan Webb", "P"),
    ("77", "Luke Jackson", "P"),
    ("5", "Mike Yastrzemski", "CF"),
    ("17", "Mitch Haniger", "LF"),
    ("14", "Patrick Bailey", "C"),
    ("18", "Paul DeJong", "SS"),
    ("74", "Ryan Walker", "P"),
    ("54", "Scott Alexander", "P"),
    ("52", "Sean Manaea", "P"),
    ("33", "Taylor Rogers", "P"),
    ("39", "Thairo Estrada", "2B"),
    ("43", "Tristan Beck", "P"),
    ("71", "Tyler Rogers", "P"),
    ("53", "Wade Meckler", "OF"),
    ("41", "Wilmer Flores", "1B"),
];

fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 9, 6, 12, 0, 0).unwrap()
}

fn test_client() -> Client {
    create_http_client_with_timeout(30).expect("Failed to create test HTTP client")
}

fn test_config(api_domain: &str) -> Config {
    Config {
        api_domain: api_domain.to_string(),
        log_file_path: None,
        http_timeout_seconds: 30,
    }
}

fn giants_team_json() -> serde_json::Value {
    json!({
        "id": 137,
        "name": "San Francisco Giants",
        "link": "/api/v1/teams/137",
        "locationName": "San Francisco",
        "teamName": "Giants",
        "active": true,
        "venue": {"id": 2395, "name": "Oracle Park", "link": "/api/v1/venues/2395"}
    })
}

fn giants_roster_json() -> serde_json::Value {
    let roster: Vec<serde_json::Value> = GIANTS_ROSTER
        .iter()
        .enumerate()
        .map(|(i, (jersey, name, position))| {
            json!({
                "person": {"id": 600000 + i as i64, "fullName": name},
                "jerseyNumber": jersey,
                "position": {"abbreviation": position},
                "status": {"code": "A", "description": "Active"}
            })
        })
        .collect();
    json!({"roster": roster})
}

fn oracle_park_json() -> serde_json::Value {
    json!({
        "venues": [{
            "id": 2395,
            "name": "Oracle Park",
            "link": "/api/v1/venues/2395",
            "active": true,
            "season": "2023"
        }]
    })
}

fn expected_giants_csv() -> String {
    let mut expected = String::from("Team,Jersey,Name,Position,Home Stadium\n");
    for (jersey, name, position) in GIANTS_ROSTER {
        expected.push_str(&format!(
            "San Francisco Giants,{jersey},{name},{position},Oracle Park\n"
        ));
    }
    expected
}

/// Mounts the team-search endpoint with a multi-team season list so the
/// name path has something to scan past.
async fn mount_season_team_list(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/teams"))
        .and(query_param("season", "2023"))
        .and(query_param("sportIds", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "teams": [
                {
                    "id": 121,
                    "name": "New York Mets",
                    "active": true,
                    "venue": {"id": 3289}
                },
                giants_team_json(),
                {
                    "id": 147,
                    "name": "New York Yankees",
                    "active": true,
                    "venue": {"id": 3313}
                }
            ]
        })))
        .mount(mock_server)
        .await;
}

async fn mount_giants_by_id(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/teams/137"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"teams": [giants_team_json()]})),
        )
        .mount(mock_server)
        .await;
}

async fn mount_giants_roster(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/teams/137/roster"))
        .respond_with(ResponseTemplate::new(200).set_body_json(giants_roster_json()))
        .mount(mock_server)
        .await;
}

async fn mount_oracle_park(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/venues/2395"))
        .respond_with(ResponseTemplate::new(200).set_body_json(oracle_park_json()))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_lookup_team_by_id() {
    let mock_server = MockServer::start().await;
    mount_giants_by_id(&mock_server).await;
    mount_giants_roster(&mock_server).await;
    mount_oracle_park(&mock_server).await;

    let config = test_config(&mock_server.uri());
    let result = execute(&test_client(), &config, "137", reference_time())
        .await
        .unwrap();

    assert_eq!(result, expected_giants_csv());
    assert_eq!(result.lines().count(), 27);
}

#[tokio::test]
async fn test_lookup_team_by_id_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/98372"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let result = execute(&test_client(), &config, "98372", reference_time())
        .await
        .unwrap();

    assert_eq!(result, "Not Found");
}

#[tokio::test]
async fn test_lookup_team_by_name() {
    let mock_server = MockServer::start().await;
    mount_season_team_list(&mock_server).await;
    mount_giants_roster(&mock_server).await;
    mount_oracle_park(&mock_server).await;

    let config = test_config(&mock_server.uri());
    let result = execute(&test_client(), &config, "san fran", reference_time())
        .await
        .unwrap();

    // The name path must produce the identical document to the id path
    assert_eq!(result, expected_giants_csv());
}

#[tokio::test]
async fn test_lookup_team_by_name_not_found() {
    let mock_server = MockServer::start().await;
    mount_season_team_list(&mock_server).await;

    let config = test_config(&mock_server.uri());
    let result = execute(&test_client(), &config, "knicks", reference_time())
        .await
        .unwrap();

    assert_eq!(result, "Not Found");
}

#[tokio::test]
async fn test_failed_resolution_makes_no_further_calls() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/98372"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    // Roster and venue endpoints must never be touched
    Mock::given(method("GET"))
        .and(path("/api/v1/teams/98372/roster"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"roster": []})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let result = execute(&test_client(), &config, "98372", reference_time())
        .await
        .unwrap();

    assert_eq!(result, "Not Found");
}

#[tokio::test]
async fn test_empty_roster_renders_header_only() {
    let mock_server = MockServer::start().await;
    mount_giants_by_id(&mock_server).await;
    mount_oracle_park(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/137/roster"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"roster": []})))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let result = execute(&test_client(), &config, "137", reference_time())
        .await
        .unwrap();

    assert_eq!(result, "Team,Jersey,Name,Position,Home Stadium\n");
}

#[tokio::test]
async fn test_roster_failure_degrades_to_header_only() {
    let mock_server = MockServer::start().await;
    mount_giants_by_id(&mock_server).await;
    mount_oracle_park(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/137/roster"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let result = execute(&test_client(), &config, "137", reference_time())
        .await
        .unwrap();

    // Roster failures stay quiet: the lookup succeeds with zero data rows
    assert_eq!(result, "Team,Jersey,Name,Position,Home Stadium\n");
}

#[tokio::test]
async fn test_missing_venue_is_not_found() {
    let mock_server = MockServer::start().await;
    mount_giants_by_id(&mock_server).await;
    mount_giants_roster(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/venues/2395"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let result = execute(&test_client(), &config, "137", reference_time())
        .await
        .unwrap();

    assert_eq!(result, "Not Found");
}

#[tokio::test]
async fn test_execute_is_idempotent() {
    let mock_server = MockServer::start().await;
    mount_giants_by_id(&mock_server).await;
    mount_giants_roster(&mock_server).await;
    mount_oracle_park(&mock_server).await;

    let config = test_config(&mock_server.uri());
    let client = test_client();

    let first = execute(&client, &config, "137", reference_time())
        .await
        .unwrap();
    let second = execute(&client, &config, "137", reference_time())
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_quoting_of_embedded_commas() {
    let mock_server = MockServer::start().await;
    mount_giants_by_id(&mock_server).await;
    mount_oracle_park(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/137/roster"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "roster": [{
                "person": {"id": 1, "fullName": "Davis, J.D."},
                "jerseyNumber": "7",
                "position": {"abbreviation": "3B"}
            }]
        })))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let result = execute(&test_client(), &config, "137", reference_time())
        .await
        .unwrap();

    assert_eq!(
        result,
        "Team,Jersey,Name,Position,Home Stadium\n\
         San Francisco Giants,7,\"Davis, J.D.\",3B,Oracle Park\n"
    );
}
