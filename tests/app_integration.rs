use std::fs;
use tracing::{error, info};

mod test_utils {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_mock_server(
        base_currency: &str,
        status: u16,
        mock_response: &str,
    ) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/latest"))
            .and(query_param("base_currency", base_currency))
            .respond_with(ResponseTemplate::new(status).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub fn write_config(file: &tempfile::NamedTempFile, base_url: &str, currencies: &str) {
        let config_content = format!(
            r#"
provider:
  base_url: {base_url}
currencies: [{currencies}]
"#
        );
        std::fs::write(file.path(), config_content).expect("Failed to write config file");
    }
}

fn convert(amount: &str, base: Option<&str>) -> fxconv::AppCommand {
    fxconv::AppCommand::Convert {
        amount: amount.to_string(),
        base: base.map(str::to_string),
        api_key: None,
    }
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_with_mock() {
    let mock_server = test_utils::create_mock_server(
        "USD",
        200,
        r#"{"data": {"EUR": 0.92, "JPY": 151.23}}"#,
    )
    .await;

    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    test_utils::write_config(&config_file, &mock_server.uri(), "USD, EUR, JPY");

    let result = fxconv::run_command(
        convert("10", None),
        Some(config_file.path().to_str().unwrap()),
        Some("test-key".to_string()),
    )
    .await;
    assert!(
        result.is_ok(),
        "Convert command failed with: {:?}",
        result.err()
    );

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let query: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    info!(?query, "Provider received query");
    assert!(query.contains(&("apikey".to_string(), "test-key".to_string())));
    assert!(query.contains(&("currencies".to_string(), "USD,EUR,JPY".to_string())));
}

#[test_log::test(tokio::test)]
async fn test_convert_reports_server_error() {
    let mock_server = test_utils::create_mock_server("EUR", 500, "").await;

    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    test_utils::write_config(&config_file, &mock_server.uri(), "EUR, USD");

    let result = fxconv::run_command(
        convert("10", Some("EUR")),
        Some(config_file.path().to_str().unwrap()),
        Some("test-key".to_string()),
    )
    .await;

    match result {
        Ok(()) => panic!("Expected a transport error"),
        Err(e) => {
            error!("Convert failed as expected: {e}");
            assert_eq!(
                e.to_string(),
                "API Request Error: HTTP error: 500 Internal Server Error"
            );
        }
    }
}

#[test_log::test(tokio::test)]
async fn test_convert_without_key_never_calls_provider() {
    let mock_server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::any())
        .respond_with(wiremock::ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    test_utils::write_config(&config_file, &mock_server.uri(), "EUR");

    let result = fxconv::run_command(
        convert("10", None),
        Some(config_file.path().to_str().unwrap()),
        None,
    )
    .await;
    assert_eq!(
        result.unwrap_err().to_string(),
        "API Key is required.\nPlease enter it."
    );
}

#[test_log::test(tokio::test)]
async fn test_convert_with_empty_rates() {
    let mock_server = test_utils::create_mock_server("EUR", 200, r#"{"data": {}}"#).await;

    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    test_utils::write_config(&config_file, &mock_server.uri(), "EUR, USD");

    let result = fxconv::run_command(
        convert("10", None),
        Some(config_file.path().to_str().unwrap()),
        Some("test-key".to_string()),
    )
    .await;
    assert_eq!(
        result.unwrap_err().to_string(),
        "Could not retrieve exchange rates."
    );
}

#[test_log::test(tokio::test)]
async fn test_currencies_command_with_config() {
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    fs::write(config_file.path(), "currencies: [chf, sek]").expect("Failed to write config");

    let result = fxconv::run_command(
        fxconv::AppCommand::Currencies,
        Some(config_file.path().to_str().unwrap()),
        None,
    )
    .await;
    assert!(result.is_ok(), "Currencies failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_missing_config_path_fails() {
    let result = fxconv::run_command(
        fxconv::AppCommand::Currencies,
        Some("/nonexistent/fxconv/config.yaml"),
        None,
    )
    .await;
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Failed to read config file")
    );
}
