use std::process::Command;

fn weatherscan() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_weatherscan"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_city_exits_with_1() {
    let output = weatherscan().env("API_KEY", "KEY").output().unwrap();

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please provide a city name"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Fetching weather data"));
}

#[test]
fn missing_api_key_exits_with_1() {
    let output = weatherscan().env_remove("API_KEY").arg("London").output().unwrap();

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("API key not found"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Fetching weather data"));
}

#[test]
fn api_key_is_checked_before_city() {
    let output = weatherscan().env_remove("API_KEY").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("API key not found"));
}

/// Lookups that reach the network exit 0 whatever happens; settings come from `XDG_CONFIG_HOME`.
#[cfg(target_os = "linux")]
mod lookups {
    use super::weatherscan;
    use std::{fs, process::Output};
    use tempfile::TempDir;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, query_param},
    };

    /// A config home whose `weatherscan/config.toml` points the lookup at `endpoint`.
    fn config_home(endpoint: &str) -> TempDir {
        let home = tempfile::tempdir().unwrap();
        let dir = home.path().join("weatherscan");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("config.toml"),
            format!("endpoint = \"{endpoint}\"\ntimeout_secs = 5\n"),
        )
        .unwrap();
        home
    }

    fn lookup(endpoint: &str, city: &str) -> Output {
        let home = config_home(endpoint);
        weatherscan()
            .env("API_KEY", "KEY")
            .env("XDG_CONFIG_HOME", home.path())
            .arg(city)
            .output()
            .unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn city_not_found_exits_with_0_and_shows_banner() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "Atlantis"))
            .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"cod":"404"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let output = lookup(&server.uri(), "Atlantis");

        assert_eq!(output.status.code(), Some(0));

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Fetching weather data for Atlantis..."));
        assert!(stdout.contains("City not found! Please check the spelling."));
        assert!(stdout.contains("[ERROR] Failed to get weather data."));
        assert!(!stdout.contains("[OK]"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn api_error_exits_with_0_and_shows_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
            .mount(&server)
            .await;

        let output = lookup(&server.uri(), "Paris");

        assert_eq!(output.status.code(), Some(0));

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("API Error. HTTP Code: 401"));
        assert!(stdout.contains("Response: Invalid API key"));
        assert!(stdout.contains("[ERROR] Failed to get weather data."));
    }

    #[test]
    fn transport_failure_exits_with_0_and_shows_banner() {
        let output = lookup("http://127.0.0.1:1/data/2.5/weather", "Paris");

        assert_eq!(output.status.code(), Some(0));

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Request failed"));
        assert!(!stderr.contains("appid=KEY"));

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("[ERROR] Failed to get weather data."));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn successful_lookup_exits_with_0_and_prints_report() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "Paris"))
            .and(query_param("appid", "KEY"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"name": "Paris", "main": {"temp": 300.0, "feels_like": 301.5, "humidity": 40, "pressure": 1020},
                    "weather": [{"main": "Clear", "description": "clear sky"}], "wind": {"speed": 3.5}}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let output = lookup(&server.uri(), "Paris");

        assert_eq!(output.status.code(), Some(0));

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains(">> Location........: Paris"));
        assert!(stdout.contains(">> Temperature.....: 26.85 C"));
        assert!(stdout.contains(">> Weather.........: Clear (clear sky)"));
        assert!(!stdout.contains("[ERROR]"));

        let last = stdout.lines().rev().find(|line| !line.trim().is_empty() && !line.starts_with('='));
        assert_eq!(last, Some("[OK] Scan completed successfully."));
    }
}
