//! releasecheck tests with a mock registry and a mock PyPI server

mod helper;

use mockito::Server;

use helper::{MockRegistry, ProjectFixture};
use release_check::command::{Outcome, internal_version, release_status, run_release};
use release_check::config::AuditConfig;
use release_check::report::Reporter;
use release_check::version::error::{AuditError, RegistryError};
use release_check::version::registries::PypiRegistry;
use release_check::version::types::PublishedVersions;

const RELEASES_BODY: &str = r#"{"releases": {"0.1.0": [], "0.2.0": []}}"#;

async fn pypi_server(
    status: usize,
    body: &str,
    hits: usize,
) -> (mockito::ServerGuard, mockito::Mock) {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/pypi/pyarc2/json")
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(hits)
        .create_async()
        .await;
    (server, mock)
}

fn config_for(server: &mockito::ServerGuard) -> AuditConfig {
    let mut config = AuditConfig::default();
    config.registry.url = server.url();
    config
}

/// Runs `releasecheck` the way the binary does; returns (exit code, stdout, stderr)
async fn releasecheck(project: &ProjectFixture, config: &AuditConfig) -> (u8, String, String) {
    let mut reporter = Reporter::new(Vec::new(), Vec::new(), "PyPI");
    let code = run_release(
        project.root(),
        config,
        |config| PypiRegistry::from_config(&config.registry),
        &mut reporter,
    )
    .await
    .unwrap();
    let (out, err) = reporter.into_inner();
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[tokio::test]
async fn already_published_version_exits_one() {
    let project = ProjectFixture::consistent("0.2.0");
    let (server, mock) = pypi_server(200, RELEASES_BODY, 1).await;

    let (code, out, err) = releasecheck(&project, &config_for(&server)).await;

    mock.assert_async().await;
    assert_eq!(code, 1);
    assert_eq!(
        out,
        "Found internal version: 0.2.0\nFound all PyPI versions: [0.1.0, 0.2.0]\n"
    );
    assert_eq!(
        err,
        "An identical release exists on PyPI; bump versions before proceeding\n"
    );
}

#[tokio::test]
async fn unpublished_version_exits_zero() {
    let project = ProjectFixture::consistent("0.3.0");
    let (server, mock) = pypi_server(200, RELEASES_BODY, 1).await;

    let (code, out, err) = releasecheck(&project, &config_for(&server)).await;

    mock.assert_async().await;
    assert_eq!(code, 0);
    assert!(out.ends_with("Found all PyPI versions: [0.1.0, 0.2.0]\n"));
    assert!(err.is_empty());
}

#[tokio::test]
async fn non_200_registry_response_exits_two() {
    for status in [404, 500, 503] {
        let project = ProjectFixture::consistent("0.3.0");
        let (server, mock) = pypi_server(status, "", 1).await;

        let (code, _, err) = releasecheck(&project, &config_for(&server)).await;

        mock.assert_async().await;
        assert_eq!(code, 2, "status {status}");
        assert!(
            err.starts_with("A problem occurred when checking PyPI versions: "),
            "status {status}: {err}"
        );
    }
}

#[tokio::test]
async fn malformed_registry_body_exits_two() {
    let project = ProjectFixture::consistent("0.3.0");
    let config = AuditConfig::default();
    let (server, mock) = pypi_server(200, "<html>maintenance</html>", 1).await;
    let registry = PypiRegistry::new(server.url(), config.registry.timeout()).unwrap();

    let version = internal_version(project.root(), &config).unwrap();
    let err = release_status(version, &config, &registry)
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(
        err,
        AuditError::RegistryUnavailable(RegistryError::InvalidResponse(_))
    ));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn inconsistent_versions_exit_one_before_querying_registry() {
    let project = ProjectFixture::with_versions("0.3.0", "0.3.0", "0.3.0", "0.2.9");
    let (server, mock) = pypi_server(200, RELEASES_BODY, 0).await;

    let (code, out, err) = releasecheck(&project, &config_for(&server)).await;

    mock.assert_async().await;
    assert_eq!(code, 1);
    assert!(out.is_empty());
    assert!(err.starts_with("Repository versions are not consistent\n"));
}

#[tokio::test]
async fn zero_timeout_is_a_config_error() {
    let project = ProjectFixture::consistent("0.3.0");
    let (server, mock) = pypi_server(200, RELEASES_BODY, 0).await;
    let mut config = config_for(&server);
    config.registry.timeout_ms = 0;

    let (code, _, err) = releasecheck(&project, &config).await;

    mock.assert_async().await;
    assert_eq!(code, 1);
    assert_eq!(
        err,
        "Invalid configuration: registry timeout must be greater than zero\n"
    );
}

#[tokio::test]
async fn configured_package_name_is_queried() {
    let project = ProjectFixture::consistent("1.0.0");
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/pypi/other-package/json")
        .with_status(200)
        .with_body(r#"{"releases": {"0.9.0": []}}"#)
        .create_async()
        .await;
    let config = AuditConfig {
        package: "other-package".to_string(),
        ..config_for(&server)
    };

    let (code, out, _) = releasecheck(&project, &config).await;

    mock.assert_async().await;
    assert_eq!(code, 0);
    assert!(out.ends_with("[0.9.0]\n"));
}

#[tokio::test]
async fn mock_registry_reports_published_version() {
    let project = ProjectFixture::consistent("0.1.0");
    let config = AuditConfig::default();
    let registry = MockRegistry::with_versions(vec!["0.1.0"]);

    let version = internal_version(project.root(), &config).unwrap();
    let outcome = release_status(version, &config, &registry).await.unwrap();

    assert_eq!(
        outcome,
        Outcome::AlreadyPublished {
            version: "0.1.0".to_string(),
            published: PublishedVersions::new(["0.1.0"]),
        }
    );
    assert_eq!(outcome.exit_code(), 1);
}

#[tokio::test]
async fn mock_registry_failure_maps_to_registry_unavailable() {
    let project = ProjectFixture::consistent("0.1.0");
    let config = AuditConfig::default();
    let registry = MockRegistry::unavailable();

    let version = internal_version(project.root(), &config).unwrap();
    let err = release_status(version, &config, &registry)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AuditError::RegistryUnavailable(RegistryError::NotFound(_))
    ));
    assert_eq!(err.exit_code(), 2);
}
