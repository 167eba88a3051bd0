use std::fs;
use super::helpers::{serve_once, TestProject};

const SBOM: &str = r#"{"packages":[
    {"name":"a","version":"1.0","licenses":["MIT"]},
    {"name":"b","version":"2.0","licenses":["GPL-3.0"]},
    {"name":"c","version":"3.0","licenses":[]}
]}"#;

#[test]
fn test_check_reports_violations_and_exits_one() {
    let test_env = TestProject::new();
    test_env.write_policy("allowed_licenses: [MIT]\nblocked_licenses: [GPL-3.0]\n");
    let (api, server) = serve_once("200 OK", SBOM);

    let output = test_env.run_auditor(
        &["check"],
        &[
            ("GITHUB_TOKEN", "secret-token"),
            ("GITHUB_REPOSITORY", "octo/widgets"),
            ("GITHUB_API_URL", api.as_str()),
        ],
    );

    let request = server.join().unwrap();
    assert!(request.starts_with("GET /repos/octo/widgets/dependency-graph/sbom "));
    assert!(request.to_ascii_lowercase().contains("authorization: bearer secret-token"));
    assert!(request.to_ascii_lowercase().contains("accept: application/vnd.github+json"));

    assert_eq!(output.status.code(), Some(1));
    let report = fs::read_to_string(test_env.path("license-compliance-report.md")).unwrap();
    assert!(report.contains("- **b 2.0**: GPL-3.0\n- **c 3.0**: Unknown\n"));
    assert!(report.ends_with("- a 1.0: MIT\n- b 2.0: GPL-3.0\n- c 3.0: Unknown\n"));
}

#[test]
fn test_check_compliant_exits_zero() {
    let test_env = TestProject::new();
    test_env.write_policy("allowed_licenses: [MIT, GPL-3.0, Unknown]\n");
    let (api, server) = serve_once("200 OK", SBOM);

    let output = test_env.run_auditor(
        &["check", "--repo", "octo/widgets"],
        &[("GITHUB_TOKEN", "t"), ("GITHUB_API_URL", api.as_str())],
    );
    server.join().unwrap();

    assert!(output.status.success());
    let report = fs::read_to_string(test_env.path("license-compliance-report.md")).unwrap();
    assert_eq!(
        report.lines().nth(2),
        Some("✅ All dependencies comply with the license policy.")
    );
}

#[test]
fn test_check_fetch_failure_exits_one() {
    let test_env = TestProject::new();
    test_env.write_policy("allowed_licenses: [MIT]\n");
    let (api, server) = serve_once("404 Not Found", r#"{"message":"Not Found"}"#);

    let output = test_env.run_auditor(
        &["check", "--repo", "octo/widgets"],
        &[("GITHUB_TOKEN", "t"), ("GITHUB_API_URL", api.as_str())],
    );
    server.join().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("404"));
    assert!(!test_env.path("license-compliance-report.md").exists());
}

#[test]
fn test_exit_zero_keeps_report() {
    let test_env = TestProject::new();
    test_env.write_policy("allowed_licenses: []\n");
    let (api, server) = serve_once("200 OK", SBOM);

    let output = test_env.run_auditor(
        &["check", "--repo", "octo/widgets", "--exit-zero", "--format", "json", "--output", "out/report.json"],
        &[("GITHUB_TOKEN", "t"), ("GITHUB_API_URL", api.as_str())],
    );
    server.join().unwrap();

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(test_env.path("out/report.json")).unwrap()).unwrap();
    assert_eq!(json["compliant"], false);
    assert_eq!(json["violations"].as_array().unwrap().len(), 3);
}
