use super::helpers::TestProject;

#[test]
fn test_check_requires_token() {
    let test_env = TestProject::new();

    let output = test_env.run_auditor(&["check"], &[("GITHUB_REPOSITORY", "octo/widgets")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("GITHUB_TOKEN"));
}

#[test]
fn test_check_requires_repository() {
    let test_env = TestProject::new();

    let output = test_env.run_auditor(&["check"], &[("GITHUB_TOKEN", "t")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("GITHUB_REPOSITORY"));
}

#[test]
fn test_check_rejects_malformed_repository() {
    let test_env = TestProject::new();

    let output = test_env.run_auditor(&["check", "--repo", "not-a-slug"], &[("GITHUB_TOKEN", "t")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("owner/name"));
}

#[test]
fn test_check_with_missing_policy_fails() {
    let test_env = TestProject::new();

    let output = test_env.run_auditor(
        &["check"],
        &[
            ("GITHUB_TOKEN", "t"),
            ("GITHUB_REPOSITORY", "octo/widgets"),
            ("GITHUB_API_URL", "http://127.0.0.1:9"),
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("license-policy.yml"));
    assert!(!test_env.path("license-compliance-report.md").exists());
}

#[test]
fn test_report_requires_owner() {
    let test_env = TestProject::new();

    let output = test_env.run_auditor(&["report"], &[("GITHUB_TOKEN", "t")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("GITHUB_REPOSITORY_OWNER"));
}

#[test]
fn test_init_and_validate_policy() {
    let test_env = TestProject::new();

    let init_output = test_env.run_auditor(&["init", "green"], &[]);
    assert!(init_output.status.success());
    assert!(test_env.path("policy/license-policy.yml").exists());

    let validate_output = test_env.run_auditor(&["config", "--validate"], &[]);
    assert!(validate_output.status.success());
    assert!(String::from_utf8_lossy(&validate_output.stdout).contains("Policy is valid"));

    // A second init must not clobber the policy
    let again = test_env.run_auditor(&["init", "red"], &[]);
    assert!(!again.status.success());
    assert!(String::from_utf8_lossy(&again.stderr).contains("--force"));
}

#[test]
fn test_config_show_prints_policy() {
    let test_env = TestProject::new();
    test_env.write_policy("allowed_licenses: [MIT]\nblocked_licenses: [GPL-3.0]\n");

    let output = test_env.run_auditor(&["config", "--show"], &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"allowed_licenses\""));
    assert!(stdout.contains("GPL-3.0"));
}

#[test]
fn test_config_validate_rejects_missing_policy() {
    let test_env = TestProject::new();

    let output = test_env.run_auditor(&["config", "--validate"], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Policy validation failed"));
}
