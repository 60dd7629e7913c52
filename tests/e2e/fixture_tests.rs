use std::fs;
use std::process::Command;

#[test]
fn test_with_preconfigured_manifest() {
    let binary_path = env!("CARGO_BIN_EXE_license-meta-export");

    // Create temp directory with a complete manifest
    let temp_dir = tempfile::tempdir().unwrap();
    let project_path = temp_dir.path().join("test-project");
    fs::create_dir(&project_path).unwrap();

    fs::write(
        project_path.join("licenses.toml"),
        r#"format = "json"

[[license]]
id = "MIT"
name = "MIT License"
"#,
    )
    .unwrap();

    let output = Command::new(binary_path)
        .arg("export")
        .current_dir(&project_path)
        .output()
        .expect("Failed to run license-meta-export");

    if !output.status.success() {
        eprintln!("STDOUT: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
    }

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let record = &value["licenses"][0];

    // Full record shape, every placeholder flag false
    assert_eq!(record["license_id"], "MIT");
    assert_eq!(record["name"], "MIT License");
    assert_eq!(record["reference_url"], "https://spdx.org/licenses/MIT.html");
    assert_eq!(record["details_url"], "https://spdx.org/licenses/MIT.json");
    for flag in [
        "osi_approved",
        "saas_compatible",
        "fsf_approved",
        "commercial_use_allowed",
    ] {
        assert_eq!(record[flag], false, "{} should be false", flag);
    }
    assert_eq!(
        record["compatibility"],
        serde_json::json!({"MIT": false, "GPL-3.0": false})
    );
}
