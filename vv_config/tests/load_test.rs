use std::fs;
use std::path::Path;
use tempfile::Builder;
use vv_config::{load_file, ConfigError, VendorConfigSet};
use vv_expand::{expand, LookupStore};

#[test]
fn test_load_soong_variables_and_overlay() {
    let dir = Builder::new().prefix("vendorvars").tempdir().unwrap();

    let soong = dir.path().join("soong.variables");
    fs::write(
        &soong,
        r#"{
    "Make_suffix": "-lemonade",
    "VendorVars": {
        "kospVarsPlugin": { "TARGET_DEVICE": "lemonade", "BOOT_HEADER": 4 },
        "kryptonVarsPlugin": { "SIGNING_KEY": "releasekey" }
    }
}"#,
    )
    .unwrap();

    let overlay = dir.path().join("overlay.yaml");
    fs::write(&overlay, "kryptonVarsPlugin:\n  SIGNING_KEY: testkey\n").unwrap();

    let mut set = load_file(&soong).unwrap();
    set.merge(load_file(&overlay).unwrap());

    let kosp = set.vendor_config("kospVarsPlugin");
    assert_eq!(kosp.string_value("TARGET_DEVICE"), "lemonade");
    assert_eq!(kosp.string_value("BOOT_HEADER"), "4");
    assert_eq!(set.vendor_config("kryptonVarsPlugin").string_value("SIGNING_KEY"), "testkey");

    assert_eq!(
        expand("--header_version $(BOOT_HEADER) $(SIGNING_KEY)", kosp).unwrap(),
        "--header_version 4 $(SIGNING_KEY)"
    );
}

#[test]
fn test_missing_file() {
    let err = load_file(Path::new("/nonexistent/dir/soong.variables")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().starts_with("Failed to read file /nonexistent/dir/soong.variables"));
}

#[test]
fn test_soong_variables_without_vendor_vars() {
    let dir = Builder::new().prefix("vendorvars").tempdir().unwrap();
    let soong = dir.path().join("soong.variables");
    fs::write(&soong, r#"{ "VendorVars": null }"#).unwrap();
    assert_eq!(load_file(&soong).unwrap(), VendorConfigSet::new());
}
