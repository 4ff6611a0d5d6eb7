use serde_json::json;
use std::collections::HashMap;
use std::fs;
use tempfile::Builder;
use vendorvars::{
    expand, kosp_expand_variables, krypton_expand_variables, vv_config, BuildContext, ExpansionChain,
    ExpansionError,
};

#[test]
fn test_integration_genrule_cmd() {
    // 1. A build's soong.variables with two vendor plugins
    let dir = Builder::new().prefix("vendorvars").tempdir().unwrap();
    let soong = dir.path().join("soong.variables");
    fs::write(
        &soong,
        r#"{
    "Platform_version_name": "14",
    "VendorVars": {
        "kospVarsPlugin": { "KERNEL_DIR": "kernel/xiaomi/sm8350", "DTB_OUT": "dtb.img" },
        "kryptonVarsPlugin": { "BUILD_FLAVOR": "user", "SIGN": true }
    }
}"#,
    )
    .unwrap();
    let config = vv_config::load_file(&soong).unwrap();

    // 2. The module being generated
    let ctx = BuildContext::new("gen_dtb", &config);
    let cmd = "make -C $(KERNEL_DIR) FLAVOR=$(BUILD_FLAVOR) SIGN=$(SIGN) && cp $(DTB_OUT) $(out)";

    // 3. Each plugin resolves only its own variables
    let after_kosp = kosp_expand_variables(&ctx, cmd);
    assert_eq!(
        after_kosp,
        "make -C kernel/xiaomi/sm8350 FLAVOR=$(BUILD_FLAVOR) SIGN=$(SIGN) && cp dtb.img $(out)"
    );
    let after_krypton = krypton_expand_variables(&ctx, &after_kosp);
    assert_eq!(
        after_krypton,
        "make -C kernel/xiaomi/sm8350 FLAVOR=user SIGN=true && cp dtb.img $(out)"
    );
    assert_eq!(ExpansionChain::host().expand(&ctx, cmd), after_krypton);

    // 4. $(out) is left for the host's own pass
    assert_eq!(ExpansionChain::host().unresolved(&ctx, cmd).unwrap(), vec!["out".to_string()]);
    assert!(!ctx.failed());
}

#[test]
fn test_integration_module_properties() {
    let mut config = vendorvars::VendorConfigSet::new();
    config.namespace_mut("kospVarsPlugin").set("SOC", "sm8350");
    let ctx = BuildContext::new("libperf", &config);

    let mut props = json!({
        "srcs": ["perf-$(SOC).c", "common.c"],
        "cflags": ["-DSOC=\"$(SOC)\"", "-DBAD=$(SOC"]
    });
    assert_eq!(ExpansionChain::host().expand_properties(&ctx, &mut props), 1);
    assert_eq!(props["srcs"], json!(["perf-sm8350.c", "common.c"]));
    assert_eq!(props["cflags"], json!(["-DSOC=\"sm8350\"", ""]));
    assert_eq!(ctx.diagnostics()[0].to_string(), "libperf: cflags[1]: -DBAD=$(SOC: missing )");
}

#[test]
fn test_integration_plain_lookup() {
    let mut vars = HashMap::new();
    vars.insert("FOO".to_string(), "bar".to_string());
    assert_eq!(expand("a=$(FOO) b=$(BAZ)", &vars).unwrap(), "a=bar b=$(BAZ)");
    assert!(matches!(
        expand("$(FOO", &vars),
        Err(ExpansionError::MalformedPlaceholder { .. })
    ));
}
