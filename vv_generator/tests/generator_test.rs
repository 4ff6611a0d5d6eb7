use serde_json::json;
use std::cell::RefCell;
use vv_config::{parse_content, VendorConfigSet};
use vv_expand::Syntax;
use vv_generator::{
    kosp_expand_variables, krypton_expand_variables, BuildContext, ExpansionChain, ModuleContext,
};

fn soong_variables() -> VendorConfigSet {
    parse_content(
        r#"{
    "DeviceName": "lemonade",
    "VendorVars": {
        "kospVarsPlugin": { "FOO": "bar", "LOOP": "$(BAR)" },
        "kryptonVarsPlugin": { "BAR": "krypton" }
    }
}"#,
        "variables",
    )
    .unwrap()
}

/// Host side context that only keeps the formatted messages.
struct RecordingContext {
    config: VendorConfigSet,
    errors: RefCell<Vec<String>>,
}

impl ModuleContext for RecordingContext {
    fn module_name(&self) -> &str {
        "recording"
    }

    fn config(&self) -> &VendorConfigSet {
        &self.config
    }

    fn property_errorf(&self, property: Option<&str>, message: String) {
        self.errors
            .borrow_mut()
            .push(format!("{}{}", property.map(|p| format!("{}: ", p)).unwrap_or_default(), message));
    }

    fn syntax(&self) -> Syntax {
        Syntax::Host
    }
}

#[test]
fn test_host_call_sites() {
    let config = soong_variables();
    let ctx = BuildContext::new("gen_boot_img", &config);

    assert_eq!(kosp_expand_variables(&ctx, ""), "");
    assert_eq!(kosp_expand_variables(&ctx, "plain text"), "plain text");
    assert_eq!(kosp_expand_variables(&ctx, "$(FOO)"), "bar");
    assert_eq!(kosp_expand_variables(&ctx, "$(BAZ)"), "$(BAZ)");
    assert_eq!(kosp_expand_variables(&ctx, "a=$(FOO) b=$(BAZ)"), "a=bar b=$(BAZ)");
    assert_eq!(kosp_expand_variables(&ctx, "$(LOOP)"), "$(BAR)");
    assert_eq!(krypton_expand_variables(&ctx, "$(LOOP) $(BAR)"), "$(LOOP) krypton");
    assert!(!ctx.failed());

    assert_eq!(kosp_expand_variables(&ctx, "$(FOO"), "");
    let diagnostics = ctx.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].to_string(), "gen_boot_img: $(FOO: missing )");
}

#[test]
fn test_custom_context() {
    let ctx = RecordingContext {
        config: soong_variables(),
        errors: RefCell::new(Vec::new()),
    };

    assert_eq!(kosp_expand_variables(&ctx, "$$(FOO) $(FOO)"), "$(FOO) bar");
    assert_eq!(krypton_expand_variables(&ctx, "cost $5"), "");

    let mut props = json!({ "cmd": "$BAR" });
    assert_eq!(ExpansionChain::host().expand_properties(&ctx, &mut props), 1);
    assert_eq!(props, json!({ "cmd": "" }));

    assert_eq!(
        *ctx.errors.borrow(),
        vec![
            "cost $5: expected '(' after '$', did you mean $(5)?".to_string(),
            "cmd: $BAR: expected '(' after '$', did you mean $(BAR)?".to_string(),
        ]
    );
}

#[test]
fn test_chain_over_module_properties() {
    let config = soong_variables();
    let ctx = BuildContext::new("gen_boot_img", &config);

    let cmd = "mkbootimg --foo $(FOO) --bar $(LOOP) --out $(out)";
    let mut props = json!({
        "name": "gen_boot_img",
        "cmd": cmd,
        "tools": ["mkbootimg"]
    });
    assert_eq!(ExpansionChain::host().expand_properties(&ctx, &mut props), 0);
    assert_eq!(props["cmd"], "mkbootimg --foo bar --bar krypton --out $(out)");
    assert_eq!(
        ExpansionChain::host().unresolved(&ctx, cmd).unwrap(),
        vec!["out".to_string()]
    );
}
