use crate::context::ModuleContext;
use log::debug;
use vv_expand::{ExpansionError, LookupStore, Syntax};

pub const KOSP_VARS_NAMESPACE: &str = "kospVarsPlugin";
pub const KRYPTON_VARS_NAMESPACE: &str = "kryptonVarsPlugin";

/// Expands the variables `namespace` owns in `input`, leaving every other
/// `$(name)` for a later pass.
pub fn try_expand_variables<C: ModuleContext + ?Sized>(
    ctx: &C,
    namespace: &str,
    input: &str,
) -> Result<String, ExpansionError> {
    expand_pass(ctx, namespace, input, ctx.syntax(), &mut |_| {})
}

/// One pass over `input` with the variables of `namespace`. Every name the
/// namespace does not set is handed to `unset` before it is re-escaped.
pub(crate) fn expand_pass<C: ModuleContext + ?Sized>(
    ctx: &C,
    namespace: &str,
    input: &str,
    syntax: Syntax,
    unset: &mut dyn FnMut(&str),
) -> Result<String, ExpansionError> {
    let vars = ctx.config().vendor_config(namespace);
    let out = vv_expand::expand_with(input, syntax, |name| {
        if vars.is_set(name) {
            Ok(vars.string_value(name))
        } else {
            unset(name);
            Ok(vv_expand::escape(name))
        }
    })?;
    if out != input {
        debug!("{}: {}: {:?} -> {:?}", ctx.module_name(), namespace, input, out);
    }
    Ok(out)
}

/// Like [`try_expand_variables`], but a failure is reported through
/// `ctx.property_errorf` as `"<input>: <error>"` and expands to `""`.
pub fn expand_variables<C: ModuleContext + ?Sized>(ctx: &C, namespace: &str, input: &str) -> String {
    or_report(ctx, None, input, try_expand_variables(ctx, namespace, input))
}

pub fn kosp_expand_variables<C: ModuleContext + ?Sized>(ctx: &C, input: &str) -> String {
    expand_variables(ctx, KOSP_VARS_NAMESPACE, input)
}

pub fn krypton_expand_variables<C: ModuleContext + ?Sized>(ctx: &C, input: &str) -> String {
    expand_variables(ctx, KRYPTON_VARS_NAMESPACE, input)
}

pub(crate) fn or_report<C: ModuleContext + ?Sized>(
    ctx: &C,
    property: Option<&str>,
    input: &str,
    result: Result<String, ExpansionError>,
) -> String {
    match result {
        Ok(out) => out,
        Err(err) => {
            ctx.property_errorf(property, format!("{}: {}", input, err));
            String::new()
        }
    }
}
