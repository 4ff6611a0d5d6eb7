use crate::context::ModuleContext;
use crate::expand::{or_report, try_expand_variables};
use serde_json::Value;
use vv_expand::ExpansionError;

/// Expands every string of a module's property tree with the variables of
/// `namespace`.
///
/// A property that fails is reported against its path (`cmd`, `srcs[1]`,
/// `arch.arm64.cflags[0]`) and set to `""`; the rest of the tree is still
/// expanded. Returns the number of failed properties.
pub fn expand_properties<C: ModuleContext + ?Sized>(ctx: &C, namespace: &str, properties: &mut Value) -> usize {
    walk(ctx, properties, "", &mut |s: &str| try_expand_variables(ctx, namespace, s))
}

pub(crate) fn walk<C, F>(ctx: &C, value: &mut Value, path: &str, expand: &mut F) -> usize
where
    C: ModuleContext + ?Sized,
    F: FnMut(&str) -> Result<String, ExpansionError>,
{
    match value {
        Value::String(s) => {
            let result = expand(s.as_str());
            let failed = result.is_err();
            let property = (!path.is_empty()).then_some(path);
            *s = or_report(ctx, property, s.as_str(), result);
            usize::from(failed)
        }
        Value::Array(items) => items
            .iter_mut()
            .enumerate()
            .map(|(i, item)| walk(ctx, item, &format!("{}[{}]", path, i), expand))
            .sum(),
        Value::Object(map) => map
            .iter_mut()
            .map(|(key, item)| {
                let child = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                walk(ctx, item, &child, expand)
            })
            .sum(),
        _ => 0,
    }
}
