use crate::context::ModuleContext;
use crate::expand::{expand_pass, or_report, KOSP_VARS_NAMESPACE, KRYPTON_VARS_NAMESPACE};
use crate::properties::walk;
use serde_json::Value;
use std::collections::HashSet;
use vv_expand::{ExpansionError, Syntax};

/// Ordered list of vendor namespaces, expanded one pass each. Every pass sees
/// the output of the one before it.
///
/// Only the last pass reads the text with the context's [`Syntax`]; the
/// passes before it use [`Syntax::Passthrough`] so a `$$` escape survives
/// until the end of the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionChain {
    namespaces: Vec<String>,
}

impl ExpansionChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// The kosp pass followed by the krypton pass.
    pub fn host() -> Self {
        Self::new().then(KOSP_VARS_NAMESPACE).then(KRYPTON_VARS_NAMESPACE)
    }

    pub fn then(mut self, namespace: impl Into<String>) -> Self {
        self.namespaces.push(namespace.into());
        self
    }

    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    fn run<C: ModuleContext + ?Sized>(
        &self,
        ctx: &C,
        input: &str,
        unset: &mut dyn FnMut(&str),
    ) -> Result<String, ExpansionError> {
        let Some((last, earlier)) = self.namespaces.split_last() else {
            return Ok(input.to_string());
        };
        let mut text = input.to_string();
        for namespace in earlier {
            text = expand_pass(ctx, namespace, &text, Syntax::Passthrough, &mut |_| {})?;
        }
        expand_pass(ctx, last, &text, ctx.syntax(), unset)
    }

    pub fn try_expand<C: ModuleContext + ?Sized>(&self, ctx: &C, input: &str) -> Result<String, ExpansionError> {
        self.run(ctx, input, &mut |_| {})
    }

    /// Runs every pass; the first failure is reported against the original
    /// input and the whole chain expands to `""`.
    pub fn expand<C: ModuleContext + ?Sized>(&self, ctx: &C, input: &str) -> String {
        or_report(ctx, None, input, self.try_expand(ctx, input))
    }

    /// [`expand_properties`](crate::expand_properties) through every pass of
    /// the chain.
    pub fn expand_properties<C: ModuleContext + ?Sized>(&self, ctx: &C, properties: &mut Value) -> usize {
        walk(ctx, properties, "", &mut |s: &str| self.try_expand(ctx, s))
    }

    /// Identifiers in `input` that no pass of the chain resolves, in order of
    /// first appearance. Nothing is reported to `ctx`.
    pub fn unresolved<C: ModuleContext + ?Sized>(&self, ctx: &C, input: &str) -> Result<Vec<String>, ExpansionError> {
        let mut names = Vec::new();
        if self.namespaces.is_empty() {
            names = vv_expand::placeholders_in(input, ctx.syntax())?;
        } else {
            self.run(ctx, input, &mut |name| names.push(name.to_string()))?;
        }
        let mut seen = HashSet::new();
        names.retain(|name| seen.insert(name.clone()));
        Ok(names)
    }
}
