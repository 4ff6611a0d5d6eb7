use log::warn;
use std::cell::RefCell;
use std::fmt;
use vv_config::VendorConfigSet;
use vv_expand::Syntax;

/// An error reported against a module, optionally naming the property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub module: String,
    pub property: Option<String>,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.property {
            Some(property) => write!(f, "{}: {}: {}", self.module, property, self.message),
            None => write!(f, "{}: {}", self.module, self.message),
        }
    }
}

/// What the build host hands a module while it is being generated: the
/// per-build vendor configuration and an error sink.
pub trait ModuleContext {
    fn module_name(&self) -> &str;

    fn config(&self) -> &VendorConfigSet;

    /// Reports an error against `property` (or the module itself). Marks the
    /// module as failed without aborting the build.
    fn property_errorf(&self, property: Option<&str>, message: String);

    fn syntax(&self) -> Syntax {
        Syntax::default()
    }
}

/// [`ModuleContext`] that collects diagnostics in memory.
pub struct BuildContext<'a> {
    module: String,
    config: &'a VendorConfigSet,
    syntax: Syntax,
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl<'a> BuildContext<'a> {
    pub fn new(module: impl Into<String>, config: &'a VendorConfigSet) -> Self {
        Self {
            module: module.into(),
            config,
            syntax: Syntax::default(),
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    pub fn failed(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }
}

impl ModuleContext for BuildContext<'_> {
    fn module_name(&self) -> &str {
        &self.module
    }

    fn config(&self) -> &VendorConfigSet {
        self.config
    }

    fn property_errorf(&self, property: Option<&str>, message: String) {
        let diagnostic = Diagnostic {
            module: self.module.clone(),
            property: property.map(str::to_string),
            message,
        };
        warn!("{}", diagnostic);
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    fn syntax(&self) -> Syntax {
        self.syntax
    }
}
