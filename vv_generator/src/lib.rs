pub mod chain;
pub mod context;
pub mod expand;
pub mod properties;

pub use chain::ExpansionChain;
pub use context::{BuildContext, Diagnostic, ModuleContext};
pub use expand::{
    expand_variables, krypton_expand_variables, kosp_expand_variables, try_expand_variables,
    KOSP_VARS_NAMESPACE, KRYPTON_VARS_NAMESPACE,
};
pub use properties::expand_properties;
