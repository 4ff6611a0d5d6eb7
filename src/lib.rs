pub use vv_config::{ConfigError, VendorConfig, VendorConfigSet};
pub use vv_expand::{expand, ExpansionError, LookupStore, Syntax};
pub use vv_generator::{
    expand_variables, krypton_expand_variables, kosp_expand_variables, BuildContext, ExpansionChain,
    ModuleContext, KOSP_VARS_NAMESPACE, KRYPTON_VARS_NAMESPACE,
};

pub use vv_config;
pub use vv_expand;
pub use vv_generator;
