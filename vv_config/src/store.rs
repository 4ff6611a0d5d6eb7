use crate::error::ConfigError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::collections::btree_map;
use vv_expand::LookupStore;

const VENDOR_VARS_KEY: &str = "VendorVars";

static EMPTY: VendorConfig = VendorConfig { vars: BTreeMap::new() };

/// The variables of one vendor namespace (e.g. `kospVarsPlugin`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VendorConfig {
    vars: BTreeMap<String, String>,
}

impl VendorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl LookupStore for VendorConfig {
    fn is_set(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    fn string_value(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VendorConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// All vendor namespaces of one build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VendorConfigSet {
    namespaces: BTreeMap<String, VendorConfig>,
}

impl VendorConfigSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the variables of `namespace`. An unknown namespace is an empty
    /// config, never an error.
    pub fn vendor_config(&self, namespace: &str) -> &VendorConfig {
        self.namespaces.get(namespace).unwrap_or(&EMPTY)
    }

    pub fn insert(&mut self, namespace: impl Into<String>, config: VendorConfig) -> Option<VendorConfig> {
        self.namespaces.insert(namespace.into(), config)
    }

    /// Mutable access to `namespace`, created empty if missing.
    pub fn namespace_mut(&mut self, namespace: impl Into<String>) -> &mut VendorConfig {
        self.namespaces.entry(namespace.into()).or_default()
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> + '_ {
        self.namespaces.keys().map(String::as_str)
    }

    /// Folds `other` into `self`. Keys in `other` win.
    pub fn merge(&mut self, other: VendorConfigSet) {
        for (namespace, config) in other.namespaces {
            let target = self.namespace_mut(namespace);
            for (k, v) in config.vars {
                target.vars.insert(k, v);
            }
        }
    }

    /// Builds a set from a parsed document. A document carrying a
    /// `VendorVars` key is read like `soong.variables`; any other object is
    /// the namespace map itself.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        if matches!(&value, Value::Object(map) if map.contains_key(VENDOR_VARS_KEY)) {
            return Self::from_soong_variables(value);
        }

        match value {
            Value::Object(map) => Self::from_namespaces(map),
            Value::Null => Ok(Self::new()),
            _ => Err(ConfigError::NotAnObject("Vendor configuration".to_string())),
        }
    }

    /// Reads the `VendorVars` object of the host's `soong.variables`
    /// document. Every other top level key belongs to the host and is
    /// ignored; a document without `VendorVars` has no vendor variables.
    pub fn from_soong_variables(value: Value) -> Result<Self, ConfigError> {
        let Value::Object(mut root) = value else {
            return Err(ConfigError::NotAnObject("soong.variables".to_string()));
        };

        match root.remove(VENDOR_VARS_KEY) {
            Some(Value::Object(map)) => Self::from_namespaces(map),
            Some(Value::Null) | None => Ok(Self::new()),
            Some(_) => Err(ConfigError::NotAnObject(VENDOR_VARS_KEY.to_string())),
        }
    }

    fn from_namespaces(namespaces: Map<String, Value>) -> Result<Self, ConfigError> {
        let mut set = Self::new();
        for (namespace, vars) in namespaces {
            let Value::Object(vars) = vars else {
                return Err(ConfigError::NotAnObject(format!("Namespace {}", namespace)));
            };

            let config = set.namespace_mut(namespace.clone());
            for (key, v) in vars {
                let value = match v {
                    Value::String(vs) => vs,
                    Value::Number(vn) => vn.to_string(),
                    Value::Bool(vb) => vb.to_string(),
                    _ => return Err(ConfigError::InvalidValue { namespace, key }),
                };
                config.set(key, value);
            }
        }
        Ok(set)
    }
}
