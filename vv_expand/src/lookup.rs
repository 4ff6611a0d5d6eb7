use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read-only view of one namespace of vendor variables.
pub trait LookupStore {
    /// Whether `name` has a value in this store.
    fn is_set(&self, name: &str) -> bool;

    /// The value of `name`, or an empty string when it is not set.
    fn string_value(&self, name: &str) -> String;
}

impl<S: BuildHasher> LookupStore for HashMap<String, String, S> {
    fn is_set(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn string_value(&self, name: &str) -> String {
        self.get(name).cloned().unwrap_or_default()
    }
}

impl LookupStore for BTreeMap<String, String> {
    fn is_set(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn string_value(&self, name: &str) -> String {
        self.get(name).cloned().unwrap_or_default()
    }
}

impl<T: LookupStore + ?Sized> LookupStore for &T {
    fn is_set(&self, name: &str) -> bool {
        (**self).is_set(name)
    }

    fn string_value(&self, name: &str) -> String {
        (**self).string_value(name)
    }
}
