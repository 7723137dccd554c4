//! Lookup of raw environment values

use std::collections::{BTreeMap, HashMap};
use std::env;

/// Read-only key/value lookup that typed accessors draw raw values from.
///
/// `None` means the key is absent. A present key with an empty value is
/// `Some(String::new())`.
pub trait EnvSource {
    /// Raw value for `key`, if set.
    fn get(&self, key: &str) -> Option<String>;
}

/// The environment of the running process.
///
/// Values that are not valid Unicode are converted lossily so that a set
/// variable is never reported as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
