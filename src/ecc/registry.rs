//! Named collection of configured codes.
//!
//! The registry is a plain value owned by the caller: codes are registered under a
//! name and looked up by it, and iteration follows name order.

use crate::ecc::{BchCode, Code, CodeStrategy, HammingCode, ReedSolomon};
use crate::error::{Error, Result};
use log::debug;
use std::collections::BTreeMap;

/// Registry name of the default Hamming(7,4) code
pub const HAMMING: &str = "Hamming(7,4)";
/// Registry name of the default Reed-Solomon(8,16) code over GF(2^8)
pub const REED_SOLOMON: &str = "Reed-Solomon";
/// Registry name of the default BCH(15,7,2) code
pub const BCH: &str = "BCH";

/// Map from names to configured codes
#[derive(Debug, Clone, Default)]
pub struct CodeRegistry {
    codes: BTreeMap<String, Code>,
}

impl CodeRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the three default codes.
    ///
    /// # Errors
    ///
    /// Propagates construction errors of the default codes.
    pub fn with_defaults() -> Result<Self> {
        let mut registry = Self::new();
        registry.register(HAMMING, HammingCode::standard_7_4());
        registry.register(REED_SOLOMON, ReedSolomon::new(8, 8, 8)?);
        registry.register(BCH, BchCode::new(4, 2)?);
        Ok(registry)
    }

    /// Registers `code` under `name`, returning the code it replaced
    pub fn register(&mut self, name: impl Into<String>, code: impl Into<Code>) -> Option<Code> {
        let name = name.into();
        let code = code.into();
        debug!("registering {} as '{}'", code.name(), name);
        self.codes.insert(name, code)
    }

    /// Looks up a code by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCode`] if nothing is registered under `name`.
    pub fn get(&self, name: &str) -> Result<&Code> {
        self.codes
            .get(name)
            .ok_or_else(|| Error::UnknownCode(name.to_string()))
    }

    /// Description of the code registered under `name`
    pub fn description(&self, name: &str) -> Result<&'static str> {
        self.get(name).map(|code| code.description())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.codes.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.codes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Code)> {
        self.codes.iter().map(|(name, code)| (name.as_str(), code))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
