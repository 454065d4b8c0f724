//! Managed-object model: typed views over the property records the remote
//! manager stores.

pub mod date_time;
pub mod ntp_provider;

pub use date_time::*;
pub use ntp_provider::*;

use crate::dn::Dn;
use crate::error::PropertyError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Property name to value mapping used for bulk set and match.
pub type PropertyMap = BTreeMap<String, PropValue>;

/// A single property value.
///
/// The remote manager stores every property as a string; `to_wire` gives
/// that form and is what equality checks compare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropValue {
    /// Free-form text
    Str(String),
    /// Integer, sent in decimal
    Int(i64),
    /// Flag, sent as `yes`/`no`
    Bool(bool),
    /// Symbolic value from a fixed set, e.g. `enabled`
    Enum(String),
}

impl PropValue {
    /// Value as the remote manager spells it.
    pub fn to_wire(&self) -> String {
        match self {
            PropValue::Str(s) | PropValue::Enum(s) => s.clone(),
            PropValue::Int(i) => i.to_string(),
            PropValue::Bool(true) => "yes".to_string(),
            PropValue::Bool(false) => "no".to_string(),
        }
    }

    /// True when this value equals the given wire-form value.
    pub fn matches_wire(&self, wire: &str) -> bool {
        self.to_wire() == wire
    }

    /// True when both values have the same wire form.
    pub fn matches(&self, other: &PropValue) -> bool {
        self.matches_wire(&other.to_wire())
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Str(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Str(s)
    }
}

impl From<i64> for PropValue {
    fn from(i: i64) -> Self {
        PropValue::Int(i)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<AdminState> for PropValue {
    fn from(state: AdminState) -> Self {
        PropValue::Enum(state.as_str().to_string())
    }
}

/// Builds a [`PropertyMap`] from `(name, value)` pairs.
pub fn props<K, V, I>(pairs: I) -> PropertyMap
where
    K: Into<String>,
    V: Into<PropValue>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Administrative state of a service object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminState {
    /// Service is on
    Enabled,
    /// Service is off
    #[default]
    Disabled,
}

impl AdminState {
    /// Wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            AdminState::Enabled => "enabled",
            AdminState::Disabled => "disabled",
        }
    }
}

impl FromStr for AdminState {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enabled" => Ok(AdminState::Enabled),
            "disabled" => Ok(AdminState::Disabled),
            _ => Err(()),
        }
    }
}

/// Untyped form of a managed object as a session handle stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoRecord {
    /// Remote class name
    pub class_id: String,
    /// Full DN
    pub dn: Dn,
    /// Wire-form values, excluding `dn` and `rn`
    pub props: BTreeMap<String, String>,
}

/// A typed managed object.
pub trait ManagedObject: Sized {
    /// Remote class name, e.g. `commNtpProvider`
    const CLASS_ID: &'static str;

    /// Where the object lives in the tree.
    fn dn(&self) -> &Dn;

    /// Wire-form value of a property, `None` if the object has no such property.
    fn prop(&self, name: &str) -> Option<String>;

    /// Sets one property. Unknown names are kept in the object's extra bag.
    fn set_prop(&mut self, name: &str, value: PropValue) -> Result<(), PropertyError>;

    /// Converts to the untyped record form.
    fn to_record(&self) -> MoRecord;

    /// Builds the typed view from a record of the matching class.
    fn from_record(record: MoRecord) -> Result<Self, PropertyError>;

    /// Applies every entry of `props`, stopping at the first rejected one.
    fn set_prop_multiple(&mut self, props: &PropertyMap) -> Result<(), PropertyError> {
        for (name, value) in props {
            self.set_prop(name, value.clone())?;
        }
        Ok(())
    }

    /// True when every entry of `props` equals the object's current value.
    fn check_prop_match(&self, props: &PropertyMap) -> bool {
        props.iter().all(|(name, expected)| {
            self.prop(name)
                .is_some_and(|actual| expected.matches_wire(&actual))
        })
    }
}

/// Looks up `dn`/`rn`, which every object exposes the same way.
pub(crate) fn naming_prop(dn: &Dn, name: &str) -> Option<String> {
    match name {
        "dn" => Some(dn.to_string()),
        "rn" => Some(dn.rn().to_string()),
        _ => None,
    }
}

/// Drops `dn`/`rn` from fetched properties; the record's DN already carries them.
pub(crate) fn without_naming_props(
    mut props: BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    props.remove("dn");
    props.remove("rn");
    props
}

pub(crate) fn check_class(record: &MoRecord, expected: &'static str) -> Result<(), PropertyError> {
    if record.class_id == expected {
        Ok(())
    } else {
        Err(PropertyError::ClassMismatch {
            dn: record.dn.to_string(),
            expected,
            found: record.class_id.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_forms() {
        assert_eq!(PropValue::from("abc").to_wire(), "abc");
        assert_eq!(PropValue::from(42i64).to_wire(), "42");
        assert_eq!(PropValue::from(true).to_wire(), "yes");
        assert_eq!(PropValue::from(false).to_wire(), "no");
        assert_eq!(PropValue::from(AdminState::Enabled).to_wire(), "enabled");
    }

    #[test]
    fn test_matches_across_variants() {
        assert!(PropValue::Int(0).matches(&PropValue::from("0")));
        assert!(PropValue::Enum("enabled".into()).matches(&PropValue::from("enabled")));
        assert!(!PropValue::Int(1).matches(&PropValue::from("01")));
    }

    #[test]
    fn test_admin_state_parse() {
        assert_eq!("enabled".parse::<AdminState>(), Ok(AdminState::Enabled));
        assert_eq!("disabled".parse::<AdminState>(), Ok(AdminState::Disabled));
        assert!("Enabled".parse::<AdminState>().is_err());
        assert_eq!(AdminState::default(), AdminState::Disabled);
    }

    #[test]
    fn test_props_builder() {
        let map = props([("descr", "x"), ("policy_owner", "local")]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("descr"), Some(&PropValue::Str("x".into())));
    }
}
