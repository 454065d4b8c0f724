use super::{
    check_class, naming_prop, without_naming_props, AdminState, ManagedObject, MoRecord,
    PropValue,
};
use crate::dn::{Dn, DATETIME_SVC_RN};
use crate::error::PropertyError;
use std::collections::BTreeMap;

/// Date/time service of a device profile. One per profile, never created or
/// deleted by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommDateTime {
    dn: Dn,
    /// Olson name such as `Asia/Kolkata`; empty means unset
    pub timezone: String,
    pub admin_state: AdminState,
    pub port: String,
    /// Properties this crate has no typed field for
    pub extra: BTreeMap<String, String>,
}

impl CommDateTime {
    /// A fresh service object under `parent` with remote defaults.
    pub fn new(parent: &Dn) -> Self {
        Self {
            dn: parent.child(DATETIME_SVC_RN),
            timezone: String::new(),
            admin_state: AdminState::Disabled,
            port: "0".to_string(),
            extra: BTreeMap::new(),
        }
    }

    fn invalid(name: &str, value: &str) -> PropertyError {
        PropertyError::InvalidValue {
            class_id: Self::CLASS_ID,
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn apply_wire(&mut self, name: &str, wire: String) -> Result<(), PropertyError> {
        match name {
            "dn" | "rn" => {
                return Err(PropertyError::ReadOnly {
                    class_id: Self::CLASS_ID,
                    name: name.to_string(),
                })
            }
            "timezone" => self.timezone = wire,
            "admin_state" => {
                self.admin_state = wire
                    .parse()
                    .map_err(|_| Self::invalid(name, &wire))?;
            }
            "port" => {
                if wire.parse::<u16>().is_err() {
                    return Err(Self::invalid(name, &wire));
                }
                self.port = wire;
            }
            _ => {
                self.extra.insert(name.to_string(), wire);
            }
        }
        Ok(())
    }
}

impl ManagedObject for CommDateTime {
    const CLASS_ID: &'static str = "commDateTime";

    fn dn(&self) -> &Dn {
        &self.dn
    }

    fn prop(&self, name: &str) -> Option<String> {
        match name {
            "timezone" => Some(self.timezone.clone()),
            "admin_state" => Some(self.admin_state.as_str().to_string()),
            "port" => Some(self.port.clone()),
            _ => naming_prop(&self.dn, name).or_else(|| self.extra.get(name).cloned()),
        }
    }

    fn set_prop(&mut self, name: &str, value: PropValue) -> Result<(), PropertyError> {
        self.apply_wire(name, value.to_wire())
    }

    fn to_record(&self) -> MoRecord {
        let mut props = self.extra.clone();
        props.insert("timezone".to_string(), self.timezone.clone());
        props.insert("admin_state".to_string(), self.admin_state.as_str().to_string());
        props.insert("port".to_string(), self.port.clone());
        MoRecord {
            class_id: Self::CLASS_ID.to_string(),
            dn: self.dn.clone(),
            props,
        }
    }

    fn from_record(record: MoRecord) -> Result<Self, PropertyError> {
        check_class(&record, Self::CLASS_ID)?;
        let mut mo = CommDateTime {
            dn: record.dn,
            timezone: String::new(),
            admin_state: AdminState::Disabled,
            port: "0".to_string(),
            extra: BTreeMap::new(),
        };
        // remote state is taken as reported; only writes are validated
        for (name, wire) in without_naming_props(record.props) {
            match name.as_str() {
                "timezone" => mo.timezone = wire,
                "admin_state" => mo.admin_state = wire.parse().unwrap_or_default(),
                "port" => mo.port = wire,
                _ => {
                    mo.extra.insert(name, wire);
                }
            }
        }
        Ok(mo)
    }
}
