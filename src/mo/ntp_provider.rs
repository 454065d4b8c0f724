use super::{check_class, naming_prop, without_naming_props, ManagedObject, MoRecord, PropValue};
use crate::dn::{Dn, NTP_PROVIDER_PREFIX};
use crate::error::PropertyError;
use std::collections::BTreeMap;

/// One NTP server configured under a date/time service, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommNtpProvider {
    dn: Dn,
    name: String,
    pub descr: Option<String>,
    pub extra: BTreeMap<String, String>,
}

impl CommNtpProvider {
    /// RN of the provider called `name`.
    pub fn rn_for(name: &str) -> String {
        format!("{NTP_PROVIDER_PREFIX}{name}")
    }

    /// A new provider under the date/time service at `parent`.
    pub fn new(parent: &Dn, name: &str, descr: Option<&str>) -> Self {
        Self {
            dn: parent.child(&Self::rn_for(name)),
            name: name.to_string(),
            descr: descr.map(str::to_string),
            extra: BTreeMap::new(),
        }
    }

    /// Server address or hostname; also the identity key.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ManagedObject for CommNtpProvider {
    const CLASS_ID: &'static str = "commNtpProvider";

    fn dn(&self) -> &Dn {
        &self.dn
    }

    fn prop(&self, name: &str) -> Option<String> {
        match name {
            "name" => Some(self.name.clone()),
            "descr" => Some(self.descr.clone().unwrap_or_default()),
            _ => naming_prop(&self.dn, name).or_else(|| self.extra.get(name).cloned()),
        }
    }

    fn set_prop(&mut self, name: &str, value: PropValue) -> Result<(), PropertyError> {
        match name {
            "dn" | "rn" | "name" => Err(PropertyError::ReadOnly {
                class_id: Self::CLASS_ID,
                name: name.to_string(),
            }),
            "descr" => {
                self.descr = Some(value.to_wire());
                Ok(())
            }
            _ => {
                self.extra.insert(name.to_string(), value.to_wire());
                Ok(())
            }
        }
    }

    fn to_record(&self) -> MoRecord {
        let mut props = self.extra.clone();
        props.insert("name".to_string(), self.name.clone());
        if let Some(descr) = &self.descr {
            props.insert("descr".to_string(), descr.clone());
        }
        MoRecord {
            class_id: Self::CLASS_ID.to_string(),
            dn: self.dn.clone(),
            props,
        }
    }

    fn from_record(mut record: MoRecord) -> Result<Self, PropertyError> {
        check_class(&record, Self::CLASS_ID)?;
        let name = match record.props.remove("name") {
            Some(name) => name,
            None => record
                .dn
                .rn()
                .strip_prefix(NTP_PROVIDER_PREFIX)
                .unwrap_or_default()
                .to_string(),
        };
        let descr = record.props.remove("descr");
        Ok(CommNtpProvider {
            dn: record.dn,
            name,
            descr,
            extra: without_naming_props(record.props),
        })
    }
}
