//! Distinguished names for the remote managed-object tree.
//!
//! A DN is a `/`-separated path of relative names (RNs), e.g.
//! `org-root/deviceprofile-default/datetime-svc/ntp-72.163.128.140`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// RN of the date/time service singleton under a device profile
pub const DATETIME_SVC_RN: &str = "datetime-svc";
/// RN prefix of an NTP provider under the date/time service
pub const NTP_PROVIDER_PREFIX: &str = "ntp-";

const ORG_ROOT: &str = "org-root";
const DEVICE_PROFILE_PREFIX: &str = "deviceprofile-";

/// Hierarchical identifier of a managed object.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dn(String);

impl Dn {
    /// Wraps an already-formed DN string.
    pub fn new(dn: impl Into<String>) -> Self {
        Self(dn.into())
    }

    /// DN of the child named `rn`.
    pub fn child(&self, rn: &str) -> Self {
        Self(format!("{}/{}", self.0, rn))
    }

    /// Last path segment.
    pub fn rn(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Containing DN, or `None` for a top-level object.
    pub fn parent(&self) -> Option<Self> {
        self.0.rsplit_once('/').map(|(parent, _)| Self(parent.to_string()))
    }

    /// True when `self` lies strictly below `ancestor` in the tree.
    pub fn is_descendant_of(&self, ancestor: &Dn) -> bool {
        self.0
            .strip_prefix(ancestor.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
    }

    /// The DN as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Dn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Dn {
    fn from(dn: &str) -> Self {
        Self::new(dn)
    }
}

/// DN of the named device profile, the root under which time settings live.
pub fn device_profile_dn(name: &str) -> Dn {
    Dn::new(ORG_ROOT).child(&format!("{DEVICE_PROFILE_PREFIX}{name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_profile_dn() {
        assert_eq!(
            device_profile_dn("default").as_str(),
            "org-root/deviceprofile-default"
        );
    }

    #[test]
    fn test_child_and_rn() {
        let svc = device_profile_dn("default").child(DATETIME_SVC_RN);
        assert_eq!(svc.as_str(), "org-root/deviceprofile-default/datetime-svc");
        assert_eq!(svc.rn(), "datetime-svc");

        let ntp = svc.child("ntp-10.0.0.1");
        assert_eq!(ntp.rn(), "ntp-10.0.0.1");
        assert_eq!(ntp.parent(), Some(svc));
    }

    #[test]
    fn test_parent_of_top_level() {
        assert_eq!(Dn::new("org-root").parent(), None);
        assert_eq!(Dn::new("org-root").rn(), "org-root");
    }

    #[test]
    fn test_is_descendant_of() {
        let svc = Dn::new("org-root/deviceprofile-default/datetime-svc");
        let ntp = svc.child("ntp-a");
        assert!(ntp.is_descendant_of(&svc));
        assert!(!svc.is_descendant_of(&svc));
        // shared string prefix is not ancestry
        assert!(!Dn::new("org-root/deviceprofile-defaultx").is_descendant_of(
            &Dn::new("org-root/deviceprofile-default")
        ));
    }
}
