//! Timezone and NTP server settings of a UCS Central device profile.
//!
//! Every call is one read-modify-commit (or read-check) sequence against the
//! caller's session handle. Nothing is cached and nothing is retried.

use crate::config::Config;
use crate::dn::{device_profile_dn, Dn, DATETIME_SVC_RN};
use crate::error::OperationError;
use crate::handle::SessionHandle;
use crate::mo::{AdminState, CommDateTime, CommNtpProvider, ManagedObject, PropertyMap};
use crate::utils::logging::{log_admin_success, log_operation_error};

/// Time settings administration rooted at one device profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneAdmin {
    base_dn: Dn,
}

impl TimezoneAdmin {
    /// Administration rooted at `base_dn`.
    pub fn new(base_dn: Dn) -> Self {
        Self { base_dn }
    }

    /// Administration for the named device profile.
    pub fn for_device_profile(name: &str) -> Self {
        Self::new(device_profile_dn(name))
    }

    /// Administration for the device profile in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_dn())
    }

    /// Device profile root.
    pub fn base_dn(&self) -> &Dn {
        &self.base_dn
    }

    /// DN of the date/time service singleton.
    pub fn datetime_svc_dn(&self) -> Dn {
        self.base_dn.child(DATETIME_SVC_RN)
    }

    /// DN of the NTP provider called `name`.
    pub fn ntp_server_dn(&self, name: &str) -> Dn {
        self.datetime_svc_dn().child(&CommNtpProvider::rn_for(name))
    }

    /// Sets the timezone and enables the date/time service.
    ///
    /// An empty `timezone` unsets it. `extra` is applied last and can carry
    /// any other property of the service.
    ///
    /// Fails with [`OperationError`] if the service object does not exist;
    /// nothing is written in that case.
    pub fn set_timezone<H: SessionHandle>(
        &self,
        handle: &mut H,
        timezone: &str,
        extra: &PropertyMap,
    ) -> Result<CommDateTime, H::Error> {
        let dn = self.datetime_svc_dn();
        let Some(record) = handle.query_dn(&dn)? else {
            let err = OperationError::new("time_zone_set", "timezone does not exist");
            log_operation_error(err.method, &dn, &err.message);
            return Err(err.into());
        };

        let mut mo = CommDateTime::from_record(record)?;
        mo.timezone = timezone.to_string();
        mo.admin_state = AdminState::Enabled;
        mo.port = "0".to_string();
        mo.set_prop_multiple(extra)?;

        handle.set_mo(&mo.to_record())?;
        handle.commit()?;

        let details = format!("timezone='{}'", mo.timezone);
        log_admin_success("time_zone_set", &dn, Some(details.as_str()));
        Ok(mo)
    }

    /// Adds an NTP server, silently replacing one with the same name.
    ///
    /// The returned object is what was sent, not a fresh read.
    pub fn add_ntp_server<H: SessionHandle>(
        &self,
        handle: &mut H,
        name: &str,
        descr: Option<&str>,
        extra: &PropertyMap,
    ) -> Result<CommNtpProvider, H::Error> {
        let mut mo = CommNtpProvider::new(&self.datetime_svc_dn(), name, descr);
        mo.set_prop_multiple(extra)?;

        handle.add_mo(&mo.to_record(), true)?;
        handle.commit()?;

        log_admin_success("ntp_server_add", mo.dn(), None);
        Ok(mo)
    }

    /// Looks up an NTP server by name. Absence is `Ok(None)`.
    pub fn get_ntp_server<H: SessionHandle>(
        &self,
        handle: &H,
        name: &str,
    ) -> Result<Option<CommNtpProvider>, H::Error> {
        let dn = self.ntp_server_dn(name);
        match handle.query_dn(&dn)? {
            Some(record) => Ok(Some(CommNtpProvider::from_record(record)?)),
            None => Ok(None),
        }
    }

    /// Checks that an NTP server exists and every entry of `expected`
    /// matches its current value.
    ///
    /// Returns `(true, Some(server))` on a full match and `(false, None)`
    /// otherwise, whether the server is missing or merely differs.
    pub fn ntp_server_exists<H: SessionHandle>(
        &self,
        handle: &H,
        name: &str,
        expected: &PropertyMap,
    ) -> Result<(bool, Option<CommNtpProvider>), H::Error> {
        let found = self
            .get_ntp_server(handle, name)?
            .filter(|mo| mo.check_prop_match(expected));
        Ok((found.is_some(), found))
    }

    /// Removes an NTP server.
    ///
    /// Fails with [`OperationError`] if no server has that name.
    pub fn remove_ntp_server<H: SessionHandle>(
        &self,
        handle: &mut H,
        name: &str,
    ) -> Result<(), H::Error> {
        let Some(mo) = self.get_ntp_server(&*handle, name)? else {
            let err = OperationError::new(
                "ntp_server_remove",
                "NTP Server not found. Nothing to remove.",
            );
            log_operation_error(err.method, &self.ntp_server_dn(name), &err.message);
            return Err(err.into());
        };

        handle.remove_mo(&mo.to_record())?;
        handle.commit()?;

        log_admin_success("ntp_server_remove", mo.dn(), None);
        Ok(())
    }
}
