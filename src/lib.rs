//! # UCS Central Timezone Admin
//!
//! Helpers for the time settings of a UCS Central device profile: the
//! timezone of the date/time service and its NTP servers.
//!
//! ## Features
//! - Set or unset the timezone, enabling the date/time service
//! - Add, look up, verify and remove NTP servers by name
//! - Works against any [`handle::SessionHandle`]; [`handle::MemoryHandle`] is included
//!   for tests and dry runs
//!
//! ```
//! use ucsc_timezone_admin::admin::TimezoneAdmin;
//! use ucsc_timezone_admin::handle::MemoryHandle;
//! use ucsc_timezone_admin::mo::{props, PropertyMap};
//!
//! let admin = TimezoneAdmin::for_device_profile("default");
//! let mut handle = MemoryHandle::seeded(admin.base_dn().clone());
//!
//! admin.add_ntp_server(&mut handle, "72.163.128.140", Some("Default NTP"), &PropertyMap::new())?;
//! let expected = props([("descr", "Default NTP")]);
//! let (exists, _) = admin.ntp_server_exists(&handle, "72.163.128.140", &expected)?;
//! assert!(exists);
//! # Ok::<(), ucsc_timezone_admin::handle::HandleError>(())
//! ```

/// Timezone and NTP administration operations
pub mod admin;
/// Configuration management and environment variables
pub mod config;
/// Distinguished names and the fixed tree layout
pub mod dn;
/// Error types raised by this crate
pub mod error;
/// Session handle trait and the in-memory implementation
pub mod handle;
/// Managed-object model
pub mod mo;
/// Logging setup and helpers
pub mod utils;

pub use error::{OperationError, PropertyError};
