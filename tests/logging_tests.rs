#![allow(clippy::unwrap_used)]

use ucsc_timezone_admin::admin::TimezoneAdmin;
use ucsc_timezone_admin::config::{Config, DEFAULT_LOG_FILTER};
use ucsc_timezone_admin::handle::MemoryHandle;
use ucsc_timezone_admin::mo::PropertyMap;
use ucsc_timezone_admin::utils::logging::init_tracing;

#[test]
fn test_init_tracing_once() {
    let config = Config {
        device_profile: "default".to_string(),
        log_filter: DEFAULT_LOG_FILTER.to_string(),
    };

    assert!(init_tracing(&config));
    // a second subscriber is refused rather than panicking
    assert!(!init_tracing(&config));

    // operations log through the installed subscriber
    let admin = TimezoneAdmin::from_config(&config);
    let mut handle = MemoryHandle::seeded(admin.base_dn().clone());
    admin
        .set_timezone(&mut handle, "UTC", &PropertyMap::new())
        .unwrap();
    assert!(admin.remove_ntp_server(&mut handle, "missing").is_err());
}
