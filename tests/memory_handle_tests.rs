#![allow(clippy::unwrap_used)]

use chrono::Utc;
use ucsc_timezone_admin::admin::TimezoneAdmin;
use ucsc_timezone_admin::dn::{device_profile_dn, Dn};
use ucsc_timezone_admin::handle::{
    CommitRecord, HandleError, MemoryHandle, PendingOp, SessionHandle,
};
use ucsc_timezone_admin::mo::{CommNtpProvider, ManagedObject, MoRecord, PropertyMap};

fn svc_dn() -> Dn {
    device_profile_dn("default").child("datetime-svc")
}

#[test]
fn test_add_without_replace_rejects_existing() {
    let mut handle = MemoryHandle::seeded(device_profile_dn("default"));
    let ntp = CommNtpProvider::new(&svc_dn(), "10.0.0.1", None).to_record();

    handle.add_mo(&ntp, false).unwrap();
    handle.commit().unwrap();

    handle.add_mo(&ntp, false).unwrap();
    assert!(matches!(handle.commit(), Err(HandleError::AlreadyExists(_))));
    assert_eq!(handle.commit_count(), 1);
}

#[test]
fn test_set_requires_existing_object() {
    let mut handle = MemoryHandle::seeded(device_profile_dn("default"));
    let ntp = CommNtpProvider::new(&svc_dn(), "10.0.0.1", None).to_record();

    handle.set_mo(&ntp).unwrap();
    assert!(matches!(handle.commit(), Err(HandleError::NoSuchObject(_))));
}

#[test]
fn test_set_merges_properties() {
    let mut handle = MemoryHandle::seeded(device_profile_dn("default"));
    let mut partial = handle.query_dn(&svc_dn()).unwrap().unwrap();
    partial.props.clear();
    partial.props.insert("timezone".to_string(), "UTC".to_string());

    handle.set_mo(&partial).unwrap();
    handle.commit().unwrap();

    let stored = handle.query_dn(&svc_dn()).unwrap().unwrap();
    assert_eq!(stored.props.get("timezone").map(String::as_str), Some("UTC"));
    assert_eq!(stored.props.get("port").map(String::as_str), Some("0"));
}

#[test]
fn test_remove_deletes_subtree() {
    let base = device_profile_dn("default");
    let mut handle = MemoryHandle::seeded(base.clone());
    let ntp = CommNtpProvider::new(&svc_dn(), "10.0.0.1", None).to_record();
    handle.add_mo(&ntp, true).unwrap();
    handle.commit().unwrap();
    assert_eq!(handle.len(), 2);

    let svc = handle.query_dn(&svc_dn()).unwrap().unwrap();
    handle.remove_mo(&svc).unwrap();
    handle.commit().unwrap();

    assert!(handle.is_empty());
    assert!(handle.query_dn(&ntp.dn).unwrap().is_none());
}

#[test]
fn test_injected_failure_discards_pending() {
    let mut handle = MemoryHandle::seeded(device_profile_dn("default"));
    let ntp = CommNtpProvider::new(&svc_dn(), "10.0.0.1", None).to_record();

    handle.add_mo(&ntp, true).unwrap();
    handle.fail_next_commit("timeout");
    assert!(matches!(handle.commit(), Err(HandleError::Remote(_))));
    assert_eq!(handle.pending_len(), 0);

    // one-shot
    handle.commit().unwrap();
    assert!(handle.query_dn(&ntp.dn).unwrap().is_none());
}

#[test]
fn test_journal_records_admin_calls() {
    let admin = TimezoneAdmin::for_device_profile("default");
    let mut handle = MemoryHandle::seeded(admin.base_dn().clone());
    let before = Utc::now();

    admin
        .set_timezone(&mut handle, "Asia/Kolkata", &PropertyMap::new())
        .unwrap();
    admin
        .add_ntp_server(
            &mut handle,
            "72.163.128.140",
            Some("Default NTP"),
            &PropertyMap::new(),
        )
        .unwrap();
    admin.remove_ntp_server(&mut handle, "72.163.128.140").unwrap();

    let journal = handle.journal();
    assert_eq!(journal.len(), 3);
    assert!(journal.iter().all(|c| c.committed_at >= before));
    assert!(matches!(journal[0].operations[..], [PendingOp::Set { .. }]));
    assert!(matches!(journal[1].operations[..], [PendingOp::Add { replace: true, .. }]));
    assert!(matches!(journal[2].operations[..], [PendingOp::Remove { .. }]));
    assert_eq!(journal[2].operations[0].dn(), &admin.ntp_server_dn("72.163.128.140"));
}

#[test]
fn test_journal_serializes() {
    let mut handle = MemoryHandle::seeded(device_profile_dn("default"));
    let ntp = CommNtpProvider::new(&svc_dn(), "10.0.0.1", Some("a")).to_record();
    handle.add_mo(&ntp, true).unwrap();
    handle.commit().unwrap();

    let json = serde_json::to_value(handle.journal()).unwrap();
    assert_eq!(json[0]["sequence"], 1);
    assert_eq!(json[0]["operations"][0]["op"], "add");
    assert_eq!(
        json[0]["operations"][0]["record"]["dn"],
        "org-root/deviceprofile-default/datetime-svc/ntp-10.0.0.1"
    );

    let back: Vec<CommitRecord> = serde_json::from_value(json).unwrap();
    assert_eq!(back, handle.journal());
}

#[test]
fn test_insert_places_committed_record() {
    let mut handle = MemoryHandle::with_root(device_profile_dn("default"));
    let record = MoRecord {
        class_id: "commDateTime".to_string(),
        dn: svc_dn(),
        props: Default::default(),
    };
    handle.insert(record.clone());

    assert_eq!(handle.query_dn(&svc_dn()).unwrap(), Some(record));
    assert_eq!(handle.commit_count(), 0);
}
