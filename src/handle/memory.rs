use super::SessionHandle;
use crate::dn::Dn;
use crate::error::{OperationError, PropertyError};
use crate::mo::{CommDateTime, ManagedObject, MoRecord};
use crate::utils::logging::{log_commit, log_mo_operation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Failure reported by [`MemoryHandle`].
#[derive(Debug, Error)]
pub enum HandleError {
    #[error("no object at {0}")]
    NoSuchObject(Dn),
    #[error("object already exists at {0}")]
    AlreadyExists(Dn),
    #[error("parent of {0} does not exist")]
    ParentMissing(Dn),
    /// Injected with [`MemoryHandle::fail_next_commit`]
    #[error("remote failure: {0}")]
    Remote(String),
    #[error(transparent)]
    Operation(#[from] OperationError),
    #[error(transparent)]
    Property(#[from] PropertyError),
}

/// A queued change waiting for commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PendingOp {
    Set { record: MoRecord },
    Add { record: MoRecord, replace: bool },
    Remove { dn: Dn },
}

impl PendingOp {
    pub fn dn(&self) -> &Dn {
        match self {
            PendingOp::Set { record } | PendingOp::Add { record, .. } => &record.dn,
            PendingOp::Remove { dn } => dn,
        }
    }
}

/// One successful commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub sequence: u64,
    pub committed_at: DateTime<Utc>,
    pub operations: Vec<PendingOp>,
}

/// In-process stand-in for a remote manager session.
///
/// Committed objects live in a map keyed by DN. Root DNs exist implicitly so
/// objects can be added directly beneath them. Commits are all-or-nothing.
#[derive(Debug, Default)]
pub struct MemoryHandle {
    roots: BTreeSet<Dn>,
    store: BTreeMap<Dn, MoRecord>,
    pending: Vec<PendingOp>,
    journal: Vec<CommitRecord>,
    fail_next: Option<String>,
}

impl MemoryHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle with `base_dn` as a root and no objects under it.
    pub fn with_root(base_dn: Dn) -> Self {
        let mut handle = Self::new();
        handle.roots.insert(base_dn);
        handle
    }

    /// A handle whose device profile at `base_dn` already has its
    /// date/time service, as a freshly installed manager does.
    pub fn seeded(base_dn: Dn) -> Self {
        let service = CommDateTime::new(&base_dn);
        let mut handle = Self::with_root(base_dn);
        handle.insert(service.to_record());
        handle
    }

    /// Places a record straight into committed state.
    pub fn insert(&mut self, record: MoRecord) {
        self.store.insert(record.dn.clone(), record);
    }

    /// Makes the next `commit` fail with [`HandleError::Remote`].
    pub fn fail_next_commit(&mut self, reason: impl Into<String>) {
        self.fail_next = Some(reason.into());
    }

    pub fn commit_count(&self) -> usize {
        self.journal.len()
    }

    pub fn journal(&self) -> &[CommitRecord] {
        &self.journal
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Number of committed objects.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn parent_exists(&self, store: &BTreeMap<Dn, MoRecord>, dn: &Dn) -> bool {
        match dn.parent() {
            Some(parent) => self.roots.contains(&parent) || store.contains_key(&parent),
            None => true,
        }
    }

    fn apply(&self, store: &mut BTreeMap<Dn, MoRecord>, op: &PendingOp) -> Result<(), HandleError> {
        match op {
            PendingOp::Set { record } => {
                let existing = store
                    .get_mut(&record.dn)
                    .ok_or_else(|| HandleError::NoSuchObject(record.dn.clone()))?;
                existing
                    .props
                    .extend(record.props.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
            PendingOp::Add { record, replace } => {
                if !replace && store.contains_key(&record.dn) {
                    return Err(HandleError::AlreadyExists(record.dn.clone()));
                }
                if !self.parent_exists(store, &record.dn) {
                    return Err(HandleError::ParentMissing(record.dn.clone()));
                }
                store.insert(record.dn.clone(), record.clone());
            }
            PendingOp::Remove { dn } => {
                if store.remove(dn).is_none() {
                    return Err(HandleError::NoSuchObject(dn.clone()));
                }
                store.retain(|child, _| !child.is_descendant_of(dn));
            }
        }
        Ok(())
    }
}

impl SessionHandle for MemoryHandle {
    type Error = HandleError;

    fn query_dn(&self, dn: &Dn) -> Result<Option<MoRecord>, HandleError> {
        let found = self.store.get(dn).cloned();
        log_mo_operation(
            "query",
            dn,
            Some(if found.is_some() { "found" } else { "absent" }),
        );
        Ok(found)
    }

    fn set_mo(&mut self, mo: &MoRecord) -> Result<(), HandleError> {
        log_mo_operation("set", &mo.dn, None);
        self.pending.push(PendingOp::Set { record: mo.clone() });
        Ok(())
    }

    fn add_mo(&mut self, mo: &MoRecord, replace: bool) -> Result<(), HandleError> {
        log_mo_operation("add", &mo.dn, replace.then_some("replace"));
        self.pending.push(PendingOp::Add {
            record: mo.clone(),
            replace,
        });
        Ok(())
    }

    fn remove_mo(&mut self, mo: &MoRecord) -> Result<(), HandleError> {
        log_mo_operation("remove", &mo.dn, None);
        self.pending.push(PendingOp::Remove { dn: mo.dn.clone() });
        Ok(())
    }

    fn commit(&mut self) -> Result<(), HandleError> {
        let operations = std::mem::take(&mut self.pending);

        if let Some(reason) = self.fail_next.take() {
            log_commit(operations.len(), Some(reason.as_str()));
            return Err(HandleError::Remote(reason));
        }

        let mut staged = self.store.clone();
        for op in &operations {
            if let Err(e) = self.apply(&mut staged, op) {
                log_commit(operations.len(), Some(e.to_string().as_str()));
                return Err(e);
            }
        }
        self.store = staged;

        log_commit(operations.len(), None);
        self.journal.push(CommitRecord {
            sequence: self.journal.len() as u64 + 1,
            committed_at: Utc::now(),
            operations,
        });
        Ok(())
    }
}
