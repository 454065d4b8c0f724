//! Session handle: the caller-owned connection to the remote manager.

pub mod memory;

pub use memory::{CommitRecord, HandleError, MemoryHandle, PendingOp};

use crate::dn::Dn;
use crate::error::{OperationError, PropertyError};
use crate::mo::MoRecord;

/// Query, write and commit against the remote managed-object tree.
///
/// Writes are queued until `commit`. Implementations own transport, auth,
/// timeouts and retries; their errors reach callers of this crate unchanged.
/// The error type must also be able to carry this crate's own failures.
pub trait SessionHandle {
    /// Error type for remote failures
    type Error: std::error::Error + From<OperationError> + From<PropertyError>;

    /// Fetches the object at `dn`, `None` if there is none.
    fn query_dn(&self, dn: &Dn) -> Result<Option<MoRecord>, Self::Error>;

    /// Queues a modification of an existing object.
    fn set_mo(&mut self, mo: &MoRecord) -> Result<(), Self::Error>;

    /// Queues creation of an object; with `replace` an existing one is overwritten.
    fn add_mo(&mut self, mo: &MoRecord, replace: bool) -> Result<(), Self::Error>;

    /// Queues deletion of an object and everything below it.
    fn remove_mo(&mut self, mo: &MoRecord) -> Result<(), Self::Error>;

    /// Applies all queued operations.
    fn commit(&mut self) -> Result<(), Self::Error>;
}
