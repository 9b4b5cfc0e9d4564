use std::{ops, sync::Arc};

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use ecochain_core::usecases as uc;

mod repo_impl;

pub use self::repo_impl::Records;

type SharedRecords = Arc<RwLock<Records>>;

pub struct DbReadOnly<'a> {
    records: RwLockReadGuard<'a, Records>,
}

impl ops::Deref for DbReadOnly<'_> {
    type Target = Records;

    fn deref(&self) -> &Records {
        &self.records
    }
}

pub struct DbReadWrite<'a> {
    records: RwLockWriteGuard<'a, Records>,
}

impl ops::Deref for DbReadWrite<'_> {
    type Target = Records;

    fn deref(&self) -> &Records {
        &self.records
    }
}

impl ops::DerefMut for DbReadWrite<'_> {
    fn deref_mut(&mut self) -> &mut Records {
        &mut self.records
    }
}

impl DbReadWrite<'_> {
    /// Runs `f` with all-or-nothing semantics.
    ///
    /// The records are snapshotted before `f` runs. If `f` fails the
    /// snapshot is restored, so partial writes never become visible.
    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&mut Records) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        let snapshot = self.records.clone();
        match f(&mut self.records) {
            Ok(value) => Ok(value),
            Err(err) => {
                *self.records = snapshot;
                let err = err.into();
                log::warn!("Rolling back transaction: {err}");
                Err(err)
            }
        }
    }
}

/// Handle to the shared in-memory record store.
///
/// Only a single write access is handed out at a time while
/// multiple read accesses can be served concurrently. All state
/// transitions run behind the write lock, so conflicting updates
/// like two collectors accepting the same pickup are serialized.
#[derive(Clone, Default)]
pub struct Connections {
    records: SharedRecords,
}

impl Connections {
    pub fn init() -> Self {
        Self::default()
    }

    pub fn shared(&self) -> DbReadOnly {
        DbReadOnly {
            records: self.records.read(),
        }
    }

    pub fn exclusive(&self) -> DbReadWrite {
        DbReadWrite {
            records: self.records.write(),
        }
    }
}
