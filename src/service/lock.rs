//! Per-key mutation locks and lockable id counters.
//!
//! Every mutation takes the lock of the key it modifies, so writes to one clan
//! (or one war map) are serialised while writes to unrelated keys proceed in
//! parallel. Map record access holds the clan's war lock for reading, so a war
//! cannot be replaced while one of its records is in use.

use dashmap::DashMap;
use std::{hash::Hash, sync::Arc, time::Duration};
use tokio::sync::{
    Mutex, MutexGuard, OwnedMutexGuard, OwnedRwLockReadGuard, OwnedRwLockWriteGuard, RwLock,
};
use tracing::debug;

use crate::model::{id::ClanId, war::MapId};

/// One async lock per key, created on demand.
///
/// Entries stay in the table until [`KeyedLocks::prune`] drops the ones no
/// guard or waiter holds.
pub struct KeyedLocks<K, L = Mutex<()>> {
    slots: Arc<DashMap<K, Arc<L>>>,
}

impl<K, L> Clone for KeyedLocks<K, L> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
        }
    }
}

impl<K: Eq + Hash, L> Default for KeyedLocks<K, L> {
    fn default() -> Self {
        Self {
            slots: Arc::new(DashMap::new()),
        }
    }
}

impl<K: Eq + Hash, L: Default> KeyedLocks<K, L> {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, key: K) -> Arc<L> {
        self.slots.entry(key).or_default().clone()
    }

    /// Removes the locks nobody holds or waits on.
    ///
    /// # Returns
    /// - `usize` - Number of entries removed
    pub fn prune(&self) -> usize {
        let before = self.slots.len();
        self.slots.retain(|_, slot| Arc::strong_count(slot) > 1);
        before.saturating_sub(self.slots.len())
    }
}

impl<K: Eq + Hash> KeyedLocks<K, Mutex<()>> {
    /// Waits for exclusive access to `key`.
    ///
    /// The returned guard releases the key when dropped.
    pub async fn lock(&self, key: K) -> OwnedMutexGuard<()> {
        self.slot(key).lock_owned().await
    }
}

impl<K: Eq + Hash> KeyedLocks<K, RwLock<()>> {
    /// Waits for shared access to `key`.
    pub async fn read(&self, key: K) -> OwnedRwLockReadGuard<()> {
        self.slot(key).read_owned().await
    }

    /// Waits for exclusive access to `key`, excluding every reader.
    pub async fn write(&self, key: K) -> OwnedRwLockWriteGuard<()> {
        self.slot(key).write_owned().await
    }
}

/// Monotonic id counter seeded lazily from storage.
///
/// Holding the guard serialises allocation. The owner reads the current value,
/// seeding it from storage when the counter is fresh, and only records the new
/// value once the allocation has been persisted.
#[derive(Clone, Default)]
pub struct SequenceCounter {
    last: Arc<Mutex<Option<i64>>>,
}

impl SequenceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self) -> SequenceGuard<'_> {
        SequenceGuard {
            last: self.last.lock().await,
        }
    }
}

pub struct SequenceGuard<'a> {
    last: MutexGuard<'a, Option<i64>>,
}

impl SequenceGuard<'_> {
    /// Last allocated value, `None` until seeded.
    pub fn last(&self) -> Option<i64> {
        *self.last
    }

    /// Records `value` as the last allocated value.
    pub fn set(&mut self, value: i64) {
        *self.last = Some(value);
    }

    /// Forgets the last value so the next allocation reseeds from storage.
    pub fn clear(&mut self) {
        *self.last = None;
    }
}

/// Locks and counters shared by every service through `AppState`.
#[derive(Clone, Default)]
pub struct MutationLocks {
    /// Roster, chat and disband mutations per clan.
    pub clans: KeyedLocks<ClanId>,
    /// A clan's current war. Starts and disbands write, map updates read.
    pub wars: KeyedLocks<ClanId, RwLock<()>>,
    /// Record updates per war map.
    pub war_maps: KeyedLocks<(String, MapId)>,
    /// Clan id allocation; held for the whole of clan creation.
    pub clan_ids: SequenceCounter,
    /// War number allocation.
    pub war_ids: SequenceCounter,
}

impl MutationLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops idle entries from every lock table.
    pub fn prune(&self) -> usize {
        self.clans.prune() + self.wars.prune() + self.war_maps.prune()
    }
}

/// Prunes idle lock entries every `period`, forever.
pub async fn prune_periodically(locks: MutationLocks, period: Duration) {
    let mut interval = tokio::time::interval(period);

    loop {
        interval.tick().await;
        let removed = locks.prune();
        if removed > 0 {
            debug!("Pruned {} idle lock entries", removed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn same_key_is_exclusive() {
        let locks = KeyedLocks::<u32>::new();
        let guard = locks.lock(1).await;

        let blocked = tokio::time::timeout(Duration::from_millis(50), locks.lock(1)).await;
        assert!(blocked.is_err());

        drop(guard);
        let acquired = tokio::time::timeout(Duration::from_millis(50), locks.lock(1)).await;
        assert!(acquired.is_ok());
    }

    #[tokio::test]
    async fn distinct_keys_do_not_block() {
        let locks = KeyedLocks::<u32>::new();
        let _first = locks.lock(1).await;

        let second = tokio::time::timeout(Duration::from_millis(50), locks.lock(2)).await;
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn prune_keeps_held_keys() {
        let locks = KeyedLocks::<u32>::new();
        let held = locks.lock(1).await;
        drop(locks.lock(2).await);
        drop(locks.lock(3).await);

        assert_eq!(locks.prune(), 2);
        assert_eq!(locks.prune(), 0);

        let blocked = tokio::time::timeout(Duration::from_millis(50), locks.lock(1)).await;
        assert!(blocked.is_err());
        drop(held);
        assert_eq!(locks.prune(), 1);
    }

    #[tokio::test]
    async fn writer_waits_for_readers() {
        let locks = KeyedLocks::<u32, RwLock<()>>::new();
        let first = locks.read(1).await;
        let second = tokio::time::timeout(Duration::from_millis(50), locks.read(1)).await;
        assert!(second.is_ok());

        let blocked = tokio::time::timeout(Duration::from_millis(50), locks.write(1)).await;
        assert!(blocked.is_err());

        drop(first);
        drop(second);
        let acquired = tokio::time::timeout(Duration::from_millis(50), locks.write(1)).await;
        assert!(acquired.is_ok());
    }

    #[tokio::test]
    async fn sequence_starts_unseeded() {
        let counter = SequenceCounter::new();
        {
            let mut guard = counter.lock().await;
            assert_eq!(guard.last(), None);
            guard.set(4);
        }
        assert_eq!(counter.lock().await.last(), Some(4));

        counter.lock().await.clear();
        assert_eq!(counter.lock().await.last(), None);
    }
}
