use std::collections::BTreeMap;
use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use crate::core::error::{Error, Result};
use crate::core::types::DocId;

/// Integer-like keys that can be spread over buckets by `key mod n`
pub trait BucketKey: Ord + Copy + Send {
    fn bucket_index(&self, bucket_count: usize) -> usize;
}

macro_rules! impl_bucket_key {
    ($($t:ty),*) => {
        $(
            impl BucketKey for $t {
                fn bucket_index(&self, bucket_count: usize) -> usize {
                    ((*self as u64) % bucket_count as u64) as usize
                }
            }
        )*
    };
}

impl_bucket_key!(i32, i64, u32, u64, usize);

impl BucketKey for DocId {
    fn bucket_index(&self, bucket_count: usize) -> usize {
        self.0.bucket_index(bucket_count)
    }
}

/// Scoped exclusive access to one value; the owning bucket stays locked
/// until the handle is dropped.
pub type Access<'a, V> = MappedMutexGuard<'a, V>;

/// Map sharded over independently locked buckets. Keys in different
/// buckets never contend.
pub struct ConcurrentMap<K, V> {
    buckets: Vec<Mutex<BTreeMap<K, V>>>,
}

impl<K: BucketKey, V> ConcurrentMap<K, V> {
    pub fn new(bucket_count: usize) -> Result<Self> {
        if bucket_count == 0 {
            return Err(Error::invalid_argument("ConcurrentMap needs at least one bucket"));
        }

        Ok(ConcurrentMap {
            buckets: (0..bucket_count).map(|_| Mutex::new(BTreeMap::new())).collect(),
        })
    }

    fn bucket(&self, key: &K) -> &Mutex<BTreeMap<K, V>> {
        &self.buckets[key.bucket_index(self.buckets.len())]
    }

    /// Lock the key's bucket and return its value, inserting the default first
    pub fn access(&self, key: K) -> Access<'_, V>
    where
        V: Default,
    {
        let guard = self.bucket(&key).lock();
        MutexGuard::map(guard, |bucket| bucket.entry(key).or_default())
    }

    pub fn erase(&self, key: K) -> Option<V> {
        self.bucket(&key).lock().remove(&key)
    }

    /// Copy everything into one ordered map, holding one bucket lock at a time
    pub fn materialize(&self) -> BTreeMap<K, V>
    where
        V: Clone,
    {
        let mut result = BTreeMap::new();
        for bucket in &self.buckets {
            let bucket = bucket.lock();
            result.extend(bucket.iter().map(|(k, v)| (*k, v.clone())));
        }
        result
    }
}
