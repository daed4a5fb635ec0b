//! Concurrent Use Tests

use hasher::constants::BCRYPT_MIN_COST;
use hasher::{Hasher, HasherInterface};
use std::sync::Arc;
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_hasher_is_send_sync() {
    assert_send_sync::<Hasher>();
    assert_send_sync::<Arc<dyn HasherInterface>>();
}

#[test]
fn test_hasher_is_zero_sized() {
    assert_eq!(std::mem::size_of::<Hasher>(), 0);
}

#[test]
fn test_shared_hasher_across_threads() {
    let hasher: Arc<dyn HasherInterface> = Arc::new(Hasher::new());

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let hasher = Arc::clone(&hasher);
                scope.spawn(move || {
                    let plain = format!("thread-{i}");
                    let hash = hasher.hash(plain.as_bytes(), BCRYPT_MIN_COST).unwrap();
                    let secret = hasher.generate(24).unwrap();
                    (plain, hash, secret)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        for (plain, hash, secret) in &results {
            assert!(hasher.verify(plain, hash));
            assert_eq!(secret.len(), 24);
        }
        for (i, (_, hash, _)) in results.iter().enumerate() {
            let other = format!("thread-{}", (i + 1) % results.len());
            assert!(!hasher.verify(&other, hash));
        }
    });
}
