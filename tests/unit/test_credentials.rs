use nadlan_client::constants::ACCESS_TOKEN_KEY;
use nadlan_client::credentials::{CredentialStore, InMemoryCredentialStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[test]
fn test_new_store_is_unauthenticated() {
    let store = InMemoryCredentialStore::new();
    assert_eq!(store.get(), None);
}

#[test]
fn test_set_and_get() {
    let store = InMemoryCredentialStore::new();
    store.set("tok-1");
    assert_eq!(store.get(), Some("tok-1".to_string()));
}

#[test]
fn test_set_replaces_previous_token() {
    let store = InMemoryCredentialStore::with_token("tok-1");
    store.set("tok-2");
    assert_eq!(store.get(), Some("tok-2".to_string()));
}

#[test]
fn test_clear_removes_token() {
    let store = InMemoryCredentialStore::with_token("tok-1");
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn test_clear_on_empty_store_is_noop() {
    let store = InMemoryCredentialStore::new();
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn test_concurrent_reads() {
    let store = Arc::new(InMemoryCredentialStore::with_token("shared-tok"));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            std::thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(store.get(), Some("shared-tok".to_string()));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("reader thread should not panic");
    }
}

/// Keyed store standing in for a persistent backend, holding the token
/// under the well-known key as embedder implementations should
struct KeyedCredentialStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyedCredentialStore {
    fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl CredentialStore for KeyedCredentialStore {
    fn get(&self) -> Option<String> {
        self.entries.lock().unwrap().get(ACCESS_TOKEN_KEY).cloned()
    }

    fn set(&self, token: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(ACCESS_TOKEN_KEY.to_string(), token.to_string());
    }

    fn clear(&self) {
        self.entries.lock().unwrap().remove(ACCESS_TOKEN_KEY);
    }
}

#[test]
fn test_well_known_key_backs_custom_store() {
    assert_eq!(ACCESS_TOKEN_KEY, "accessToken");

    let store = KeyedCredentialStore::new();
    assert_eq!(store.get(), None);
    store.set("tok-9");
    assert_eq!(store.get(), Some("tok-9".to_string()));
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn test_store_usable_as_trait_object() {
    let store: Arc<dyn CredentialStore> = Arc::new(InMemoryCredentialStore::new());
    store.set("tok");
    assert_eq!(store.get(), Some("tok".to_string()));
    store.clear();
    assert_eq!(store.get(), None);
}
