//! `localStorage` backing for the session mirror.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store only knows the `session::Storage` trait. This is the
//! browser implementation; outside the csr build it stores nothing, so
//! native test runs always start anonymous.

use session::{Storage, StorageError};

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Handle on `window.localStorage`. Looked up on every call; private
/// browsing modes may withhold it at any time.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or_else(|| StorageError::Write {
                key: key.to_owned(),
                reason: "localStorage unavailable".to_owned(),
            })?;
            storage.set_item(key, value).map_err(|err| StorageError::Write {
                key: key.to_owned(),
                reason: format!("{err:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(key).is_err() {
                    log::warn!("localStorage refused to remove {key}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}
