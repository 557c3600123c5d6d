use super::*;
use crate::session::MemoryStorage;

fn sample_user() -> User {
    User {
        id: 7,
        username: "anna".to_string(),
        email: "anna@example.com".to_string(),
        full_name: "Anna Smirnova".to_string(),
        avatar: "AN".to_string(),
        is_creator: true,
    }
}

fn memory_store() -> (SessionStore, std::sync::Arc<MemoryStorage>) {
    let storage = std::sync::Arc::new(MemoryStorage::new());
    let store = SessionStore::new(Box::new(SharedStorage(storage.clone())));
    (store, storage)
}

// Lets a test keep a handle on the backing storage after handing it to the store.
struct SharedStorage(std::sync::Arc<MemoryStorage>);

impl Storage for SharedStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.0.get_item(key)
    }
    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.0.set_item(key, value)
    }
    fn remove_item(&self, key: &str) -> Result<()> {
        self.0.remove_item(key)
    }
}

#[test]
fn save_then_read_returns_same_user_and_token() -> Result<()> {
    let (store, _) = memory_store();
    let user = sample_user();
    store.save(&user, "tok-123")?;

    let session = store.read()?;
    assert_eq!(session.user, Some(user));
    assert_eq!(session.token.as_deref(), Some("tok-123"));
    assert!(session.is_active());
    Ok(())
}

#[test]
fn save_overwrites_previous_session() -> Result<()> {
    let (store, _) = memory_store();
    store.save(&sample_user(), "old")?;
    let mut other = sample_user();
    other.id = 8;
    other.username = "dmitry".to_string();
    store.save(&other, "new")?;

    let session = store.read()?;
    assert_eq!(session.user.map(|u| u.id), Some(8));
    assert_eq!(session.token.as_deref(), Some("new"));
    Ok(())
}

#[test]
fn clear_empties_both_keys_and_is_idempotent() -> Result<()> {
    let (store, _) = memory_store();
    store.save(&sample_user(), "tok")?;
    store.clear()?;
    assert_eq!(store.read()?, Session::default());

    store.clear()?;
    assert_eq!(store.read()?, Session::default());
    Ok(())
}

#[test]
fn only_token_present_reads_token_without_user() -> Result<()> {
    let (store, storage) = memory_store();
    storage.set_item(TOKEN_KEY, "lonely")?;

    let session = store.read()?;
    assert_eq!(session.user, None);
    assert_eq!(session.token.as_deref(), Some("lonely"));
    assert!(session.into_active().is_none());
    Ok(())
}

#[test]
fn only_user_present_reads_user_without_token() -> Result<()> {
    let (store, storage) = memory_store();
    storage.set_item(USER_KEY, &serde_json::to_string(&sample_user())?)?;

    let session = store.read()?;
    assert_eq!(session.user, Some(sample_user()));
    assert_eq!(session.token, None);
    assert!(!session.is_active());
    Ok(())
}

#[test]
fn corrupt_user_entry_degrades_to_none() -> Result<()> {
    let (store, storage) = memory_store();
    storage.set_item(USER_KEY, "{not json")?;
    storage.set_item(TOKEN_KEY, "tok")?;

    let session = store.read()?;
    assert_eq!(session.user, None);
    assert_eq!(session.token.as_deref(), Some("tok"));
    Ok(())
}

#[test]
fn wrong_shape_user_entry_degrades_to_none() -> Result<()> {
    let (store, storage) = memory_store();
    storage.set_item(USER_KEY, r#"{"id":"not-a-number","username":1}"#)?;

    assert_eq!(store.read()?.user, None);
    Ok(())
}

#[test]
fn file_backed_session_persists_across_instances() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let first = SessionStore::new(Box::new(crate::session::FileStorage::open(dir.path())?));
    first.save(&sample_user(), "disk-token")?;

    let second = SessionStore::new(Box::new(crate::session::FileStorage::open(dir.path())?));
    let (user, token) = second.read()?.into_active().context("session missing")?;
    assert_eq!(user, sample_user());
    assert_eq!(token, "disk-token");
    Ok(())
}

// Accepts every write except the token, like a disk that fills up mid-save.
struct TokenWriteFails(std::sync::Arc<MemoryStorage>);

impl Storage for TokenWriteFails {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.0.get_item(key)
    }
    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if key == TOKEN_KEY {
            anyhow::bail!("no space left on device");
        }
        self.0.set_item(key, value)
    }
    fn remove_item(&self, key: &str) -> Result<()> {
        self.0.remove_item(key)
    }
}

#[test]
fn failed_token_write_leaves_no_mixed_session() -> Result<()> {
    let backing = std::sync::Arc::new(MemoryStorage::new());
    let mut old = sample_user();
    old.id = 1;
    old.username = "old".to_string();
    backing.set_item(USER_KEY, &serde_json::to_string(&old)?)?;
    backing.set_item(TOKEN_KEY, "old-token")?;

    let store = SessionStore::new(Box::new(TokenWriteFails(backing.clone())));
    let err = store
        .save(&sample_user(), "new-token")
        .err()
        .context("save should fail")?;
    assert_eq!(err.to_string(), "store session token");

    assert_eq!(store.read()?, Session::default());
    assert_eq!(backing.get_item(USER_KEY)?, None);
    assert_eq!(backing.get_item(TOKEN_KEY)?, None);
    Ok(())
}
