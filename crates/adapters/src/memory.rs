use std::cell::RefCell;
use std::collections::HashMap;

use photo_gallery_application::{ApplicationError, KeyValueStore};

/// Process-local storage; nothing survives the session.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    values: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn initialize(&self) -> Result<(), ApplicationError> {
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), ApplicationError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_removes_the_key() {
        let store = InMemoryKeyValueStore::default();
        store.set("galeria", "[\"a\"]").expect("set");
        assert!(store.get("galeria").expect("get").is_some());
        store.delete("galeria").expect("delete");
        assert!(store.get("galeria").expect("get").is_none());
    }
}
