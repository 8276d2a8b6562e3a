use std::collections::BTreeMap;

/// Clears the given environment variables and puts the previous values back on drop.
pub(crate) struct ScopedEnv {
    saved: BTreeMap<&'static str, Option<String>>,
}

impl ScopedEnv {
    pub(crate) fn clear(keys: &[&'static str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| {
                let previous = std::env::var(key).ok();
                std::env::remove_var(key);
                (*key, previous)
            })
            .collect();
        Self { saved }
    }

    pub(crate) fn set(self, key: &'static str, value: &str) -> Self {
        debug_assert!(self.saved.contains_key(key), "{key} is not guarded");
        std::env::set_var(key, value);
        self
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, previous) in self.saved.iter() {
            match previous {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }
}
