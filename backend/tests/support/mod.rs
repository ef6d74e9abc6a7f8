use std::sync::Mutex;

/// Env vars read by `ServerConfig::load`.
pub const CONFIG_VARS: [&str; 6] = ["HOURS_CONFIG", "HOST", "PORT", "API_PREFIX", "ALLOWED_HOSTS", "DEBUG"];

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with the config env vars set to `vars` and every other config var
/// removed. The previous values are restored afterwards, even on panic.
///
/// Tests run in parallel and the environment is process-global, so all
/// callers are serialized on a single lock.
pub fn with_config_env<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _restore = EnvRestore::capture();

    for key in CONFIG_VARS {
        std::env::remove_var(key);
    }
    for (key, value) in vars {
        std::env::set_var(key, value);
    }

    f()
}

struct EnvRestore {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvRestore {
    fn capture() -> Self {
        Self {
            saved: CONFIG_VARS
                .iter()
                .map(|key| (*key, std::env::var(key).ok()))
                .collect(),
        }
    }
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }
}
