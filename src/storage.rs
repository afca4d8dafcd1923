//! Persistence of the coin counter, the only state kept between sessions.
//!
//! Native builds keep it in a small text file, wasm builds in the browser's
//! `localStorage`.

use std::cell::Cell;

/// Errors raised while loading or saving the coin counter.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored coin count {0:?} is not a number")]
    Malformed(String),
    #[error("browser storage is unavailable: {0}")]
    Unavailable(String),
}

/// Somewhere the coin counter can be kept.
pub trait CoinStore {
    /// Reads the stored counter. A store that was never written holds zero.
    fn load(&self) -> Result<u64, StorageError>;

    /// Overwrites the stored counter.
    fn save(&self, coins: u64) -> Result<(), StorageError>;
}

fn parse_coins(raw: &str) -> Result<u64, StorageError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    trimmed
        .parse()
        .map_err(|_| StorageError::Malformed(trimmed.to_string()))
}

/// Loads the counter, falling back to zero (with a warning) on failure.
pub fn load_or_default(store: &dyn CoinStore) -> u64 {
    match store.load() {
        Ok(coins) => {
            log::info!("restored {} coins", coins);
            coins
        }
        Err(e) => {
            log::warn!("could not restore coins, starting from 0: {}", e);
            0
        }
    }
}

/// A counter that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryCoinStore {
    coins: Cell<u64>,
}

impl MemoryCoinStore {
    /// A store holding `coins`.
    pub fn new(coins: u64) -> Self {
        Self {
            coins: Cell::new(coins),
        }
    }
}

impl CoinStore for MemoryCoinStore {
    fn load(&self) -> Result<u64, StorageError> {
        Ok(self.coins.get())
    }

    fn save(&self, coins: u64) -> Result<(), StorageError> {
        self.coins.set(coins);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use self::native::FileCoinStore;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::{parse_coins, CoinStore, StorageError};
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    /// Environment variable overriding the save file location.
    pub const SAVE_PATH_VAR: &str = "WILDLANDS_SAVE";
    /// Save file used when [`SAVE_PATH_VAR`] is not set.
    pub const DEFAULT_SAVE_PATH: &str = "wildlands_coins.txt";

    /// Keeps the counter as decimal text in a file.
    #[derive(Clone, Debug)]
    pub struct FileCoinStore {
        path: PathBuf,
    }

    impl FileCoinStore {
        /// A store backed by the file at `path`.
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// A store at `$WILDLANDS_SAVE`, or `wildlands_coins.txt` in the
        /// working directory.
        pub fn from_env() -> Self {
            let path = std::env::var_os(SAVE_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_PATH));
            Self::new(path)
        }

        /// The backing file.
        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl CoinStore for FileCoinStore {
        fn load(&self) -> Result<u64, StorageError> {
            match fs::read_to_string(&self.path) {
                Ok(raw) => parse_coins(&raw),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
                Err(e) => Err(e.into()),
            }
        }

        fn save(&self, coins: u64) -> Result<(), StorageError> {
            fs::write(&self.path, coins.to_string())?;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use self::web::LocalCoinStore;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{parse_coins, CoinStore, StorageError};

    /// Key of the counter in `localStorage`.
    pub const STORAGE_KEY: &str = "coins";

    /// Keeps the counter in the browser's `localStorage`.
    #[derive(Clone, Debug, Default)]
    pub struct LocalCoinStore;

    impl LocalCoinStore {
        pub fn new() -> Self {
            Self
        }

        fn storage(&self) -> Result<web_sys::Storage, StorageError> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
            window
                .local_storage()
                .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
                .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
        }
    }

    impl CoinStore for LocalCoinStore {
        fn load(&self) -> Result<u64, StorageError> {
            let raw = self
                .storage()?
                .get_item(STORAGE_KEY)
                .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?;

            match raw {
                Some(raw) => parse_coins(&raw),
                None => Ok(0),
            }
        }

        fn save(&self, coins: u64) -> Result<(), StorageError> {
            self.storage()?
                .set_item(STORAGE_KEY, &coins.to_string())
                .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_whitespace_and_empty() {
        assert_eq!(parse_coins(" 42\n").unwrap(), 42);
        assert_eq!(parse_coins("").unwrap(), 0);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = parse_coins("lots").unwrap_err();
        assert!(matches!(err, StorageError::Malformed(ref s) if s == "lots"));
        assert!(parse_coins("-3").is_err());
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryCoinStore::new(5);
        assert_eq!(store.load().unwrap(), 5);
        store.save(17).unwrap();
        assert_eq!(store.load().unwrap(), 17);
    }

    #[test]
    fn load_or_default_swallows_errors() {
        struct Broken;

        impl CoinStore for Broken {
            fn load(&self) -> Result<u64, StorageError> {
                Err(StorageError::Malformed("x".to_string()))
            }

            fn save(&self, _: u64) -> Result<(), StorageError> {
                Ok(())
            }
        }

        assert_eq!(load_or_default(&Broken), 0);
        assert_eq!(load_or_default(&MemoryCoinStore::new(9)), 9);
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod file {
        use super::super::*;
        use std::path::PathBuf;

        fn temp_path(name: &str) -> PathBuf {
            std::env::temp_dir().join(format!("wildlands-{}-{}", std::process::id(), name))
        }

        #[test]
        fn missing_file_loads_zero() {
            let store = FileCoinStore::new(temp_path("missing"));
            assert_eq!(store.load().unwrap(), 0);
        }

        #[test]
        fn save_then_load() {
            let path = temp_path("roundtrip");
            let store = FileCoinStore::new(&path);
            store.save(1234).unwrap();
            assert_eq!(store.load().unwrap(), 1234);
            assert_eq!(std::fs::read_to_string(&path).unwrap(), "1234");
            let _ = std::fs::remove_file(path);
        }

        #[test]
        fn corrupt_file_is_an_error() {
            let path = temp_path("corrupt");
            std::fs::write(&path, "not coins").unwrap();
            let store = FileCoinStore::new(&path);
            assert!(matches!(store.load(), Err(StorageError::Malformed(_))));
            let _ = std::fs::remove_file(path);
        }
    }
}
