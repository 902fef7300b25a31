use std::path::PathBuf;

use error_stack::Report;
use vodca::References;

use kernel::prelude::entity::{Penalty, RentalPolicy};
use kernel::KernelError;

use crate::database::{ConfiguredStore, FileStore, InMemoryStore, RedisStore};
use crate::{env, env_or, parse_env};

const STORE_BACKEND: &str = "STORE_BACKEND";
const STORE_PATH: &str = "STORE_PATH";
const REDIS_URL: &str = "REDIS_URL";
const STORE_PREFIX: &str = "STORE_PREFIX";
const CATALOG_API_URL: &str = "CATALOG_API_URL";
const RENTAL_PERIOD_SECS: &str = "RENTAL_PERIOD_SECS";
const PENALTY_RATE_PER_HOUR: &str = "PENALTY_RATE_PER_HOUR";
const PENALTY_THRESHOLD: &str = "PENALTY_THRESHOLD";
const PENALTY_TICK_SECS: &str = "PENALTY_TICK_SECS";

/// One year.
const MAX_RENTAL_PERIOD_SECS: i64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum StoreBackend {
    Redis { url: String, prefix: String },
    File { path: PathBuf },
    Memory,
}

impl StoreBackend {
    pub fn open(&self) -> error_stack::Result<ConfiguredStore, KernelError> {
        Ok(match self {
            StoreBackend::Redis { url, prefix } => {
                ConfiguredStore::Redis(RedisStore::new(url.as_str(), prefix.as_str())?)
            }
            StoreBackend::File { path } => ConfiguredStore::File(FileStore::new(path.clone())),
            StoreBackend::Memory => ConfiguredStore::Memory(InMemoryStore::default()),
        })
    }
}

/// Process configuration, read from the environment (and `.env`).
#[derive(Debug, Clone, References)]
pub struct LibraryConfig {
    store: StoreBackend,
    catalog_api_url: String,
    policy: RentalPolicy,
    tick_period: std::time::Duration,
}

impl LibraryConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let store = match env_or(STORE_BACKEND, "file")?.trim().to_ascii_lowercase().as_str() {
            "redis" => StoreBackend::Redis {
                url: env(REDIS_URL)?,
                prefix: env_or(STORE_PREFIX, "libris")?,
            },
            "file" => StoreBackend::File {
                path: env_or(STORE_PATH, "./data")?.into(),
            },
            "memory" => StoreBackend::Memory,
            other => {
                return Err(Report::new(KernelError::Internal)
                    .attach_printable(format!("Unknown {STORE_BACKEND} `{other}`")))
            }
        };

        let rental_period = parse_env(RENTAL_PERIOD_SECS, 86_400_i64)?;
        let rental_period = positive(RENTAL_PERIOD_SECS, rental_period)?;
        if rental_period > MAX_RENTAL_PERIOD_SECS {
            return Err(Report::new(KernelError::Internal).attach_printable(format!(
                "`{RENTAL_PERIOD_SECS}` exceeds {MAX_RENTAL_PERIOD_SECS}, got {rental_period}"
            )));
        }
        let rate = parse_env(PENALTY_RATE_PER_HOUR, 5_i64)?;
        let threshold = parse_env(PENALTY_THRESHOLD, 50_i64)?;
        let tick = positive(PENALTY_TICK_SECS, parse_env(PENALTY_TICK_SECS, 30_i64)?)?;

        Ok(Self {
            store,
            catalog_api_url: env_or(CATALOG_API_URL, "https://jsonplaceholder.typicode.com")?,
            policy: RentalPolicy::new(
                time::Duration::seconds(rental_period),
                Penalty::new(rate),
                Penalty::new(threshold),
            ),
            tick_period: std::time::Duration::from_secs(tick.unsigned_abs()),
        })
    }
}

fn positive(key: &str, value: i64) -> error_stack::Result<i64, KernelError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(Report::new(KernelError::Internal)
            .attach_printable(format!("`{key}` must be positive, got {value}")))
    }
}
