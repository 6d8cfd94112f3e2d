use anyhow::Context;
use act_config::ActivityConfig;
use act_store::{FileKvStore, TicketStore};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: ActivityConfig,
    pub store: TicketStore<FileKvStore>,
}

impl AppContext {
    /// Open the ticket store named by the config.
    pub fn init(config: ActivityConfig) -> anyhow::Result<Self> {
        let store = act_store::open_file(&config.store.path).with_context(|| {
            format!(
                "failed to open activity store at {}",
                config.store.path.display()
            )
        })?;
        Ok(Self { config, store })
    }
}
