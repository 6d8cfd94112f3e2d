use act_core::enums::Region;
use act_store::{KeyValueStore, TicketStore};

/// The working region selected with `act region set`.
pub fn require_region<S: KeyValueStore>(store: &TicketStore<S>) -> anyhow::Result<Region> {
    store
        .selected_region()?
        .ok_or_else(|| anyhow::anyhow!("No region selected. Run 'act region set <REGION>' first."))
}

#[cfg(test)]
mod tests {
    use act_store::MemoryKvStore;

    use super::*;

    #[test]
    fn missing_region_points_at_region_set() {
        let store = TicketStore::new(MemoryKvStore::new());
        let err = require_region(&store).unwrap_err().to_string();
        assert!(err.contains("act region set"));
    }

    #[test]
    fn selected_region_is_returned() {
        let mut store = TicketStore::new(MemoryKvStore::new());
        store.set_region(&Region::AsiaPacific).unwrap();
        assert_eq!(require_region(&store).unwrap(), Region::AsiaPacific);
    }
}
