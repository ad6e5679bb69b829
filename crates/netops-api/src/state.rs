//! Application state for the netops API

use std::sync::Arc;

use netops_core::Inventory;
use netops_exec::CommandExecutor;

/// Application state shared across all handlers.
///
/// Constructed once before serving begins and passed explicitly into the
/// router; it holds the inventory and the gated executor for the process
/// lifetime. No teardown beyond process exit.
#[derive(Clone)]
pub struct AppState {
    inventory: Arc<Inventory>,
    executor: Arc<CommandExecutor>,
}

impl AppState {
    /// Create the application context
    pub fn new(inventory: Arc<Inventory>, executor: Arc<CommandExecutor>) -> Self {
        Self {
            inventory,
            executor,
        }
    }

    /// The shared device inventory
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// The shared command executor
    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }
}
