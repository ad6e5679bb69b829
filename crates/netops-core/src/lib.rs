//! netops-core - Core types and traits for the netops gateway
//!
//! This crate provides the device inventory, the platform descriptor
//! resolver, and the transport abstraction that the executor and the HTTP
//! API layers build on.

pub mod device;
pub mod error;
pub mod inventory;
pub mod platform;
pub mod result;
pub mod transport;

pub use device::{device_uid, DeviceRecord};
pub use error::{NetopsError, NetopsResult};
pub use inventory::Inventory;
pub use platform::{ConnectionDescriptor, Platform, TransportKind};
pub use result::{CommandResult, CommandStatus};
pub use transport::{CommandTransport, ExecOptions, TransportError, TransportSession};
