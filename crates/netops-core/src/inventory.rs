//! Device inventory
//!
//! In-memory store of device records keyed by their content-derived uid.
//! Shared mutable state: every operation takes the lock once, so adds and
//! reads interleave safely across concurrent requests, with no cross-call
//! transactions.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

use crate::device::DeviceRecord;
use crate::error::{NetopsError, NetopsResult};

/// Thread-safe registry of network devices
#[derive(Debug, Default)]
pub struct Inventory {
    /// Map of uid → record; insertion order is irrelevant
    devices: RwLock<HashMap<String, DeviceRecord>>,
}

impl Inventory {
    /// Create a new empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single device, returning its uid.
    ///
    /// Re-registering the same identity tuple yields the same uid and
    /// silently overwrites the stored record; duplicates are not rejected.
    pub fn add_device(
        &self,
        platform: &str,
        host: &str,
        user: &str,
        password: &str,
        extra: BTreeMap<String, Value>,
    ) -> String {
        let record = DeviceRecord::new(platform, host, user, password, extra);
        let uid = record.uid.clone();
        debug!(uid = %uid, host = %host, platform = %platform, "Adding device");
        self.devices.write().insert(uid.clone(), record);
        uid
    }

    /// Bulk-import raw device objects.
    ///
    /// Items carrying all four identity fields are added; items missing any
    /// of them are skipped without error (tolerant bulk import). Returns the
    /// number of records imported.
    pub fn bulk_load(&self, items: &[Value]) -> usize {
        let mut loaded = 0;
        for item in items {
            match record_from_value(item) {
                Some(record) => {
                    self.devices.write().insert(record.uid.clone(), record);
                    loaded += 1;
                }
                None => {
                    debug!(item = %item, "Skipping inventory item with missing identity fields");
                }
            }
        }
        loaded
    }

    /// Load devices from a parsed JSON document.
    ///
    /// Accepts either a bare array of device objects or an object with a
    /// `devices` key holding that array; any other top-level shape is a
    /// format error.
    pub fn load_json_value(&self, data: &Value) -> NetopsResult<usize> {
        let items = match data {
            Value::Array(items) => items.as_slice(),
            Value::Object(map) => match map.get("devices") {
                Some(Value::Array(items)) => items.as_slice(),
                _ => {
                    return Err(NetopsError::InventoryFormat(
                        "expected a list of devices or an object with a 'devices' key".to_string(),
                    ))
                }
            },
            _ => {
                return Err(NetopsError::InventoryFormat(
                    "expected a list of devices or an object with a 'devices' key".to_string(),
                ))
            }
        };
        Ok(self.bulk_load(items))
    }

    /// Load devices from a JSON string
    pub fn load_json_str(&self, text: &str) -> NetopsResult<usize> {
        let data: Value = serde_json::from_str(text)
            .map_err(|e| NetopsError::InventoryFormat(e.to_string()))?;
        self.load_json_value(&data)
    }

    /// Load devices from a JSON file
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> NetopsResult<usize> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| NetopsError::InventoryFormat(e.to_string()))?;
        self.load_json_str(&content)
    }

    /// Look up a device by its uid
    pub fn get_by_uid(&self, uid: &str) -> NetopsResult<DeviceRecord> {
        self.devices
            .read()
            .get(uid)
            .cloned()
            .ok_or_else(|| NetopsError::DeviceNotFound(format!("Device with UID {uid} not found")))
    }

    /// Look up a device by its host.
    ///
    /// Host uniqueness is a runtime check rather than a structural
    /// invariant (uids are keyed on more than the host), so two records
    /// sharing a host make this lookup ambiguous.
    pub fn get_by_host(&self, host: &str) -> NetopsResult<DeviceRecord> {
        let devices = self.devices.read();
        let mut matches = devices.values().filter(|d| d.host == host);

        let first = matches
            .next()
            .ok_or_else(|| NetopsError::DeviceNotFound(format!("Device with host {host} not found")))?;
        if matches.next().is_some() {
            return Err(NetopsError::AmbiguousHost(host.to_string()));
        }
        Ok(first.clone())
    }

    /// All devices matching the given platform tag (order irrelevant)
    pub fn devices_by_platform(&self, platform: &str) -> Vec<DeviceRecord> {
        self.devices
            .read()
            .values()
            .filter(|d| d.platform == platform)
            .cloned()
            .collect()
    }

    /// Snapshot copy of all records; later mutations are not observable
    /// through the returned vector.
    pub fn devices(&self) -> Vec<DeviceRecord> {
        self.devices.read().values().cloned().collect()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.devices.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.read().is_empty()
    }
}

/// Build a record from a raw JSON object if all identity fields are present
/// as non-empty strings.
fn record_from_value(value: &Value) -> Option<DeviceRecord> {
    let map = value.as_object()?;

    let field = |name: &str| -> Option<String> {
        map.get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let platform = field("platform")?;
    let host = field("host")?;
    let user = field("user")?;
    let password = field("password")?;

    let extra: BTreeMap<String, Value> = map
        .iter()
        .filter(|(k, _)| !matches!(k.as_str(), "platform" | "host" | "user" | "password" | "uid"))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    Some(DeviceRecord::new(platform, host, user, password, extra))
}
