// Subset of the device's GET /api/system/info payload

use serde::{Deserialize, Serialize};

/// Only the two voltage fields are read; the rest of the payload is ignored.
/// Both are millivolts. `null` and a missing key both deserialize to `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfoResponse {
    #[serde(default)]
    pub core_voltage: Option<f64>,
    #[serde(default)]
    pub core_voltage_actual: Option<f64>,
}
