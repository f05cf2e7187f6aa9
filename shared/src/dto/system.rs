use serde::{Deserialize, Serialize};

/// Result of the `/system/check-state` probe.
///
/// `fresh` is true until the database and the first administrator have been
/// initialised; the console routes to `/init` in that case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemState {
    pub fresh: bool,
}
