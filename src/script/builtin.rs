//! The embedded default script.

use crate::Script;
use once_cell::sync::Lazy;
use std::sync::Arc;

const DOCTOR_SCRIPT: &str = include_str!("../../assets/doctor.json");

static BUILTIN: Lazy<Arc<Script>> = Lazy::new(|| {
    // The embedded document is validated by the compile tests below; a
    // failure here means the shipped asset itself is broken.
    Arc::new(Script::from_json_str(DOCTOR_SCRIPT).expect("embedded doctor script must compile"))
});

impl Script {
    /// The embedded default script, compiled once per process.
    ///
    /// The returned `Arc` can be cloned into any number of
    /// [`crate::Responder`] instances; the script itself is immutable.
    pub fn builtin() -> Arc<Script> {
        Arc::clone(&BUILTIN)
    }
}
