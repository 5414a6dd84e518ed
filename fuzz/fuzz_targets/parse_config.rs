//! Fuzz harness for configuration files (YAML and JSON)

#![no_main]

use libfuzzer_sys::fuzz_target;
use musclestore_config::MusclestoreConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let _ = serde_yaml::from_str::<MusclestoreConfig>(input);
    let _ = serde_json::from_str::<MusclestoreConfig>(input);
});
