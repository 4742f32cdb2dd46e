#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Settings parsing, including unknown-key collection, must never panic
        if let Ok(config) = qdii_deploy::Config::from_toml(content) {
            // Any accepted settings must plan every target
            for plan in qdii_deploy::plan_all(&config) {
                let _ = plan.command_lines();
            }
        }
        let _ = toml::from_str::<qdii_deploy::Config>(content);
    }
});
