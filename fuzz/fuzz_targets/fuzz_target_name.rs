#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // CLI word parsing
        if let Ok(name) = content.parse::<qdii_deploy::TargetName>() {
            assert_eq!(name.as_str(), content);
        }

        // JSON deserialization of the same enum
        let _ = serde_json::from_str::<qdii_deploy::TargetName>(content);
    }
});
