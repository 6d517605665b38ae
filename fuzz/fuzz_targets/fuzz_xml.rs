#![no_main]
use libfuzzer_sys::fuzz_target;
use prettylog::fmt::{pretty_json, pretty_xml};

fuzz_target!(|data: &str| {
    // Accepted input must re-indent to something that is accepted again
    if let Some(pretty) = pretty_xml(data) {
        assert!(pretty_xml(&pretty).is_some());
    }
    let _ = pretty_json(data);
});
