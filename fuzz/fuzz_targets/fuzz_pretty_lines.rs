#![no_main]
use libfuzzer_sys::fuzz_target;
use prettylog::format::{PrettyFormat, chunk_bytes};

fuzz_target!(|data: &str| {
    let format = PrettyFormat::builder().show_thread_info(false).build();
    let lines = format.lines(data);
    assert!(lines.len() >= 3);

    // Chunks always concatenate back to the input
    for aligned in [false, true] {
        assert_eq!(chunk_bytes(data, aligned).concat(), data.as_bytes());
    }
});
