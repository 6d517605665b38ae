#![no_main]
use libfuzzer_sys::fuzz_target;
use prettylog::callsite::stack;

fuzz_target!(|data: &str| {
    let frames = stack::parse(data);
    for frame in &frames {
        let _ = frame.tag();
        let _ = frame.file_name();
    }
    for layers in 0..3 {
        let _ = stack::call_site_index(&frames, "prettylog::printer::Printer", layers);
    }
});
