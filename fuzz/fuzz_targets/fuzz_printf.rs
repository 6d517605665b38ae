#![no_main]
use libfuzzer_sys::fuzz_target;
use prettylog::fmt::{Arg, format};

fuzz_target!(|data: &str| {
    // Must not panic on any template, with or without arguments
    let args = [
        Arg::from("text"),
        Arg::from(-42),
        Arg::from(7u64),
        Arg::from(1.5),
        Arg::from(true),
        Arg::from('x'),
    ];
    for n in 0..=args.len() {
        let _ = format(data, &args[..n]);
    }
});
