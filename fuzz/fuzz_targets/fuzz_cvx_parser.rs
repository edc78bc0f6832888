#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(mut curve) = curve_x::unserialize(text) else {
        return;
    };

    // Gelesene Kurven müssen verlustfrei zurückschreibbar sein
    let reparsed = curve_x::unserialize(&curve_x::serialize(&curve))
        .expect("serialisierte Kurve muss lesbar sein");
    assert_eq!(reparsed.keys_count(), curve.keys_count());

    if curve.is_valid() {
        let _ = curve.length();
        let _ = curve.evaluate_by_percent(0.5);
        let _ = curve.evaluate_by_time(0.5);
    }
});
