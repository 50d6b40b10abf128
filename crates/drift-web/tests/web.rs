#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use drift_web::Backdrop;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn detached_mount_is_a_noop() {
    // No container element in the harness page: the simulation must
    // still run, with nothing attached.
    let mut backdrop = Backdrop::new("missing-container", "dark", "", 42).unwrap();
    assert!(!backdrop.is_attached());

    let stats = backdrop.tick(16.0);
    assert!(stats.particle_count > 0);

    backdrop.dispose();
}

#[wasm_bindgen_test]
fn theme_strings_round_trip() {
    let backdrop = Backdrop::new("missing-container", "light", "", 7).unwrap();
    assert_eq!(backdrop.theme(), "light");
}
