//! Browser tests: `wasm-pack test --headless --firefox packages/engine`
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

use serene_engine::SereneApp;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> HtmlCanvasElement {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("browser document");
    document
        .create_element("canvas")
        .expect("create canvas")
        .dyn_into::<HtmlCanvasElement>()
        .expect("canvas element")
}

#[wasm_bindgen_test]
fn app_runs_particles_and_stops_on_mode_switch() {
    serene_engine::init();
    let mut app = SereneApp::new(canvas()).expect("2d context");
    app.resize(300.0, 200.0, 2.0).expect("resize");

    let token = app.select_particle_mode();
    assert!(app.frame(token));
    assert!(app.frame(token));
    assert_eq!(app.frame_count(), 2);

    app.select_bubble_mode();
    assert!(!app.frame(token));
    assert_eq!(app.frame_count(), 2);
}

#[wasm_bindgen_test]
fn app_pops_bubbles_and_loads_tuning() {
    let mut app = SereneApp::new(canvas()).expect("2d context");
    assert!(app.pop(3));
    assert!(!app.pop(3));
    assert_eq!(app.readout_label(), "1 / 120");

    assert!(app.load_tuning("{ \"friction\": 3.0 }".to_string()).is_err());
    app.load_tuning("{ \"bubble_cols\": 4, \"bubble_rows\": 5 }".to_string())
        .expect("valid tuning");
    app.reset_bubbles();
    assert_eq!(app.bubble_count(), 20);
    assert_eq!(app.bubble_states_len(), 20);
}
