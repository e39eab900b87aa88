use std::fs;

use serene_engine::domain::Tuning;
use serene_engine::Session;

#[test]
fn shipped_tuning_matches_builtin_defaults() {
    let json = fs::read_to_string("tuning/default.json")
        .expect("tuning/default.json should ship with the engine");

    let tuning = Tuning::from_json(&json).expect("default tuning should parse and validate");
    assert_eq!(tuning, Tuning::default());

    let session = Session::with_tuning(800.0, 600.0, tuning, 1).expect("valid tuning");
    assert_eq!(session.bubbles().len(), 120);
}
