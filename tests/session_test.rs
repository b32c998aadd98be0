//! Tests for the color session controller

use swatch::color::{Color, TextContrast};
use swatch::session::{Effect, Notice, Session, DEFAULT_BRIGHTNESS};

fn session() -> Session {
    Session::new(
        5,
        vec![
            Color::new(255, 0, 0),
            Color::new(0, 128, 0),
            Color::new(0, 0, 255),
        ],
    )
}

// ===================
// Initial state
// ===================

#[test]
fn test_initial_state() {
    let session = session();
    let state = session.state();
    assert_eq!(state.current_color.to_string(), "#808000");
    assert_eq!(state.previous_color, state.current_color);
    assert_eq!(state.brightness_percent, 100);
    assert_eq!(state.gradient_angle, 90);
    assert!(!state.gradient_enabled);
    assert!(session.history().is_empty());
    assert!(session.favorites().is_empty());
}

// ===================
// Applying colors
// ===================

#[test]
fn test_apply_sequence_builds_history_newest_first() {
    let mut session = session();
    for i in 0..3 {
        session.apply_preset(i);
    }

    let history: Vec<String> = session.history().all().iter().map(Color::hex).collect();
    assert_eq!(history, ["#0000ff", "#008000", "#ff0000"]);
    assert_eq!(session.previous_color().hex(), "#008000");
}

#[test]
fn test_history_is_bounded() {
    let mut session = Session::new(5, Vec::new());
    for i in 0..8u8 {
        session.apply_color(Color::new(i, i, i));
    }

    assert_eq!(session.history().len(), 5);
    assert_eq!(session.history().get(0), Some(Color::new(7, 7, 7)));
    assert_eq!(session.history().get(4), Some(Color::new(3, 3, 3)));
}

#[test]
fn test_reapplying_a_color_does_not_duplicate_history() {
    let mut session = session();
    session.apply_preset(0);
    session.apply_preset(1);
    session.apply_preset(0);

    assert_eq!(session.history().len(), 2);
    assert_eq!(session.current_color(), Color::new(255, 0, 0));
}

#[test]
fn test_undo_swaps_back() {
    let mut session = session();
    session.apply_preset(0);
    session.apply_preset(2);
    session.undo();

    assert_eq!(session.current_color(), Color::new(255, 0, 0));
    assert_eq!(session.previous_color(), Color::new(0, 0, 255));
}

#[test]
fn test_apply_color_str() {
    let mut session = session();
    assert_eq!(session.apply_color_str("#abc").unwrap(), Color::new(0xaa, 0xbb, 0xcc));
    assert_eq!(session.apply_color_str("pink").unwrap().hex(), "#ffc0cb");
    assert!(session.apply_color_str("not a color").is_err());
    assert_eq!(session.current_color().hex(), "#ffc0cb");
}

#[test]
fn test_missing_preset_is_ignored() {
    let mut session = session();
    assert!(!session.apply_preset(7));
    assert_eq!(session.current_color(), Color::OLIVE);
}

#[test]
fn test_apply_random_records_history() {
    let mut session = session();
    let color = session.apply_random();
    assert_eq!(session.current_color(), color);
    assert_eq!(session.history().get(0), Some(color));
}

// ===================
// Brightness and gradient
// ===================

#[test]
fn test_brightness_is_clamped() {
    let mut session = session();
    assert_eq!(session.set_brightness(400), 150);
    assert_eq!(session.set_brightness(0), 50);
    assert_eq!(session.adjust_brightness(25), 75);
}

#[test]
fn test_brightness_only_changes_display_color() {
    let mut session = session();
    session.apply_color(Color::new(100, 100, 100));
    session.set_brightness(150);

    assert_eq!(session.current_color(), Color::new(100, 100, 100));
    assert_eq!(session.display_color(), Color::new(150, 150, 150));
}

#[test]
fn test_gradient_description() {
    let mut session = session();
    assert!(session.gradient().is_none());

    session.set_gradient(true, 450, Color::new(0, 0, 255));
    assert_eq!(session.state().gradient_angle, 90);
    assert_eq!(
        session.gradient().unwrap().to_string(),
        "linear-gradient(90deg, #808000, #0000ff)"
    );

    session.rotate_gradient(-100);
    assert_eq!(session.state().gradient_angle, 350);
}

#[test]
fn test_reset_keeps_history_and_favorites() {
    let mut session = session();
    session.apply_preset(0);
    session.add_favorite();
    session.set_brightness(60);
    session.toggle_gradient();
    session.reset_to_default();

    assert_eq!(session.current_color(), Color::OLIVE);
    assert_eq!(session.state().brightness_percent, DEFAULT_BRIGHTNESS);
    assert!(!session.state().gradient_enabled);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.favorites().len(), 1);
}

#[test]
fn test_text_contrast_follows_current_color() {
    let mut session = session();
    session.apply_color(Color::WHITE);
    assert_eq!(session.text_contrast(), TextContrast::Dark);
    session.apply_color(Color::BLACK);
    assert_eq!(session.text_contrast(), TextContrast::Light);
}

// ===================
// Effects
// ===================

#[test]
fn test_copy_queues_clipboard_and_notice() {
    let mut session = session();
    session.apply_preset(0);
    session.copy_current();

    assert_eq!(
        session.drain_effects(),
        vec![
            Effect::CopyToClipboard("#ff0000".to_string()),
            Effect::Notify(Notice::Copied(Color::new(255, 0, 0))),
        ]
    );
    assert!(session.drain_effects().is_empty());
}

#[test]
fn test_favorites_round_trip_notices() {
    let mut session = session();
    session.toggle_favorite();
    session.toggle_favorite();

    let notices: Vec<String> = session
        .drain_effects()
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::Notify(notice) => Some(notice.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(
        notices,
        ["Color saved to favorites!", "Color removed from favorites."]
    );
    assert!(session.favorites().is_empty());
}

#[test]
fn test_adding_same_favorite_twice_is_silent() {
    let mut session = session();
    assert!(session.add_favorite());
    assert!(!session.add_favorite());
    assert_eq!(session.drain_effects().len(), 1);
}

#[test]
fn test_export_queues_favorites_document() {
    let mut session = session();
    session.apply_preset(0);
    session.add_favorite();
    session.apply_preset(2);
    session.add_favorite();
    session.drain_effects();

    session.export_favorites().unwrap();
    let effects = session.drain_effects();
    assert_eq!(effects.len(), 2);

    match &effects[0] {
        Effect::SaveFile { name, contents } => {
            assert_eq!(name, "favorite-colors.json");
            let saved: Vec<String> = serde_json::from_slice(contents).unwrap();
            assert_eq!(saved, ["#ff0000", "#0000ff"]);
        }
        other => panic!("unexpected effect {:?}", other),
    }
    assert_eq!(
        effects[1],
        Effect::Notify(Notice::PaletteExported)
    );
}

#[test]
fn test_sampled_color_is_announced() {
    let mut session = session();
    session.apply_sampled(Color::new(0x12, 0x34, 0x56));

    assert_eq!(session.current_color().hex(), "#123456");
    assert_eq!(
        session.drain_effects(),
        vec![Effect::Notify(Notice::Picked(Color::new(0x12, 0x34, 0x56)))]
    );
    assert_eq!(
        Notice::Picked(Color::new(0x12, 0x34, 0x56)).to_string(),
        "Picked color: #123456"
    );
}
