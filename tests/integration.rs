// SPDX-License-Identifier: MPL-2.0
use iced::{event, mouse, window, Point, Size};
use iced_pin::config::{self, Config};
use iced_pin::i18n::fluent::I18n;
use iced_pin::media::{self, ImageData};
use iced_pin::ui::pin::{Action, Effect, Message, State, ViewSettings, WindowRequest};
use tempfile::tempdir;

fn checkerboard(width: u32, height: u32) -> ImageData {
    let pixels = (0..width * height)
        .flat_map(|i| {
            if (i % width + i / width) % 2 == 0 {
                [255, 255, 255, 255]
            } else {
                [0, 0, 0, 255]
            }
        })
        .collect();
    ImageData::from_rgba(width, height, pixels)
}

fn raw(event: event::Event) -> Message {
    Message::RawEvent {
        window: window::Id::unique(),
        event,
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french_config = loaded_initial_config.clone();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn view_settings_come_from_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[view]\nwheel_step_percent = 5.0\nthumbnail_size = 64\n",
    )
    .expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let settings = ViewSettings::from(&loaded);
    assert!((settings.wheel_step - 0.05).abs() < 1e-6);
    assert_eq!(settings.thumbnail_size, 64);
    assert!(loaded.save.interactive);
}

#[test]
fn saved_capture_can_be_pinned_again() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("capture.png");
    let original = checkerboard(16, 8);
    media::save_image(&original, &path).expect("Failed to save capture");

    let mut state = State::new(ViewSettings::default());
    assert_eq!(state.drop_file(path.clone()), Effect::LoadFile(path.clone()));

    let reloaded = media::load_image(&path).expect("Failed to reload capture");
    assert_eq!(reloaded.rgba_bytes(), original.rgba_bytes());
    state.replace_image(reloaded);
    assert_eq!(state.natural_size(), Some((16, 8)));
}

#[test]
fn wheel_zoom_then_recover_from_menu() {
    let mut state = State::new(ViewSettings {
        wheel_step: 0.1,
        thumbnail_size: 125,
    });
    state.handle_message(raw(event::Event::Window(window::Event::Opened {
        position: Some(Point::new(40.0, 40.0)),
        size: Size::new(120.0, 70.0),
    })));
    state.fix(checkerboard(100, 50));
    let _ = state.take_window_request();

    state.handle_message(raw(event::Event::Mouse(mouse::Event::CursorMoved {
        position: Point::new(30.0, 30.0),
    })));
    state.handle_message(raw(event::Event::Mouse(mouse::Event::WheelScrolled {
        delta: mouse::ScrollDelta::Lines { x: 0.0, y: 2.0 },
    })));
    assert_eq!(state.display_size(), Some((120, 60)));
    assert!(matches!(
        state.take_window_request(),
        Some(WindowRequest::Reshape(_))
    ));

    let effect = state.handle_message(Message::Menu(Action::Recover));
    assert_eq!(effect, Effect::None);
    assert_eq!(state.display_size(), Some((100, 50)));
    assert!((state.scale().value() - 1.0).abs() < f32::EPSILON);
}

#[test]
fn thumbnail_mode_shows_fixed_square() {
    let mut state = State::new(ViewSettings {
        wheel_step: 0.01,
        thumbnail_size: 32,
    });
    state.fix(checkerboard(300, 200));

    state.toggle_thumbnail();
    assert!(state.is_thumbnail());
    assert_eq!(state.display_size(), Some((32, 32)));

    state.toggle_thumbnail();
    assert!(!state.is_thumbnail());
    assert_eq!(state.display_size(), Some((300, 200)));
}
