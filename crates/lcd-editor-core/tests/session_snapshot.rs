use lcd_editor_core::{ConfigError, EditorConfig, EditorCore, SessionSnapshot};

#[test]
fn test_snapshot_captures_minimal_state() {
    let config = EditorConfig::new(6)
        .with_max_buffer_length(20)
        .with_initial_text("Hi there")
        .with_initial_cursor(3);
    let editor = EditorCore::new(config).unwrap();

    assert_eq!(
        editor.session_snapshot(),
        SessionSnapshot {
            text: "Hi there".to_string(),
            cursor: 3,
            window_size: 6,
            max_buffer_length: 20,
        }
    );
}

#[test]
fn test_restore_rederives_layout_and_window() {
    let mut editor = EditorCore::new(EditorConfig::new(5)).unwrap();
    for ch in "QuickBrownFox".chars() {
        editor.insert(ch).unwrap();
    }
    editor.move_home();
    for _ in 0..4 {
        editor.move_right();
    }

    let restored = EditorCore::restore(&editor.session_snapshot()).unwrap();

    assert_eq!(restored.text(), editor.text());
    assert_eq!(restored.cursor(), editor.cursor());
    assert_eq!(restored.render_text(), editor.render_text());
    assert_eq!(restored.index_map(), editor.index_map());
    assert_eq!(restored.cursor_render_pos(), editor.cursor_render_pos());
    let window = restored.window();
    assert!(window.contains(restored.cursor_render_pos()));
}

#[test]
fn test_restore_rejects_invalid_snapshot() {
    let snapshot = SessionSnapshot {
        text: "abc".to_string(),
        cursor: 7,
        window_size: 5,
        max_buffer_length: 10,
    };
    assert_eq!(
        EditorCore::restore(&snapshot).unwrap_err(),
        ConfigError::CursorOutOfRange { cursor: 7, len: 3 }
    );

    let snapshot = SessionSnapshot {
        window_size: 1,
        cursor: 0,
        ..snapshot
    };
    assert_eq!(
        EditorCore::restore(&snapshot).unwrap_err(),
        ConfigError::WindowTooSmall { window_size: 1 }
    );
}

#[test]
fn test_initial_text_is_truncated_to_capacity() {
    let config = EditorConfig::new(5)
        .with_max_buffer_length(4)
        .with_initial_text("abcdefgh");
    let editor = EditorCore::new(config).unwrap();
    assert_eq!(editor.text(), "abcd");
    assert_eq!(editor.cursor(), 4);
}

#[cfg(feature = "serde")]
#[test]
fn test_snapshot_json_round_trip() {
    let editor = EditorCore::new(EditorConfig::new(5).with_initial_text("AbC")).unwrap();
    let json = serde_json::to_string(&editor.session_snapshot()).unwrap();
    let snapshot: SessionSnapshot = serde_json::from_str(&json).unwrap();
    let restored = EditorCore::restore(&snapshot).unwrap();
    assert_eq!(restored.screen_snapshot(), editor.screen_snapshot());
}
