mod tests {
    use embassy_time::Instant;
    use proptest::prelude::*;
    use trellis_glow::{
        ACCENT_COLOR, CallbackTable, ColorMapper, Edge, Key, KeyEvent, KeyStates, Rgb, RingLayout,
        TrellisConfig, compose, handle_event,
    };

    fn mapper() -> ColorMapper {
        let config = TrellisConfig::DEFAULT;
        let layout = RingLayout::new(&config.rings).unwrap();
        ColorMapper::new(layout, &config)
    }

    fn key(index: u8) -> Key {
        Key::new(index).unwrap()
    }

    #[test]
    fn test_rising_sets_accent() {
        let mut states = KeyStates::default();
        handle_event(&mut states, KeyEvent::rising(key(3)));
        assert_eq!(states.override_color(key(3)), Some(ACCENT_COLOR));
        assert_eq!(ACCENT_COLOR, Rgb::new(255, 0, 127));
        assert_eq!(states.pressed_count(), 1);
    }

    #[test]
    fn test_falling_clears_override() {
        let mut states = KeyStates::default();
        handle_event(&mut states, KeyEvent::rising(key(3)));
        handle_event(&mut states, KeyEvent::falling(key(3)));
        assert_eq!(states.override_color(key(3)), None);
    }

    #[test]
    fn test_repeated_falling_is_idempotent() {
        let mut once = KeyStates::default();
        handle_event(&mut once, KeyEvent::rising(key(7)));
        let mut twice = once.clone();

        handle_event(&mut once, KeyEvent::falling(key(7)));
        handle_event(&mut twice, KeyEvent::falling(key(7)));
        handle_event(&mut twice, KeyEvent::falling(key(7)));

        assert_eq!(once, twice);
        assert_eq!(twice.override_color(key(7)), None);
    }

    #[test]
    fn test_repeated_rising_is_idempotent() {
        let mut once = KeyStates::default();
        handle_event(&mut once, KeyEvent::rising(key(1)));
        let mut twice = once.clone();
        handle_event(&mut twice, KeyEvent::rising(key(1)));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_events_touch_only_their_key() {
        let mut states = KeyStates::default();
        handle_event(&mut states, KeyEvent::rising(key(2)));
        handle_event(&mut states, KeyEvent::rising(key(9)));
        handle_event(&mut states, KeyEvent::falling(key(2)));

        for k in Key::all() {
            let expected = (k == key(9)).then_some(ACCENT_COLOR);
            assert_eq!(states.override_color(k), expected, "key {k}");
        }
    }

    #[test]
    fn test_custom_accent() {
        let accent = Rgb::new(0, 64, 255);
        let mut states = KeyStates::new(accent);
        assert_eq!(states.accent(), accent);
        handle_event(&mut states, KeyEvent::new(key(0), Edge::Rising));
        assert_eq!(states.override_color(key(0)), Some(accent));
    }

    #[test]
    fn test_press_and_release_without_time_advance() {
        let mapper = mapper();
        let now = Instant::from_millis(4_200);
        let mut states = KeyStates::default();

        handle_event(&mut states, KeyEvent::rising(key(5)));
        handle_event(&mut states, KeyEvent::falling(key(5)));

        let frame = compose(&states, &mapper, now);
        assert_eq!(frame[5], mapper.target_color(key(5), now));
        assert_ne!(frame[5], ACCENT_COLOR);
    }

    #[test]
    fn test_compose_without_overrides_is_animated() {
        let mapper = mapper();
        let now = Instant::from_millis(777);
        let frame = compose(&KeyStates::default(), &mapper, now);
        for k in Key::all() {
            assert_eq!(frame[k.position()], mapper.target_color(k, now));
        }
    }

    #[test]
    fn test_callback_table_dispatch() {
        let mut table = CallbackTable::new();
        let mut states = KeyStates::default();

        assert!(!table.dispatch(&mut states, KeyEvent::rising(key(4))));
        assert_eq!(states.override_color(key(4)), None);

        table.register(key(4), handle_event);
        assert!(table.is_registered(key(4)));
        assert!(!table.is_registered(key(5)));
        assert!(table.dispatch(&mut states, KeyEvent::rising(key(4))));
        assert_eq!(states.override_color(key(4)), Some(ACCENT_COLOR));
    }

    proptest! {
        #[test]
        fn pressed_key_shows_accent_at_any_time(index in 0u8..16, micros in 0u64..1_000_000_000_000) {
            let mapper = mapper();
            let pressed = key(index);
            let mut states = KeyStates::default();
            handle_event(&mut states, KeyEvent::rising(pressed));

            let now = Instant::from_micros(micros);
            let frame = compose(&states, &mapper, now);
            prop_assert_eq!(frame[pressed.position()], ACCENT_COLOR);

            handle_event(&mut states, KeyEvent::falling(pressed));
            let frame = compose(&states, &mapper, now);
            prop_assert_eq!(frame[pressed.position()], mapper.target_color(pressed, now));
        }
    }
}
