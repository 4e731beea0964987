mod tests {
    use trellis_glow::{EventChannel, Key, KeyEvent, QueueFull};

    fn key(index: u8) -> Key {
        Key::new(index).unwrap()
    }

    #[test]
    fn test_fifo_order() {
        let channel = EventChannel::<4>::new();
        let sender = channel.sender();
        sender.try_send(KeyEvent::rising(key(1))).unwrap();
        sender.try_send(KeyEvent::falling(key(1))).unwrap();
        sender.try_send(KeyEvent::rising(key(2))).unwrap();
        assert_eq!(channel.len(), 3);

        let received: Vec<_> = channel.receiver().drain().collect();
        assert_eq!(
            received,
            vec![
                KeyEvent::rising(key(1)),
                KeyEvent::falling(key(1)),
                KeyEvent::rising(key(2)),
            ]
        );
        assert!(channel.is_empty());
    }

    #[test]
    fn test_full_channel_returns_event() {
        let channel = EventChannel::<2>::new();
        channel.try_send(KeyEvent::rising(key(0))).unwrap();
        channel.try_send(KeyEvent::rising(key(1))).unwrap();

        let rejected = KeyEvent::rising(key(2));
        assert_eq!(channel.try_send(rejected), Err(QueueFull(rejected)));

        assert_eq!(channel.try_receive(), Some(KeyEvent::rising(key(0))));
        assert!(channel.try_send(rejected).is_ok());
    }

    #[test]
    fn test_empty_channel_does_not_block() {
        let channel = EventChannel::<4>::new();
        assert_eq!(channel.receiver().try_receive(), None);
        assert_eq!(channel.receiver().drain().count(), 0);
    }
}
