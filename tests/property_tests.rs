//! Property-based tests for fanlog using proptest

use fanlog::prelude::*;
use proptest::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Results),
        Just(Level::Demo),
        Just(Level::Debug),
        Just(Level::All),
    ]
}

fn any_mask() -> impl Strategy<Value = LevelMask> {
    proptest::collection::vec(any_level(), 0..4).prop_map(|levels| {
        levels
            .into_iter()
            .fold(LevelMask::NONE, |mask, level| mask | level)
    })
}

proptest! {
    /// Level string conversions roundtrip.
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        let as_str = level.to_str();
        let parsed: Level = as_str.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Mask intersection mirrors raw bit arithmetic.
    #[test]
    fn test_mask_intersection_matches_bits(level in any_level(), mask in any_mask()) {
        prop_assert_eq!(
            mask.intersects(level.mask()),
            mask.bits() & level.bits() != 0
        );
    }

    /// A message is delivered iff the logger's level intersects the filter.
    #[test]
    fn test_emit_iff_level_intersects_filter(level in any_level(), mask in any_mask()) {
        let sink = Arc::new(MemorySink::new());
        let filter = LevelFilter::new(mask);
        let logger = SyncLogger::builder()
            .level(level)
            .filter(filter)
            .prefix("")
            .sink(sink.clone())
            .build_sync();

        logger.post("probe");

        let expected = mask.bits() & level.bits() != 0;
        prop_assert_eq!(sink.len() == 1, expected);
        prop_assert_eq!(logger.metrics().messages_posted() == 1, expected);
        prop_assert_eq!(logger.metrics().messages_filtered() == 1, !expected);
    }

    /// Decoration composes prefix + body + suffix without mutating the body.
    #[test]
    fn test_decoration_shape(
        prefix in "[ -~]{0,16}",
        body in "[ -~]{0,64}",
        suffix in "[ -~]{0,16}",
    ) {
        let sink = Arc::new(MemorySink::new());
        let logger = SyncLogger::builder()
            .level(Level::All)
            .prefix(prefix.clone())
            .suffix(suffix.clone())
            .sink(sink.clone())
            .build_sync();

        logger.post(&body);

        let entries = sink.entries();
        prop_assert_eq!(entries.len(), 1);
        prop_assert_eq!(&entries[0], &format!("{}{}{}", prefix, body, suffix));
    }

    /// A single producer's messages come out of the queued path in order.
    #[test]
    fn test_queued_fifo_order(messages in proptest::collection::vec("[ -~]{0,32}", 0..40)) {
        let sink = Arc::new(MemorySink::new());
        let logger = QueuedLogger::builder()
            .level(Level::All)
            .prefix("")
            .sink(sink.clone())
            .build_queued();

        for message in &messages {
            logger.post(message);
        }
        logger.wait();

        prop_assert_eq!(sink.entries(), messages);
    }

    /// Config JSON serialization roundtrips.
    #[test]
    fn test_config_roundtrip(
        level in any_level(),
        prefix in "[ -~]{0,16}",
        suffix in "[ -~]{0,16}",
    ) {
        let config = LoggerConfig { level, prefix, suffix };
        let json = config.to_json().unwrap();
        let back = LoggerConfig::from_json(&json).unwrap();
        prop_assert_eq!(back, config);
    }
}
