//! Concurrent use of the conversion functions.
//!
//! Conversions share no mutable state, so any interleaving of calls from any
//! number of threads must produce the same results as sequential calls.

#[cfg(loom)]
mod model {
    use loom::thread;
    use netorder::{NATIVE, host_to_network_16, host_to_network_32, network_to_host_32};

    #[test]
    fn conversions_are_interleaving_independent() {
        loom::model(|| {
            let handles: Vec<_> = (0..2u16)
                .map(|offset| {
                    thread::spawn(move || {
                        let value = 0x1234 + offset;
                        (
                            host_to_network_16(value),
                            network_to_host_32(host_to_network_32(u32::from(value))),
                            NATIVE.is_little_endian(),
                        )
                    })
                })
                .collect();

            for (offset, handle) in (0..2u16).zip(handles) {
                let value = 0x1234 + offset;
                let (wire, round_trip, little) = handle.join().expect("thread panicked");
                assert_eq!(wire, value.to_be());
                assert_eq!(round_trip, u32::from(value));
                assert_eq!(little, cfg!(target_endian = "little"));
            }
        });
    }
}

#[cfg(not(loom))]
mod threads {
    use std::thread;

    use netorder::{host_to_network_16, host_to_network_32, network_to_host_16};

    #[test]
    fn parallel_threads_agree_with_sequential_results() {
        let expected: Vec<u16> = (0..=u16::MAX).map(host_to_network_16).collect();

        thread::scope(|scope| {
            for chunk in 0..8u32 {
                let expected = &expected;
                scope.spawn(move || {
                    for value in (0..=u16::MAX).filter(|v| u32::from(*v) % 8 == chunk) {
                        let wire = host_to_network_16(value);
                        assert_eq!(wire, expected[usize::from(value)]);
                        assert_eq!(network_to_host_16(wire), value);
                        let wide = (u32::from(value) << 16) | chunk;
                        assert_eq!(host_to_network_32(wide), wide.to_be());
                    }
                });
            }
        });
    }

    #[test]
    fn public_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}

        assert_send_sync::<netorder::LittleEndianOrder>();
        assert_send_sync::<netorder::BigEndianOrder>();
        assert_send_sync::<netorder::NativeOrder>();
        assert_send_sync::<netorder::Endianness>();
    }
}
