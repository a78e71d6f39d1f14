//! Miri-compatible tests using pollster::block_on instead of tokio.
//! Tokio's IO driver uses kqueue/epoll syscalls that miri can't handle.

use barrier_protected::{barrier_protected, BarrierCell, BarrierQueue};

fn block_on<F: std::future::Future>(f: F) -> F::Output {
    pollster::block_on(f)
}

#[barrier_protected]
static LABEL: String = String::new();

#[test]
fn accessor_round_trip() {
    LABEL.set("miri".into());
    assert_eq!(LABEL.get(), "miri");
}

#[test]
fn async_shared_and_barrier() {
    static QUEUE: BarrierQueue = BarrierQueue::new("async");
    static CELL: BarrierCell<'static, Vec<u8>> = BarrierCell::new(&QUEUE, Vec::new());

    block_on(async {
        QUEUE.sync_barrier_async(&CELL, |data| data.push(1)).await;
        QUEUE.sync_barrier_async(&CELL, |data| data.push(2)).await;
        let sum: u8 = QUEUE.sync_async(&CELL, |data| data.iter().sum()).await;
        assert_eq!(sum, 3);
    });
}

#[test]
fn local_queue_and_cell() {
    let queue = BarrierQueue::new("local");
    let mut cell = BarrierCell::new(&queue, String::from("start"));

    cell.get_mut().push_str("ed");
    queue.sync_barrier(&cell, |value| value.push('!'));
    assert_eq!(queue.sync(&cell, |value| value.clone()), "started!");
    assert!(std::ptr::eq(cell.queue(), &queue));
    assert_eq!(cell.into_inner(), "started!");
}

#[test]
fn try_variants_succeed_when_idle() {
    let queue = BarrierQueue::new("idle");
    let cell = BarrierCell::new(&queue, 10u32);

    assert_eq!(queue.try_sync(&cell, |value| *value), Some(10));
    assert_eq!(
        queue.try_sync_barrier(&cell, |value| {
            *value += 1;
            *value
        }),
        Some(11)
    );
}

#[test]
fn closure_panic_releases_access() {
    let queue = BarrierQueue::new("unwind");
    let cell = BarrierCell::new(&queue, 0u32);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        queue.sync_barrier(&cell, |_| panic!("writer failed"));
    }));
    assert!(result.is_err());
    assert_eq!(queue.try_sync_barrier(&cell, |value| *value), Some(0));
}

#[test]
fn queue_debug_shows_label() {
    let queue = BarrierQueue::new("dbg");
    assert_eq!(format!("{:?}", queue), r#"BarrierQueue { label: "dbg", .. }"#);
}
