use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use seedable_core::pool::{unique_pool, ITERATION_CAP};
use seedable_core::SeedableRandom;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

#[derive(Clone, Default)]
struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn count_warnings<R>(f: impl FnOnce() -> R) -> (R, usize) {
    let counter = WarnCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, counter.0.load(Ordering::SeqCst))
}

#[test]
fn constant_factory_warns_once_and_returns_partial_pool() {
    let calls = AtomicUsize::new(0);
    let (pool, warnings) = count_warnings(|| {
        unique_pool(
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                1
            },
            5,
            true,
        )
    });
    assert_eq!(pool, vec![1]);
    assert_eq!(warnings, 1);
    assert_eq!(calls.load(Ordering::SeqCst), ITERATION_CAP + 2);
}

#[test]
fn small_output_space_fills_what_it_can() {
    let (pool, warnings) = count_warnings(|| {
        let mut rng = SeedableRandom::new(Some("coin"));
        rng.pool(|rng| rng.next_f64() < 0.5, 4, true)
    });
    assert_eq!(pool.len(), 2);
    assert!(pool.contains(&true) && pool.contains(&false));
    assert_eq!(warnings, 1);
}

#[test]
fn complete_pool_is_silent() {
    let (pool, warnings) = count_warnings(|| {
        let mut rng = SeedableRandom::new(Some("digits"));
        rng.pool(|rng| rng.fixed_alphabet_string(6), 20, true)
    });
    assert_eq!(pool.len(), 20);
    assert_eq!(warnings, 0);
}

#[test]
fn huge_length_over_small_space_ends_at_cap() {
    let (pool, warnings) = count_warnings(|| {
        let mut rng = SeedableRandom::new(Some("coin"));
        rng.pool(|rng| rng.next_f64() < 0.5, usize::MAX / 2, true)
    });
    assert_eq!(pool.len(), 2);
    assert_eq!(warnings, 1);
}

#[test]
fn fallible_factory_error_is_not_a_cap_warning() {
    let calls = AtomicUsize::new(0);
    let (result, warnings) = count_warnings(|| {
        let mut rng = SeedableRandom::new(Some("fail"));
        rng.try_pool(
            |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                Err::<u8, _>("no candidates")
            },
            5,
            true,
        )
    });
    assert_eq!(result, Err("no candidates"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(warnings, 0);
}
