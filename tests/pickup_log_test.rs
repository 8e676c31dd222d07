use std::sync::atomic::{AtomicUsize, Ordering};

use log::{Level, LevelFilter, Log, Metadata, Record};

use tui_drift::core::{FuelCan, GameState, MovementTuning, NullCanvas, World, WorldConfig};
use tui_drift::engine::Driver;
use tui_drift::types::{Vec2, CANVAS_HEIGHT, CANVAS_WIDTH};

struct PickupCounter;

static PICKUP_RECORDS: AtomicUsize = AtomicUsize::new(0);
static LOGGER: PickupCounter = PickupCounter;

impl Log for PickupCounter {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if record.args().to_string().contains("collected") {
            PICKUP_RECORDS.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn flush(&self) {}
}

// One test per binary: the global logger can only be installed once.
#[test]
fn each_pickup_is_logged_once() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let cans = vec![FuelCan::new(0, Vec2::ZERO)];
    let world = World::from_parts(WorldConfig::default(), Vec::new(), cans);
    let mut game = GameState::with_world(world, MovementTuning::default(), Vec2::ZERO);
    game.movement_mut().set_fuel(50.0);
    let mut driver = Driver::new(game, NullCanvas::new(CANVAS_WIDTH, CANVAS_HEIGHT));

    assert_eq!(driver.advance_one_tick().collected, 1);
    assert_eq!(driver.advance_one_tick().collected, 0);
    assert_eq!(PICKUP_RECORDS.load(Ordering::Relaxed), 1);
}
