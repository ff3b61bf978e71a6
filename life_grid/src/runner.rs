// runner.rs - Periodic async driver for a simulation session

use log::debug;
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};

use crate::sim::{Renderer, Simulation};

/// Create the stop-signal pair for [`run`]. Flip the sender to `true` to
/// end the loop; the receiver side is handed to the driver.
pub fn stop_signal() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}

/// Drive `sim` at its fixed cadence until `stop` flips to `true` (or its
/// sender is dropped).
///
/// Exactly one tick is ever in flight: each generation is scanned and
/// committed synchronously before the next interval is awaited, and the
/// stop signal only lands at the await point between ticks. A tick that
/// has started always runs to completion.
pub async fn run<R: Renderer>(
    sim: &mut Simulation,
    renderer: &mut R,
    mut stop: watch::Receiver<bool>,
) {
    sim.start();

    let mut ticker = time::interval(sim.interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // interval() completes immediately on its first tick; consume it so
    // the first generation lands one full interval after start.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                sim.step(renderer);
            }
            changed = stop.changed() => {
                if changed.is_err() || *stop.borrow() {
                    break;
                }
            }
        }
    }

    sim.stop();
    debug!("[Runner] loop ended at generation {}", sim.generation());
}
