//! Walk simulation: feed a synthetic accelerometer stream through a session
//! and watch gait lock, step events, and the idle unlock.
//!
//! Run with `cargo run --example walk_simulation`.

use step_sensing::{AccelSample, DetectorConfig, GaitPhase, SensorProbe, StepSession};

struct SimulatedSensor;

impl SensorProbe for SimulatedSensor {
    fn is_available(&self) -> bool {
        true
    }
    fn permission_granted(&self) -> bool {
        true
    }
}

fn main() {
    env_logger::init();

    println!("=== Step Sensing Engine: Walk Simulation ===\n");

    let mut session = StepSession::new(DetectorConfig::default());
    session.start(&SimulatedSensor).expect("simulated sensor ready");

    // Phase 1: walking, a heel strike every 500 ms.
    println!("-- walking for 6 seconds --");
    feed_phase(&mut session, 0, 6000, Some(500));
    report(&session);

    // Phase 2: standing still, long enough for the idle unlock.
    println!("\n-- standing still for 4 seconds --");
    feed_phase(&mut session, 6000, 10_000, None);
    report(&session);

    // Phase 3: running, a strike every 250 ms.
    println!("\n-- running for 4 seconds --");
    feed_phase(&mut session, 10_000, 14_000, Some(250));
    report(&session);

    session.stop();
    println!("\nfinal step count: {}", session.step_count());
}

/// Emit 20 Hz samples in [from, to), with an impact at every `stride` ms.
fn feed_phase(session: &mut StepSession, from: u64, to: u64, stride: Option<u64>) {
    let mut t = from;
    while t < to {
        let magnitude = match stride {
            Some(stride) if t > from && (t - from) % stride == 0 => 1.7,
            _ => 0.05,
        };
        let sample = AccelSample::new(t, 0.0, 0.0, magnitude);
        if let Ok(Some(event)) = session.process_sample(&sample) {
            println!(
                "  step at t={}ms (cadence {:.2} Hz)",
                event.timestamp_ms, event.cadence_hz
            );
        }
        t += 50;
    }
}

fn report(session: &StepSession) {
    let phase = match session.gait_phase() {
        GaitPhase::Locked => "locked",
        GaitPhase::Unlocked => "unlocked",
    };
    println!("  steps: {}, gait: {}", session.step_count(), phase);
}
