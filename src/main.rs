//! Step Sensing Engine
//!
//! Demo binary: drives the detector with a synthetic walking sequence and
//! prints the resulting count. For library use, see lib.rs.

use step_sensing::{AccelSample, DetectorConfig, SensorProbe, StepSession};

struct HostSensor;

impl SensorProbe for HostSensor {
    fn is_available(&self) -> bool {
        true
    }
    fn permission_granted(&self) -> bool {
        true
    }
}

fn main() {
    env_logger::init();

    println!("Step Sensing Engine v0.1.0");

    let mut session = StepSession::new(DetectorConfig::default());
    session.start(&HostSensor).expect("probe always ready");

    // Synthetic walk: a heel strike every 500 ms over quiet samples at 10 Hz.
    let mut steps_seen = 0u32;
    for i in 0..120u64 {
        let t = i * 100;
        let magnitude = if t % 500 == 0 && t > 0 { 1.6 } else { 0.05 };
        let sample = AccelSample::new(t, 0.0, 0.0, magnitude);

        match session.process_sample(&sample) {
            Ok(Some(event)) => {
                steps_seen += 1;
                println!(
                    "step at t={}ms (interval {}ms, cadence {:.2} Hz)",
                    event.timestamp_ms, event.interval_ms, event.cadence_hz
                );
            }
            Ok(None) => {}
            Err(err) => {
                eprintln!("session failed: {err}");
                break;
            }
        }
    }

    session.stop();
    println!("events emitted: {steps_seen}");
    println!("final step count: {}", session.step_count());
    println!("gait phase at stop: {:?}", session.gait_phase());
}
