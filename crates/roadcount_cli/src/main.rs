//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roadcount_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use roadcount_core::{
    build_export_record, format_elapsed, SessionConfig, SurveySession, VehicleClass,
};

fn main() {
    // Tiny scripted session to validate core wiring independently from
    // the Flutter/FFI runtime setup.
    println!("roadcount_core ping={}", roadcount_core::ping());
    println!("roadcount_core version={}", roadcount_core::core_version());

    let mut session = SurveySession::new(SessionConfig::default());
    session.record(VehicleClass::Bus);
    session.record(VehicleClass::Bus);
    session.record(VehicleClass::Car);
    for _ in 0..100 {
        session.tick();
    }

    println!("elapsed={}", format_elapsed(session.elapsed_ms()));
    for row in build_export_record(session.sheet()).rows() {
        println!("{}={}", row.vehicle, row.count);
    }
}
