//! Denomination Cycle
//!
//! Enters a value, then toggles the denomination three times: two exact
//! scaling steps of 10^9 and one division by 10^18, arriving back at the
//! starting value and unit.
//!
//! Run with: cargo run --example denomination_cycle

use abacus::{format, Engine, Event};

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Denomination Cycle ===\n");

    let mut engine = Engine::new();
    for event in [
        Event::Digit(1),
        Event::Decimal,
        Event::Digit(5),
    ] {
        engine.handle(event);
    }

    let view = engine.view();
    println!("  start:  {:>26}  ({})", format::pretty(&view.display), view.denomination.name());

    for _ in 0..3 {
        engine.handle(Event::ToggleDenomination);
        let view = engine.view();
        println!("  toggle: {:>26}  ({})", format::pretty(&view.display), view.denomination.name());
    }

    println!("\nThree toggles return to the original unit and value.");
    println!("\n=== Cycle Complete ===");
}
