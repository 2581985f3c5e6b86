//! Keypad Walkthrough
//!
//! Drives the engine through the keystrokes `5 + 3 x 2 =`, showing how a
//! multiplicative operator defers the pending `+`, then divides by zero to
//! reach the error state and clears out of it.
//!
//! Run with: cargo run --example keypad_session

use abacus::{format, Engine, Event, Op};

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Keypad Walkthrough ===\n");

    let mut engine = Engine::new();
    let keys: Vec<(&str, Event)> = vec![
        ("5", Event::Digit(5)),
        ("+", Event::Operator(Op::Add)),
        ("3", Event::Digit(3)),
        ("x", Event::Operator(Op::Multiply)),
        ("2", Event::Digit(2)),
        ("=", Event::Equal),
    ];

    for (cap, event) in keys {
        engine.handle(event);
        println!(
            "  [{cap}]  {:<20}  display: {}",
            engine.state().name(),
            format::pretty(&engine.view().display),
        );
    }
    println!("\n5 + 3 x 2 folds the multiplicative run first: {}\n", engine.view().display);

    println!("Dividing the result by zero:");
    for event in [
        Event::Operator(Op::Divide),
        Event::Digit(0),
        Event::Equal,
    ] {
        engine.handle(event);
    }
    println!(
        "  state: {}, display: {}",
        engine.state().name(),
        engine.view().display,
    );

    engine.handle(Event::Clear);
    println!(
        "  after Clear: {}, display: {}",
        engine.state().name(),
        engine.view().display,
    );

    println!(
        "\n{} transitions accepted in this session",
        engine.history().records().len(),
    );

    println!("\n=== Walkthrough Complete ===");
}
