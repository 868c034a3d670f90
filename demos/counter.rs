//! The counter widget: a display bound to the counter slice and an
//! increment button driven from main.

use slicebox::{AppState, AppStore};

fn main() {
    env_logger::init();

    println!("=== Counter ===\n");

    println!("1. Creating the app store");
    let store = AppStore::from_env(AppState::new("gabriel-jesusvix"));

    // The display re-renders whenever the counter slice changes
    println!("\n2. Mounting the counter display");
    let display = store.counter.subscribe(|counter| {
        println!("   counter: {}", counter.count);
    });
    println!("   counter: {}", store.counter.count());

    println!("\n3. Clicking the increment button three times");
    store.counter.increment();
    store.counter.increment();
    store.counter.increment();

    println!("\n4. Final count: {}", store.counter.count());

    drop(display);
    println!("\n✓ Example complete!");
}
