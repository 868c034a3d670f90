//! Both widgets on one shared store.
//!
//! Run with `SLICEBOX_DEVTOOLS=1 RUST_LOG=slicebox=debug` to watch every
//! transition go through the logger middleware.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use slicebox::{AppState, AppStore};

fn main() {
    env_logger::init();

    println!("=== Counter + User Profile ===\n");

    println!("1. Creating the shared app store");
    let store = AppStore::from_env(AppState::new("gabriel-jesusvix"));

    println!("\n2. Mounting both panels");
    let counter_renders = Arc::new(AtomicUsize::new(0));
    let counter_renders_clone = counter_renders.clone();
    let counter_panel = store.counter.subscribe(move |counter| {
        counter_renders_clone.fetch_add(1, Ordering::SeqCst);
        println!("   [counter] counter: {}", counter.count);
    });

    let profile_renders = Arc::new(AtomicUsize::new(0));
    let profile_renders_clone = profile_renders.clone();
    let profile_panel = store.user.subscribe(move |user| {
        profile_renders_clone.fetch_add(1, Ordering::SeqCst);
        println!("   [profile] avatar: {}", user.avatar_url());
    });

    println!("\n3. Clicking increment twice");
    store.counter.increment();
    store.counter.increment();

    println!("\n4. Saving a new username");
    store
        .user
        .try_set_username("alice")
        .expect("non-empty username");

    println!("\n5. Render counts");
    println!(
        "   counter panel: {} (untouched by the profile update)",
        counter_renders.load(Ordering::SeqCst)
    );
    println!(
        "   profile panel: {} (untouched by the increments)",
        profile_renders.load(Ordering::SeqCst)
    );

    println!("\n6. Final state: {:?}", store.state());

    drop(counter_panel);
    drop(profile_panel);
    println!("\n✓ Example complete!");
}
