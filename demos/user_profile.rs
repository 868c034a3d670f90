//! The user-profile panel: an avatar derived from the username and a form
//! that submits a new one.

use slicebox::{AppState, AppStore, UserState};

fn render_profile(user: &UserState) {
    let fallback = user
        .avatar_fallback()
        .map(|initial| initial.to_string())
        .unwrap_or_else(|| "?".to_string());
    println!("   avatar: {} [fallback: {}]", user.avatar_url(), fallback);
}

fn submit(store: &AppStore, username: &str) {
    match store.user.try_set_username(username) {
        Ok(()) => println!("   saved {:?}", username),
        Err(err) => println!("   rejected: {}", err),
    }
}

fn main() {
    env_logger::init();

    println!("=== User Profile ===\n");

    println!("1. Creating the app store");
    let store = AppStore::from_env(AppState::new("gabriel-jesusvix"));

    // The panel re-renders whenever the profile changes
    println!("\n2. Mounting the profile panel");
    let panel = store.user.subscribe(|user| render_profile(user));
    render_profile(&store.user.user());

    // The form field starts from the current username
    println!("\n3. Form default value: {:?}", store.user.username());

    println!("\n4. Submitting \"alice\"");
    submit(&store, "alice");

    println!("\n5. Submitting an empty username");
    submit(&store, "");

    println!("\n6. Submitting \"bob\"");
    submit(&store, "bob");

    println!("\n7. Final profile:");
    render_profile(&store.user.user());

    drop(panel);
    println!("\n✓ Example complete!");
}
