use std::sync::Arc;

use mapnav::{JsonFileSink, LatLng, MapStore, MapView, NavOutcome, ViewOptions};

/// Stand-in for a real map widget: prints every recenter it receives.
struct PrintlnView;

impl MapView for PrintlnView {
    fn set_view(&self, center: LatLng, zoom: f64, options: ViewOptions) -> mapnav::Result<()> {
        println!(
            "   view -> ({:.5}, {:.5}) at zoom {} (animate: {})",
            center.lat, center.lng, zoom, options.animate
        );
        Ok(())
    }
}

/// Example of driving the navigation core without any UI
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("🗺️ mapnav Headless Example");
    println!("==========================");

    let store = MapStore::new();

    println!("✅ Store created:");
    println!("   Basemap: {}", store.selected_basemap_descriptor().label);
    println!("   Fixed zoom: {}", store.zoom());
    println!("   Registered entries:");
    for entry in store.all_entries() {
        println!(
            "   📍 {:<14} ({:.5}, {:.5})",
            entry.name, entry.center.lat, entry.center.lng
        );
    }

    // A click that arrives before the map widget has initialized is
    // deferred once; the widget shows up inside the delay window.
    println!("\n🚀 Navigating before the map view is ready:");
    let outcome = store.navigate_to("taiwan")?;
    if let NavOutcome::Deferred(handle) = outcome {
        println!("   navigation deferred, installing the view...");
        store.set_map_handle(Arc::new(PrintlnView));
        handle.wait().await;
    }

    println!("\n🎯 Navigating with the view installed:");
    for id in ["japan", "usa", "france"] {
        match store.navigate_to(id)? {
            NavOutcome::Recentered => {}
            NavOutcome::Deferred(_) => println!("   unexpected deferral for {}", id),
        }
    }

    // Distances come along for free with the coordinate type
    if let (Some(paris), Some(berlin)) = (store.find_by_id("france"), store.find_by_id("germany")) {
        println!(
            "\n📏 {} to {}: {:.0} km",
            paris.name,
            berlin.name,
            paris.center.distance_to(&berlin.center) / 1000.0
        );
    }

    // Basemap selection is validated against the configured set
    println!("\n🗺️ Basemap selection:");
    match store.set_selected_basemap("watercolor") {
        Ok(()) => println!("   selected watercolor"),
        Err(err) => println!("   rejected: {}", err),
    }
    println!("   still selected: {}", store.selected_basemap());

    // Session state survives restarts through a sink
    let sink = JsonFileSink::new(std::env::temp_dir().join("mapnav-demo-session.json"));
    store.save_session(&sink)?;
    println!("\n💾 Session saved to {}", sink.path().display());

    Ok(())
}
