//! Seeds the data directory with a few sample loadouts for trying out the
//! GUI.
//!
//! Run with: `cargo run -p townloader_core --example seed_loadouts`

use townloader_core::store::LoadoutStore;
use townloader_core::types::{Config, Name};

fn main() {
    let config = Config::default();
    println!("Seeding {}", config.loadouts_path().display());

    let mut store = LoadoutStore::open(&config).expect("Failed to open loadouts file");

    let samples: [(&str, &[&str]); 3] = [
        ("rifles", &["ak47+grip+flash", "m4a1+acog", "scar-h"]),
        ("smg rush", &["mp5+laser", "vector+ext"]),
        ("pistols", &["deagle", "glock+auto"]),
    ];

    for (name_str, guns) in samples {
        let name = Name::try_from(name_str).expect("Invalid loadout name");
        store
            .create_loadout(name.clone())
            .expect("Failed to create loadout");
        for gun in guns {
            store
                .add_gun(&name, gun.to_string())
                .expect("Failed to add gun");
        }
        println!("  {} ({} guns)", name_str, guns.len());
    }

    println!("\nDone: {} loadouts on disk", store.loadouts().len());
}
