use std::{env, error::Error, fs, path::Path};

#[allow(dead_code)]
#[path = "src/defaults.rs"]
mod defaults;
#[path = "build/raw_config.rs"]
mod raw_config;

use raw_config::RawConfig;

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed=cfg.toml");
    println!("cargo:rerun-if-changed=build/raw_config.rs");
    println!("cargo:rerun-if-changed=src/defaults.rs");

    // Read, parse and check
    let toml_str = fs::read_to_string("cfg.toml")?;
    let raw = RawConfig::parse(&toml_str)?;

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");

    fs::write(dest_path, raw.to_rust())?;
    Ok(())
}
