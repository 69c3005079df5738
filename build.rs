//! Build script for the awqat CLI.
//!
//! Copies the `.env.example` template into the local data directory so users
//! find it next to where the application looks for `.env`:
//! - Linux: `~/.local/share/awqat/.env.example`
//! - macOS: `~/Library/Application Support/awqat/.env.example`
//! - Windows: `%LOCALAPPDATA%/awqat/.env.example`
//!
//! A missing template or an unwritable data directory only produces a cargo
//! warning.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    if let Err(e) = copy_template(&env_example_path) {
        println!("cargo:warning=cannot copy .env.example: {}", e);
    }

    Ok(())
}

fn copy_template(template: &Path) -> std::io::Result<()> {
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("awqat");
    fs::create_dir_all(&out_dir)?;

    let contents = fs::read_to_string(template)?;
    fs::write(out_dir.join(".env.example"), contents)
}
