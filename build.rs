//! Build script for the Plex command-line utility.
//!
//! Copies the `.env.example` configuration template next to the location where
//! the application looks for its `.env` file, so users find a ready-to-edit
//! example of the `PLEX_*` settings after installation.

use std::{env, fs, io, path::PathBuf};

/// Copies `.env.example` into the local data directory.
///
/// # Destination Location
///
/// - Linux: `~/.local/share/plexcli/.env.example`
/// - macOS: `~/Library/Application Support/plexcli/.env.example`
/// - Windows: `%LOCALAPPDATA%/plexcli/.env.example`
///
/// A missing template or a data directory that cannot be written (read-only
/// home, sandboxed builds) only produces a cargo warning; the build itself
/// never fails because of it.
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

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("plexcli");

    if let Err(e) = copy_template(&env_example_path, &out_dir) {
        println!(
            "cargo:warning=cannot copy .env.example to {}: {}",
            out_dir.display(),
            e
        );
    }

    Ok(())
}

fn copy_template(source: &PathBuf, out_dir: &PathBuf) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let contents = fs::read_to_string(source)?;
    fs::write(out_dir.join(".env.example"), contents)
}
