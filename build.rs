//! Build script for the `aperi-show-items` packaging artefacts.
//!
//! Writes the man page (rendered by clap-mangen) and the desktop entry that
//! registers the binary as the `x-scheme-handler/aperi-show-items` handler
//! into the build output directory.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_mangen::Man;

#[path = "src/cli/mod.rs"]
mod cli;

use cli::Cli;

const BIN_NAME: &str = "aperi-show-items";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = std::io::stdout();
    writeln!(stdout, "cargo:rerun-if-changed=build.rs")?;
    writeln!(stdout, "cargo:rerun-if-changed=src/cli/mod.rs")?;

    let out_dir =
        PathBuf::from(env::var_os("OUT_DIR").ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR was not set")
        })?);

    write_man_page(&out_dir)?;
    write_desktop_entry(&out_dir)?;
    Ok(())
}

fn write_man_page(out_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut buffer = Vec::new();
    Man::new(Cli::command()).render(&mut buffer)?;
    fs::write(out_dir.join(format!("{BIN_NAME}.1")), buffer)?;
    Ok(())
}

fn write_desktop_entry(out_dir: &Path) -> std::io::Result<()> {
    let entry = format!(
        "[Desktop Entry]\n\
         Type=Application\n\
         Name=Show Items\n\
         Comment=Open a terminal beside a file and copy its name\n\
         Exec={BIN_NAME} %u\n\
         NoDisplay=true\n\
         Terminal=false\n\
         MimeType=x-scheme-handler/{BIN_NAME};\n"
    );
    fs::write(out_dir.join(format!("{BIN_NAME}.desktop")), entry)
}
