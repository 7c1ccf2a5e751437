//! Writes the static files served next to the app: `sitemap.xml`,
//! `robots.txt` and `og-image.svg`.
//!
//! Usage: `site-assets [OUT_DIR]` (defaults to `dist`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;

use sathi_web::{og_image, sitemap};

fn write(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let entries = sitemap::entries(Utc::now().date_naive());
    let written = [
        write(&out_dir, "sitemap.xml", &sitemap::to_xml(&entries))?,
        write(&out_dir, "robots.txt", &sitemap::robots_txt())?,
        write(&out_dir, "og-image.svg", &og_image::svg())?,
    ];

    for path in &written {
        println!("wrote {}", path.display());
    }
    println!("{} sitemap entries", entries.len());
    Ok(())
}
