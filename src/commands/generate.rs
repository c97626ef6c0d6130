//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::Folio;

/// Generate the static site into the public directory
pub fn run(folio: &Folio) -> Result<()> {
    let start = std::time::Instant::now();

    let posts = folio.posts()?;
    tracing::info!("Loaded {} posts", posts.len());

    let generator = Generator::new(folio)?;
    let written = generator.generate(&posts)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} files in {:?} ({:.2}s)",
        written,
        folio.public_dir,
        duration.as_secs_f64()
    );

    Ok(())
}
