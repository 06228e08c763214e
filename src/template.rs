use anyhow::{Context, Result};
use std::path::Path;

/// Starter compute shader for new projects.
///
/// Declares one tweakable float (`blue`) and a screen-sized output image, so
/// a fresh project immediately has a working control panel and preview: a
/// red/green coordinate gradient with the blue channel on the slider.
pub const DEFAULT_SHADER: &str = include_str!("../templates/default.glsl");

/// Write the default shader to `path`, creating parent directories as needed.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn seed_project(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Pass --force to overwrite it.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    std::fs::write(path, DEFAULT_SHADER)
        .with_context(|| format!("Failed to write shader: {}", path.display()))?;

    log::info!("Seeded shader project at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_is_a_compute_stage() {
        assert!(DEFAULT_SHADER.starts_with("#version 450"));
        assert!(DEFAULT_SHADER.contains("#pragma stage(compute)"));
    }

    #[test]
    fn template_declares_the_blue_input() {
        assert!(DEFAULT_SHADER
            .contains("#pragma input(float, name=blue, default=0.0, min=0.0, max=1.0)"));
        assert!(DEFAULT_SHADER.contains("float blue;"));
    }

    #[test]
    fn template_declares_the_screen_target() {
        assert!(DEFAULT_SHADER.contains("#pragma target(name=\"output_image\", screen)"));
        assert!(DEFAULT_SHADER.contains("writeonly image2D output_image;"));
        assert!(DEFAULT_SHADER.contains("imageStore(output_image, pixel_coords, color);"));
    }

    #[test]
    fn seed_writes_the_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project").join("shader.glsl");

        seed_project(&path, false).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, DEFAULT_SHADER);
    }

    #[test]
    fn seed_refuses_to_clobber_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shader.glsl");
        std::fs::write(&path, "my edits").unwrap();

        assert!(seed_project(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "my edits");

        seed_project(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_SHADER);
    }
}
