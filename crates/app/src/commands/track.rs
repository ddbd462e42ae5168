use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

use playbook_core::model::{SectionBoundary, SectionId, SectionOutline};
use services::PlaybookServices;

/// Where section geometry comes from.
pub enum Layout {
    /// Stacked sections of equal height below a hero area.
    Uniform { hero: f64, section_height: f64 },
    /// Measured boundaries from a TOML file.
    File(PathBuf),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LayoutFile {
    boundaries: Vec<BoundaryDraft>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BoundaryDraft {
    id: String,
    top: f64,
    height: f64,
}

impl Layout {
    fn boundaries(&self, outline: &SectionOutline) -> anyhow::Result<Vec<SectionBoundary>> {
        match self {
            Layout::Uniform {
                hero,
                section_height,
            } => Ok(outline
                .iter()
                .map(|s| {
                    #[allow(clippy::cast_precision_loss)]
                    let top = hero + section_height * s.order() as f64;
                    SectionBoundary::new(s.id().clone(), top, *section_height)
                })
                .collect()),
            Layout::File(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read layout file {}", path.display()))?;
                let file: LayoutFile = toml::from_str(&raw)
                    .with_context(|| format!("invalid layout file {}", path.display()))?;
                file.boundaries
                    .into_iter()
                    .map(|b| -> anyhow::Result<SectionBoundary> {
                        let id = SectionId::new(b.id)?;
                        Ok(SectionBoundary::new(id, b.top, b.height))
                    })
                    .collect()
            }
        }
    }
}

pub fn execute(
    services: &mut PlaybookServices,
    offsets: &[f64],
    layout: &Layout,
) -> anyhow::Result<()> {
    let boundaries = layout.boundaries(services.reading().tracker().outline())?;
    for boundary in &boundaries {
        if !services.reading().tracker().outline().contains(&boundary.id) {
            tracing::warn!(id = %boundary.id, "layout names an unknown section; ignoring it");
        }
    }

    for &offset in offsets {
        services.reading_mut().on_scroll(offset, &boundaries);
        let reading = services.reading();
        let progress = reading.progress();
        println!(
            "{offset}\t{}\t{}/{} ({}%)",
            reading.active_section_id(),
            progress.position,
            progress.total,
            progress.percent()
        );
    }
    Ok(())
}
