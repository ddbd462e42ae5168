use std::path::Path;

use services::PlaybookContent;

pub fn execute(path: &Path) -> anyhow::Result<()> {
    let content = PlaybookContent::load(path)?;
    println!(
        "{}: {} sections, {} questions, {} glossary terms, {} downloads",
        content.meta.title,
        content.outline.len(),
        content.questions.len(),
        content.glossary.len(),
        content.downloads.len(),
    );
    println!("Content is valid.");
    Ok(())
}
