use services::PlaybookServices;

pub fn execute(services: &PlaybookServices) -> anyhow::Result<()> {
    let downloads = services.downloads();
    if downloads.is_empty() {
        println!("No downloads available.");
        return Ok(());
    }

    for d in downloads {
        println!("{} ({}, {})", d.title(), d.format(), d.size());
        if !d.description().is_empty() {
            println!("  {}", d.description());
        }
        println!("  -> {}", d.file_name());
    }
    Ok(())
}
