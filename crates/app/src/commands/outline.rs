use services::PlaybookServices;

pub fn execute(services: &PlaybookServices) -> anyhow::Result<()> {
    let meta = services.meta();
    println!("{}", meta.title);
    if !meta.subtitle.is_empty() {
        println!("{}", meta.subtitle);
    }
    let details: Vec<&str> = [&meta.read_time, &meta.difficulty, &meta.last_updated]
        .into_iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect();
    if !details.is_empty() {
        println!("{}", details.join(" · "));
    }
    println!();

    for (i, entry) in services.reading().table_of_contents().iter().enumerate() {
        let marker = if entry.is_active { '>' } else { ' ' };
        println!("{marker} {}. {} [{}]", i + 1, entry.title, entry.id);
        for sub in &entry.subsections {
            println!("      - {sub}");
        }
    }
    Ok(())
}
