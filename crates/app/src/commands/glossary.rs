use services::{GlossaryEntry, PlaybookServices};

pub fn execute(
    services: &PlaybookServices,
    query: Option<&str>,
    letter: Option<char>,
) -> anyhow::Result<()> {
    let glossary = services.glossary();

    if let Some(letter) = letter {
        let entries = glossary.by_letter(letter);
        if entries.is_empty() {
            println!("No terms under {}.", letter.to_ascii_uppercase());
        }
        entries.iter().for_each(print_entry);
        return Ok(());
    }

    let Some(query) = query else {
        for letter in glossary.letters() {
            println!("{letter}");
            glossary.by_letter(letter).iter().for_each(print_entry);
        }
        return Ok(());
    };

    if let Some(entry) = glossary.lookup(query) {
        print_entry(entry);
        return Ok(());
    }

    let hits = glossary.search(query);
    if hits.is_empty() {
        println!("No glossary entries match {query:?}.");
    }
    hits.into_iter().for_each(print_entry);
    Ok(())
}

fn print_entry(entry: &GlossaryEntry) {
    println!("  {}: {}", entry.term, entry.definition);
}
