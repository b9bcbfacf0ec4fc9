//! The `lexdrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    std::fs::create_dir_all("dictionaries")?;
    let path = std::path::Path::new("dictionaries/spanish.toml");
    if path.exists() {
        println!("dictionaries/spanish.toml already exists, skipping.");
    } else {
        std::fs::write(path, STARTER_DICTIONARY)?;
        println!("Created dictionaries/spanish.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit dictionaries/spanish.toml or add your own files");
    println!("  2. Run: lexdrill validate --dictionary dictionaries");
    println!("  3. Run: lexdrill practice --dictionary dictionaries/spanish.toml");

    Ok(())
}

const STARTER_DICTIONARY: &str = r#"[dictionary]
id = "spanish-basics"
name = "Spanish Basics"
language = "Spanish"
flag = "🇪🇸"

[[words]]
id = "1"
term = "Manzana"
definition = "Apple"
example = "Como una Manzana cada día."
sentence = "La ___ está roja y madura."
image = "https://images.example.net/photos/apple.jpg"

[[words]]
id = "2"
term = "Perro"
definition = "Dog"
example = "El Perro corre en el parque."
sentence = "El ___ ladra toda la noche."
image = "https://images.example.net/photos/dog.jpg"

[[words]]
id = "3"
term = "Casa"
definition = "House"
example = "Mi Casa es grande."
sentence = "Vivo en una ___ con jardín."
image = "https://images.example.net/photos/house.jpg"

[[words]]
id = "4"
term = "Sol"
definition = "Sun"
example = "El Sol brilla hoy."
sentence = "El ___ sale por el este."
image = "https://images.example.net/photos/sun.jpg"

[[words]]
id = "5"
term = "Libro"
definition = "Book"
example = "Leo un Libro cada semana."
sentence = "Este ___ tiene muchas páginas."
image = "https://images.example.net/photos/book.jpg"

[[words]]
id = "6"
term = "Agua"
definition = "Water"
example = "Bebo Agua fría."
sentence = "El ___ del río está limpia."
image = "https://images.example.net/photos/water.jpg"
"#;
