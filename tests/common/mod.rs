#![allow(dead_code)]

use article_search::{Article, Author, Category};

pub fn detlef() -> Author {
    Author::new("detlef", "Detlef Zeiler")
}

pub fn julian() -> Author {
    Author::new("julian", "Julian Zeiler")
}

pub fn techzap() -> Category {
    Category::new("techzap", "TechZap")
}

pub fn geschichte() -> Category {
    Category::new("geschichte", "Geschichte")
}

pub fn deutsch() -> Category {
    Category::new("deutsch", "Deutsch")
}

/// A small corpus modelled on the site's content.
pub fn sample_corpus() -> Vec<Article> {
    vec![
        Article::new("linux-shell", "Linux Shell Grundlagen", detlef(), techzap())
            .with_excerpt("Die wichtigsten Befehle der Bash")
            .with_content("Mit der Shell lassen sich Dateien unter Linux schnell verwalten.")
            .with_tags(["Linux", "Shell", "Bash"]),
        Article::new("linux-server", "Einen Server aufsetzen", detlef(), techzap())
            .with_excerpt("Schritt für Schritt zum eigenen Linux Server")
            .with_content("Ein Server braucht ein stabiles Betriebssystem.")
            .with_tags(["Linux", "Server"]),
        Article::new("roemer", "Römische Geschichte", julian(), geschichte())
            .with_excerpt("Vom Dorf am Tiber zum Weltreich")
            .with_content("Die Geschichte Roms beginnt der Sage nach im Jahr 753 vor Christus.")
            .with_tags(["Antike", "Rom"]),
        Article::new("mittelalter", "Das Mittelalter", julian(), geschichte())
            .with_excerpt("Burgen, Klöster und Städte")
            .with_content("Die Geschichte des Mittelalters umfasst rund tausend Jahre.")
            .with_tags(["Mittelalter"]),
        Article::new("grammatik", "Deutsche Grammatik", detlef(), deutsch())
            .with_excerpt("Regeln für Kommas und Satzbau")
            .with_content("Grammatik ist das Fundament jeder Sprache, auch unter Linux-Nutzern.")
            .with_tags(["Grammatik", "Sprache"]),
    ]
}

pub fn titled(id: &str, title: &str) -> Article {
    Article::new(id, title, detlef(), techzap())
}
