// Colored terminal output for the supervisor listing and vocabularies.
//
// The main.rs commands delegate here so formatting stays out of the CLI
// plumbing.

use colored::Colorize;

use crate::classify::Profile;
use crate::directory::Directory;
use crate::vocabulary::{Hierarchy, Vocabulary};

/// Display a list of supervisor profiles.
pub fn display_supervisors<'a, I>(dir: &Directory, profiles: I)
where
    I: IntoIterator<Item = (&'a String, &'a Profile)>,
{
    let profiles: Vec<(&String, &Profile)> = profiles.into_iter().collect();

    if profiles.is_empty() {
        println!("No supervisors match those filters.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== HLT Supervisors ({} of {}) ===",
            profiles.len(),
            dir.profiles.len()
        )
        .bold()
    );
    println!("{}", format!("Source: {}", dir.source_path.display()).dimmed());
    println!();

    for (name, profile) in profiles {
        display_profile(name, profile);
    }
}

/// Display a single supervisor card.
pub fn display_profile(name: &str, profile: &Profile) {
    println!("  {}", name.bold());
    if !profile.categories.is_empty() {
        println!("    {} {}", "Disciplines:".dimmed(), profile.categories.join(", ").cyan());
    }
    println!("    {} {}", "Topics: ".dimmed(), tag_list(&profile.topics).green());
    println!("    {} {}", "Methods:".dimmed(), tag_list(&profile.methods).yellow());
    println!("    {}", super::truncate_chars(&profile.info, 140).dimmed());
    println!();
}

/// Display both vocabularies as indented category trees.
pub fn display_vocabulary(vocabulary: &Vocabulary) {
    display_hierarchy("Topics", &vocabulary.topics, vocabulary.topic_keywords().len());
    display_hierarchy("Methods", &vocabulary.methods, vocabulary.method_keywords().len());
}

fn display_hierarchy(title: &str, hierarchy: &Hierarchy, distinct: usize) {
    println!(
        "\n{}",
        format!(
            "=== {title} ({} categories, {distinct} distinct keywords) ===",
            hierarchy.len()
        )
        .bold()
    );
    for category in hierarchy.categories() {
        println!("  {}", category.name.bold());
        if category.keywords.is_empty() {
            println!("      {}", "(no specific keywords)".dimmed());
        }
        for keyword in &category.keywords {
            println!("      - {keyword}");
        }
    }
}

fn tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        "-".to_string()
    } else {
        tags.join(", ")
    }
}
