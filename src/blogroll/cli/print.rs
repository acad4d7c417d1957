use blogroll::controller::ViewSnapshot;
use blogroll::model::ALL_CATEGORY;
use blogroll::validation::FieldErrors;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const EXCERPT_INDENT: &str = "      ";

pub(crate) fn print_success(message: &str) {
    println!("{}", message.green());
}

pub(crate) fn print_warning(message: &str) {
    eprintln!("{}", message.yellow());
}

pub(crate) fn print_field_errors(errors: &FieldErrors) {
    for (field, message) in errors.iter() {
        eprintln!("{} {}", format!("{}:", field).red(), message);
    }
}

pub(crate) fn print_categories(snapshot: &ViewSnapshot) {
    for label in &snapshot.categories {
        if *label == snapshot.active_category {
            println!("* {}", label.bold());
        } else {
            println!("  {}", label);
        }
    }
}

pub(crate) fn print_listing(snapshot: &ViewSnapshot) {
    let mut filters = Vec::new();
    if snapshot.active_category != ALL_CATEGORY {
        filters.push(format!("category: {}", snapshot.active_category));
    }
    if !snapshot.search_term.is_empty() {
        filters.push(format!("search: \"{}\"", snapshot.search_term));
    }
    if !filters.is_empty() {
        println!("{}", filters.join("  ").dimmed());
    }

    if let Some(message) = snapshot.empty_message() {
        println!("{}", message);
        return;
    }

    for dp in snapshot.display_posts() {
        let idx_str = format!("{:>4}. ", dp.position + 1);
        let meta = format!(
            "{} · {} · {}",
            dp.post.category, dp.post.author, dp.post.date
        );

        let fixed_width = idx_str.width() + meta.width() + 1;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&dp.post.title, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "{}{}{} {}",
            idx_str.yellow(),
            title_display.bold(),
            " ".repeat(padding),
            meta.dimmed()
        );

        let excerpt: String = dp
            .post
            .excerpt
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        if !excerpt.is_empty() {
            let width = LINE_WIDTH.saturating_sub(EXCERPT_INDENT.len());
            println!("{}{}", EXCERPT_INDENT, truncate_to_width(&excerpt, width).dimmed());
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
