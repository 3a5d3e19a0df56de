use colored::Colorize;
use roastery::api::{CmdMessage, MessageLevel};
use roastery::config::RoasteryConfig;
use roastery::error::{Result, RoasteryError};
use roastery::list_view::{DisplayRow, COLUMN_HEADERS};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const COLUMN_GAP: &str = "  ";
const TASTE_COLUMN: usize = 4;
const MIN_TASTE_WIDTH: usize = 10;
const NUMERIC_COLUMNS: [usize; 3] = [0, 5, 6];

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_error(error: &RoasteryError) {
    let text = error.to_string();
    if error.is_user_error() {
        eprintln!("{}", text.yellow());
    } else {
        eprintln!("{}", text.red());
    }
}

pub(super) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(super) fn print_config(config: &RoasteryConfig) {
    for key in RoasteryConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

pub(super) fn print_rows(rows: &[DisplayRow]) {
    if rows.is_empty() {
        println!("No products found.");
        return;
    }
    let width = console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(LINE_WIDTH);

    let grid = format_grid(rows, width);
    println!("{}", grid.header.bold());
    println!("{}", grid.separator.dimmed());
    for (n, line) in grid.lines.iter().enumerate() {
        let number = format!("{:>3}.", n + 1);
        println!("{} {}", number.yellow(), line);
    }
}

struct Grid {
    header: String,
    separator: String,
    lines: Vec<String>,
}

// The row-number gutter printed in front of each line ("  1. ").
const GUTTER: usize = 5;

fn format_grid(rows: &[DisplayRow], max_width: usize) -> Grid {
    let cells: Vec<[String; 7]> = rows.iter().map(DisplayRow::cells).collect();

    let mut widths: Vec<usize> = COLUMN_HEADERS.iter().map(|h| h.width()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let total: usize =
        widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1) + GUTTER;
    if total > max_width {
        let excess = total - max_width;
        widths[TASTE_COLUMN] = widths[TASTE_COLUMN]
            .saturating_sub(excess)
            .max(MIN_TASTE_WIDTH);
    }

    let header_cells: Vec<String> = COLUMN_HEADERS.iter().map(|h| h.to_string()).collect();
    let header = format!("{}{}", " ".repeat(GUTTER), join_cells(&header_cells, &widths));
    let separator = format!(
        "{}{}",
        " ".repeat(GUTTER),
        "─".repeat(widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1))
    );
    let lines = cells
        .iter()
        .map(|row| join_cells(row.as_slice(), &widths))
        .collect();

    Grid {
        header,
        separator,
        lines,
    }
}

fn join_cells(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &width))| {
            let text = truncate_to_width(cell, width);
            let padding = " ".repeat(width.saturating_sub(text.width()));
            if NUMERIC_COLUMNS.contains(&i) {
                format!("{}{}", padding, text)
            } else {
                format!("{}{}", text, padding)
            }
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
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
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, taste: &str) -> DisplayRow {
        DisplayRow {
            id,
            variety: "Kenya AA".into(),
            roast_degree: "Medium",
            ground_or_bean: "Whole Bean",
            taste_description: taste.into(),
            price: "450".into(),
            package_volume: "250".into(),
        }
    }

    #[test]
    fn columns_line_up_under_headers() {
        let grid = format_grid(&[row(1, "Bright, citrus"), row(12, "Jammy")], 200);
        assert!(grid.header.contains("ID  Variety   Roast   Ground/Bean  Taste"));
        assert_eq!(
            grid.lines[0],
            " 1  Kenya AA  Medium  Whole Bean   Bright, citrus    450     250"
        );
        assert_eq!(
            grid.lines[1],
            "12  Kenya AA  Medium  Whole Bean   Jammy             450     250"
        );
    }

    #[test]
    fn long_taste_is_truncated_to_fit() {
        let long = "very ".repeat(40);
        let grid = format_grid(&[row(1, &long)], 80);
        assert!(grid.lines[0].contains('…'));
        assert!(grid.lines[0].width() + GUTTER <= 80);
    }

    #[test]
    fn truncate_respects_wide_chars() {
        assert_eq!(truncate_to_width("コーヒー豆", 6), "コー…");
        assert_eq!(truncate_to_width("short", 10), "short");
    }
}
