use crate::output::PreviewResult;
use comfy_table::{Cell, Color, ColumnConstraint, ContentArrangement, Table, Width};
use nu_ansi_term::Color::{Cyan, Green};
use std::io::{self, IsTerminal, Write};

/// How a dry run is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    Table,
    Summary,
    None,
}

impl std::str::FromStr for Preview {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "summary" => Ok(Self::Summary),
            "none" => Ok(Self::None),
            _ => Err(format!("Invalid preview format: {}", s)),
        }
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color_with_detector<F>(use_color: Option<bool>, is_terminal: F) -> bool
where
    F: Fn() -> bool,
{
    match use_color {
        Some(explicit_color) => explicit_color,
        None => is_terminal(),
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color(use_color: Option<bool>) -> bool {
    should_use_color_with_detector(use_color, || io::stdout().is_terminal())
}

/// Render the planned renames in the specified format
pub fn render_preview(result: &PreviewResult, format: Preview, use_color: Option<bool>) -> String {
    render_preview_with_fixed_width(result, format, use_color, false)
}

pub fn render_preview_with_fixed_width(
    result: &PreviewResult,
    format: Preview,
    use_color: Option<bool>,
    fixed_width: bool,
) -> String {
    let use_color = should_use_color(use_color);

    match format {
        Preview::Table => render_table(result, use_color, fixed_width),
        Preview::Summary => render_summary(result, use_color),
        Preview::None => String::new(),
    }
}

/// Render planned renames as a table with optional fixed column widths
pub fn render_table(result: &PreviewResult, use_color: bool, fixed_table_width: bool) -> String {
    let mut table = Table::new();

    // Fixed widths keep output stable for tests and non-TTY consumers.
    if fixed_table_width || !io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Disabled);
        table.set_constraints(vec![
            ColumnConstraint::Absolute(Width::Fixed(60)), // File
            ColumnConstraint::Absolute(Width::Fixed(60)), // New Path
        ]);
    } else {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    }

    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("File").fg(Color::Cyan),
            Cell::new("New Path").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["File", "New Path"]);
    }

    for rename in &result.renames {
        let from = rename.path.display().to_string();
        let to = rename.new_path.display().to_string();
        if use_color {
            table.add_row(vec![Cell::new(&from), Cell::new(&to).fg(Color::Green)]);
        } else {
            table.add_row(vec![&from, &to]);
        }
    }

    format!("{table}\n{} files\n", result.total)
}

/// Render planned renames as plain old -> new lines
pub fn render_summary(result: &PreviewResult, use_color: bool) -> String {
    let mut output = String::new();

    if use_color {
        output.push_str(&format!("{}\n", Cyan.paint("[PREVIEW]")));
    } else {
        output.push_str("[PREVIEW]\n");
    }
    output.push_str(&format!("Files: {}\n", result.total));

    for rename in &result.renames {
        let from = rename.path.display().to_string();
        let to = rename.new_path.display().to_string();
        if use_color {
            output.push_str(&format!("{} -> {}\n", from, Green.paint(to)));
        } else {
            output.push_str(&format!("{} -> {}\n", from, to));
        }
    }

    output
}

/// Write a preview to stdout
pub fn write_preview(
    result: &PreviewResult,
    format: Preview,
    use_color: Option<bool>,
) -> anyhow::Result<()> {
    let output = render_preview(result, format, use_color);
    let mut stdout = io::stdout();
    write!(stdout, "{}", output)?;
    stdout.flush()?;
    Ok(())
}
