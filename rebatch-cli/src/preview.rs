use anyhow::Result;
use rebatch_core::{
    preview_operation, render_preview_with_fixed_width, Config, OutputFormat, OutputFormatter,
    Preview,
};
use std::path::PathBuf;
use std::str::FromStr;

use crate::cli::{PreviewArg, RuleArgs};

pub fn handle_preview(
    files: Vec<PathBuf>,
    rule_args: &RuleArgs,
    preview: Option<PreviewArg>,
    fixed_table_width: bool,
    output: OutputFormat,
    config: &Config,
    use_color: bool,
) -> Result<()> {
    let rules = rule_args.to_rules();
    let result = preview_operation(files, &rules)?;

    match output {
        OutputFormat::Json => {
            print!("{}", result.format_json());
        },
        OutputFormat::Summary => {
            // CLI arg wins, then the config default, then a table.
            let format = preview.map(Into::into).unwrap_or_else(|| {
                Preview::from_str(&config.defaults.preview_format).unwrap_or(Preview::Table)
            });
            print!(
                "{}",
                render_preview_with_fixed_width(
                    &result,
                    format,
                    Some(use_color),
                    fixed_table_width
                )
            );
        },
    }

    Ok(())
}
