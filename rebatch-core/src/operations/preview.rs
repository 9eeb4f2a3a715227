use super::parse_entries;
use crate::name_builder::build_file_name;
use crate::output::{PlannedRename, PreviewResult};
use crate::rules::RenameRules;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Preview operation - derive every target name without touching the
/// filesystem. Fails on the first file whose keep pattern matches nothing,
/// naming that file, exactly as a real run would.
pub fn preview_operation(paths: Vec<PathBuf>, rules: &RenameRules) -> Result<PreviewResult> {
    let files = parse_entries(paths)?;
    let compiled = rules.compile().context("invalid rule configuration")?;

    let mut renames = Vec::with_capacity(files.len());
    for entry in &files {
        let new_name = build_file_name(&entry.stem, &entry.extension, &compiled)
            .with_context(|| format!("cannot derive a name for `{}`", entry.path.display()))?;
        renames.push(PlannedRename {
            path: entry.path.clone(),
            new_path: entry.target_path(&new_name),
        });
    }

    Ok(PreviewResult {
        total: renames.len(),
        renames,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_derives_names_without_fs_access() {
        // None of these files exist; preview must not care.
        let rules = RenameRules {
            postfix: "_edited".to_string(),
            ..Default::default()
        };
        let result = preview_operation(
            vec![PathBuf::from("photo.png"), PathBuf::from("trip.jpg")],
            &rules,
        )
        .unwrap();

        assert_eq!(result.total, 2);
        assert_eq!(result.renames[0].new_path, PathBuf::from("photo_edited.png"));
        assert_eq!(result.renames[1].new_path, PathBuf::from("trip_edited.jpg"));
    }

    #[test]
    fn test_preview_keeps_directories() {
        let rules = RenameRules {
            prefix: "x_".to_string(),
            ..Default::default()
        };
        let result =
            preview_operation(vec![PathBuf::from("/data/in/report.txt")], &rules).unwrap();
        assert_eq!(
            result.renames[0].new_path,
            PathBuf::from("/data/in/x_report.txt")
        );
    }

    #[test]
    fn test_preview_allows_empty_rules() {
        let result =
            preview_operation(vec![PathBuf::from("photo.png")], &RenameRules::default()).unwrap();
        assert_eq!(result.renames[0].new_path, PathBuf::from("photo.png"));
    }

    #[test]
    fn test_preview_reports_the_offending_file() {
        let rules = RenameRules {
            keep_pattern: "final.*".to_string(),
            ..Default::default()
        };
        let err = preview_operation(
            vec![
                PathBuf::from("report_final.txt"),
                PathBuf::from("notes.txt"),
            ],
            &rules,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("notes.txt"));
    }

    #[test]
    fn test_preview_rejects_invalid_pattern() {
        let rules = RenameRules {
            keep_pattern: "([".to_string(),
            ..Default::default()
        };
        let err = preview_operation(vec![PathBuf::from("a.txt")], &rules).unwrap_err();
        assert!(format!("{err:#}").contains("invalid rule configuration"));
    }
}
