use crate::diagnostic::Diagnostic;

// Applies a batch of fixes (sorted by position) to `contents` in one pass.
// A fix that overlaps an already-applied one is skipped; the boolean in
// the return value tells the caller to lint and fix again.
pub fn apply_fixes(diagnostics: &[Diagnostic], contents: &str) -> (bool, String) {
    let old_length = contents.len() as i64;
    let mut new_content = contents.to_string();
    let mut last_modified_pos: i64 = 0;
    let mut has_skipped_fixes = false;

    for diagnostic in diagnostics {
        let fix = &diagnostic.fix;
        if fix.to_skip {
            continue;
        }

        // Shift the pre-edit offsets by whatever the edits so far have
        // added or removed.
        let diff_length = new_content.len() as i64 - old_length;
        let start = fix.start as i64 + diff_length;
        let end = fix.end as i64 + diff_length;

        if start < last_modified_pos {
            has_skipped_fixes = true;
            continue;
        }

        let start_usize = start as usize;
        let end_usize = end as usize;

        new_content.replace_range(start_usize..end_usize, &fix.content);
        last_modified_pos = start + fix.content.len() as i64;
    }

    (has_skipped_fixes, new_content)
}
