mod fail_when_a_file_is_missing;
mod fall_back_when_input_exceeds_limits;
mod show_added_rows_for_appended_lines;
mod show_unified_diff_for_changed_value;
