#[cfg(test)]
mod tests {
    use crate::DispatchError;
    use crate::script::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn template() -> ScriptTemplate {
        ScriptTemplate::new("./run/scan_point.exe", "/data/wspaces/", "limits_")
    }

    #[test]
    fn test_command_line_format() {
        let line = template().command_line("wspace_xsecNom_1200.root", 7);
        assert_eq!(
            line,
            "./run/scan_point.exe -f /data/wspaces/wspace_xsecNom_1200.root >> limits_7.txt"
        );
    }

    #[test]
    fn test_input_path_single_separator() {
        let with_slash = ScriptTemplate::new("x", "/data/", "l_");
        let without = ScriptTemplate::new("x", "/data", "l_");
        assert_eq!(with_slash.input_path("a.root"), "/data/a.root");
        assert_eq!(without.input_path("a.root"), "/data/a.root");
        assert_eq!(ScriptTemplate::new("x", "/", "l_").input_path("a"), "/a");
        assert_eq!(ScriptTemplate::new("x", "", "l_").input_path("a"), "a");
    }

    #[test]
    fn test_write_script_lines() {
        let dir = tempdir().unwrap();
        let run_dir = dir.path().join("batch_jobs");
        let mut writer = ScriptWriter::new(&run_dir, "wspace_sig_", template());

        writer.open_new(3).unwrap();
        writer.append_line("a_xsecNom.root").unwrap();
        writer.append_line("b_xsecNom.root").unwrap();
        let script = writer.close().unwrap();

        assert_eq!(script.index, 3);
        assert_eq!(script.path, run_dir.join("wspace_sig_3.sh"));
        assert_eq!(script.line_count, 3);
        assert_eq!(script.file_count(), 2);

        let contents = fs::read_to_string(&script.path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), script.line_count);
        assert_eq!(lines[0], SCRIPT_HEADER);
        assert_eq!(
            lines[1],
            "./run/scan_point.exe -f /data/wspaces/a_xsecNom.root >> limits_3.txt"
        );
        assert_eq!(
            lines[2],
            "./run/scan_point.exe -f /data/wspaces/b_xsecNom.root >> limits_3.txt"
        );
    }

    #[test]
    fn test_creates_missing_run_dir() {
        let dir = tempdir().unwrap();
        let run_dir = dir.path().join("nested").join("batch_jobs");
        let mut writer = ScriptWriter::new(&run_dir, "wspace_sig_", template());

        writer.open_new(1).unwrap();
        writer.close().unwrap();
        assert!(run_dir.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_script_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let mut writer = ScriptWriter::new(dir.path(), "wspace_sig_", template());
        writer.open_new(1).unwrap();
        writer.append_line("a").unwrap();
        let script = writer.close().unwrap();

        let mode = fs::metadata(&script.path).unwrap().permissions().mode();
        assert_ne!(mode & 0o100, 0);
    }

    #[test]
    fn test_open_new_closes_previous() {
        let dir = tempdir().unwrap();
        let mut writer = ScriptWriter::new(dir.path(), "wspace_sig_", template());

        assert!(writer.open_new(1).unwrap().is_none());
        writer.append_line("a").unwrap();
        let previous = writer.open_new(2).unwrap().expect("first script closed");
        assert_eq!(previous.index, 1);
        assert_eq!(previous.line_count, 2);
        assert!(writer.is_open());

        let second = writer.close().unwrap();
        assert_eq!(second.index, 2);
        assert_eq!(second.line_count, 1);
        assert!(!writer.is_open());
    }

    #[test]
    fn test_append_without_open_script() {
        let dir = tempdir().unwrap();
        let mut writer = ScriptWriter::new(dir.path(), "wspace_sig_", template());
        let err = writer.append_line("a").unwrap_err();
        assert!(matches!(err, DispatchError::NoOpenScript));
        assert!(matches!(writer.close(), Err(DispatchError::NoOpenScript)));
    }

    #[test]
    fn test_submission_path() {
        let relative = GeneratedScript {
            index: 1,
            path: PathBuf::from("batch_jobs/wspace_sig_1.sh"),
            line_count: 2,
        };
        assert_eq!(relative.submission_path(), "./batch_jobs/wspace_sig_1.sh");

        let dotted = GeneratedScript {
            path: PathBuf::from("./batch_jobs/wspace_sig_1.sh"),
            ..relative.clone()
        };
        assert_eq!(dotted.submission_path(), "./batch_jobs/wspace_sig_1.sh");

        let absolute = GeneratedScript {
            path: PathBuf::from("/tmp/batch_jobs/wspace_sig_1.sh"),
            ..relative
        };
        assert_eq!(absolute.submission_path(), "/tmp/batch_jobs/wspace_sig_1.sh");
    }
}
