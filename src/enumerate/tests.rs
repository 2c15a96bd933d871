#[cfg(test)]
mod tests {
    use crate::enumerate::list_inputs;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &std::path::Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_filters_by_substring() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "wspace_T1tttt_xsecNom_1200.root");
        touch(dir.path(), "wspace_T1tttt_xsecUp_1200.root");
        touch(dir.path(), "wspace_T1tttt_xsecNom_1500.root");

        let inputs = list_inputs(dir.path(), "xsecNom").unwrap();
        assert_eq!(
            inputs,
            vec![
                "wspace_T1tttt_xsecNom_1200.root".to_string(),
                "wspace_T1tttt_xsecNom_1500.root".to_string(),
            ]
        );
    }

    #[test]
    fn test_sorted_by_name() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "c_xsecNom");
        touch(dir.path(), "a_xsecNom");
        touch(dir.path(), "b_xsecNom");

        let inputs = list_inputs(dir.path(), "xsecNom").unwrap();
        assert_eq!(inputs, vec!["a_xsecNom", "b_xsecNom", "c_xsecNom"]);
    }

    #[test]
    fn test_does_not_descend() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("old_xsecNom")).unwrap();
        touch(&dir.path().join("old_xsecNom"), "nested_xsecNom.root");

        let inputs = list_inputs(dir.path(), "xsecNom").unwrap();
        assert_eq!(inputs, vec!["old_xsecNom"]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempdir().unwrap();
        let inputs = list_inputs(dir.path(), "xsecNom").unwrap();
        assert!(inputs.is_empty());
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = list_inputs(&missing, "xsecNom").unwrap_err();
        assert!(err.to_string().contains("Failed to list input directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_is_error() {
        use crate::DispatchError;
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        touch(dir.path(), "a_xsecNom.root");
        let raw = OsStr::from_bytes(b"ws_\xff_xsecNom.root");
        fs::write(dir.path().join(raw), b"").unwrap();

        let err = list_inputs(dir.path(), "xsecNom").unwrap_err();
        match err {
            DispatchError::NonUtf8Name { name, .. } => assert_eq!(name.as_os_str(), raw),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_outside_filter_ignored() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        touch(dir.path(), "a_xsecNom.root");
        fs::write(dir.path().join(OsStr::from_bytes(b"junk_\xff")), b"").unwrap();

        let inputs = list_inputs(dir.path(), "xsecNom").unwrap();
        assert_eq!(inputs, vec!["a_xsecNom.root"]);
    }
}
