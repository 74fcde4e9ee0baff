//! Structural checks on the source and test trees

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    // Entry points and module organization files carry no logic of their own
    fn is_glue(path: &Path) -> bool {
        matches!(
            path.file_name().and_then(|name| name.to_str()),
            Some("main.rs" | "lib.rs" | "mod.rs")
        )
    }

    fn rust_files(dir: &Path) -> Result<Vec<PathBuf>, io::Error> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                files.extend(rust_files(&path)?);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                files.push(path);
            }
        }
        Ok(files)
    }

    fn relative_logic_files(root: &Path) -> Result<BTreeSet<PathBuf>, io::Error> {
        Ok(rust_files(root)?
            .into_iter()
            .filter(|path| !is_glue(path))
            .filter_map(|path| path.strip_prefix(root).ok().map(Path::to_path_buf))
            .collect())
    }

    #[test]
    fn test_src_and_unit_trees_mirror_each_other() -> Result<(), io::Error> {
        let src = relative_logic_files(Path::new("src"))?;
        let unit = relative_logic_files(Path::new("tests/unit"))?;

        let missing: Vec<_> = src.difference(&unit).collect();
        assert!(
            missing.is_empty(),
            "src files without a tests/unit counterpart: {missing:?}"
        );

        let orphaned: Vec<_> = unit.difference(&src).collect();
        assert!(
            orphaned.is_empty(),
            "tests/unit files without a src counterpart: {orphaned:?}"
        );
        Ok(())
    }

    #[test]
    fn test_all_test_files_contain_tests() -> Result<(), io::Error> {
        let mut files_without_tests = Vec::new();
        for path in rust_files(Path::new("tests"))? {
            if is_glue(&path) {
                continue;
            }
            if !fs::read_to_string(&path)?.contains("#[test]") {
                files_without_tests.push(path);
            }
        }

        assert!(
            files_without_tests.is_empty(),
            "test files without any #[test] functions: {files_without_tests:?}"
        );
        Ok(())
    }
}
