use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};
use treescribe::output::{self, OutputFormat};
use treescribe::{FileContent, ScribeBuilder, ScribeError, normalize_root, scribe, walk};
fn add_file(root: &Path, path: &str, content: &str) -> PathBuf {
    let full_path = root.join(path);
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&full_path, content).unwrap();
    full_path
}
fn root_name(dir: &TempDir) -> String {
    format!("{}/", dir.path().file_name().unwrap().to_string_lossy())
}
fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().into_owned())
        .collect()
}
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    add_file(dir.path(), "main.rs", "fn main() {}");
    add_file(dir.path(), "src/lib.rs", "pub fn test() {}\n");
    let options = ScribeBuilder::new(dir.path()).build();
    let result = scribe(&options).unwrap();
    assert_eq!(
        result.tree,
        vec![
            root_name(&dir),
            "├── main.rs".to_string(),
            "└── src/".to_string(),
            "    └── lib.rs".to_string(),
        ]
    );
    assert_eq!(result.files.len(), 2);
    assert_eq!(
        result.files[0].content,
        FileContent::Text("fn main() {}".into())
    );
    let out_path = dir.path().join("report.txt");
    output::write_result_to_file(&result, OutputFormat::Text, &out_path).unwrap();
    let written = fs::read_to_string(&out_path).unwrap();
    assert!(written.starts_with(&root_name(&dir)));
    assert!(written.contains("fn main() {}\n\n"));
}
#[test]
fn test_unfiltered_walk_lists_everything() {
    let dir = tempdir().unwrap();
    add_file(dir.path(), "README.md", "# readme\n");
    add_file(dir.path(), "src/main.rs", "");
    add_file(dir.path(), "src/inner/mod.rs", "");
    add_file(dir.path(), "docs/guide.md", "");
    fs::create_dir(dir.path().join("empty")).unwrap();
    let listing = walk(&ScribeBuilder::new(dir.path()).build()).unwrap();
    let directories = 4;
    let files = 4;
    assert_eq!(listing.lines.len(), 1 + directories + files);
    assert_eq!(
        relative(dir.path(), &listing.files),
        vec!["README.md", "docs/guide.md", "src/inner/mod.rs", "src/main.rs"]
    );
}
#[test]
fn test_sibling_order_and_connectors() {
    let dir = tempdir().unwrap();
    add_file(dir.path(), "b", "");
    add_file(dir.path(), "a/y", "");
    add_file(dir.path(), "a/x/deep", "");
    add_file(dir.path(), "C", "");
    let listing = walk(&ScribeBuilder::new(dir.path()).build()).unwrap();
    let expected = format!(
        "{}\n├── C\n├── a/\n│   ├── x/\n│   │   └── deep\n│   └── y\n└── b",
        root_name(&dir)
    );
    assert_eq!(listing.lines.join("\n"), expected);
    assert_eq!(
        relative(dir.path(), &listing.files),
        vec!["C", "a/x/deep", "a/y", "b"]
    );
}
#[test]
fn test_excluded_directory_prunes_subtree() {
    let dir = tempdir().unwrap();
    add_file(dir.path(), "keep.rs", "");
    add_file(dir.path(), "build/out.rs", "");
    add_file(dir.path(), "build/nested/more.rs", "");
    add_file(dir.path(), "target", "a file, not a directory");
    let options = ScribeBuilder::new(dir.path())
        .exclude("build/")
        .exclude("target/")
        .build();
    let listing = walk(&options).unwrap();
    assert_eq!(relative(dir.path(), &listing.files), vec!["keep.rs", "target"]);
    assert!(listing.lines[1..].iter().all(|line| !line.contains("build")));
    assert!(listing.lines[1..].iter().all(|line| !line.contains("out.rs")));
}
#[test]
fn test_general_exclude_matches_directories_too() {
    let dir = tempdir().unwrap();
    add_file(dir.path(), "node_modules/pkg/index.js", "");
    add_file(dir.path(), "app.js", "");
    add_file(dir.path(), "debug.log", "");
    let options = ScribeBuilder::new(dir.path())
        .ignore_patterns(vec!["node_modules".into(), "*.log".into()])
        .build();
    let listing = walk(&options).unwrap();
    assert_eq!(listing.lines, vec![root_name(&dir), "└── app.js".to_string()]);
}
#[test]
fn test_file_include_keeps_all_directories() {
    let dir = tempdir().unwrap();
    add_file(dir.path(), "a.txt", "a");
    add_file(dir.path(), "b.py", "b");
    add_file(dir.path(), "d/c.txt", "c");
    add_file(dir.path(), "e/only.py", "");
    let options = ScribeBuilder::new(dir.path()).include("*.txt").build();
    let listing = walk(&options).unwrap();
    assert_eq!(relative(dir.path(), &listing.files), vec!["a.txt", "d/c.txt"]);
    assert_eq!(
        listing.lines[1..],
        ["├── a.txt", "├── d/", "│   └── c.txt", "└── e/"]
    );
}
#[test]
fn test_directory_only_include_drops_files() {
    let dir = tempdir().unwrap();
    add_file(dir.path(), "top.txt", "");
    add_file(dir.path(), "src/main.rs", "");
    add_file(dir.path(), "docs/guide.md", "");
    let options = ScribeBuilder::new(dir.path()).include("src/").build();
    let listing = walk(&options).unwrap();
    assert_eq!(listing.lines, vec![root_name(&dir), "└── src/".to_string()]);
    assert!(listing.files.is_empty());
}
#[test]
fn test_ignore_wins_over_include() {
    let dir = tempdir().unwrap();
    add_file(dir.path(), "notes.txt", "");
    add_file(dir.path(), "secret.txt", "");
    let options = ScribeBuilder::new(dir.path())
        .include("*.txt")
        .exclude("secret.txt")
        .build();
    let listing = walk(&options).unwrap();
    assert_eq!(relative(dir.path(), &listing.files), vec!["notes.txt"]);
}
#[test]
fn test_root_validation() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");
    let err = walk(&ScribeBuilder::new(&missing).build()).unwrap_err();
    assert!(matches!(err, ScribeError::RootNotFound(ref p) if *p == missing));
    let file = add_file(dir.path(), "plain.txt", "");
    let err = walk(&ScribeBuilder::new(&file).build()).unwrap_err();
    assert!(matches!(err, ScribeError::NotADirectory(ref p) if *p == file));
}
#[test]
fn test_invalid_pattern_fails_before_walking() {
    let dir = tempdir().unwrap();
    let options = ScribeBuilder::new(dir.path()).exclude("[z-a]").build();
    assert!(matches!(walk(&options), Err(ScribeError::Pattern { .. })));
}
#[test]
fn test_root_line_uses_normalized_name() {
    let dir = tempdir().unwrap();
    add_file(dir.path(), "sub/inner.txt", "");
    add_file(dir.path(), "f.txt", "");
    let dotted = dir.path().join("sub").join("..").join(".");
    let listing = walk(&ScribeBuilder::new(&dotted).build()).unwrap();
    assert_eq!(listing.lines[0], root_name(&dir));
    assert_eq!(
        listing.files,
        vec![dir.path().join("f.txt"), dir.path().join("sub/inner.txt")]
    );
    let listing = walk(&ScribeBuilder::new(dir.path().join("sub/.")).build()).unwrap();
    assert_eq!(listing.lines, vec!["sub/".to_string(), "└── inner.txt".to_string()]);
}
#[test]
fn test_relative_root_shows_directory_name() {
    let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let crate_name = format!("{}/", crate_dir.file_name().unwrap().to_string_lossy());
    for root in [".", "./", "tests/..", "tests/../."] {
        let options = ScribeBuilder::new(root).exclude("*").build();
        let listing = walk(&options).unwrap();
        assert_eq!(listing.lines, vec![crate_name.clone()], "root {root:?}");
    }
    let listing = walk(&ScribeBuilder::new("tests").exclude("*").build()).unwrap();
    assert_eq!(listing.lines, vec!["tests/".to_string()]);
    assert_eq!(normalize_root(Path::new("tests/..")).unwrap(), crate_dir);
}
#[test]
fn test_trailing_newline_handling() {
    let dir = tempdir().unwrap();
    let with_newline = add_file(dir.path(), "nl.txt", "abc\n");
    let without_newline = add_file(dir.path(), "no_nl.txt", "abc");
    let result = scribe(&ScribeBuilder::new(dir.path()).build()).unwrap();
    let dashes = "-".repeat(50);
    let expected = format!(
        "\n\n{}\n\n{}\nabc\n\n{dashes}\n\n{}\nabc\n\n{dashes}\n\n",
        "=".repeat(50),
        with_newline.display(),
        without_newline.display(),
    );
    assert_eq!(output::format_contents(&result), expected);
}
#[test]
fn test_unreadable_content_is_inlined() {
    let dir = tempdir().unwrap();
    let binary = dir.path().join("blob.bin");
    fs::write(&binary, [0xff, 0xfe, 0x00, 0x80]).unwrap();
    add_file(dir.path(), "z.txt", "after\n");
    let result = scribe(&ScribeBuilder::new(dir.path()).build()).unwrap();
    assert!(matches!(result.files[0].content, FileContent::Unreadable(_)));
    let contents = output::format_contents(&result);
    assert!(contents.contains(&format!("{}\n[Error reading file: ", binary.display())));
    assert!(contents.contains("after\n"));
}
#[cfg(unix)]
#[test]
fn test_unlistable_directory_is_empty_subtree() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempdir().unwrap();
    add_file(dir.path(), "locked/hidden.txt", "");
    add_file(dir.path(), "open/visible.txt", "");
    let locked = dir.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    let readable_anyway = fs::read_dir(&locked).is_ok();
    let listing = walk(&ScribeBuilder::new(dir.path()).build());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    if readable_anyway {
        // Permission bits do not apply (running as root).
        return;
    }
    let listing = listing.unwrap();
    assert_eq!(
        listing.lines[1..],
        ["├── locked/", "└── open/", "    └── visible.txt"]
    );
    assert_eq!(relative(dir.path(), &listing.files), vec!["open/visible.txt"]);
}
