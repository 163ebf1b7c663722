use std::fs;
use std::path::Path;

use diskview_scan::{DirectoryScanner, EntryKind, EntrySize, TreeWalker};
use tempfile::TempDir;

/// Build a tree with many sibling subdirectories of varying depth.
fn create_wide_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("top.bin"), vec![1u8; 333]).unwrap();
    for i in 0..12 {
        let mut dir = root.join(format!("d{i:02}"));
        fs::create_dir(&dir).unwrap();
        for depth in 0..(i % 4) {
            fs::write(dir.join(format!("f{depth}")), vec![0u8; (i + 1) * (depth + 1) * 10]).unwrap();
            dir = dir.join(format!("level{depth}"));
            fs::create_dir(&dir).unwrap();
        }
        fs::write(dir.join("leaf"), vec![0u8; i * 7]).unwrap();
    }

    temp
}

fn manual_total(path: &Path) -> u64 {
    let mut total = 0;
    for entry in fs::read_dir(path).unwrap() {
        let entry = entry.unwrap();
        let file_type = entry.file_type().unwrap();
        if file_type.is_dir() {
            total += manual_total(&entry.path());
        } else if file_type.is_file() {
            total += entry.metadata().unwrap().len();
        }
    }
    total
}

#[tokio::test]
async fn test_directory_sizes_match_recursive_sum() {
    let temp = create_wide_tree();

    for limit in [None, Some(1), Some(3)] {
        let listing = DirectoryScanner::with_limit(limit).scan(temp.path()).await.unwrap();

        for entry in listing.entries.iter().filter(|e| e.kind == EntryKind::Directory) {
            assert_eq!(
                entry.size,
                EntrySize::Known(manual_total(&entry.full_path)),
                "size mismatch for {} with limit {limit:?}",
                entry.name
            );
        }
    }
}

#[tokio::test]
async fn test_listing_sum_matches_walker() {
    let temp = create_wide_tree();
    let listing = DirectoryScanner::new().scan(temp.path()).await.unwrap();
    let walked = TreeWalker::new().walk(temp.path());

    assert_eq!(listing.total_bytes(), walked.bytes);
    assert_eq!(walked.bytes, manual_total(temp.path()));
}

#[tokio::test]
async fn test_listing_is_sorted_descending() {
    let temp = create_wide_tree();
    let listing = DirectoryScanner::new().scan(temp.path()).await.unwrap();

    assert_eq!(listing.entries.len(), 13);
    for pair in listing.entries.windows(2) {
        assert!(pair[0].size.rank() >= pair[1].size.rank());
    }
}

#[tokio::test]
async fn test_rescan_is_deterministic() {
    let temp = create_wide_tree();
    let scanner = DirectoryScanner::new();

    let first = scanner.scan(temp.path()).await.unwrap();
    let second = scanner.scan(temp.path()).await.unwrap();

    assert_eq!(first.entries, second.entries);
}

#[tokio::test]
async fn test_entries_carry_absolute_paths() {
    let temp = create_wide_tree();
    let listing = DirectoryScanner::new().scan(temp.path()).await.unwrap();

    for entry in &listing.entries {
        assert_eq!(entry.parent_path, temp.path());
        assert_eq!(entry.full_path, temp.path().join(entry.name.as_str()));
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_non_utf8_directory_is_sized() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = TempDir::new().unwrap();
    let raw = temp.path().join(OsStr::from_bytes(b"bad\xff"));
    fs::create_dir(&raw).unwrap();
    fs::write(raw.join("data"), vec![0u8; 100]).unwrap();

    let listing = DirectoryScanner::new().scan(temp.path()).await.unwrap();

    assert_eq!(listing.entries.len(), 1);
    assert_eq!(listing.entries[0].full_path, raw);
    assert_eq!(listing.entries[0].size, EntrySize::Known(100));
    assert!(listing.warnings.is_empty());
}

#[cfg(unix)]
#[tokio::test]
async fn test_unreadable_subtree_reported() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let top = temp.path().join("top");
    fs::create_dir_all(top.join("open")).unwrap();
    fs::create_dir(top.join("locked")).unwrap();
    fs::write(top.join("y"), vec![0u8; 60]).unwrap();
    fs::write(top.join("open/x"), vec![0u8; 40]).unwrap();
    fs::write(top.join("locked/z"), vec![0u8; 1000]).unwrap();

    let locked = top.join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    let readable = fs::read_dir(&locked).is_ok();

    let result = DirectoryScanner::new().scan(temp.path()).await;
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    if readable {
        return;
    }

    let listing = result.unwrap();
    assert_eq!(listing.entries[0].size, EntrySize::Known(100));
    assert_eq!(listing.warnings.len(), 1);
    assert_eq!(listing.warnings[0].path, locked);
}
