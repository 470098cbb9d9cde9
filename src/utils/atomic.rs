//! # 原子写入工具
//!
//! 先写入同目录下的临时文件，同步到磁盘后 rename 覆盖目标文件。
//! 任一步骤失败时目标文件保持原样，临时文件随 `NamedTempFile` 析构删除。
//! 目标是符号链接时写入链接指向的文件，链接本身保持不变。
//!
//! ## 依赖关系
//! - 被 `engine/replacer.rs` 使用
//! - 使用 `tempfile` crate

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// 原子写入字节内容
pub fn write_atomic(path: &Path, content: &[u8]) -> io::Result<()> {
    write_atomic_with(path, |file| file.write_all(content))
}

/// 原子写入，由回调负责向临时文件写入内容
pub fn write_atomic_with<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let target = resolve_target(path)?;
    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".rebrand-")
        .suffix(".tmp")
        .tempfile_in(parent)?;

    write(temp.as_file_mut())?;
    temp.as_file_mut().flush()?;
    temp.as_file().sync_all()?;

    // 保留原文件权限
    if let Ok(meta) = fs::metadata(&target) {
        fs::set_permissions(temp.path(), meta.permissions())?;
    }

    temp.persist(&target).map_err(|e| e.error)?;

    #[cfg(unix)]
    File::open(parent)?.sync_all()?;

    Ok(())
}

/// 符号链接解析为最终目标；普通文件或尚不存在的路径原样返回
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(path),
        _ => Ok(path.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_write_atomic_replaces_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, "<title>CURVE</title>").unwrap();

        write_atomic(&path, b"<title>x3dental</title>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<title>x3dental</title>");
        assert_eq!(dir_entries(dir.path()), vec!["index.html".to_string()]);
    }

    #[test]
    fn test_failed_write_leaves_original_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("about.html");
        let original = b"<p>At CURVE, we care.</p>\r\n".to_vec();
        fs::write(&path, &original).unwrap();

        let result = write_atomic_with(&path, |file| {
            file.write_all(b"<p>At X3D")?;
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        });

        assert!(result.is_err());
        assert_eq!(fs::read(&path).unwrap(), original);
        assert_eq!(dir_entries(dir.path()), vec!["about.html".to_string()]);
    }

    #[test]
    fn test_write_atomic_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("new.html");

        write_atomic(&path, b"fresh").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"fresh");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_follows_symlink() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("real.txt");
        let link = dir.path().join("index.html");
        fs::write(&target, "Curve").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        write_atomic(&link, b"x3dental").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&target).unwrap(), "x3dental");
        assert_eq!(
            dir_entries(dir.path()),
            vec!["index.html".to_string(), "real.txt".to_string()]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shared.html");
        fs::write(&path, "Curve").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        write_atomic(&path, b"x3dental").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }
}
