use migprep::utils::{absolutize, bytes_to_mb, expand_tilde, relative_path_string};
use std::path::{Path, PathBuf};

#[test]
fn test_expand_tilde_uses_home_directory() {
    let Some(home) = dirs::home_dir() else {
        return;
    };

    assert_eq!(expand_tilde("~").unwrap(), home);
    assert_eq!(expand_tilde("~/projects").unwrap(), home.join("projects"));
}

#[test]
fn test_expand_tilde_leaves_other_paths_alone() {
    assert_eq!(expand_tilde("/srv/data").unwrap(), PathBuf::from("/srv/data"));
    assert_eq!(expand_tilde("relative/~dir").unwrap(), PathBuf::from("relative/~dir"));
    assert_eq!(expand_tilde("~other").unwrap(), PathBuf::from("~other"));
}

#[test]
fn test_absolutize_folds_dot_components() {
    let path = absolutize(Path::new("/mnt/backup/./2024/../latest")).unwrap();
    assert_eq!(path, PathBuf::from("/mnt/backup/latest"));

    let relative = absolutize(Path::new("out")).unwrap();
    assert!(relative.is_absolute());
    assert!(relative.ends_with("out"));
}

#[test]
fn test_relative_path_string_uses_forward_slashes() {
    let root = Path::new("/home/user");
    assert_eq!(
        relative_path_string(&root.join(".config").join("nvim"), root),
        ".config/nvim"
    );
    assert_eq!(relative_path_string(root, root), "");
}

#[test]
fn test_bytes_to_mb() {
    assert_eq!(bytes_to_mb(0), 0.0);
    assert_eq!(bytes_to_mb(1024 * 1024), 1.0);
}
