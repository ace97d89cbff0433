use assert_cmd::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn colliding_filenames_get_parent_prefixes() {
    let tmp = tempdir().unwrap();
    let vault = tmp.path().join("vault");
    let out = tmp.path().join("out");

    write_file(&vault.join("main.md"), "![a](a/image.png)\n![b](b/image.png)\n");
    write_file(&vault.join("a/image.png"), "from a");
    write_file(&vault.join("b/image.png"), "from b");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdx"));
    cmd.arg("export").arg(vault.join("main.md")).arg(&out);
    cmd.assert().success();

    assert_eq!(fs::read_to_string(out.join("a-image.png")).unwrap(), "from a");
    assert_eq!(fs::read_to_string(out.join("b-image.png")).unwrap(), "from b");
    assert!(!out.join("image.png").exists());
}
