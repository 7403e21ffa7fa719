#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

pub use shackles_test_utils::init_tracing;

/// Write `contents` to a temp file ending in `suffix` (e.g. ".yaml").
pub fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

pub const LIBRARY_YAML: &str = r#"
test1:
    cmd: ls
    desc: Check for matching files.
    arg: "%(match)s"
test2:
    cmd: pwd
    help: Check the present directory.
test3:
    cmd: ls
    help: List with colour.
    args:
      - --color
      - "%(color)s"
install:
    cmd: yum install '%(pkg)s'
"#;
