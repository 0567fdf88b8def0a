//! The build script renders a man page for the binary.

use std::fs;

#[test]
fn man_page_is_rendered_into_target_dir() {
    let path = env!("NETORDER_MAN_PAGE");
    let page = fs::read_to_string(path).expect("man page was not generated");
    assert!(path.ends_with("generated-man/netorder.1"));
    assert!(page.contains("netorder"));
    assert!(page.contains("hton16"));
}

#[test]
fn man_page_follows_cargo_target_dir() {
    let Some(target_dir) = option_env!("CARGO_TARGET_DIR") else {
        return;
    };
    let path = std::path::Path::new(env!("NETORDER_MAN_PAGE"));
    let expected = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(target_dir)
        .join("generated-man")
        .join("netorder.1");
    assert_eq!(path, expected);
}
