#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Conversions between filesystem paths and `file:` URLs
use legacy_url::{
    Error, FixedCwd, ParsedUrl, Platform, file_url_to_path, file_url_to_path_with,
    path_to_file_url, path_to_file_url_with,
};

#[cfg(unix)]
#[test]
fn test_native_posix_conversion() {
    let url = path_to_file_url("/tmp/a b.txt").unwrap();
    assert_eq!(url.pathname(), "/tmp/a%20b.txt");

    let path = file_url_to_path(&url).unwrap();
    assert_eq!(path, std::path::PathBuf::from("/tmp/a b.txt"));
}

#[cfg(unix)]
#[test]
fn test_native_relative_path_uses_working_directory() {
    let cwd = std::env::current_dir().unwrap();
    let url = path_to_file_url("some-file.txt").unwrap();
    let path = file_url_to_path(&url).unwrap();
    assert_eq!(path, cwd.join("some-file.txt"));
}

#[test]
fn test_posix_roundtrip() {
    let paths = FixedCwd::new(Platform::Posix, "/work");
    let inputs = [
        "/tmp/a b.txt",
        "/data/100%/report?.pdf",
        "/music/Sigur Rós/(Untitled) #3",
        "/tab\there",
        "/weird\\name",
        "/{braces}/<angles>/\"quotes\"",
    ];
    for input in inputs {
        let url = path_to_file_url_with(input, &paths).unwrap();
        assert!(url.href().starts_with("file:///"), "{input} -> {url}");
        assert!(!url.pathname().contains(' '), "{input} -> {url}");
        assert_eq!(file_url_to_path_with(&url, Platform::Posix).unwrap(), input);

        // Going through the legacy parser gives the same path
        let reparsed = ParsedUrl::parse(&url.href(), false, true);
        assert_eq!(file_url_to_path_with(&reparsed, Platform::Posix).unwrap(), input);
    }
}

#[test]
fn test_posix_normalization() {
    let paths = FixedCwd::new(Platform::Posix, "/work/project");
    let cases = [
        ("src/../README.md", "/work/project/README.md"),
        ("./dist/", "/work/project/dist/"),
        ("/a//b/./c/..", "/a/b"),
        ("../../../..", "/"),
    ];
    for (input, expected) in cases {
        let url = path_to_file_url_with(input, &paths).unwrap();
        assert_eq!(url.pathname(), expected, "{input}");
    }
}

#[test]
fn test_windows_conversion() {
    let paths = FixedCwd::new(Platform::Windows, "C:\\Users\\me");
    let url = path_to_file_url_with("D:\\My Files\\notes.txt", &paths).unwrap();
    assert_eq!(url.href(), "file:///D:/My%20Files/notes.txt");
    assert_eq!(
        file_url_to_path_with(&url, Platform::Windows).unwrap(),
        "D:\\My Files\\notes.txt"
    );

    let url = path_to_file_url_with("..\\shared\\", &paths).unwrap();
    assert_eq!(url.href(), "file:///C:/Users/shared/");

    let url = path_to_file_url_with("\\\\fileserver\\public\\a b", &paths).unwrap();
    assert_eq!(url.href(), "file://fileserver/public/a%20b");
    assert_eq!(
        file_url_to_path_with(&url, Platform::Windows).unwrap(),
        "\\\\fileserver\\public\\a b"
    );
}

#[test]
fn test_errors() {
    assert_eq!(
        file_url_to_path_with("https://example.com/", Platform::Posix),
        Err(Error::InvalidUrlScheme)
    );
    assert_eq!(
        file_url_to_path_with("file://host/share", Platform::Posix),
        Err(Error::InvalidFileUrlHost(Platform::Posix))
    );
    assert!(matches!(
        file_url_to_path_with("file:///a%2fb", Platform::Posix),
        Err(Error::InvalidFileUrlPath(_))
    ));
    assert!(matches!(
        file_url_to_path_with("file:///C:/a%5Cb", Platform::Windows),
        Err(Error::InvalidFileUrlPath(_))
    ));
    assert!(matches!(
        file_url_to_path_with("file:///no-drive", Platform::Windows),
        Err(Error::InvalidFileUrlPath(_))
    ));

    let paths = FixedCwd::new(Platform::Windows, "C:\\");
    assert!(matches!(
        path_to_file_url_with("\\\\server", &paths),
        Err(Error::InvalidArgValue(_))
    ));
}

#[test]
fn test_error_display() {
    let err = file_url_to_path_with("file://h/x", Platform::Windows);
    assert!(err.is_ok());

    let err = file_url_to_path_with("http://h/x", Platform::Windows).unwrap_err();
    assert_eq!(err.to_string(), "The URL must be of scheme file");
}
