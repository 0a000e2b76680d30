use pathnest::render;
use std::fs::{self, File};
use std::io::BufReader;
use tempfile::tempdir;

#[test]
fn integration_file_to_file() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("paths.txt");
    fs::write(&input_path, "/\n/srv\n/srv/www\n/srv/www/logs\n/var\n").unwrap();
    let output_path = dir.path().join("tree.txt");

    let input = BufReader::new(File::open(&input_path).unwrap());
    let mut output = File::create(&output_path).unwrap();
    let summary = render(input, &mut output).unwrap();

    assert_eq!(summary.paths, 5);
    assert_eq!(summary.max_depth, 3);
    let want = "\
[/, name=/
  [srv, name=/srv
    [www, name=/srv/www
      [logs, name=/srv/www/logs]
    ]
  ]
  [var, name=/var]
]
";
    assert_eq!(fs::read_to_string(&output_path).unwrap(), want);
}

#[test]
fn integration_missing_trailing_newline() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("paths.txt");
    fs::write(&input_path, "/\n/etc").unwrap();

    let input = BufReader::new(File::open(&input_path).unwrap());
    let mut output = Vec::new();
    let summary = render(input, &mut output).unwrap();

    assert_eq!(summary.paths, 2);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "[/, name=/\n  [etc, name=/etc]\n]\n"
    );
}
