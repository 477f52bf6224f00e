use std::fs;
use std::path::Path;

use parcorpus::aligner::align;
use parcorpus::dataset::TranslationDataset;
use parcorpus::fields::FieldSpec;
use rand::Rng;
use serial_test::serial;

fn write_lines(path: &Path, lines: &[String]) {
    let content: String = lines.iter().map(|line| format!("{}\n", line)).collect();
    fs::write(path, content).unwrap();
}

/// random line: blank, whitespace only or a short sentence.
fn random_line<R: Rng>(rng: &mut R, idx: usize) -> String {
    match rng.gen_range(0..5) {
        0 => String::new(),
        1 => " \t ".to_string(),
        _ => format!("  sentence {} ", idx),
    }
}

#[test]
fn aligned_count_matches_non_blank_positions() {
    let mut rng = rand::thread_rng();
    let dir = tempfile::tempdir().unwrap();
    let prefix = dir.path().join("rand");

    for _ in 0..50 {
        let src: Vec<String> = (0..rng.gen_range(0..40))
            .map(|i| random_line(&mut rng, i))
            .collect();
        let trg: Vec<String> = (0..rng.gen_range(0..40))
            .map(|i| random_line(&mut rng, i))
            .collect();
        write_lines(&dir.path().join("rand.s"), &src);
        write_lines(&dir.path().join("rand.t"), &trg);

        let expected: Vec<(String, String)> = src
            .iter()
            .zip(trg.iter())
            .filter(|(s, t)| !s.trim().is_empty() && !t.trim().is_empty())
            .map(|(s, t)| (s.trim().to_string(), t.trim().to_string()))
            .collect();

        let records: Vec<(String, String)> = align(&prefix, (".s", ".t"))
            .unwrap()
            .into_iter()
            .map(|r| r.into_inner())
            .collect();
        assert_eq!(records, expected);
    }
}

#[test]
fn hello_world() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("toy.en"), "hello\n\nworld\n").unwrap();
    fs::write(dir.path().join("toy.fr"), "bonjour\nmonde\n\n").unwrap();

    let ds = TranslationDataset::new(
        &dir.path().join("toy"),
        (".en", ".fr"),
        FieldSpec::names_only(),
    )
    .unwrap();
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.examples()[0].source(), "hello");
    assert_eq!(ds.examples()[0].target(), "bonjour");
}

#[test]
#[serial]
fn tilde_prefix_is_expanded() {
    let home = tempfile::tempdir().unwrap();
    let old_home = std::env::var_os("HOME");
    std::env::set_var("HOME", home.path());

    fs::write(home.path().join("corpus.en"), "a\nb\n").unwrap();
    fs::write(home.path().join("corpus.de"), "x\ny\n").unwrap();
    let res = align(Path::new("~/corpus"), (".en", ".de"));

    match old_home {
        Some(h) => std::env::set_var("HOME", h),
        None => std::env::remove_var("HOME"),
    }
    assert_eq!(res.unwrap().len(), 2);
}
