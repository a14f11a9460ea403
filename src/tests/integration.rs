#[cfg(test)]
mod integration_tests {

    use crate::{
        DAN, DEU, DictionaryLoadError, DictionaryPaths, HUN, ISL, RestoreError, Restorer,
        RestorerConfig, cache::DEFAULT_CAPACITY, remove_diacritics,
    };
    use std::io::Write;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_dict(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(body.as_bytes()).unwrap();
        path
    }

    fn hungarian(suffix_matching: bool) -> (TempDir, Restorer) {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dict(dir.path(), "hu.tsv", "kalács\t50\nkörte\t12\n");
        let mut r = Restorer::builder()
            .lang(HUN)
            .source(DictionaryPaths::new().with(HUN, path))
            .suffix_matching(suffix_matching)
            .min_stem_len(4)
            .build();
        r.initialize().unwrap();
        (dir, r)
    }

    #[test]
    fn inflected_form_with_suffix_matching() {
        let (_dir, mut r) = hungarian(true);
        assert_eq!(r.restore("kalacsot").unwrap(), "kalácsot");
        assert_eq!(r.restore("Kalacsot").unwrap(), "Kalácsot");
        assert_eq!(r.restore("KALACSOT").unwrap(), "KALÁCSOT");
    }

    #[test]
    fn inflected_form_without_suffix_matching() {
        let (_dir, mut r) = hungarian(false);
        assert_eq!(r.restore("kalacsot").unwrap(), "kalacsot");
        assert_eq!(r.restore("kalacs").unwrap(), "kalács");
    }

    #[test]
    fn german_file_round() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dict(dir.path(), "de.tsv", "Straße\t10\nstrasse\t1\n");
        let mut r = Restorer::builder()
            .lang(DEU)
            .source(DictionaryPaths::new().with(DEU, path))
            .build();
        r.initialize().unwrap();
        assert_eq!(remove_diacritics("Straße", DEU), "strasse");
        assert_eq!(r.restore("Die Strasse ist lang.").unwrap(), "Die Straße ist lang.");
    }

    #[test]
    fn missing_dictionary_is_a_hard_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut r = Restorer::builder()
            .lang(HUN)
            .source(DictionaryPaths::new().with(HUN, dir.path().join("absent.tsv")))
            .build();
        let err = r.initialize().unwrap_err();
        assert!(matches!(
            err,
            RestoreError::Load(DictionaryLoadError::NotFound { lang, .. }) if lang == HUN
        ));
        assert!(!r.is_ready());
        assert!(matches!(r.restore("kalacs"), Err(RestoreError::NotInitialized(_))));
    }

    #[test]
    fn malformed_lines_do_not_abort_loading() {
        let dir = tempfile::tempdir().unwrap();
        let body = "kalács\t50\nbroken line\nkörte\tx\nalma\t0\n\ntükör\t3\n";
        let path = write_dict(dir.path(), "hu.tsv", body);
        let mut r = Restorer::builder()
            .lang(HUN)
            .source(DictionaryPaths::new().with(HUN, path))
            .build();
        r.initialize().unwrap();
        let stats = r.load_stats().unwrap();
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.malformed, 3);
        assert_eq!(r.restore("kalacs korte tukor").unwrap(), "kalács korte tükör");
    }

    #[test]
    fn cache_never_exceeds_capacity() {
        let (_dir, mut r) = hungarian(false);
        let text: String = (0..1500)
            .map(|i| {
                let mut w = String::from("szo");
                let mut n = i;
                loop {
                    w.push((b'a' + (n % 26) as u8) as char);
                    n /= 26;
                    if n == 0 {
                        break;
                    }
                }
                w
            })
            .collect::<Vec<_>>()
            .join(" ");
        r.restore(&text).unwrap();
        assert_eq!(r.cache_len(), DEFAULT_CAPACITY);
        r.restore("kalacs").unwrap();
        assert!(r.cache_len() <= DEFAULT_CAPACITY);
    }

    #[test]
    fn language_switch_between_files() {
        let dir = tempfile::tempdir().unwrap();
        let hu = write_dict(dir.path(), "hu.tsv", "kalács\t50\n");
        let da = write_dict(dir.path(), "da.tsv", "grød\t5\nsøen\t3\n");
        let is = dir.path().join("is.tsv");
        let paths = DictionaryPaths::new()
            .with(HUN, hu)
            .with(DAN, da)
            .with(ISL, is);

        let mut r = Restorer::builder().lang(HUN).source(paths).build();
        r.initialize().unwrap();
        assert_eq!(r.restore("kalacs").unwrap(), "kalács");

        r.change_language("DAN").unwrap();
        assert_eq!(r.current_language(), DAN);
        assert_eq!(r.restore("GrOEd og soeen").unwrap(), "GrØd og søen");
        assert_eq!(r.restore("kalacs").unwrap(), "kalacs");

        // the Icelandic file does not exist; Danish stays loaded
        assert!(r.change_language("is").is_err());
        assert_eq!(r.current_language(), DAN);
        assert_eq!(r.restore("groed").unwrap(), "grød");
    }

    #[test]
    fn restorer_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dict(dir.path(), "hu.tsv", "kalács\t50\n");
        let config: RestorerConfig = serde_json::from_str(
            r#"{ "lang": "HUN", "suffix_matching": true, "ignored_words": ["kalacsban"] }"#,
        )
        .unwrap();
        let mut r = Restorer::new(config, DictionaryPaths::new().with(HUN, path));
        r.initialize().unwrap();
        assert_eq!(r.restore("kalacsot kalacsban").unwrap(), "kalácsot kalacsban");
    }

    #[test]
    fn restore_of_stripped_dictionary_words() {
        let dir = tempfile::tempdir().unwrap();
        let words = ["árvíztűrő", "tükörfúrógép", "kalács", "szőlő", "öröm"];
        let body: String = words.iter().map(|w| format!("{w}\t7\n")).collect();
        let path = write_dict(dir.path(), "hu.tsv", &body);
        let mut r = Restorer::builder()
            .lang(HUN)
            .source(DictionaryPaths::new().with(HUN, path))
            .build();
        r.initialize().unwrap();
        for w in words {
            let stripped = remove_diacritics(w, HUN);
            assert_eq!(r.restore(&stripped).unwrap(), w);
        }
    }
}
