use anyhow::Result;
use tempfile::TempDir;
use word_filter::{
    filter_file, run_with_settings, FilterEngine, FilterError, FilterSettings, LocalStorage,
    WordFilterPipeline,
};

fn write_list(dir: &TempDir, name: &str, content: &[u8]) -> Result<String> {
    let path = dir.path().join(name);
    std::fs::write(&path, content)?;
    Ok(path.to_string_lossy().to_string())
}

/// 驗證每一行都剛好是 5 個字元，且為輸入的有序子序列
fn assert_ordered_subsequence(input: &str, output: &str) {
    let mut candidates = input.lines().map(str::trim);
    for word in output.split('\n').filter(|w| !w.is_empty()) {
        assert_eq!(word.chars().count(), 5, "word {:?} has the wrong length", word);
        assert!(
            candidates.any(|c| c == word),
            "word {:?} is not in input order",
            word
        );
    }
}

#[tokio::test]
async fn test_filters_fruit_list_in_place() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_list(&dir, "popularity_raw.txt", b"apple\npear\ngrape\nkiwi\nmelon\n")?;

    let report = filter_file(path.clone()).await?;

    assert_eq!(std::fs::read_to_string(&path)?, "apple\ngrape\nmelon");
    assert_eq!(report.candidates, 5);
    assert_eq!(report.kept, 3);
    assert!(report.written);
    Ok(())
}

#[tokio::test]
async fn test_strips_surrounding_whitespace() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_list(&dir, "words.txt", b"  mango  \n\tlemon\t\n")?;

    filter_file(path.clone()).await?;

    assert_eq!(std::fs::read_to_string(&path)?, "mango\nlemon");
    Ok(())
}

#[tokio::test]
async fn test_empty_file_stays_empty() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_list(&dir, "words.txt", b"")?;

    let report = filter_file(path.clone()).await?;

    assert_eq!(std::fs::metadata(&path)?.len(), 0);
    assert_eq!(report.kept, 0);
    Ok(())
}

#[tokio::test]
async fn test_no_qualifying_words_truncates_to_zero_bytes() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_list(&dir, "words.txt", b"a\nfig\nbanana\n")?;

    filter_file(path.clone()).await?;

    assert_eq!(std::fs::metadata(&path)?.len(), 0);
    Ok(())
}

#[tokio::test]
async fn test_already_filtered_list_only_loses_trailing_newline() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_list(&dir, "words.txt", b"crane\nslate\nadieu\n")?;

    filter_file(path.clone()).await?;

    assert_eq!(std::fs::read_to_string(&path)?, "crane\nslate\nadieu");
    Ok(())
}

#[tokio::test]
async fn test_mixed_line_endings_and_unicode() -> Result<()> {
    let dir = TempDir::new()?;
    let input = "crème\r\ncafé\rnaïve\n  ñandú\r\n";
    let path = write_list(&dir, "words.txt", input.as_bytes())?;

    filter_file(path.clone()).await?;

    let output = std::fs::read_to_string(&path)?;
    assert_eq!(output, "crème\nnaïve\nñandú");
    Ok(())
}

#[tokio::test]
async fn test_second_run_is_a_no_op() -> Result<()> {
    let dir = TempDir::new()?;
    let input = "Apple\nat\n  berry\nberry\nwatermelon\n\nPEACH \r\n";
    let path = write_list(&dir, "words.txt", input.as_bytes())?;

    filter_file(path.clone()).await?;
    let once = std::fs::read_to_string(&path)?;
    let report = filter_file(path.clone()).await?;
    let twice = std::fs::read_to_string(&path)?;

    assert_eq!(once, "Apple\nberry\nberry\nPEACH");
    assert_eq!(once, twice);
    assert_eq!(report.discarded, 0);
    assert_ordered_subsequence(input, &once);
    Ok(())
}

#[tokio::test]
async fn test_missing_file_is_io_error() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("missing.txt");

    let err = filter_file(path.to_string_lossy().to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, FilterError::IoError(_)));
    assert_ne!(err.exit_code(), 0);
    assert!(!path.exists());
    Ok(())
}

#[tokio::test]
async fn test_invalid_utf8_leaves_file_untouched() -> Result<()> {
    let dir = TempDir::new()?;
    let content = [b'a', b'p', 0xff, b'l', b'e', b'\n'];
    let path = write_list(&dir, "words.txt", &content)?;

    let err = filter_file(path.clone()).await.unwrap_err();

    assert!(matches!(err, FilterError::DecodingError(_)));
    assert_eq!(std::fs::read(&path)?, content);
    Ok(())
}

#[tokio::test]
async fn test_separate_output_and_custom_length() -> Result<()> {
    let dir = TempDir::new()?;
    let source = write_list(&dir, "raw.txt", b"kiwi\napple\nplum\n")?;
    let destination = dir.path().join("out").join("four.txt");

    let settings = FilterSettings {
        destination: Some(destination.to_string_lossy().to_string()),
        word_length: 4,
        ..FilterSettings::in_place(source.clone())
    };
    let report = run_with_settings(settings).await?;

    assert_eq!(std::fs::read_to_string(&source)?, "kiwi\napple\nplum\n");
    assert_eq!(std::fs::read_to_string(&destination)?, "kiwi\nplum");
    assert_eq!(report.word_length, 4);
    Ok(())
}

#[tokio::test]
async fn test_atomic_write_and_dry_run() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_list(&dir, "words.txt", b"apple\npear\n")?;

    let dry = FilterSettings {
        dry_run: true,
        ..FilterSettings::in_place(path.clone())
    };
    let report = run_with_settings(dry).await?;
    assert!(!report.written);
    assert_eq!(report.kept, 1);
    assert_eq!(std::fs::read_to_string(&path)?, "apple\npear\n");

    let atomic = FilterSettings {
        atomic_write: true,
        ..FilterSettings::in_place(path.clone())
    };
    run_with_settings(atomic).await?;
    assert_eq!(std::fs::read_to_string(&path)?, "apple");
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_engine_with_local_storage_base_path() -> Result<()> {
    let dir = TempDir::new()?;
    write_list(&dir, "words.txt", b"melon\nlime\n")?;

    let storage = LocalStorage::new(dir.path().to_string_lossy().to_string());
    let pipeline = WordFilterPipeline::new(storage, FilterSettings::in_place("words.txt"));
    let report = FilterEngine::new(pipeline).run().await?;

    assert_eq!(report.kept, 1);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("words.txt"))?,
        "melon"
    );
    Ok(())
}
