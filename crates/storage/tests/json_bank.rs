use quiz_core::CategoryFilter;
use storage::{JsonQuestionBank, QuestionSource, SourceError};

const BANK: &str = r#"[
    {"question": "Largest planet?", "answers": ["Mars", "Jupiter", "Venus"], "correct": "Jupiter", "topic": "Science"},
    {"question": "Painter of the Mona Lisa?", "answers": ["Da Vinci", "Monet"], "correct": "Da Vinci", "topic": "Art"},
    {"question": "Boiling point of water in C?", "answers": ["90", "100"], "correct": "100", "topic": "Science"}
]"#;

fn write_bank(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("quiz-bank-{}-{name}.json", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn loads_bank_from_disk_and_filters_by_topic() {
    let path = write_bank("filter", BANK);
    let bank = JsonQuestionBank::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let all = bank.fetch_questions(None).await.unwrap();
    assert_eq!(all.len(), 3);

    let filter = CategoryFilter::parse("Science").unwrap();
    let science = bank.fetch_questions(Some(&filter)).await.unwrap();
    let prompts: Vec<_> = science.iter().map(|q| q.prompt()).collect();
    assert_eq!(
        prompts,
        vec!["Largest planet?", "Boiling point of water in C?"]
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("quiz-bank-does-not-exist.json");
    let err = JsonQuestionBank::from_path(path).unwrap_err();
    assert!(matches!(err, SourceError::Io(_)));
}
