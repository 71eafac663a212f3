use std::fs;

use tempfile::tempdir;

use conllu_splits::{CorpusReader, parse_sentences, write_sentences};

const TWO_SENTENCES: &str = "# sent_id = 1\n1\tперша\tперший\tADJ\t_\t_\t2\tamod\t_\t_\n2\tзима\tзима\tNOUN\t_\t_\t0\troot\t_\t_\n\n# sent_id = 2\n1\tдруга\tдругий\tADJ\t_\t_\t0\troot\t_\t_\n";

#[test]
fn trailing_blank_line_does_not_change_sentence_count() {
    let plain = tempdir().unwrap();
    let trailing = tempdir().unwrap();
    fs::write(plain.path().join("corpus.conllu"), TWO_SENTENCES.trim_end()).unwrap();
    fs::write(
        trailing.path().join("corpus.conllu"),
        format!("{TWO_SENTENCES}\n"),
    )
    .unwrap();

    let plain_corpus = CorpusReader::new(plain.path()).read().unwrap();
    let trailing_corpus = CorpusReader::new(trailing.path()).read().unwrap();
    assert_eq!(plain_corpus.len(), 2);
    assert_eq!(plain_corpus.sentences, trailing_corpus.sentences);
}

#[test]
fn single_sentence_file_contributes_exactly_one_sentence() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("one.conllu"),
        "# sent_id = only\n1\tслово\tслово\tNOUN\t_\t_\t0\troot\t_\t_\n",
    )
    .unwrap();

    let corpus = CorpusReader::new(dir.path()).read().unwrap();
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.files.len(), 1);
    assert_eq!(corpus.files[0].sentences, 1);
}

#[test]
fn written_output_reads_back_as_the_same_sequence() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("corpus.conllu"), TWO_SENTENCES).unwrap();
    let corpus = CorpusReader::new(dir.path()).read().unwrap();

    let out_path = dir.path().join("rewritten.conllu");
    write_sentences(&corpus.sentences, &out_path).unwrap();

    let reparsed = parse_sentences(&fs::read_to_string(&out_path).unwrap());
    assert_eq!(reparsed, corpus.sentences);
}

#[test]
fn written_output_uses_single_separators_and_no_trailing_blank() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("corpus.conllu"), TWO_SENTENCES).unwrap();
    let corpus = CorpusReader::new(dir.path()).read().unwrap();

    let out_path = dir.path().join("rewritten.conllu");
    write_sentences(&corpus.sentences, &out_path).unwrap();
    let written = fs::read_to_string(&out_path).unwrap();

    assert!(!written.contains("\n\n\n"), "double separator emitted");
    assert!(written.ends_with('\n'), "last line must keep its terminator");
    assert!(!written.ends_with("\n\n"), "no blank line after the last sentence");
}

#[test]
fn comments_stay_interleaved_in_original_positions() {
    let dir = tempdir().unwrap();
    let text = "# newdoc id = doc1\n# sent_id = 1\n1\tа\n\n# sent_id = 2\n# text = б\n1\tб\n";
    fs::write(dir.path().join("corpus.conllu"), text).unwrap();

    let corpus = CorpusReader::new(dir.path()).read().unwrap();
    assert_eq!(corpus.len(), 2);
    assert_eq!(
        corpus.sentences[0].lines,
        vec!["# newdoc id = doc1", "# sent_id = 1", "1\tа"]
    );
    assert_eq!(
        corpus.sentences[1].lines,
        vec!["# sent_id = 2", "# text = б", "1\tб"]
    );
}
