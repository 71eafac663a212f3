use std::process::ExitCode;

fn main() -> ExitCode {
    match conllu_splits::run_split_corpus(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("split_corpus failed: {err}");
            ExitCode::FAILURE
        }
    }
}
