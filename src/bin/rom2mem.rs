use std::{env::args, path::PathBuf, process::ExitCode};

fn main() -> ExitCode {
    fontrom::init_logging();
    let args: Vec<String> = args().skip(1).collect();
    let [rom, mem] = args.as_slice() else {
        eprintln!("Usage: rom2mem <rom-file> <mem-file>");
        return ExitCode::FAILURE;
    };

    match fontrom::translate(&PathBuf::from(rom), &PathBuf::from(mem)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            fontrom::report(&e);
            ExitCode::FAILURE
        }
    }
}
