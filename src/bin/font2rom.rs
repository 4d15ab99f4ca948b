use std::process::ExitCode;

use fontrom::Config;

fn main() -> ExitCode {
    fontrom::init_logging();
    match fontrom::generate(&Config::default()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            fontrom::report(&e);
            ExitCode::FAILURE
        }
    }
}
