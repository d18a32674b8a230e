//! aubconv main entrypoint.

use aubconv::run;
use aubconv::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
