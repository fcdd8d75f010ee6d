//! punchlist main entrypoint.

use punchlist::run;
use punchlist::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
