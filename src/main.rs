//! rPresenze main entrypoint.

use rpresenze::{init_tracing, run};
use rpresenze::ui::messages::error;

fn main() {
    init_tracing();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
