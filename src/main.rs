//! prayergraph main entrypoint.

use prayergraph::run;
use prayergraph::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
