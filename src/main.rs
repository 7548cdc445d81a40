//! parkwatch main entrypoint.

use parkwatch::run;
use parkwatch::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
