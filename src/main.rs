/// Entry point for the quadlet inventory tool.
///
/// Prints the pods and containers found in a podman systemd generator directory as a
/// single JSON document. Diagnostics go to standard error; verbosity is controlled via
/// `RUST_LOG`.
///
/// # Exit codes
///
/// - `0`: the inventory was written to standard output.
/// - `1`: wrong number of arguments, or a unit file could not be read.
/// - `2`: the generator directory does not exist or cannot be scanned.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug quadlet-inventory /run/systemd/generator
/// ```
fn main() {
    env_logger::init();

    let stdout = std::io::stdout();
    if let Err(err) = quadlet_inventory::run(std::env::args_os().skip(1), &mut stdout.lock()) {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}
