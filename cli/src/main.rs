//! Binary entrypoint for fontreg

fn main() {
    if let Err(err) = fontreg_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
