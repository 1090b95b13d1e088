fn main() {
    if let Err(e) = symlens_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
