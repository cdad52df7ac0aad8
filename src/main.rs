fn main() {
    if let Err(err) = event_flags::run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
