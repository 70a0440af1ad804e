fn main() {
    if let Err(err) = control::run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
