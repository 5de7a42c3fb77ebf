fn main() {
    if let Err(e) = jsonclean::cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
