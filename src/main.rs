fn main() {
    env_logger::init();
    if let Err(err) = pagetext::main() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
