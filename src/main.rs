use std::process;

fn main() {
    if let Err(e) = parley::cli::main() {
        eprintln!("{e}");
        process::exit(1);
    }
}
