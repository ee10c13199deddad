use std::process;

fn main() {
    if let Err(e) = maquette::cli::main() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
