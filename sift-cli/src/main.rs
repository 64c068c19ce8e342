mod candidates;
mod cli;
mod logging;

fn main() {
    cli::run().unwrap_or_else(|err| {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    });
}
