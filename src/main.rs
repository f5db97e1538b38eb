use clap::Parser;
use contagion::runner::{run, BaseArgs};

fn main() {
    let args = BaseArgs::parse();
    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
