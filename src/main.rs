#[macro_use]
extern crate log;

mod cli;
mod config;
mod gateways;

fn main() {
    if let Err(err) = cli::run() {
        error!("{err}");
        std::process::exit(1);
    }
}
