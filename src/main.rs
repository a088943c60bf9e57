use clap::Parser;
use jot::model::TodoList;

#[derive(Parser)]
#[command(
    name = "jot",
    about = concat!("[+] jot v", env!("CARGO_PKG_VERSION"), " - scratch checklist for your terminal"),
    version
)]
struct Cli {}

fn main() {
    Cli::parse();

    if let Err(e) = jot::tui::run(TodoList::sample()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
