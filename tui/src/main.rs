mod args;
mod style;
mod tui;

fn main() {
    env_logger::init();
    let args = args::Args::parse().unwrap_or_else(|e| e.exit());
    if let Err(e) = args.run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
