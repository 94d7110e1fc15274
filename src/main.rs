mod access;
mod args;
mod booking;
mod clock;
mod format;
mod run;
mod slots;
mod time_slot;
mod validate;
mod window;

use tracing::Level;

fn main() -> Result<(), String> {
    let args: args::TopLevel = argh::from_env();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    run::run(args.invocation)
}
