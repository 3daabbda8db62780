use expense_tracker::{
    cli::{output, run_cli, Cli},
    config::Config,
    init,
};

fn main() {
    init();

    let cli = Cli::parse_args();
    let config = Config::resolve(cli.file.clone());

    // Every path prints a message and returns normally; errors never escape
    // as a crash or an unexplained exit code.
    if let Err(err) = run_cli(cli, &config) {
        output::error(err);
    }
}
