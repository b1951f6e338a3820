use mrbgen::{
    cli::{get_log_level_from_verbose, parse_cli, run, Commands},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();
    let log_level = get_log_level_from_verbose(cli.verbose);
    env_logger::Builder::new().filter_level(log_level).init();

    let result = match cli.command {
        Commands::Setup(args) => run(args),
    };

    if let Err(err) = result {
        default_error_handler(err);
    }
}
