use clap::Parser;
use getdone::cli::commands::Cli;
use getdone::io::config_io::{config_path, load_config};
use getdone::io::logging::{default_log_path, init_tracing, level_for_verbosity};

fn main() {
    let cli = Cli::parse();

    let path = config_path(cli.config.as_deref());
    let mut config = match load_config(path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);

    let level = level_for_verbosity(&config.log.level, cli.verbose);
    let log_path = config.log.file.clone().unwrap_or_else(default_log_path);
    if let Err(e) = init_tracing(&level, &log_path) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = getdone::tui::run(&config) {
        tracing::error!(error = %e, "terminal UI failed");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
