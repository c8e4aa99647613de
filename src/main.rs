use ip_subnet_calc::config::Config;
use ip_subnet_calc::init_logging;
use ip_subnet_calc::shell::Shell;
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let config = Config::from_env();
    init_logging(&config.log_config)?;
    log::info!("#Start main() {config:?}");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), config).run()?;

    log::info!("#End main()");
    Ok(())
}
