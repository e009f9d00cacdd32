use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::process::ExitCode;
use subnet_calc::calculate;
use subnet_calc::cli::Opts;
use subnet_calc::config::Settings;
use subnet_calc::output::render;

fn run(opts: &Opts, settings: &Settings) -> Result<String, Box<dyn Error>> {
    let request = opts.to_request(settings)?;
    let calc = calculate(&request)?;
    render(&calc, opts.format)
}

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let settings = Settings::from_env();
    if let Err(e) = log4rs::init_file(&settings.log_config, Default::default()) {
        eprintln!("No logging: cannot load {}: {e}", settings.log_config);
    }
    let opts = Opts::parse();
    log::info!("#Start main()");

    match run(&opts, &settings) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
