use std::process::ExitCode;

use cedict_txt2db::{Config, ImportError};

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(ImportError::Usage(e)) if !e.use_stderr() => e.exit(),
        Err(ImportError::Usage(e)) => {
            println!("{}", e.render());
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cedict_txt2db::run(&config) {
        Ok(summary) => {
            println!(
                "Wrote {} entries to {} ({} blank or comment lines skipped)",
                summary.entries,
                config.output.display(),
                summary.skipped_lines
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
