use roberta_sentiment::cli::{self, Cli};
use roberta_sentiment::output::Outcome;
use std::process::ExitCode;

fn main() -> ExitCode {
    let outcome = match Cli::try_parse_args(std::env::args_os()) {
        Ok(cli) => {
            cli::init_logging(cli::log_filter());
            let result = cli::run(&cli);
            if let Err(err) = &result {
                tracing::error!(%err, "prediction failed");
            }
            Outcome::from(result)
        }
        Err(err) => Outcome::failure(cli::usage_error(&err)),
    };

    if let Err(err) = outcome.write_to(std::io::stdout().lock()) {
        tracing::error!(%err, "failed to write result");
        return ExitCode::FAILURE;
    }
    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
