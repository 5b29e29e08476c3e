use clap::Parser;
use vacancy_survey::utils::{logger, validation::Validate};
use vacancy_survey::{
    report, CliConfig, HeadHunterBoard, SalarySurvey, SuperJobBoard, SuperJobCredentials,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting vacancy-survey CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let credentials = match SuperJobCredentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::error!("❌ SuperJob credentials are incomplete: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    match run_surveys(&config, &credentials).await {
        Ok(()) => {
            tracing::info!("✅ Salary survey completed successfully!");
        }
        Err(e) => {
            tracing::error!("❌ Salary survey failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}

/// SuperJob first, HeadHunter second; each table prints as soon as its
/// survey finishes.
async fn run_surveys(
    config: &CliConfig,
    credentials: &SuperJobCredentials,
) -> vacancy_survey::Result<()> {
    let superjob = SuperJobBoard::authorize(config.sj_base_url.clone(), credentials).await?;
    let superjob_report = SalarySurvey::new(superjob).run().await?;
    println!("{}", report::render(&superjob_report));

    let headhunter = HeadHunterBoard::new(config.hh_base_url.clone());
    let headhunter_report = SalarySurvey::new(headhunter).run().await?;
    println!("{}", report::render(&headhunter_report));

    Ok(())
}
