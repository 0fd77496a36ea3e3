use clap::Parser;
use color_eyre::eyre::Result;
use registrar::{
    CompositeListener, InMemoryUserRepository, LoggingEmailClient, RegistrationListener,
    RegistrationService, Settings, User,
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Register a single user against an in-memory repository
#[derive(Debug, Parser)]
#[command(name = "registrar", version)]
struct Args {
    #[arg(long, default_value = "username")]
    username: String,

    #[arg(long, default_value = "securepassword")]
    password: String,

    #[arg(long, default_value = "email@example.com")]
    email: String,
}

/// Prints the outcome of the registration on stdout
struct PrintOutcome;

impl RegistrationListener for PrintOutcome {
    fn on_success(&self, _user: &User) {
        println!("User registered");
    }

    fn on_failure(&self) {
        println!("User registration failed");
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let settings = Settings::load()?;
    init_tracing(&settings.log.filter)?;

    let service = RegistrationService::from_settings(
        InMemoryUserRepository::new(),
        LoggingEmailClient::new(),
        &settings,
        CompositeListener::new().with(PrintOutcome),
    );

    service.register(&args.username, &args.password, &args.email);

    Ok(())
}

pub fn init_tracing(default_filter: &str) -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
