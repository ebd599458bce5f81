use env_logger::Env;
use serp_scribe::{configuration::get_configuration, startup::run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = dotenvy::dotenv() {
        log::debug!("No .env file loaded: {}", e);
    }

    let configuration = get_configuration()?;

    run(configuration)
        .await
        .inspect_err(|e| log::error!("Run aborted: {:?}", e))
}
