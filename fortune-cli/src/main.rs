mod args;
mod rendering;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use args::{Cli, Command};
use fortune_core::{sign_by_key, sign_for_birthdate, ZODIAC_SIGNS};
use fortune_service::{
    FortuneCache, FortuneService, HttpHoroscopeSource, MemoryCacheStore, ServiceOptions, SystemClock, Trigger,
};
use rendering::{render_delivery, render_signs};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    init_tracing(cli.debug);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let delivery = match cli.command.clone() {
        Some(Command::Signs) => return render_signs(cli.json),
        Some(Command::ClearCache { sign }) => return clear_cache(&connect(&cli)?, sign.as_deref()),
        Some(Command::Check { birthdate }) => {
            let sign = sign_for_birthdate(&birthdate).map_err(|e| anyhow::format_err!("{}", e.user_message()))?;
            connect(&cli)?.deliver(sign, Trigger::Submit).await
        }
        Some(Command::Sign { key }) => {
            let sign = sign_by_key(&key).ok_or_else(|| anyhow::format_err!("Unknown sign: {}", key))?;
            connect(&cli)?.deliver(sign, Trigger::Submit).await
        }
        Some(Command::Refresh) => {
            let service = connect(&cli)?;
            let sign = service
                .cache()
                .last_sign()
                .ok_or_else(|| anyhow::format_err!("No previous sign to refresh; run `fortune check <YYYY-MM-DD>` first"))?;
            service.deliver(sign, Trigger::Refresh).await
        }
        Some(Command::Last) | None => connect(&cli)?.restore().await,
    };

    match delivery {
        Some(delivery) => render_delivery(&delivery, cli.json),
        None => Err(anyhow::format_err!(
            "No previous sign to show; run `fortune check <YYYY-MM-DD>` first"
        )),
    }
}

/// Load options, layer the flags on top and build the service.
fn connect(cli: &Cli) -> Result<FortuneService> {
    let options = cli.service_options(ServiceOptions::load().context("Failed to load configuration")?);
    debug!(?options, "resolved options");

    if cli.no_cache {
        let cache = FortuneCache::new(Box::new(MemoryCacheStore::new()), options.cache_ttl_ms);
        return Ok(FortuneService::new(
            Box::new(HttpHoroscopeSource::new(&options)),
            cache,
            Box::new(SystemClock),
        ));
    }

    FortuneService::from_options(&options).context("Failed to set up the fortune service")
}

fn clear_cache(service: &FortuneService, sign: Option<&str>) -> Result<()> {
    match sign {
        Some(key) => {
            let sign = sign_by_key(key).ok_or_else(|| anyhow::format_err!("Unknown sign: {}", key))?;
            service.cache().clear(sign);
            println!("Cleared cached fortune for {}", sign.label());
        }
        None => {
            for sign in &ZODIAC_SIGNS {
                service.cache().clear(sign);
            }
            println!("Cleared all cached fortunes");
        }
    }
    Ok(())
}

fn init_tracing(debug: bool) {
    // Initialize tracing with filter based on the debug flag
    let filter = if debug {
        "fortune=debug,fortune_core=debug,fortune_service=debug"
    } else {
        "fortune=warn,fortune_core=warn,fortune_service=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
