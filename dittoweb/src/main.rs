use std::{thread, time::Duration};

use anyhow::bail;
use args::{parse_args, Args};
use ditto_core::{apps::App, context_processors::Settings, urls::Urls};
use server::router;
use state::AppState;
use tracing::{debug, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

mod args;
mod asset;
mod components;
mod error;
mod server;
mod state;
mod views;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    configure_tracing();

    let args = parse_args();
    debug!("{:?}", &args);

    let state = make_state(&args)?;
    let app = router(state);

    // Bind to the requested port, or a random one, then use a background
    // thread to automatically open the correct URL in the browser. We wait
    // for a bit in the background thread to ensure axum is started up.
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port.unwrap_or(0))).await?;
    let addr = listener.local_addr()?;
    let url = format!("http://localhost:{}", addr.port());
    info!("Listening on {url}");
    if args.auto_open {
        thread::spawn(|| {
            thread::sleep(Duration::from_secs_f32(0.5));
            // Ignore any errors, this is a "nice-to-have" anyway.
            let _ = opener::open_browser(url);
        });
    }

    // We block here. Closing the browser window does
    // not shut down the app.
    axum::serve(listener, app).await?;

    Ok(())
}

fn make_state(args: &Args) -> anyhow::Result<AppState> {
    let urls = Urls::default().with_static_prefix(&args.static_prefix);
    check_static_prefix(urls.static_prefix())?;

    let settings = Settings {
        installed_apps: args.apps.clone(),
        context_processor: !args.no_context_processor,
    };
    if !settings.context_processor {
        info!("Running without the Ditto context processor");
    }

    Ok(AppState::new(settings, urls))
}

/// The static prefix becomes part of a route, so it must not contain route
/// syntax or collide with the pages the router already serves.
fn check_static_prefix(prefix: &str) -> anyhow::Result<()> {
    if prefix == "/" {
        bail!("The static prefix cannot be '/', assets would shadow the app pages");
    }

    if prefix.contains([':', '*']) {
        bail!("The static prefix {prefix:?} cannot contain ':' or '*'");
    }

    let first_segment = prefix.trim_matches('/').split('/').next().unwrap_or_default();
    if let Some(app) = App::from_slug(first_segment) {
        bail!("The static prefix {prefix:?} clashes with the {app} app's pages");
    }

    Ok(())
}

fn configure_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE) // Makes #[instrument] output something
        .with_env_filter(filter)
        .init();
}
