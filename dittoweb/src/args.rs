use clap::Parser;
use ditto_core::apps::App;

pub fn parse_args() -> Args {
    Args::parse()
}

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(
        short,
        long,
        help = "Specify a port to serve the site on. If not specified, a random unused port is chosen."
    )]
    pub port: Option<u16>,

    #[arg(
        short,
        long,
        default_value = "false",
        help = "Whether to automatically open the website in the browser."
    )]
    pub auto_open: bool,

    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = App::ALL.map(|app| app.installed_name()),
        help = "Comma-separated list of installed applications, e.g. 'ditto.flickr,ditto.twitter'. \
        Only the 'ditto.*' apps Ditto knows about appear in the navigation bar."
    )]
    pub apps: Vec<String>,

    #[arg(
        long,
        default_value = "false",
        help = "Run without the Ditto context processor. Pages then get no list of enabled apps \
        and the navigation bar shows a configuration warning instead."
    )]
    pub no_context_processor: bool,

    #[arg(
        long,
        default_value = "/static/",
        help = "URL prefix that static assets such as the stylesheet are served under."
    )]
    pub static_prefix: String,
}
