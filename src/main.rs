// Entrypoint for the CLI application.
// - Keeps `main` small: create an API client and hand it to the upload flow.
// - Returns `anyhow::Result` so any fault exits non-zero with its cause chain.

use docstyle_cli::{api::ApiClient, logger, ui};

fn main() -> anyhow::Result<()> {
    logger::init();

    // Create API client configured by environment variable `API_GATEWAY_URL`
    // or default to http://localhost:3001. See `api::ApiClient::from_env`.
    let api = ApiClient::from_env()?;

    ui::run(&api)
}
