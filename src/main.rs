//! lens-profile-gateway: serves the default Lens profile of one address.
//!
//! Parses flags (falling back to the environment and a `.env` file),
//! initializes logging, builds the GraphQL client and serves the router
//! until Ctrl-C.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use lens_gateway::clients::graphql::DEFAULT_CACHE_CAPACITY;
use lens_gateway::server::{build_router, serve, AppState};
use lens_gateway::{
    EndpointUrl, EthereumAddress, GatewayConfig, GraphqlClient, ProfileField, RequestPolicy,
};

#[derive(Parser, Debug)]
#[command(
    name = "lens-profile-gateway",
    version,
    about = "Serves the handle or picture of a Lens default profile"
)]
struct Args {
    /// Socket address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Upstream GraphQL endpoint
    #[arg(long, env = "PUBLIC_LENS_API_URL")]
    api_url: String,

    /// Address whose default profile is served
    #[arg(long, env = "PROFILE_ADDRESS")]
    address: String,

    /// Field returned by default: `handle` or `picture`
    #[arg(long, env = "PROFILE_FIELD", default_value = "handle")]
    field: String,

    /// Cache policy: cache-first, cache-only, network-only, cache-and-network
    #[arg(long, env = "REQUEST_POLICY", default_value = "cache-and-network")]
    request_policy: String,

    /// Upper bound on one upstream call, in seconds
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Number of upstream results kept in the document cache
    #[arg(long, env = "CACHE_CAPACITY", default_value_t = DEFAULT_CACHE_CAPACITY)]
    cache_capacity: usize,

    /// Send queries with GET instead of POST
    #[arg(long, env = "PREFER_GET_METHOD")]
    prefer_get: bool,

    /// Answer 404 instead of `{"handle": null}` when nothing is found
    #[arg(long, env = "STRICT_NOT_FOUND")]
    strict_not_found: bool,

    /// Accept an `address` query parameter on /profile
    #[arg(long, env = "ALLOW_ADDRESS_OVERRIDE")]
    allow_address_override: bool,
}

impl Args {
    fn into_config(self) -> anyhow::Result<GatewayConfig> {
        let config = GatewayConfig::builder()
            .endpoint(EndpointUrl::new(self.api_url).context("invalid --api-url")?)
            .address(EthereumAddress::new(self.address).context("invalid --address")?)
            .profile_field(
                self.field
                    .parse::<ProfileField>()
                    .context("invalid --field")?,
            )
            .request_policy(
                self.request_policy
                    .parse::<RequestPolicy>()
                    .context("invalid --request-policy")?,
            )
            .request_timeout(Duration::from_secs(self.timeout_secs))
            .cache_capacity(self.cache_capacity)
            .prefer_get_method(self.prefer_get)
            .strict_not_found(self.strict_not_found)
            .allow_address_override(self.allow_address_override)
            .build()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let args = Args::parse();
    let bind = args.bind;
    let config = args.into_config()?;
    info!(%bind, policy = %config.request_policy(), "starting lens-profile-gateway");

    let client = GraphqlClient::from_config(&config).context("failed to build GraphQL client")?;
    let router = build_router(AppState::new(client, config));

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    serve(listener, router).await.context("server error")?;

    info!("shutdown");
    Ok(())
}

fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
