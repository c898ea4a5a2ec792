use cookieless_analytics::{
    beacon::BeaconClient,
    configuration::get_configuration,
    telemetry::{get_subscriber, init_subscriber},
};

/// One beacon run, the CLI stand-in for a page load: send the payload, then
/// (when enabled) fetch the summary and print the stats fragment to stdout
/// for the embedding page to drop into its `analytics-data` container.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // logs go to stderr so stdout stays a clean HTML pipe
    let subscriber = get_subscriber("beacon".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");
    let client = BeaconClient::new(configuration.beacon.collector_url.clone());

    let payload = BeaconClient::collect(&configuration.beacon);
    // a failed send is logged but doesn't stop the stats render; the page
    // script behaves the same way
    if let Err(e) = client.send(&payload).await {
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "Failed to send telemetry"
        );
    } else {
        tracing::info!("Telemetry sent");
    }

    if configuration.beacon.render_stats {
        let fragment = client.fetch_and_render_stats().await;
        println!("{fragment}");
    }

    Ok(())
}
