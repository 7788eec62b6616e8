//! # nesthubd — nesthub daemon
//!
//! Composition root that wires the Nest integration to a provider and plays
//! the host platform's role.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging
//! - Construct the provider and the integration, run discovery
//! - Drive the poll cycle: provider-wide refresh, then snapshot every entity
//! - Handle graceful shutdown (ctrl-c)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use nesthub_adapter_nest::NestIntegration;
use nesthub_adapter_virtual::VirtualProvider;
use nesthub_app::ports::Integration;
use nesthub_domain::id::DeviceId;
use nesthub_domain::record::{Capabilities, DeviceRecord};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Provider. The virtual provider stands in for the vendor cloud; a real
    // transport would slot in behind the same port.
    let provider = Arc::new(demo_provider());

    // Integration and discovery.
    let mut integration = NestIntegration::new(Arc::clone(&provider));
    let discovered = integration.setup().await?;
    info!(entities = discovered.len(), "discovery complete");

    // Host poll loop: refresh, then read every entity.
    let mut ticker = tokio::time::interval(Duration::from_secs(config.poll.interval_secs));
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
            _ = ticker.tick() => {
                if let Err(err) = integration.refresh().await {
                    warn!(error = %err, "refresh failed");
                    continue;
                }
                for entity in integration.thermostats() {
                    match entity.snapshot() {
                        Ok(snapshot) => info!(
                            entity = %snapshot.unique_id,
                            state = %snapshot.state,
                            attributes = ?snapshot.attributes,
                            "thermostat",
                        ),
                        Err(err) => warn!(error = %err, "thermostat snapshot failed"),
                    }
                }
                for entity in integration.sensors() {
                    match entity.snapshot() {
                        Ok(snapshot) => info!(
                            entity = %snapshot.unique_id,
                            state = %snapshot.state,
                            "sensor",
                        ),
                        Err(err) => warn!(error = %err, "sensor snapshot failed"),
                    }
                }
            }
        }
    }

    integration.teardown().await?;
    Ok(())
}

/// Seed the demo vendor cloud: one thermostat mid-heating, one remote sensor.
fn demo_provider() -> VirtualProvider {
    let mut thermostat = DeviceRecord::new(
        "Living Room Thermostat",
        Capabilities {
            can_heat: true,
            can_cool: true,
            has_fan: true,
        },
    );
    thermostat.mode = Some("range".to_string());
    thermostat.current_temperature = Some(21.4);
    thermostat.target_temperature_low = Some(19.0);
    thermostat.target_temperature_high = Some(23.5);
    thermostat.current_humidity = Some(43);
    thermostat.action = "heating".to_string();

    let mut sensor = DeviceRecord::new("Bedroom Sensor", Capabilities::default());
    sensor.current_temperature = Some(18.7);

    VirtualProvider::new()
        .with_thermostat(DeviceId::from("demo-thermostat"), thermostat)
        .with_sensor(DeviceId::from("demo-sensor"), sensor)
}
