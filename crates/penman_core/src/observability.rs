//! OpenTelemetry metrics initialization.
//!
//! The generation client records its counters through the global meter
//! provider. Without a provider those instruments are no-ops, so calling
//! [`init_observability`] is optional. A process that does call it must call
//! [`shutdown_observability`] before exit, or readings taken since the last
//! periodic export are lost.

#[cfg(feature = "metrics")]
use opentelemetry::{KeyValue, global};
#[cfg(feature = "metrics")]
use opentelemetry_otlp::{MetricExporter as OtlpExporter, WithExportConfig};
#[cfg(feature = "metrics")]
use opentelemetry_sdk::{
    Resource,
    metrics::{PeriodicReader, SdkMeterProvider},
};
#[cfg(feature = "metrics")]
use opentelemetry_stdout::MetricExporter as StdoutExporter;
#[cfg(feature = "metrics")]
use std::sync::OnceLock;
#[cfg(feature = "metrics")]
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Provider installed by [`init_observability`], kept so it can be flushed.
#[cfg(feature = "metrics")]
static METER_PROVIDER: OnceLock<SdkMeterProvider> = OnceLock::new();

/// Install a global meter provider exporting every `export_interval_secs`.
///
/// `OTEL_EXPORTER=otlp` selects the OTLP exporter (endpoint from
/// `OTEL_EXPORTER_OTLP_ENDPOINT`, default `http://localhost:4318`); anything
/// else exports to stdout.
///
/// When the `metrics` feature is disabled this returns `Ok(())` immediately.
#[instrument(skip_all, fields(service_name))]
pub fn init_observability(
    service_name: &'static str,
    export_interval_secs: u64,
) -> Result<(), String> {
    #[cfg(not(feature = "metrics"))]
    {
        let _ = export_interval_secs;
        info!(
            service_name = service_name,
            "Metrics feature disabled - skipping metrics initialization"
        );
        Ok(())
    }

    #[cfg(feature = "metrics")]
    {
        let resource = Resource::builder_empty()
            .with_attributes([KeyValue::new("service.name", service_name)])
            .build();
        let interval = Duration::from_secs(export_interval_secs);

        let exporter_type = std::env::var("OTEL_EXPORTER").unwrap_or_else(|_| "stdout".to_string());
        info!(exporter_type = %exporter_type, export_interval_secs, "Initializing metrics");

        let reader = match exporter_type.as_str() {
            "otlp" => {
                let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
                    .unwrap_or_else(|_| "http://localhost:4318".to_string());
                let exporter = OtlpExporter::builder()
                    .with_http()
                    .with_endpoint(&endpoint)
                    .with_timeout(Duration::from_secs(10))
                    .build()
                    .map_err(|e| format!("Failed to create OTLP exporter: {}", e))?;
                debug!(endpoint = %endpoint, "OTLP metric exporter created");
                PeriodicReader::builder(exporter).with_interval(interval).build()
            }
            _ => PeriodicReader::builder(StdoutExporter::default())
                .with_interval(interval)
                .build(),
        };

        let meter_provider = SdkMeterProvider::builder()
            .with_resource(resource)
            .with_reader(reader)
            .build();
        if METER_PROVIDER.set(meter_provider.clone()).is_err() {
            return Err("Metrics already initialized".to_string());
        }
        global::set_meter_provider(meter_provider);
        info!(service_name = service_name, "Meter provider registered globally");

        Ok(())
    }
}

/// Flush pending readings and stop the installed meter provider.
///
/// Does nothing when metrics were never initialized or the `metrics`
/// feature is disabled.
#[instrument]
pub fn shutdown_observability() -> Result<(), String> {
    #[cfg(feature = "metrics")]
    {
        if let Some(provider) = METER_PROVIDER.get() {
            info!("Flushing and shutting down meter provider");
            provider
                .shutdown()
                .map_err(|e| format!("Failed to shut down meter provider: {}", e))?;
            return Ok(());
        }
    }

    debug!("No meter provider installed; nothing to flush");
    Ok(())
}
