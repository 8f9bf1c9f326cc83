//! Logging and trace export for Lectern
//!
//! Console logging goes through a `tracing-subscriber` fmt layer; spans are
//! additionally exported over OTLP when an exporter is configured.

mod resource;

use lectern_config::{ExportProtocol, ExporterConfig, LogFormat, TelemetryConfig};
use opentelemetry::{global, trace::TracerProvider};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{Sampler, SdkTracerProvider};

/// Guard that flushes and shuts down the span exporter on drop
pub struct TelemetryGuard {
    tracer_provider: Option<SdkTracerProvider>,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.tracer_provider.take()
            && let Err(e) = provider.shutdown()
        {
            eprintln!("failed to shutdown tracer provider: {e}");
        }
    }
}

/// Initialize logging and optional span export
///
/// `log_filter` is an `EnvFilter` directive such as `info` or
/// `lectern_tasks=debug`; an invalid directive falls back to `info`. The
/// returned guard must be held for the lifetime of the application.
///
/// # Errors
///
/// Returns an error if the OTLP span exporter cannot be built
pub fn init(config: Option<&TelemetryConfig>, log_filter: &str) -> anyhow::Result<TelemetryGuard> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_new(log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let format = config.map_or(LogFormat::Text, |c| c.log_format);

    let text_layer = (format == LogFormat::Text).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
    });

    let json_layer = (format == LogFormat::Json).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
    });

    let tracer_provider = match config {
        Some(telemetry) => match &telemetry.exporter {
            Some(exporter) => Some(init_tracer(telemetry, exporter)?),
            None => None,
        },
        None => None,
    };

    let otel_layer = tracer_provider.as_ref().map(|provider| {
        global::set_tracer_provider(provider.clone());
        tracing_opentelemetry::layer().with_tracer(provider.tracer("lectern"))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(text_layer)
        .with(json_layer)
        .with(otel_layer)
        .init();

    Ok(TelemetryGuard { tracer_provider })
}

/// Initialize OTLP trace export
fn init_tracer(config: &TelemetryConfig, exporter: &ExporterConfig) -> anyhow::Result<SdkTracerProvider> {
    let exporter = build_span_exporter(exporter)?;

    let provider = SdkTracerProvider::builder()
        .with_resource(resource::build_resource(config))
        .with_sampler(sampler_for(config.sampling_rate))
        .with_batch_exporter(exporter)
        .build();

    Ok(provider)
}

/// Parent-based sampler for a ratio in `0.0..=1.0`
fn sampler_for(sampling_rate: f64) -> Sampler {
    Sampler::ParentBased(Box::new(root_sampler(sampling_rate)))
}

/// Sampler applied to traces that start here
fn root_sampler(sampling_rate: f64) -> Sampler {
    if sampling_rate >= 1.0 {
        Sampler::AlwaysOn
    } else if sampling_rate <= 0.0 {
        Sampler::AlwaysOff
    } else {
        Sampler::TraceIdRatioBased(sampling_rate)
    }
}

/// Build OTLP span exporter based on protocol
fn build_span_exporter(config: &ExporterConfig) -> anyhow::Result<opentelemetry_otlp::SpanExporter> {
    use opentelemetry_otlp::SpanExporter;

    let exporter = match config.protocol {
        ExportProtocol::Grpc => SpanExporter::builder()
            .with_tonic()
            .with_endpoint(config.endpoint.as_str())
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build gRPC span exporter: {e}"))?,
        ExportProtocol::HttpProto => SpanExporter::builder()
            .with_http()
            .with_endpoint(config.endpoint.as_str())
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build HTTP span exporter: {e}"))?,
    };

    Ok(exporter)
}
