//! Scan orchestrator coordinating the whole run
//!
//! This module provides:
//! - Workflow coordination: prepare → walk → read → resolve → evaluate → report → dispatch
//! - Sequential resolution with a pause after every resolved package
//! - Per-package error isolation: failures are logged and the scan continues

use crate::config::{Config, Delivery};
use crate::dispatch::{ChunkedDispatcher, DispatchSummary, Sink, StdoutSink, WebhookSink};
use crate::domain::{ManifestRecord, SemanticVersion, SkipReason, SkipRecord, UpdateOutcome};
use crate::error::AppError;
use crate::manifest::{detect_manifests, read_manifest, repo_group};
use crate::progress::Progress;
use crate::provider::{HttpClient, UpstreamResolver, VersionSource};
use crate::report::{render, RenderOptions, Report};
use crate::source::source_for;
use crate::update::{evaluate, throttle_for, Throttle};
use std::path::Path;
use tracing::{debug, info, warn};

/// Result of scanning a manifest tree
#[derive(Debug)]
pub struct ScanResult {
    /// Reportable outcomes in discovery order
    pub report: Report,
    /// Packages that produced no outcome
    pub skipped: Vec<SkipRecord>,
    /// Manifest records read successfully
    pub scanned: usize,
}

/// Result of a full run
#[derive(Debug)]
pub struct RunResult {
    pub scan: ScanResult,
    pub dispatch: DispatchSummary,
}

/// Drives resolution and evaluation over every manifest of a tree
pub struct Orchestrator<V: VersionSource> {
    resolver: V,
    throttle: Box<dyn Throttle>,
    show_progress: bool,
}

impl Orchestrator<UpstreamResolver> {
    /// Create an orchestrator against the public provider APIs
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = HttpClient::new()?;
        let resolver = UpstreamResolver::new(client, config.credentials.clone());
        Ok(Self::new(
            resolver,
            throttle_for(config.throttle),
            config.show_progress,
        ))
    }
}

impl<V: VersionSource> Orchestrator<V> {
    pub fn new(resolver: V, throttle: Box<dyn Throttle>, show_progress: bool) -> Self {
        Self {
            resolver,
            throttle,
            show_progress,
        }
    }

    /// Scan every manifest below `root`
    pub async fn scan(&mut self, root: &Path, report: Report) -> ScanResult {
        let mut result = ScanResult {
            report,
            skipped: Vec::new(),
            scanned: 0,
        };

        let manifests = detect_manifests(root);
        info!("found {} manifest file(s) in {}", manifests.len(), root.display());

        let mut progress = Progress::start(self.show_progress, manifests.len() as u64);
        for path in manifests {
            let record = match read_manifest(&path) {
                Ok(record) => record,
                Err(e) => {
                    debug!("ignoring {}", e);
                    progress.advance();
                    continue;
                }
            };
            result.scanned += 1;
            progress.package(&record.name);

            if record.source_url().is_none() {
                debug!("{} has no source URL", record.name);
                result.skipped.push(SkipRecord::new(
                    &record.name,
                    &record.file_path,
                    SkipReason::NoSourceUrl,
                ));
                progress.advance();
                continue;
            }

            match self.check_package(root, &record).await {
                Ok(outcome) => result.report.push(outcome),
                Err(reason) => result.skipped.push(SkipRecord::new(
                    &record.name,
                    &record.file_path,
                    reason,
                )),
            }

            self.throttle.pause().await;
            progress.advance();
        }
        progress.finish();

        info!(
            "{} outcome(s), {} skipped of {} package(s)",
            result.report.len(),
            result.skipped.len(),
            result.scanned
        );
        result
    }

    /// Resolve and evaluate a single package with a source URL
    pub async fn check_package(
        &self,
        root: &Path,
        record: &ManifestRecord,
    ) -> Result<UpdateOutcome, SkipReason> {
        let source_url = record.source_url().ok_or(SkipReason::NoSourceUrl)?;

        let latest = self.resolver.resolve(source_url).await.map_err(|e| {
            warn!("failed to get latest version for {}: {}", record.name, e);
            SkipReason::ResolveFailed(e.to_string())
        })?;

        let Some(change) = evaluate(&record.declared_version, &latest.version) else {
            let both_valid = SemanticVersion::parse(&record.declared_version).is_ok()
                && SemanticVersion::parse(&latest.version).is_ok();
            return Err(if both_valid {
                SkipReason::UpToDate
            } else {
                SkipReason::InvalidVersion
            });
        };

        if change.is_regression {
            warn!(
                "package retroceded: {} {} → {}",
                record.name, change.current, change.latest
            );
        } else {
            info!(
                "update available: {} {} → {}",
                record.name, change.current, change.latest
            );
        }

        Ok(UpdateOutcome::new(
            repo_group(root, &record.file_path),
            &record.name,
            change,
            &record.file_path,
        ))
    }
}

/// Build the sink for the configured delivery
pub fn sink_for(delivery: &Delivery) -> Result<Box<dyn Sink>, AppError> {
    Ok(match delivery {
        Delivery::Webhook(url) => Box::new(WebhookSink::new(url)?),
        Delivery::Stdout => Box::new(StdoutSink),
    })
}

/// Deliver a scanned report through a sink
pub async fn deliver<S: Sink>(
    report: &Report,
    mention: Option<String>,
    sink: S,
    max_chunk: usize,
) -> DispatchSummary {
    let text = render(report, &RenderOptions { mention });
    ChunkedDispatcher::new(sink, max_chunk).dispatch(&text).await
}

/// Run the whole pipeline for `config`
pub async fn run(config: &Config) -> Result<RunResult, AppError> {
    let sink = sink_for(&config.delivery)?;
    let mut orchestrator = Orchestrator::from_config(config)?;

    let source = source_for(&config.source);
    let root = source.prepare()?;

    let scan = orchestrator.scan(&root, Report::today()).await;
    source.cleanup();

    let dispatch = deliver(&scan.report, config.mention.clone(), sink, config.max_chunk).await;
    info!(
        "report delivered: {} chunk(s) sent, {} failed",
        dispatch.sent, dispatch.failed
    );

    Ok(RunResult { scan, dispatch })
}
